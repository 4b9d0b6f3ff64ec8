//! Isolation stage trait and cascade composition.

use num_complex::Complex;

use attenua_core::FrequencyGrid;

/// A single passive isolation stage with a closed-form transmissibility
/// H(ω) from base motion to payload motion.
///
/// Implementations are pure functions of frequency: total over ω ≥ 0
/// except at an exact structural resonance, where the zero denominator
/// propagates inf/NaN rather than raising.
pub trait IsolationStage {
    /// Complex transmissibility at one angular frequency (rad/s).
    fn response(&self, omega: f64) -> Complex<f64>;

    /// Transmissibility over a grid, one value per point.
    fn sweep(&self, grid: &FrequencyGrid) -> Vec<Complex<f64>> {
        grid.omegas().iter().map(|&w| self.response(w)).collect()
    }
}

impl<S: IsolationStage + ?Sized> IsolationStage for &S {
    fn response(&self, omega: f64) -> Complex<f64> {
        (**self).response(omega)
    }
}

/// Transmissibility of physically stacked stages: the element-wise product
/// of every stage's sweep. The empty cascade is the all-ones sequence.
pub fn cascade<S: IsolationStage>(grid: &FrequencyGrid, stages: &[S]) -> Vec<Complex<f64>> {
    let mut h = vec![Complex::new(1.0, 0.0); grid.len()];
    for stage in stages {
        for (acc, &w) in h.iter_mut().zip(grid.omegas()) {
            *acc *= stage.response(w);
        }
    }
    h
}
