//! State-space frequency response.
//!
//! Evaluates H(jω) = C(jωI − A)⁻¹B + D on a frequency grid by solving the
//! dense complex system (jωI − A)X = B at each grid point and forming
//! Y = CX + D. Each point is solved exactly and independently; there is no
//! recurrence across frequencies.

use nalgebra::DMatrix;
use num_complex::Complex;

use attenua_core::{FrequencyGrid, StateSpace};

use crate::bode::{to_bode, Bode};
use crate::error::Result;
use crate::linear::solve_complex;

/// A single evaluated grid point.
#[derive(Debug, Clone)]
pub struct ResponsePoint {
    /// Angular frequency (rad/s).
    pub omega: f64,
    /// Complex response matrix H(jω), p×m.
    pub value: DMatrix<Complex<f64>>,
}

/// Result of a frequency-response sweep, aligned index-for-index with the
/// grid it was evaluated on.
#[derive(Debug, Clone)]
pub struct FrequencyResponse {
    /// All computed grid points.
    pub points: Vec<ResponsePoint>,
}

impl FrequencyResponse {
    /// Complex response of one (output, input) channel across the grid.
    pub fn entry(&self, output: usize, input: usize) -> Vec<Complex<f64>> {
        self.points
            .iter()
            .map(|p| p.value[(output, input)])
            .collect()
    }

    /// Channel response paired with its angular frequency, for consumers
    /// that plot against the grid directly.
    pub fn entry_with_omega(
        &self,
        output: usize,
        input: usize,
    ) -> Vec<(f64, Complex<f64>)> {
        self.points
            .iter()
            .map(|p| (p.omega, p.value[(output, input)]))
            .collect()
    }

    /// Bode magnitude/phase of one channel.
    pub fn bode(&self, output: usize, input: usize) -> Bode {
        to_bode(&self.entry(output, input))
    }

    /// All angular frequencies (rad/s).
    pub fn omegas(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.omega).collect()
    }
}

/// Complex copies of (B, C, D), shared across all grid points of a sweep.
pub(crate) struct ComplexParts {
    pub(crate) neg_a: DMatrix<Complex<f64>>,
    pub(crate) b: DMatrix<Complex<f64>>,
    pub(crate) c: DMatrix<Complex<f64>>,
    pub(crate) d: DMatrix<Complex<f64>>,
}

impl ComplexParts {
    pub(crate) fn from_system(sys: &StateSpace) -> Self {
        let lift = |m: &DMatrix<f64>| m.map(|x| Complex::new(x, 0.0));
        Self {
            neg_a: sys.a().map(|x| Complex::new(-x, 0.0)),
            b: lift(sys.b()),
            c: lift(sys.c()),
            d: lift(sys.d()),
        }
    }

    /// Evaluate H(jω) at one angular frequency.
    pub(crate) fn eval(&self, omega: f64) -> Result<DMatrix<Complex<f64>>> {
        let n = self.neg_a.nrows();
        let mut lhs = self.neg_a.clone();
        for i in 0..n {
            lhs[(i, i)] += Complex::new(0.0, omega);
        }
        let x = solve_complex(&lhs, &self.b)?;
        Ok(&self.c * x + &self.d)
    }
}

/// Evaluate the frequency response of a state-space system over a grid.
///
/// The system's shapes were validated at construction, so the only runtime
/// fault left is an exactly singular jωI − A (the grid landing precisely
/// on an undamped resonance). Ill-conditioned points near a pole are a
/// legitimate analysis result and simply spike in magnitude.
pub fn frequency_response(
    sys: &StateSpace,
    grid: &FrequencyGrid,
) -> Result<FrequencyResponse> {
    log::debug!(
        "frequency response sweep: {} points, {} states, {} inputs, {} outputs",
        grid.len(),
        sys.num_states(),
        sys.num_inputs(),
        sys.num_outputs()
    );

    let parts = ComplexParts::from_system(sys);
    let mut points = Vec::with_capacity(grid.len());
    for &omega in grid.omegas() {
        points.push(ResponsePoint {
            omega,
            value: parts.eval(omega)?,
        });
    }

    Ok(FrequencyResponse { points })
}
