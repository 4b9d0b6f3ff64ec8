//! Frequency grids for response sweeps.
//!
//! A grid is a strictly increasing sequence of non-negative angular
//! frequencies (rad/s), shared read-only by every evaluator in a run.
//! Grids are either generated from sweep parameters (linear, points per
//! decade, points per octave) or built from raw rad/s values; the
//! ordering invariant is checked at construction.

use std::f64::consts::PI;

use crate::error::{Error, Result};

/// Frequency spacing for a generated sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepType {
    /// Linear frequency spacing.
    Linear,
    /// Logarithmic spacing, points per decade.
    Decade,
    /// Logarithmic spacing, points per octave.
    Octave,
}

/// Sweep generation parameters. Frequencies are in Hz; the generated grid
/// stores angular frequencies ω = 2πf.
#[derive(Debug, Clone)]
pub struct SweepParams {
    /// Start frequency (Hz).
    pub fstart: f64,
    /// Stop frequency (Hz).
    pub fstop: f64,
    /// Number of points (total for Linear, per decade/octave for log sweeps).
    pub num_points: usize,
    /// Sweep type.
    pub sweep_type: SweepType,
}

/// A strictly increasing grid of non-negative angular frequencies (rad/s).
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyGrid {
    omegas: Vec<f64>,
}

impl FrequencyGrid {
    /// Build a grid from raw angular frequencies (rad/s).
    ///
    /// Values must be finite, non-negative, and strictly increasing.
    pub fn from_omegas(omegas: Vec<f64>) -> Result<Self> {
        for (i, &w) in omegas.iter().enumerate() {
            if !w.is_finite() {
                return Err(Error::InvalidGrid {
                    index: i,
                    reason: "frequency is not finite",
                });
            }
            if w < 0.0 {
                return Err(Error::InvalidGrid {
                    index: i,
                    reason: "frequency is negative",
                });
            }
            if i > 0 && w <= omegas[i - 1] {
                return Err(Error::InvalidGrid {
                    index: i,
                    reason: "grid is not strictly increasing",
                });
            }
        }
        Ok(Self { omegas })
    }

    /// Build a grid from frequencies in Hz.
    pub fn from_hz(freqs: &[f64]) -> Result<Self> {
        Self::from_omegas(freqs.iter().map(|f| 2.0 * PI * f).collect())
    }

    /// Generate a grid from sweep parameters.
    pub fn generate(params: &SweepParams) -> Result<Self> {
        let freqs = match params.sweep_type {
            SweepType::Linear => {
                if params.num_points <= 1 {
                    vec![params.fstart]
                } else {
                    let step =
                        (params.fstop - params.fstart) / (params.num_points as f64 - 1.0);
                    (0..params.num_points)
                        .map(|i| params.fstart + step * i as f64)
                        .collect()
                }
            }
            SweepType::Decade => {
                let decades = (params.fstop / params.fstart).log10();
                let total = (params.num_points as f64 * decades).ceil() as usize + 1;
                (0..total)
                    .map(|i| {
                        params.fstart * 10.0_f64.powf(i as f64 / params.num_points as f64)
                    })
                    .filter(|&f| f <= params.fstop * 1.001)
                    .collect()
            }
            SweepType::Octave => {
                let octaves = (params.fstop / params.fstart).log2();
                let total = (params.num_points as f64 * octaves).ceil() as usize + 1;
                (0..total)
                    .map(|i| {
                        params.fstart * 2.0_f64.powf(i as f64 / params.num_points as f64)
                    })
                    .filter(|&f| f <= params.fstop * 1.001)
                    .collect()
            }
        };
        Self::from_hz(&freqs)
    }

    /// Angular frequencies (rad/s).
    pub fn omegas(&self) -> &[f64] {
        &self.omegas
    }

    /// Frequencies in Hz (ω / 2π), for plotting consumers.
    pub fn frequencies_hz(&self) -> Vec<f64> {
        self.omegas.iter().map(|w| w / (2.0 * PI)).collect()
    }

    pub fn len(&self) -> usize {
        self.omegas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.omegas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_linear() {
        let grid = FrequencyGrid::generate(&SweepParams {
            fstart: 1.0,
            fstop: 100.0,
            num_points: 100,
            sweep_type: SweepType::Linear,
        })
        .unwrap();

        assert_eq!(grid.len(), 100);
        let f = grid.frequencies_hz();
        assert!((f[0] - 1.0).abs() < 1e-10);
        assert!((f[99] - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_generate_decade() {
        let grid = FrequencyGrid::generate(&SweepParams {
            fstart: 1.0,
            fstop: 1000.0,
            num_points: 10,
            sweep_type: SweepType::Decade,
        })
        .unwrap();

        // 3 decades, 10 pts/decade → 31 points
        assert_eq!(grid.len(), 31);
        let f = grid.frequencies_hz();
        assert!((f[0] - 1.0).abs() < 1e-10);
        assert!((f[10] - 10.0).abs() < 1e-6, "f[10] = {}", f[10]);
        assert!((f[20] - 100.0).abs() < 1e-4, "f[20] = {}", f[20]);
    }

    #[test]
    fn test_generate_octave() {
        let grid = FrequencyGrid::generate(&SweepParams {
            fstart: 100.0,
            fstop: 1600.0,
            num_points: 5,
            sweep_type: SweepType::Octave,
        })
        .unwrap();

        // 4 octaves, 5 pts/octave → 21 points
        assert_eq!(grid.len(), 21);
        let f = grid.frequencies_hz();
        assert!((f[5] - 200.0).abs() < 1e-6, "f[5] = {}", f[5]);
    }

    #[test]
    fn test_from_omegas_rejects_disorder() {
        let result = FrequencyGrid::from_omegas(vec![1.0, 1.0, 2.0]);
        assert!(matches!(
            result,
            Err(Error::InvalidGrid { index: 1, .. })
        ));
    }

    #[test]
    fn test_from_omegas_rejects_negative() {
        let result = FrequencyGrid::from_omegas(vec![-1.0, 1.0]);
        assert!(matches!(
            result,
            Err(Error::InvalidGrid { index: 0, .. })
        ));
    }

    #[test]
    fn test_hz_round_trip() {
        let grid = FrequencyGrid::from_hz(&[0.1, 1.0, 10.0]).unwrap();
        let f = grid.frequencies_hz();
        assert!((f[1] - 1.0).abs() < 1e-12);
        assert!((grid.omegas()[1] - 2.0 * PI).abs() < 1e-12);
    }
}
