//! Horizontal pendulum isolation stage.

use std::f64::consts::PI;

use num_complex::Complex;

use crate::stage::IsolationStage;

/// Simple pendulum transmissibility from suspension point to payload:
///
/// ```text
/// H(ω) = ω0² / [ω0² − ω² + iωω0/Q],   ω0 = 2πf0
/// ```
///
/// Above resonance |H| ~ (ω0/ω)², a −40 dB/decade roll-off with no
/// high-frequency floor, which is what makes stacked pendulum stages so
/// effective horizontally.
#[derive(Debug, Clone, Copy)]
pub struct HorizontalPendulum {
    /// Pendulum resonance (Hz).
    pub f0: f64,
    /// Quality factor (losses).
    pub q: f64,
}

impl Default for HorizontalPendulum {
    fn default() -> Self {
        Self { f0: 0.5, q: 50.0 }
    }
}

impl HorizontalPendulum {
    /// Create a pendulum stage with explicit parameters.
    pub fn new(f0: f64, q: f64) -> Self {
        Self { f0, q }
    }

    /// Copy of this stage retuned to a different resonance.
    pub fn with_resonance(&self, f0: f64) -> Self {
        Self { f0, ..*self }
    }

    /// Build a chain of stages sharing this stage's quality factor, one
    /// per resonance frequency.
    pub fn chain(&self, resonances: &[f64]) -> Vec<Self> {
        resonances.iter().map(|&f0| self.with_resonance(f0)).collect()
    }
}

impl IsolationStage for HorizontalPendulum {
    fn response(&self, omega: f64) -> Complex<f64> {
        let w0 = 2.0 * PI * self.f0;
        let num = Complex::new(w0 * w0, 0.0);
        let den = Complex::new(w0 * w0 - omega * omega, omega * w0 / self.q);
        num / den
    }
}
