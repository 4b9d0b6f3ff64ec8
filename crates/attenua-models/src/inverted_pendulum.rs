//! Inverted pendulum (IP) horizontal pre-isolation stage.

use std::f64::consts::PI;

use num_complex::Complex;

use crate::stage::IsolationStage;

/// Inverted pendulum transmissibility from base to platform:
///
/// ```text
/// H(ω) = [ω0²(1 + iφ) + κω²] / [ω0²(1 + iφ) − ω²],   ω0 = 2πf0
/// ```
///
/// The κω² term in the numerator couples leg inertia into the platform
/// and flattens the response at high frequency, capping the achievable
/// isolation. Counter-mass tuning moves the legs' percussion point toward
/// the hinge and shrinks κ by roughly an order of magnitude, which is the
/// difference between the [`Default`] preset and
/// [`InvertedPendulum::counter_massed`].
#[derive(Debug, Clone, Copy)]
pub struct InvertedPendulum {
    /// Natural frequency (Hz).
    pub f0: f64,
    /// Percussion coupling coefficient (dimensionless). Large before
    /// counter-mass tuning, small after.
    pub kappa: f64,
    /// Internal loss angle φ (small, dimensionless).
    pub loss_angle: f64,
}

impl Default for InvertedPendulum {
    fn default() -> Self {
        Self {
            f0: 0.1,
            kappa: 0.07,
            loss_angle: 1e-4,
        }
    }
}

impl InvertedPendulum {
    /// Create an IP stage with explicit parameters.
    pub fn new(f0: f64, kappa: f64, loss_angle: f64) -> Self {
        Self {
            f0,
            kappa,
            loss_angle,
        }
    }

    /// Preset after counter-mass tuning: residual coupling κ = 0.01.
    pub fn counter_massed() -> Self {
        Self {
            kappa: 0.01,
            ..Self::default()
        }
    }

    /// Copy of this stage retuned to a different resonance.
    pub fn with_resonance(&self, f0: f64) -> Self {
        Self { f0, ..*self }
    }

    /// Build a chain of stages sharing this stage's secondary parameters,
    /// one per resonance frequency.
    pub fn chain(&self, resonances: &[f64]) -> Vec<Self> {
        resonances.iter().map(|&f0| self.with_resonance(f0)).collect()
    }
}

impl IsolationStage for InvertedPendulum {
    fn response(&self, omega: f64) -> Complex<f64> {
        let w0 = 2.0 * PI * self.f0;
        let stiffness = w0 * w0 * Complex::new(1.0, self.loss_angle);
        let num = stiffness + self.kappa * omega * omega;
        let den = stiffness - omega * omega;
        num / den
    }
}
