//! Geometric Anti-Spring (GAS) vertical filter stage.

use std::f64::consts::PI;

use num_complex::Complex;

use crate::stage::IsolationStage;

/// Single GAS filter transmissibility from base to payload:
///
/// ```text
/// H(ω) = [ω0²(1 + iφ) + (m/M)ω²] / [ω0²(1 + iφ) − ω² + i(γ/M)ω]
/// ```
///
/// The (m/M) blade-inertia term leaves a finite high-frequency
/// transmissibility floor; above resonance the magnitude rolls off until
/// that floor is reached.
#[derive(Debug, Clone, Copy)]
pub struct GasFilter {
    /// GAS resonance (Hz).
    pub f0: f64,
    /// Payload mass M (kg).
    pub payload_mass: f64,
    /// Effective blade/inertia mass m (kg).
    pub blade_mass: f64,
    /// Internal loss angle φ.
    pub loss_angle: f64,
    /// Viscous damping constant γ (scaled by M in the denominator).
    pub damping: f64,
}

impl Default for GasFilter {
    fn default() -> Self {
        Self {
            f0: 0.3,
            payload_mass: 350.0,
            blade_mass: 110.0,
            loss_angle: 1e-3,
            damping: 0.05,
        }
    }
}

impl GasFilter {
    /// Create a GAS stage with explicit parameters.
    pub fn new(
        f0: f64,
        payload_mass: f64,
        blade_mass: f64,
        loss_angle: f64,
        damping: f64,
    ) -> Self {
        Self {
            f0,
            payload_mass,
            blade_mass,
            loss_angle,
            damping,
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

impl IsolationStage for GasFilter {
    fn response(&self, omega: f64) -> Complex<f64> {
        let w0 = 2.0 * PI * self.f0;
        let stiffness = w0 * w0 * Complex::new(1.0, self.loss_angle);
        let mass_ratio = self.blade_mass / self.payload_mass;
        let num = stiffness + mass_ratio * omega * omega;
        let den = stiffness - omega * omega
            + Complex::new(0.0, self.damping / self.payload_mass * omega);
        num / den
    }
}
