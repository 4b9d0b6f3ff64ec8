//! Real-coefficient polynomial algebra.
//!
//! Polynomials are stored highest degree first, so `[1.0, 3.0, 25.0]`
//! is s² + 3s + 25. The zero polynomial is `[0.0]`. These are the building
//! blocks for rational transfer functions; the two operations here are the
//! coefficient convolution and the right-aligned sum used when composing
//! open- and closed-loop transfer functions.

use num_complex::Complex;

/// A polynomial in the Laplace variable s, coefficients highest degree first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Create a polynomial from coefficients, highest degree first.
    ///
    /// An empty slice is treated as the zero polynomial `[0.0]`.
    pub fn new(coeffs: &[f64]) -> Self {
        if coeffs.is_empty() {
            return Self { coeffs: vec![0.0] };
        }
        Self {
            coeffs: coeffs.to_vec(),
        }
    }

    /// The constant polynomial 1.
    pub fn one() -> Self {
        Self { coeffs: vec![1.0] }
    }

    /// The zero polynomial `[0.0]`.
    pub fn zero() -> Self {
        Self { coeffs: vec![0.0] }
    }

    /// Coefficients, highest degree first.
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Degree = coefficient count − 1. Leading zeros are not trimmed, so
    /// this is the represented degree, not the mathematical one.
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Polynomial product by coefficient convolution.
    ///
    /// The result has `len(p) + len(q) − 1` coefficients; degree
    /// information is never silently dropped.
    pub fn multiply(&self, other: &Polynomial) -> Polynomial {
        let mut out = vec![0.0; self.coeffs.len() + other.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in other.coeffs.iter().enumerate() {
                out[i + j] += a * b;
            }
        }
        Polynomial { coeffs: out }
    }

    /// Coefficient-wise sum after right-aligning the shorter polynomial
    /// (constant terms line up). The result has `max(len(p), len(q))`
    /// coefficients.
    pub fn add(&self, other: &Polynomial) -> Polynomial {
        let n = self.coeffs.len().max(other.coeffs.len());
        let mut out = vec![0.0; n];
        let off_a = n - self.coeffs.len();
        let off_b = n - other.coeffs.len();
        for (i, &a) in self.coeffs.iter().enumerate() {
            out[off_a + i] += a;
        }
        for (i, &b) in other.coeffs.iter().enumerate() {
            out[off_b + i] += b;
        }
        Polynomial { coeffs: out }
    }

    /// Evaluate at a complex point by Horner's rule.
    pub fn eval(&self, s: Complex<f64>) -> Complex<f64> {
        let mut acc = Complex::new(0.0, 0.0);
        for &c in &self.coeffs {
            acc = acc * s + c;
        }
        acc
    }
}
