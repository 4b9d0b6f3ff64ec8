//! Rational transfer functions and their algebra.
//!
//! A `RationalTf` is a pair of real polynomials in s representing
//! num(s)/den(s). Composition follows the usual block-diagram identities:
//! series blocks multiply, unity feedback maps the open loop L to
//! L/(1+L), and a cascade is a left fold of series compositions.
//!
//! Evaluation at s = jω exactly on a pole divides by zero and yields
//! inf/NaN components. That is the physics of sampling a resonance at its
//! resonance and is propagated, not trapped; grids that do not land on a
//! pole never observe it.

use num_complex::Complex;

use crate::grid::FrequencyGrid;
use crate::polynomial::Polynomial;

/// A SISO transfer function num(s)/den(s).
///
/// Invariant: the denominator is not the zero polynomial. Properness
/// (deg num ≤ deg den) is typical but not enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct RationalTf {
    num: Polynomial,
    den: Polynomial,
}

impl RationalTf {
    /// Build a transfer function from numerator and denominator
    /// coefficients, highest degree first.
    pub fn new(num: &[f64], den: &[f64]) -> Self {
        Self {
            num: Polynomial::new(num),
            den: Polynomial::new(den),
        }
    }

    /// The identity block: 1/1.
    pub fn identity() -> Self {
        Self {
            num: Polynomial::one(),
            den: Polynomial::one(),
        }
    }

    pub fn num(&self) -> &Polynomial {
        &self.num
    }

    pub fn den(&self) -> &Polynomial {
        &self.den
    }

    /// Series composition of two blocks (no loading effects):
    /// (n1·n2)/(d1·d2).
    pub fn series(&self, other: &RationalTf) -> RationalTf {
        RationalTf {
            num: self.num.multiply(&other.num),
            den: self.den.multiply(&other.den),
        }
    }

    /// Closed-loop complementary transfer T = L/(1+L) under unity
    /// feedback, with `self` as the open loop L: (num, den + num).
    pub fn unity_feedback(&self) -> RationalTf {
        RationalTf {
            num: self.num.clone(),
            den: self.den.add(&self.num),
        }
    }

    /// Fold `series` left-to-right over a sequence of blocks.
    /// The empty cascade is the identity block.
    pub fn cascade(blocks: &[RationalTf]) -> RationalTf {
        blocks
            .iter()
            .fold(RationalTf::identity(), |acc, t| acc.series(t))
    }

    /// Evaluate the response at a single angular frequency (rad/s).
    pub fn response_at(&self, omega: f64) -> Complex<f64> {
        let s = Complex::new(0.0, omega);
        self.num.eval(s) / self.den.eval(s)
    }

    /// Evaluate the response over a grid, one complex value per point.
    pub fn sweep(&self, grid: &FrequencyGrid) -> Vec<Complex<f64>> {
        grid.omegas().iter().map(|&w| self.response_at(w)).collect()
    }
}
