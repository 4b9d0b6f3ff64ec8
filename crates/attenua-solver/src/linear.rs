//! Dense complex linear solve.

use nalgebra::DMatrix;
use num_complex::Complex;

use crate::error::{Error, Result};

/// Solve the complex system A·X = B using LU decomposition, where B may
/// carry multiple right-hand-side columns (one per system input).
///
/// A general solve is used rather than a symbolic inverse; near-singular
/// systems (a resonance sampled close to its pole) still return a
/// solution, merely an ill-conditioned one with the expected magnitude
/// spike. An exactly singular A surfaces as `SingularMatrix`.
pub fn solve_complex(
    a: &DMatrix<Complex<f64>>,
    b: &DMatrix<Complex<f64>>,
) -> Result<DMatrix<Complex<f64>>> {
    if a.nrows() != a.ncols() {
        return Err(Error::DimensionMismatch {
            expected: a.nrows(),
            actual: a.ncols(),
        });
    }
    if a.nrows() != b.nrows() {
        return Err(Error::DimensionMismatch {
            expected: a.nrows(),
            actual: b.nrows(),
        });
    }

    a.clone().lu().solve(b).ok_or(Error::SingularMatrix)
}
