//! State-space system representation.
//!
//! An LTI system in (A, B, C, D) form: ẋ = Ax + Bu, y = Cx + Du, with
//! n states, m inputs, and p outputs. Shapes are validated once at
//! construction; every downstream evaluator can then assume a consistent
//! system. Static output feedback u = −K·y_fb + r is applied here as a
//! matrix transform producing a new, already-validated system.

use nalgebra::DMatrix;

use crate::error::{Error, Result};

/// An LTI system (A: n×n, B: n×m, C: p×n, D: p×m).
#[derive(Debug, Clone, PartialEq)]
pub struct StateSpace {
    a: DMatrix<f64>,
    b: DMatrix<f64>,
    c: DMatrix<f64>,
    d: DMatrix<f64>,
}

fn check_shape(
    operand: &'static str,
    m: &DMatrix<f64>,
    rows: usize,
    cols: usize,
) -> Result<()> {
    if m.nrows() != rows || m.ncols() != cols {
        return Err(Error::DimensionMismatch {
            operand,
            expected_rows: rows,
            expected_cols: cols,
            actual_rows: m.nrows(),
            actual_cols: m.ncols(),
        });
    }
    Ok(())
}

impl StateSpace {
    /// Build a system, validating shape consistency.
    ///
    /// A must be square; B must have A's row count; C must have A's column
    /// count; D must be p×m. Violations surface as `DimensionMismatch`
    /// before any numeric work.
    pub fn new(
        a: DMatrix<f64>,
        b: DMatrix<f64>,
        c: DMatrix<f64>,
        d: DMatrix<f64>,
    ) -> Result<Self> {
        let n = a.nrows();
        check_shape("A", &a, n, n)?;
        check_shape("B", &b, n, b.ncols())?;
        check_shape("C", &c, c.nrows(), n)?;
        check_shape("D", &d, c.nrows(), b.ncols())?;
        Ok(Self { a, b, c, d })
    }

    pub fn a(&self) -> &DMatrix<f64> {
        &self.a
    }

    pub fn b(&self) -> &DMatrix<f64> {
        &self.b
    }

    pub fn c(&self) -> &DMatrix<f64> {
        &self.c
    }

    pub fn d(&self) -> &DMatrix<f64> {
        &self.d
    }

    /// Number of states n.
    pub fn num_states(&self) -> usize {
        self.a.nrows()
    }

    /// Number of inputs m.
    pub fn num_inputs(&self) -> usize {
        self.b.ncols()
    }

    /// Number of outputs p.
    pub fn num_outputs(&self) -> usize {
        self.c.nrows()
    }

    /// Close the loop with static output feedback u = −K·y_fb + r, where
    /// y_fb = C_fb·x selects the fed-back measurement (which may differ
    /// from the plotted output C, e.g. velocity feedback while plotting
    /// position).
    ///
    /// Returns the closed-loop system
    ///   A_cl = A − B·K·C_fb,  B_cl = B,
    ///   C_cl = C − D·K·C_fb,  D_cl = D.
    ///
    /// The C_cl correction only matters for systems with direct
    /// feedthrough (D ≠ 0); it reduces to C_cl = C otherwise.
    ///
    /// K must be m×q and C_fb q×n for some number of fed-back signals q.
    pub fn with_output_feedback(
        &self,
        k: &DMatrix<f64>,
        c_feedback: &DMatrix<f64>,
    ) -> Result<StateSpace> {
        let n = self.num_states();
        let m = self.num_inputs();
        check_shape("C_feedback", c_feedback, c_feedback.nrows(), n)?;
        check_shape("K", k, m, c_feedback.nrows())?;

        let bkc = &self.b * k * c_feedback;
        let dkc = &self.d * k * c_feedback;

        Ok(StateSpace {
            a: &self.a - bkc,
            b: self.b.clone(),
            c: &self.c - dkc,
            d: self.d.clone(),
        })
    }
}
