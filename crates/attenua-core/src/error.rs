//! Error types for attenua-core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{operand}: expected {expected_rows}x{expected_cols}, got {actual_rows}x{actual_cols}")]
    DimensionMismatch {
        /// Which operand failed the shape check (e.g. "B", "K", "C_feedback").
        operand: &'static str,
        expected_rows: usize,
        expected_cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },

    #[error("invalid frequency grid at index {index}: {reason}")]
    InvalidGrid {
        index: usize,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
