//! Frequency-response evaluation for the attenua workspace.
//!
//! This crate provides:
//! - Dense complex linear solve (LU) used by the per-frequency evaluation
//! - State-space frequency response, sequential and rayon-parallel
//! - Bode conversion (magnitude dB, unwrapped phase deg)

pub mod bode;
pub mod error;
pub mod linear;
pub mod parallel;
pub mod response;

pub use bode::{to_bode, Bode};
pub use error::{Error, Result};
pub use linear::solve_complex;
pub use parallel::{frequency_response_parallel, ParallelConfig};
pub use response::{frequency_response, FrequencyResponse, ResponsePoint};
