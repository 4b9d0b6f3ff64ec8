//! Closed-form isolator stage models for the attenua workspace.
//!
//! Each stage is a pure function of angular frequency with the parameter
//! defaults of the reference suspension chain:
//! - Inverted pendulum (horizontal pre-isolation, percussion-limited)
//! - GAS vertical filter
//! - Horizontal pendulum
//!
//! Stages compose by cascading: stacked stages multiply element-wise over
//! a shared frequency grid.

pub mod gas;
pub mod inverted_pendulum;
pub mod pendulum;
pub mod stage;

pub use gas::GasFilter;
pub use inverted_pendulum::InvertedPendulum;
pub use pendulum::HorizontalPendulum;
pub use stage::{cascade, IsolationStage};
