//! # Attenua
//!
//! Frequency-domain modeling of passive and active vibration-isolation
//! chains (and arbitrary linear dynamical systems):
//! - Rational transfer functions with series / unity-feedback / cascade
//!   composition
//! - State-space frequency response H(jω) = C(jωI − A)⁻¹B + D via dense
//!   complex LU solves, with static output feedback
//! - Closed-form isolator stage models (inverted pendulum, GAS filter,
//!   horizontal pendulum) with stage cascading
//! - Bode conversion (magnitude dB, unwrapped phase deg)
//!
//! ## Quick start
//!
//! ```rust
//! use attenua::prelude::*;
//!
//! // Two pendulum stages above a tuned inverted pendulum
//! let grid = FrequencyGrid::generate(&SweepParams {
//!     fstart: 1e-3,
//!     fstop: 100.0,
//!     num_points: 100,
//!     sweep_type: SweepType::Decade,
//! })
//! .unwrap();
//!
//! let ip = InvertedPendulum::counter_massed();
//! let pendulums = HorizontalPendulum::default().chain(&[0.3, 0.5]);
//!
//! let mut chain = ip.sweep(&grid);
//! for (h, p) in chain.iter_mut().zip(cascade(&grid, &pendulums)) {
//!     *h *= p;
//! }
//!
//! let bode = to_bode(&chain);
//! assert_eq!(bode.magnitude_db.len(), grid.len());
//! ```
//!
//! The core produces in-memory arrays aligned index-for-index with the
//! frequency grid; plotting and animation consumers live elsewhere.

// Re-export the workspace crates
pub use attenua_core as core;
pub use attenua_models as models;
pub use attenua_solver as solver;

// Convenient re-exports from attenua_core
pub use attenua_core::{
    Error as CoreError, FrequencyGrid, Polynomial, RationalTf, StateSpace, SweepParams,
    SweepType,
};

// Convenient re-exports from attenua_solver
pub use attenua_solver::{
    frequency_response, frequency_response_parallel, solve_complex, to_bode, Bode,
    Error as SolverError, FrequencyResponse, ParallelConfig, ResponsePoint,
};

// Convenient re-exports from attenua_models
pub use attenua_models::{
    cascade, GasFilter, HorizontalPendulum, InvertedPendulum, IsolationStage,
};

/// Re-export of nalgebra's dynamic matrix type.
pub use nalgebra::DMatrix;

/// Re-export of nalgebra's dynamic vector type.
pub use nalgebra::DVector;

/// Re-export of num_complex's Complex type.
pub use num_complex::Complex;

/// Prelude module containing commonly used types and traits.
///
/// ```rust
/// use attenua::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::{FrequencyGrid, Polynomial, RationalTf, StateSpace, SweepParams, SweepType};

    // Solver
    pub use crate::{
        frequency_response, frequency_response_parallel, to_bode, Bode, FrequencyResponse,
        ParallelConfig,
    };

    // Isolator models
    pub use crate::{cascade, GasFilter, HorizontalPendulum, InvertedPendulum, IsolationStage};

    // Common external types
    pub use crate::{Complex, DMatrix, DVector};
}
