#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! Consumers of the `plantmath-linalg` routines: discretization of continuous-time models with
//! the matrix exponential, Gaussian measurement noise built from a Cholesky factor, and a
//! simulator that steps a linear plant.

/// Conversion of continuous-time models to discrete time.
pub mod discretization;
pub use discretization::{discretize_a, discretize_ab};

/// Error types for the state-space utilities.
pub mod error;
pub use error::SystemError;

mod linear_system;
pub use linear_system::LinearSystem;

/// White noise generation.
pub mod noise;
pub use noise::{make_cov_matrix, make_white_noise_vector, white_noise_factor};

mod sim;
pub use sim::{LinearSystemSim, SimParams};
