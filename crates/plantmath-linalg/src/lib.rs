#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # plantmath linalg
//!
//! Stateless dense routines used to discretize and simulate linear state-space models:
//!
//! - [`expm`]: matrix exponential by scaling and squaring of a Pade approximant
//! - [`cholesky_decompose`]: Cholesky factor of a covariance, with a zero-covariance special case
//! - [`householder_qr_decompose`]: Householder QR of an arbitrary matrix
//! - [`identity`] / [`identity_rect`]: identity matrices
//!
//! Matrices are [`faer::Mat<f64>`]; every function takes a [`faer::MatRef`] view and returns an
//! owned result, leaving the input untouched.

mod cholesky;
pub use cholesky::*;

/// Error types for the linear algebra routines.
pub mod error;
pub use error::{DecompositionKind, LinalgError};

mod expm;
pub use expm::expm;

mod ops;
pub use ops::{identity, identity_rect, norm_induced_l1};

/// Pade approximants and order selection for the matrix exponential.
pub mod pade;

mod qr;
pub use qr::*;
