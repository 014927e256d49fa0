use faer::{Mat, MatRef, Side};

use crate::error::{ensure_square, DecompositionKind, LinalgError};

/// Default absolute tolerance below which an input is treated as the zero matrix.
pub const DEFAULT_ZERO_TOLERANCE: f64 = 1e-6;

/// Parameters for [`cholesky_decompose_with`].
#[derive(Debug, Clone)]
pub struct CholeskyParams {
    /// Return the lower triangular factor `L` (`A = L Lᵗ`) instead of the upper factor
    /// `U` (`A = Uᵗ U`).
    pub lower: bool,
    /// If the factorization fails and every entry of the input is smaller than this in absolute
    /// value, the zero matrix is returned instead of an error.
    pub zero_tolerance: f64,
}

impl Default for CholeskyParams {
    fn default() -> Self {
        Self {
            lower: false,
            zero_tolerance: DEFAULT_ZERO_TOLERANCE,
        }
    }
}

/// Result of a successful Cholesky decomposition.
#[derive(Debug, Clone, PartialEq)]
pub enum CholeskyFactor {
    /// The triangular factor of a positive definite input.
    Triangular(Mat<f64>),
    /// The input was numerically zero: the factor is the zero matrix.
    ///
    /// This models a zero covariance (e.g. no process noise) and is not an error.
    DegenerateZero(Mat<f64>),
}

impl CholeskyFactor {
    /// Returns true if the input was treated as the zero matrix.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, CholeskyFactor::DegenerateZero(_))
    }

    /// Borrow the factor.
    pub fn factor(&self) -> MatRef<'_, f64> {
        match self {
            CholeskyFactor::Triangular(m) | CholeskyFactor::DegenerateZero(m) => m.as_ref(),
        }
    }

    /// Take the factor.
    pub fn into_inner(self) -> Mat<f64> {
        match self {
            CholeskyFactor::Triangular(m) | CholeskyFactor::DegenerateZero(m) => m,
        }
    }
}

/// Compute the Cholesky decomposition of a symmetric positive semi-definite matrix.
///
/// Only the lower triangle of `a` is read.
///
/// # Arguments
///
/// * `a` - The square symmetric matrix to decompose.
/// * `lower` - Whether to return the lower triangular factor `L` with `A = L Lᵗ`, or the upper
///   triangular factor `U = Lᵗ` with `A = Uᵗ U`.
///
/// # Errors
///
/// * [`LinalgError::DimensionMismatch`] if `a` is not square.
/// * [`LinalgError::DecompositionFailure`] if `a` is not positive definite and not numerically
///   zero. The error carries a copy of `a`.
///
/// Example:
///
/// ```
/// use plantmath_linalg::cholesky_decompose;
///
/// let a = faer::mat![[4.0, 2.0], [2.0, 5.0]];
/// let l = cholesky_decompose(a.as_ref(), true).unwrap().into_inner();
/// assert_eq!(l.read(0, 0), 2.0);
/// assert_eq!(l.read(0, 1), 0.0);
/// ```
pub fn cholesky_decompose(
    a: MatRef<'_, f64>,
    lower: bool,
) -> Result<CholeskyFactor, LinalgError> {
    cholesky_decompose_with(
        a,
        &CholeskyParams {
            lower,
            ..Default::default()
        },
    )
}

/// Compute the Cholesky decomposition of `a` with explicit parameters.
///
/// See [`cholesky_decompose`].
pub fn cholesky_decompose_with(
    a: MatRef<'_, f64>,
    params: &CholeskyParams,
) -> Result<CholeskyFactor, LinalgError> {
    ensure_square(a.nrows(), a.ncols())?;

    let l = match a.cholesky(Side::Lower) {
        Ok(chol) => chol.compute_l(),
        Err(err) => {
            if is_numerically_zero(a, params.zero_tolerance) {
                log::debug!(
                    "cholesky: input is numerically zero, returning the {}x{} zero matrix",
                    a.nrows(),
                    a.ncols()
                );
                return Ok(CholeskyFactor::DegenerateZero(Mat::<f64>::zeros(
                    a.nrows(),
                    a.ncols(),
                )));
            }
            log::debug!("cholesky: {err:?}");
            return Err(LinalgError::DecompositionFailure {
                kind: DecompositionKind::Cholesky,
                matrix: a.to_owned(),
            });
        }
    };

    if params.lower {
        Ok(CholeskyFactor::Triangular(l))
    } else {
        Ok(CholeskyFactor::Triangular(l.transpose().to_owned()))
    }
}

fn is_numerically_zero(a: MatRef<'_, f64>, tolerance: f64) -> bool {
    (0..a.ncols()).all(|j| (0..a.nrows()).all(|i| a.read(i, j).abs() < tolerance))
}
