use faer::Mat;

/// The factorization that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompositionKind {
    /// Cholesky (LLᵗ) factorization.
    Cholesky,
    /// Householder QR factorization.
    HouseholderQr,
}

impl std::fmt::Display for DecompositionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecompositionKind::Cholesky => write!(f, "Cholesky"),
            DecompositionKind::HouseholderQr => write!(f, "Householder QR"),
        }
    }
}

/// Error types for the linear algebra routines.
#[derive(Debug, thiserror::Error)]
pub enum LinalgError {
    /// The operation requires a square matrix.
    #[error("Expected a square matrix, got {rows}x{cols}")]
    DimensionMismatch {
        /// Number of rows of the input.
        rows: usize,
        /// Number of columns of the input.
        cols: usize,
    },

    /// The factorization could not be completed.
    #[error("{kind} decomposition failed! Input matrix:\n{matrix:?}")]
    DecompositionFailure {
        /// Which factorization failed.
        kind: DecompositionKind,
        /// Copy of the offending input matrix.
        matrix: Mat<f64>,
    },
}

/// Returns an error if `rows != cols`.
pub(crate) fn ensure_square(rows: usize, cols: usize) -> Result<(), LinalgError> {
    if rows != cols {
        return Err(LinalgError::DimensionMismatch { rows, cols });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_square() {
        assert!(ensure_square(3, 3).is_ok());
        let err = ensure_square(2, 3).unwrap_err();
        assert!(matches!(
            err,
            LinalgError::DimensionMismatch { rows: 2, cols: 3 }
        ));
        assert_eq!(err.to_string(), "Expected a square matrix, got 2x3");
    }

    #[test]
    fn test_decomposition_failure_message() {
        let err = LinalgError::DecompositionFailure {
            kind: DecompositionKind::Cholesky,
            matrix: Mat::<f64>::zeros(1, 1),
        };
        assert!(err
            .to_string()
            .starts_with("Cholesky decomposition failed! Input matrix:"));
    }
}
