use plantmath_linalg::LinalgError;

/// Errors returned by the state-space utilities.
#[derive(Debug, thiserror::Error)]
pub enum SystemError {
    /// A linear algebra routine failed.
    #[error(transparent)]
    Linalg(#[from] LinalgError),

    /// A matrix or vector does not have the shape required by the model.
    #[error("{name} has shape {actual:?}, expected {expected:?}")]
    ShapeMismatch {
        /// Name of the offending argument.
        name: &'static str,
        /// Expected (rows, cols).
        expected: (usize, usize),
        /// Actual (rows, cols).
        actual: (usize, usize),
    },

    /// Measurement noise is enabled but no standard deviations were configured.
    #[error("Measurement noise is enabled but no standard deviations were provided")]
    MissingMeasurementStdDevs,
}

/// Returns an error if `mat` does not have shape `expected`.
pub(crate) fn ensure_shape(
    name: &'static str,
    mat: faer::MatRef<'_, f64>,
    expected: (usize, usize),
) -> Result<(), SystemError> {
    let actual = (mat.nrows(), mat.ncols());
    if actual != expected {
        return Err(SystemError::ShapeMismatch {
            name,
            expected,
            actual,
        });
    }
    Ok(())
}
