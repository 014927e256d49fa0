use faer::{Mat, MatRef};

/// Create a square identity matrix.
///
/// # Arguments
///
/// * `n` - The number of rows and columns.
///
/// Example:
///
/// ```
/// use plantmath_linalg::identity;
///
/// let eye = identity(3);
/// assert_eq!(eye.read(1, 1), 1.0);
/// assert_eq!(eye.read(0, 1), 0.0);
/// ```
pub fn identity(n: usize) -> Mat<f64> {
    identity_rect(n, n)
}

/// Create a rectangular identity matrix.
///
/// The first `min(rows, cols)` diagonal entries are one, everything else is zero.
pub fn identity_rect(rows: usize, cols: usize) -> Mat<f64> {
    Mat::<f64>::from_fn(rows, cols, |i, j| if i == j { 1.0 } else { 0.0 })
}

/// Compute the induced 1-norm of a matrix, i.e. its maximum absolute column sum.
///
/// Returns `0.0` for an empty matrix.
pub fn norm_induced_l1(mat: MatRef<'_, f64>) -> f64 {
    (0..mat.ncols())
        .map(|j| (0..mat.nrows()).map(|i| mat.read(i, j).abs()).sum::<f64>())
        .fold(0.0, f64::max)
}

/// Multiply every entry of `mat` by `factor`.
pub(crate) fn scaled(mat: MatRef<'_, f64>, factor: f64) -> Mat<f64> {
    faer::scale(factor) * mat
}

/// Returns true if every entry of `mat` is finite.
pub(crate) fn is_finite(mat: MatRef<'_, f64>) -> bool {
    (0..mat.ncols()).all(|j| (0..mat.nrows()).all(|i| mat.read(i, j).is_finite()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_square() {
        let eye = identity(4);
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(eye.read(i, j), if i == j { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn test_identity_rect() {
        let wide = identity_rect(2, 3);
        assert_eq!(wide.nrows(), 2);
        assert_eq!(wide.ncols(), 3);
        assert_eq!(wide, faer::mat![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);

        let tall = identity_rect(3, 2);
        assert_eq!(tall, faer::mat![[1.0, 0.0], [0.0, 1.0], [0.0, 0.0]]);
    }

    #[test]
    fn test_norm_induced_l1() {
        let mat = faer::mat![[1.0, -2.0], [-3.0, 0.5]];
        assert_eq!(norm_induced_l1(mat.as_ref()), 4.0);

        let empty = Mat::<f64>::zeros(0, 0);
        assert_eq!(norm_induced_l1(empty.as_ref()), 0.0);
    }

    #[test]
    fn test_scaled() {
        let mat = faer::mat![[1.0, 2.0], [3.0, 4.0]];
        assert_eq!(scaled(mat.as_ref(), 0.5), faer::mat![[0.5, 1.0], [1.5, 2.0]]);
    }

    #[test]
    fn test_is_finite() {
        let mut mat = identity(2);
        assert!(is_finite(mat.as_ref()));
        mat.write(0, 1, f64::NAN);
        assert!(!is_finite(mat.as_ref()));
    }
}
