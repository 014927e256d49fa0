use faer::{Mat, MatRef};

use crate::error::{DecompositionKind, LinalgError};
use crate::ops::is_finite;

/// Orthogonal-triangular factorization `A = Q R` computed with Householder reflections.
#[derive(Debug, Clone)]
pub struct HouseholderQr {
    q: Mat<f64>,
    r: Mat<f64>,
}

impl HouseholderQr {
    /// The orthogonal factor `Q` with shape (m, m).
    pub fn q(&self) -> MatRef<'_, f64> {
        self.q.as_ref()
    }

    /// The upper trapezoidal factor `R` with shape (m, n).
    pub fn r(&self) -> MatRef<'_, f64> {
        self.r.as_ref()
    }

    /// The leftmost `min(m, n)` columns of `Q`.
    pub fn thin_q(&self) -> Mat<f64> {
        let k = self.rank_bound();
        self.q.as_ref().subcols(0, k).to_owned()
    }

    /// The top `min(m, n)` rows of `R`.
    pub fn thin_r(&self) -> Mat<f64> {
        let k = self.rank_bound();
        self.r.as_ref().subrows(0, k).to_owned()
    }

    /// Multiply the factors back together.
    pub fn reconstruct(&self) -> Mat<f64> {
        &self.q * &self.r
    }

    fn rank_bound(&self) -> usize {
        self.r.nrows().min(self.r.ncols())
    }
}

/// Compute the Householder QR decomposition of an arbitrary (m, n) matrix.
///
/// # Errors
///
/// Returns [`LinalgError::DecompositionFailure`] carrying a copy of `a` if the input contains
/// non-finite entries or the factorization produced non-finite factors.
pub fn householder_qr_decompose(a: MatRef<'_, f64>) -> Result<HouseholderQr, LinalgError> {
    let failure = || LinalgError::DecompositionFailure {
        kind: DecompositionKind::HouseholderQr,
        matrix: a.to_owned(),
    };

    if !is_finite(a) {
        log::debug!("householder qr: input has non-finite entries");
        return Err(failure());
    }

    let qr = a.qr();
    let (q, r) = (qr.compute_q(), qr.compute_r());

    if !is_finite(q.as_ref()) || !is_finite(r.as_ref()) {
        log::debug!("householder qr: factorization produced non-finite factors");
        return Err(failure());
    }

    Ok(HouseholderQr { q, r })
}
