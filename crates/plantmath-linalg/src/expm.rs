use faer::prelude::SpSolver;
use faer::{Mat, MatRef};

use crate::error::{ensure_square, LinalgError};
use crate::ops::{is_finite, norm_induced_l1, scaled};
use crate::pade::{pade_approximant, PadeOrder};

/// Compute the matrix exponential `e^A` of a square matrix.
///
/// Uses the scaling-and-squaring method with a Pade approximant whose order is chosen from the
/// induced 1-norm of `A`. Small inputs use the orders 3, 5, 7 or 9 directly; larger inputs are
/// divided by `2^s`, approximated with order 13 and the result is squared `s` times.
///
/// # Arguments
///
/// * `a` - The square matrix to exponentiate.
///
/// # Returns
///
/// A matrix of the same dimensions holding `e^A`.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] if `a` is not square.
///
/// If `a` contains a NaN or infinite entry the result is a matrix filled with NaN.
///
/// The rational approximant is evaluated by solving `(V - U) R = (V + U)` with a partial pivot
/// LU. The denominator is not checked for singularity: for pathological inputs where it is
/// singular the returned matrix is unspecified and may contain non-finite values.
///
/// Example:
///
/// ```
/// use plantmath_linalg::expm;
///
/// let a = faer::mat![[0.0, 1.0], [0.0, 0.0]];
/// let e = expm(a.as_ref()).unwrap();
/// assert!((e.read(0, 1) - 1.0).abs() < 1e-12);
/// ```
pub fn expm(a: MatRef<'_, f64>) -> Result<Mat<f64>, LinalgError> {
    ensure_square(a.nrows(), a.ncols())?;

    if !is_finite(a) {
        log::debug!("expm: input has non-finite entries, returning NaN");
        return Ok(Mat::<f64>::from_fn(a.nrows(), a.ncols(), |_, _| f64::NAN));
    }

    let norm = norm_induced_l1(a);
    let (order, squarings) = PadeOrder::for_norm(norm);
    log::trace!("expm: |A|_1 = {norm:e}, pade order {}", order.degree());

    let (u, v) = if squarings > 0 {
        log::debug!("expm: scaling input by 2^-{squarings}");
        let a_scaled = scaled(a, 0.5f64.powf(f64::from(squarings)));
        pade_approximant(a_scaled.as_ref(), order)?
    } else {
        pade_approximant(a, order)?
    };

    Ok(dispatch_pade(&u, &v, squarings))
}

// solve (V - U) R = (V + U) and undo the scaling by repeated squaring
fn dispatch_pade(u: &Mat<f64>, v: &Mat<f64>, squarings: u32) -> Mat<f64> {
    let p = v + u;
    let q = v - u;

    let mut r = q.partial_piv_lu().solve(p.as_ref());
    for _ in 0..squarings {
        r = &r * &r;
    }

    r
}
