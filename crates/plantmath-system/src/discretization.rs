use faer::{Mat, MatRef};
use plantmath_linalg::{expm, LinalgError};

use crate::error::{ensure_shape, SystemError};

/// Discretize a continuous-time system matrix over a timestep.
///
/// Computes `A_d = e^(A dt)`.
///
/// # Arguments
///
/// * `cont_a` - The continuous-time system matrix with shape (n, n).
/// * `dt` - The timestep in seconds.
pub fn discretize_a(cont_a: MatRef<'_, f64>, dt: f64) -> Result<Mat<f64>, LinalgError> {
    let a_dt = faer::scale(dt) * cont_a;
    expm(a_dt.as_ref())
}

/// Discretize a continuous-time system and input matrix pair over a timestep.
///
/// Exponentiates the block matrix `[[A, B], [0, 0]] dt` and reads the discrete system matrix
/// from its top-left (n, n) block and the discrete input matrix from its top-right (n, m) block.
///
/// # Arguments
///
/// * `cont_a` - The continuous-time system matrix with shape (n, n).
/// * `cont_b` - The continuous-time input matrix with shape (n, m).
/// * `dt` - The timestep in seconds.
///
/// # Returns
///
/// The pair `(A_d, B_d)`.
pub fn discretize_ab(
    cont_a: MatRef<'_, f64>,
    cont_b: MatRef<'_, f64>,
    dt: f64,
) -> Result<(Mat<f64>, Mat<f64>), SystemError> {
    let states = cont_a.nrows();
    ensure_shape("A", cont_a, (states, states))?;
    let inputs = cont_b.ncols();
    ensure_shape("B", cont_b, (states, inputs))?;

    let size = states + inputs;
    let m = Mat::<f64>::from_fn(size, size, |i, j| match (i < states, j < states) {
        (true, true) => cont_a.read(i, j) * dt,
        (true, false) => cont_b.read(i, j - states) * dt,
        _ => 0.0,
    });
    let phi = expm(m.as_ref())?;

    let disc_a = phi.as_ref().submatrix(0, 0, states, states).to_owned();
    let disc_b = phi.as_ref().submatrix(0, states, states, inputs).to_owned();
    Ok((disc_a, disc_b))
}
