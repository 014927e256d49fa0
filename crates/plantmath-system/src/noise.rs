use faer::Mat;
use rand::Rng;
use rand_distr::StandardNormal;

/// Build a diagonal covariance matrix from per-element standard deviations.
///
/// The i-th diagonal entry is `std_devs[i]^2`.
pub fn make_cov_matrix(std_devs: &[f64]) -> Mat<f64> {
    let n = std_devs.len();
    Mat::<f64>::from_fn(n, n, |i, j| {
        if i == j {
            std_devs[i] * std_devs[i]
        } else {
            0.0
        }
    })
}

/// Lower triangular sampling factor `L` with `L Lᵗ = diag(std_devs^2)`.
///
/// The covariance is diagonal, so its Cholesky factor is `diag(|std_devs|)`. Entries with a zero
/// standard deviation get a zero row, i.e. no noise on that element, even when other entries are
/// noisy and the covariance is singular.
pub fn white_noise_factor(std_devs: &[f64]) -> Mat<f64> {
    let n = std_devs.len();
    Mat::<f64>::from_fn(n, n, |i, j| if i == j { std_devs[i].abs() } else { 0.0 })
}

/// Sample a white Gaussian noise column vector.
///
/// Draws `z ~ N(0, I)` and returns `L z` with `L` from [`white_noise_factor`], so the i-th
/// entry has standard deviation `std_devs[i]`.
///
/// # Arguments
///
/// * `std_devs` - The standard deviation of each entry.
/// * `rng` - The random number generator.
///
/// # Returns
///
/// A column vector with shape (n, 1).
pub fn make_white_noise_vector<R: Rng>(std_devs: &[f64], rng: &mut R) -> Mat<f64> {
    let factor = white_noise_factor(std_devs);
    let z = Mat::<f64>::from_fn(std_devs.len(), 1, |_, _| rng.sample(StandardNormal));
    &factor * &z
}
