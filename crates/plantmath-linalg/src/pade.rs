//! Pade approximants of the matrix exponential.
//!
//! The coefficient tables are the classical diagonal Pade coefficients used by the
//! scaling-and-squaring method (Higham, "The Scaling and Squaring Method for the Matrix
//! Exponential Revisited", 2005).

use faer::{Mat, MatRef};

use crate::error::{ensure_square, LinalgError};
use crate::ops::{identity, scaled};

const PADE3_COEFFS: [f64; 4] = [120.0, 60.0, 12.0, 1.0];

const PADE5_COEFFS: [f64; 6] = [30240.0, 15120.0, 3360.0, 420.0, 30.0, 1.0];

const PADE7_COEFFS: [f64; 8] = [
    17297280.0, 8648640.0, 1995840.0, 277200.0, 25200.0, 1512.0, 56.0, 1.0,
];

const PADE9_COEFFS: [f64; 10] = [
    17643225600.0,
    8821612800.0,
    2075673600.0,
    302702400.0,
    30270240.0,
    2162160.0,
    110880.0,
    3960.0,
    90.0,
    1.0,
];

const PADE13_COEFFS: [f64; 14] = [
    64764752532480000.0,
    32382376266240000.0,
    7771770303897600.0,
    1187353796428800.0,
    129060195264000.0,
    10559470521600.0,
    670442572800.0,
    33522128640.0,
    1323241920.0,
    40840800.0,
    960960.0,
    16380.0,
    182.0,
    1.0,
];

// Upper bounds on the induced 1-norm for which each order is accurate to double precision.
const THETA_3: f64 = 1.495585217958292e-2;
const THETA_5: f64 = 2.539398330063230e-1;
const THETA_7: f64 = 9.504178996162932e-1;
const THETA_9: f64 = 2.097847961257068e0;
const THETA_13: f64 = 5.371920351148152;

/// Upper bound on the number of squarings. A finite `f64` norm never needs more.
pub const MAX_SQUARINGS: u32 = 1024;

/// The supported Pade approximant orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadeOrder {
    /// Order 3.
    Three,
    /// Order 5.
    Five,
    /// Order 7.
    Seven,
    /// Order 9.
    Nine,
    /// Order 13, used together with scaling and squaring.
    Thirteen,
}

impl PadeOrder {
    /// The degree of the numerator and denominator polynomials.
    pub fn degree(&self) -> usize {
        match self {
            PadeOrder::Three => 3,
            PadeOrder::Five => 5,
            PadeOrder::Seven => 7,
            PadeOrder::Nine => 9,
            PadeOrder::Thirteen => 13,
        }
    }

    /// The coefficient table `b[0..=degree]` of this order.
    pub fn coefficients(&self) -> &'static [f64] {
        match self {
            PadeOrder::Three => &PADE3_COEFFS,
            PadeOrder::Five => &PADE5_COEFFS,
            PadeOrder::Seven => &PADE7_COEFFS,
            PadeOrder::Nine => &PADE9_COEFFS,
            PadeOrder::Thirteen => &PADE13_COEFFS,
        }
    }

    /// Select the approximant order for a matrix with the given induced 1-norm.
    ///
    /// Returns the order together with the number of squarings to apply. The number of
    /// squarings is always zero unless the order is [`PadeOrder::Thirteen`], in which case the
    /// input has to be divided by `2^squarings` before evaluating the approximant.
    ///
    /// The number of squarings is capped at [`MAX_SQUARINGS`]; an infinite norm yields the cap
    /// and a NaN norm yields zero.
    pub fn for_norm(norm: f64) -> (PadeOrder, u32) {
        if norm < THETA_3 {
            (PadeOrder::Three, 0)
        } else if norm < THETA_5 {
            (PadeOrder::Five, 0)
        } else if norm < THETA_7 {
            (PadeOrder::Seven, 0)
        } else if norm < THETA_9 {
            (PadeOrder::Nine, 0)
        } else {
            // f64::max/min drop a NaN operand, so this stays in [0, MAX_SQUARINGS]
            let squarings = (norm / THETA_13)
                .log2()
                .ceil()
                .max(0.0)
                .min(f64::from(MAX_SQUARINGS));
            (PadeOrder::Thirteen, squarings as u32)
        }
    }
}

/// Evaluate the Pade approximant of `exp(a)` of the given order.
///
/// Returns the pair `(U, V)` where `U` collects the odd terms and `V` the even terms, so that
/// `exp(a) ≈ (V - U)⁻¹ (V + U)`.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] if `a` is not square.
pub fn pade_approximant(
    a: MatRef<'_, f64>,
    order: PadeOrder,
) -> Result<(Mat<f64>, Mat<f64>), LinalgError> {
    ensure_square(a.nrows(), a.ncols())?;

    let b = order.coefficients();
    let ident = identity(a.nrows());
    let a2 = a * a;

    if order == PadeOrder::Thirteen {
        let a4 = &a2 * &a2;
        let a6 = &a4 * &a2;

        let u_high = scaled(a6.as_ref(), b[13])
            + scaled(a4.as_ref(), b[11])
            + scaled(a2.as_ref(), b[9]);
        let u_low = scaled(a6.as_ref(), b[7])
            + scaled(a4.as_ref(), b[5])
            + scaled(a2.as_ref(), b[3])
            + scaled(ident.as_ref(), b[1]);
        let u = a * (&a6 * &u_high + &u_low);

        let v_high = scaled(a6.as_ref(), b[12])
            + scaled(a4.as_ref(), b[10])
            + scaled(a2.as_ref(), b[8]);
        let v_low = scaled(a6.as_ref(), b[6])
            + scaled(a4.as_ref(), b[4])
            + scaled(a2.as_ref(), b[2])
            + scaled(ident.as_ref(), b[0]);
        let v = &a6 * &v_high + &v_low;

        return Ok((u, v));
    }

    // even powers [I, A², A⁴, ...] up to A^(degree - 1)
    let num_powers = order.degree().div_ceil(2);
    let mut powers = Vec::with_capacity(num_powers);
    powers.push(ident);
    if num_powers > 1 {
        powers.push(a2);
    }
    while powers.len() < num_powers {
        let next = &powers[powers.len() - 1] * &powers[1];
        powers.push(next);
    }

    let mut u_inner = Mat::<f64>::zeros(a.nrows(), a.ncols());
    let mut v = Mat::<f64>::zeros(a.nrows(), a.ncols());
    for (k, power) in powers.iter().enumerate() {
        u_inner += scaled(power.as_ref(), b[2 * k + 1]);
        v += scaled(power.as_ref(), b[2 * k]);
    }
    let u = a * &u_inner;

    Ok((u, v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficient_tables() {
        for order in [
            PadeOrder::Three,
            PadeOrder::Five,
            PadeOrder::Seven,
            PadeOrder::Nine,
            PadeOrder::Thirteen,
        ] {
            let b = order.coefficients();
            assert_eq!(b.len(), order.degree() + 1);
            // highest order coefficient is normalized to one
            assert_eq!(b[order.degree()], 1.0);
            // b[1] = b[0] / 2 for every diagonal approximant
            assert_eq!(b[1], b[0] / 2.0);
        }
    }

    #[test]
    fn test_for_norm_branches() {
        assert_eq!(PadeOrder::for_norm(0.0), (PadeOrder::Three, 0));
        assert_eq!(PadeOrder::for_norm(1.4e-2), (PadeOrder::Three, 0));
        assert_eq!(PadeOrder::for_norm(1.495585217958292e-2), (PadeOrder::Five, 0));
        assert_eq!(PadeOrder::for_norm(0.2), (PadeOrder::Five, 0));
        assert_eq!(PadeOrder::for_norm(2.539398330063230e-1), (PadeOrder::Seven, 0));
        assert_eq!(PadeOrder::for_norm(9.504178996162932e-1), (PadeOrder::Nine, 0));
        assert_eq!(PadeOrder::for_norm(2.0), (PadeOrder::Nine, 0));
        assert_eq!(PadeOrder::for_norm(2.097847961257068), (PadeOrder::Thirteen, 0));
        assert_eq!(PadeOrder::for_norm(5.0), (PadeOrder::Thirteen, 0));
    }

    #[test]
    fn test_for_norm_squarings() {
        assert_eq!(PadeOrder::for_norm(THETA_13), (PadeOrder::Thirteen, 0));
        assert_eq!(PadeOrder::for_norm(THETA_13 * 1.5), (PadeOrder::Thirteen, 1));
        assert_eq!(PadeOrder::for_norm(THETA_13 * 3.0), (PadeOrder::Thirteen, 2));
        assert_eq!(PadeOrder::for_norm(THETA_13 * 1000.0), (PadeOrder::Thirteen, 10));
        assert_eq!(PadeOrder::for_norm(f64::MAX).1, 1022);
    }

    #[test]
    fn test_for_norm_non_finite() {
        assert_eq!(
            PadeOrder::for_norm(f64::INFINITY),
            (PadeOrder::Thirteen, MAX_SQUARINGS)
        );
        assert_eq!(PadeOrder::for_norm(f64::NAN), (PadeOrder::Thirteen, 0));
    }

    #[test]
    fn test_pade_non_square() {
        let a = Mat::<f64>::zeros(2, 3);
        assert!(matches!(
            pade_approximant(a.as_ref(), PadeOrder::Seven),
            Err(LinalgError::DimensionMismatch { rows: 2, cols: 3 })
        ));
    }

    #[test]
    fn test_pade_zero_matrix() -> Result<(), LinalgError> {
        let zero = Mat::<f64>::zeros(3, 3);
        for order in [
            PadeOrder::Three,
            PadeOrder::Five,
            PadeOrder::Seven,
            PadeOrder::Nine,
            PadeOrder::Thirteen,
        ] {
            let (u, v) = pade_approximant(zero.as_ref(), order)?;
            assert_eq!(u, Mat::<f64>::zeros(3, 3));
            assert_eq!(v, scaled(identity(3).as_ref(), order.coefficients()[0]));
        }
        Ok(())
    }

    #[test]
    fn test_pade_scalar() -> Result<(), LinalgError> {
        // for a 1x1 matrix the approximant reduces to the scalar rational function
        let x = 0.1;
        let a = faer::mat![[x]];
        let (u, v) = pade_approximant(a.as_ref(), PadeOrder::Five)?;
        let b = PADE5_COEFFS;
        let u_expected = x * (b[5] * x.powi(4) + b[3] * x.powi(2) + b[1]);
        let v_expected = b[4] * x.powi(4) + b[2] * x.powi(2) + b[0];
        assert!((u.read(0, 0) - u_expected).abs() < 1e-9);
        assert!((v.read(0, 0) - v_expected).abs() < 1e-9);

        let approx = (v.read(0, 0) + u.read(0, 0)) / (v.read(0, 0) - u.read(0, 0));
        assert!((approx - x.exp()).abs() < 1e-14);
        Ok(())
    }

    #[test]
    fn test_pade13_scalar() -> Result<(), LinalgError> {
        let x = 3.0;
        let a = faer::mat![[x]];
        let (u, v) = pade_approximant(a.as_ref(), PadeOrder::Thirteen)?;
        let approx = (v.read(0, 0) + u.read(0, 0)) / (v.read(0, 0) - u.read(0, 0));
        assert!((approx - x.exp()).abs() / x.exp() < 1e-12);
        Ok(())
    }
}
