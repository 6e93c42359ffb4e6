//! Miscellaneous tools.

use ndarray as nd;
use num_traits::Num;
use statrs::function::gamma::ln_gamma;
use crate::error::{ HResult, ShapeError };

// widest factorial ratio computed as a direct product before switching over to
// log-gamma
const DIRECT_PRODUCT_MAX: u32 = 32;

/// Compute ln(*n*!) through the log-gamma function.
pub fn ln_factorial(n: u32) -> f64 { ln_gamma(f64::from(n) + 1.0) }

/// Compute ln(*a*! / *b*!) without forming either factorial.
///
/// When *a* and *b* are close the logarithm is summed over the non-cancelling
/// factors; otherwise it is taken as a difference of log-gamma values.
///
/// ```
/// use hatom::utils::ln_factorial_ratio;
///
/// assert!((ln_factorial_ratio(5, 3) - 20.0_f64.ln()).abs() < 1e-15);
/// assert!((ln_factorial_ratio(1, 5) + 120.0_f64.ln()).abs() < 1e-14);
/// assert_eq!(ln_factorial_ratio(7, 7), 0.0);
/// ```
pub fn ln_factorial_ratio(a: u32, b: u32) -> f64 {
    if a.abs_diff(b) <= DIRECT_PRODUCT_MAX {
        if a >= b {
            (b + 1..=a).map(|k| f64::from(k).ln()).sum()
        } else {
            -(a + 1..=b).map(|k| f64::from(k).ln()).sum::<f64>()
        }
    } else {
        ln_factorial(a) - ln_factorial(b)
    }
}

/// Compute `x` × exp(`ln_scale`) without forming exp(`ln_scale`) on its own.
///
/// The scale is folded into ln|`x`| before exponentiating, so the result is
/// finite whenever the product is, even if the scale alone would overflow or
/// underflow. Zeros and NaNs pass through.
///
/// ```
/// use hatom::utils::scale_ln;
///
/// assert!((scale_ln(-2.0, 3.0_f64.ln()) + 6.0).abs() < 1e-14);
/// // 1e-400 is not representable, but 1e-250 is
/// let y = scale_ln(1e150, -400.0 * 10.0_f64.ln());
/// assert!((y / 1e-250 - 1.0).abs() < 1e-10);
/// ```
pub fn scale_ln(x: f64, ln_scale: f64) -> f64 {
    if ln_scale == 0.0 { return x; }
    x.signum() * (x.abs().ln() + ln_scale).exp()
}

/// Evaluate a polynomial at `x` by Horner's scheme.
///
/// Coefficients are given in order of descending power, i.e. `coeffs[0]`
/// multiplies the highest power of `x`. An empty coefficient array is the zero
/// polynomial.
///
/// ```
/// use ndarray as nd;
/// use hatom::utils::polyval;
///
/// // 2x² - 3x + 1
/// let p = nd::array![2.0, -3.0, 1.0];
/// assert_eq!(polyval(&p, 0.0), 1.0);
/// assert_eq!(polyval(&p, 2.0), 3.0);
/// ```
pub fn polyval<S, A>(coeffs: &nd::ArrayBase<S, nd::Ix1>, x: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Num + Copy,
{
    coeffs.iter().fold(A::zero(), |acc, ck| acc * x + *ck)
}

/// Convert Cartesian sampling coordinates to spherical ones, `(r, θ, φ)`.
///
/// Uses the physics (ISO) convention: *θ* ∊ [0, π] is the polar angle measured
/// from the +*z* axis and *φ* ∊ (-π, π] is the azimuthal angle measured from
/// the +*x* axis.
pub fn cartesian_to_spherical<S, T, U, D>(
    x: &nd::ArrayBase<S, D>,
    y: &nd::ArrayBase<T, D>,
    z: &nd::ArrayBase<U, D>,
) -> HResult<(nd::Array<f64, D>, nd::Array<f64, D>, nd::Array<f64, D>)>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    ShapeError::check(x, y)?;
    ShapeError::check(x, z)?;
    let r: nd::Array<f64, D>
        = nd::Zip::from(x).and(y).and(z)
        .map_collect(|xk, yk, zk| (xk * xk + yk * yk + zk * zk).sqrt());
    let theta: nd::Array<f64, D>
        = nd::Zip::from(x).and(y).and(z)
        .map_collect(|xk, yk, zk| xk.hypot(*yk).atan2(*zk));
    let phi: nd::Array<f64, D>
        = nd::Zip::from(x).and(y)
        .map_collect(|xk, yk| yk.atan2(*xk));
    Ok((r, theta, phi))
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{ FRAC_PI_2, FRAC_PI_4 };
    use super::*;

    #[test]
    fn ln_factorial_ratio_direct_and_log_gamma_agree() {
        // 40!/2! is outside the direct-sum window
        let direct: f64 = (3..=40).map(|k| f64::from(k).ln()).sum();
        assert!((ln_factorial_ratio(40, 2) - direct).abs() < 1e-12);
        assert!((ln_factorial_ratio(2, 40) + direct).abs() < 1e-12);
        // 32-wide window on the direct side
        let direct: f64 = (9..=40).map(|k| f64::from(k).ln()).sum();
        assert!((ln_factorial_ratio(40, 8) - direct).abs() < 1e-12);
    }

    #[test]
    fn ln_factorial_ratio_beyond_f64_range() {
        // 300! overflows f64, but its logarithm does not
        let lr = ln_factorial_ratio(0, 300);
        assert!(lr.is_finite());
        assert!((lr + ln_factorial(300)).abs() < 1e-9);
        assert!(lr < -700.0);
    }

    #[test]
    fn scale_ln_edge_values() {
        assert_eq!(scale_ln(0.0, 5.0), 0.0);
        assert!(scale_ln(f64::NAN, 1.0).is_nan());
        assert_eq!(scale_ln(-3.5, 0.0), -3.5);
        // exp(-1000) alone flushes to zero
        let y = scale_ln(1e200, -1000.0);
        assert!(y > 0.0);
        assert!((y.ln() - (1e200_f64.ln() - 1000.0)).abs() < 1e-12);
        let y = scale_ln(-1e-200, 1000.0);
        assert!(y < 0.0 && y.is_finite());
    }

    #[test]
    fn ln_factorial_small() {
        assert!(ln_factorial(0).abs() < 1e-12);
        assert!(ln_factorial(1).abs() < 1e-12);
        assert!((ln_factorial(5) - 120.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn polyval_empty_and_constant() {
        let empty: nd::Array1<f64> = nd::Array1::zeros(0);
        assert_eq!(polyval(&empty, 3.0), 0.0);
        assert_eq!(polyval(&nd::array![4.5], -7.0), 4.5);
    }

    #[test]
    fn spherical_axes() {
        let x = nd::array![1.0, 0.0, 0.0, 1.0];
        let y = nd::array![0.0, 1.0, 0.0, 1.0];
        let z = nd::array![0.0, 0.0, 2.0, 0.0];
        let (r, theta, phi) = cartesian_to_spherical(&x, &y, &z).unwrap();
        let expected_r = [1.0, 1.0, 2.0, 2.0_f64.sqrt()];
        let expected_theta = [FRAC_PI_2, FRAC_PI_2, 0.0, FRAC_PI_2];
        let expected_phi = [0.0, FRAC_PI_2, 0.0, FRAC_PI_4];
        for k in 0..4 {
            assert!((r[k] - expected_r[k]).abs() < 1e-12);
            assert!((theta[k] - expected_theta[k]).abs() < 1e-12);
            assert!((phi[k] - expected_phi[k]).abs() < 1e-12);
        }
    }

    #[test]
    fn spherical_shape_mismatch() {
        let x = nd::array![1.0, 0.0];
        let y = nd::array![0.0, 1.0];
        let z = nd::array![0.0];
        assert!(cartesian_to_spherical(&x, &y, &z).is_err());
    }
}
