//! Complex spherical harmonics *Y*<sub>*l*</sub><sup>*m*</sup>(*θ*, *φ*).
//!
//! Harmonics are orthonormal over the unit sphere and, since the underlying
//! Legendre functions carry the Condon-Shortley phase, satisfy
//! *Y*<sub>*l*</sub><sup>-*m*</sup> = (-1)<sup>*m*</sup>
//! conj(*Y*<sub>*l*</sub><sup>*m*</sup>).

use std::f64::consts::PI;
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    error::{ HError, HResult, ShapeError },
    legendre::assoc_legendre,
    utils::{ ln_factorial_ratio, scale_ln },
};

// ln √((2l + 1) (l - k)! / (4π (l + k)!)), with 0 <= k <= l assumed
fn ln_norm_const(l: i32, k: i32) -> f64 {
    let a = (l - k).unsigned_abs();
    let b = (l + k).unsigned_abs();
    0.5 * ((f64::from(2 * l + 1) / (4.0 * PI)).ln() + ln_factorial_ratio(a, b))
}

/// Compute the spherical harmonic *Y*<sub>`l`</sub><sup>`m`</sup> for each
/// pair of elements in `theta` (polar angle) and `phi` (azimuthal angle).
///
/// ```text
///  m          / (2l + 1) (l - m)! \1/2   m            i m φ
/// Y (θ, φ) = | ------------------- |    P  (cos θ)  e
///  l          \   4π   (l + m)!   /      l
/// ```
///
/// Fails with [`HError::InvalidDegree`][crate::error::HError::InvalidDegree]
/// or [`HError::InvalidOrder`][crate::error::HError::InvalidOrder] under the
/// same conditions as [`assoc_legendre`], and with
/// [`HError::Shape`][crate::error::HError::Shape] if `theta` and `phi` differ
/// in shape. For `m` ≠ 0, points on the polar axis (*θ* = 0 or *π*) give NaN.
///
/// Negative orders are evaluated as (-1)<sup>*m*</sup>
/// conj(*Y*<sub>*l*</sub><sup>|*m*|</sup>), and the normalization is folded
/// into *P*<sub>*l*</sub><sup>|*m*|</sup> as a logarithm, so results stay
/// finite for degrees where the factorials alone do not fit in an `f64`.
///
/// ```
/// use std::f64::consts::PI;
/// use ndarray as nd;
/// use hatom::harmonic::spherical_harmonic;
///
/// let theta = nd::array![0.3, 1.2, 2.9];
/// let phi = nd::array![0.0, 2.0, -1.0];
/// let y = spherical_harmonic(&theta, &phi, 0, 0).unwrap();
/// let y00 = (4.0 * PI).sqrt().recip();
/// assert!(y.iter().all(|yk| (yk.re - y00).abs() < 1e-15 && yk.im == 0.0));
/// ```
pub fn spherical_harmonic<S, T, D>(
    theta: &nd::ArrayBase<S, D>,
    phi: &nd::ArrayBase<T, D>,
    l: i32,
    m: i32,
) -> HResult<nd::Array<C64, D>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    HError::check_degree_order(l, m)?;
    ShapeError::check(theta, phi)?;
    let k = m.abs();
    let plk = assoc_legendre(&theta.mapv(f64::cos), l, k)?;
    let ln_norm = ln_norm_const(l, k);
    let sign = if m < 0 && k % 2 == 1 { -1.0 } else { 1.0 };
    let mf = f64::from(m);
    let y: nd::Array<C64, D>
        = nd::Zip::from(&plk).and(phi)
        .map_collect(|pk, phik| {
            C64::from_polar(sign * scale_ln(*pk, ln_norm), mf * phik)
        });
    Ok(y)
}
