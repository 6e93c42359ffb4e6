//! Generalized Laguerre polynomials *L*<sub>*n*</sub><sup>*α*</sup>(*x*).
//!
//! Polynomials are built explicitly as coefficient arrays by three-term
//! recurrence and then evaluated by Horner's scheme.
//!
//! ```
//! use ndarray as nd;
//! use hatom::laguerre::gen_laguerre;
//!
//! // L_2^0(x) = (x² - 4x + 2) / 2
//! let x: nd::Array1<f64> = nd::Array::linspace(0.0, 10.0, 11);
//! let l = gen_laguerre(2, 0.0, &x).unwrap();
//! assert!(
//!     x.iter().zip(&l)
//!         .all(|(xk, lk)| (lk - (xk * xk - 4.0 * xk + 2.0) / 2.0).abs() < 1e-12)
//! );
//! ```

use ndarray as nd;
use crate::{
    error::{ HError, HResult },
    utils::polyval,
};

/// Compute the coefficients of *L*<sub>`n`</sub><sup>`alpha`</sup>, in order
/// of descending power.
///
/// The returned array always has length `n + 1`. Coefficients are generated
/// from those of *L*<sub>0</sub> = 1 and *L*<sub>1</sub> = *α* + 1 - *x* via
/// ```text
///          /    α - 1 \        x           /    α - 1 \
/// L  = ( 2 + ----- ) L    -  - L     - ( 1 + ----- ) L
///  k       \     k   /  k-1    k  k-1      \     k   /  k-2
/// ```
/// with the multiplication by *x* performed as a shift of the coefficient
/// array.
///
/// Fails with [`HError::InvalidDegree`] if `n` is negative.
pub fn laguerre_coeffs(n: i32, alpha: f64) -> HResult<nd::Array1<f64>> {
    HError::check_degree(n)?;
    let n = n.unsigned_abs() as usize;
    // ascending order (index = power) while iterating
    let mut lp: nd::Array1<f64> = match n {
        0 => nd::array![1.0],
        1 => nd::array![alpha + 1.0, -1.0],
        _ => {
            let mut lower: nd::Array1<f64> = nd::Array1::zeros(n + 1);
            let mut upper: nd::Array1<f64> = nd::Array1::zeros(n + 1);
            let mut shifted: nd::Array1<f64> = nd::Array1::zeros(n + 1);
            lower[0] = 1.0;
            upper[0] = alpha + 1.0;
            upper[1] = -1.0;
            for k in 2..=n {
                let kf = k as f64;
                let a = 2.0 + (alpha - 1.0) / kf;
                let b = 1.0 + (alpha - 1.0) / kf;
                shifted.slice_mut(nd::s![1..]).assign(&upper.slice(nd::s![..n]));
                let next: nd::Array1<f64>
                    = nd::Zip::from(&upper).and(&shifted).and(&lower)
                    .map_collect(|u, s, l| a * u - s / kf - b * l);
                lower = std::mem::replace(&mut upper, next);
            }
            upper
        },
    };
    lp.invert_axis(nd::Axis(0));
    tracing::debug!(n = n, alpha = alpha, "built Laguerre coefficients");
    Ok(lp)
}

/// Compute the generalized Laguerre polynomial
/// *L*<sub>`n`</sub><sup>`alpha`</sup> for each element of `x`.
///
/// Fails with [`HError::InvalidDegree`] if `n` is negative.
pub fn gen_laguerre<S, D>(n: i32, alpha: f64, x: &nd::ArrayBase<S, D>)
    -> HResult<nd::Array<f64, D>>
where
    S: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    let coeffs = laguerre_coeffs(n, alpha)?;
    Ok(x.mapv(|xk| polyval(&coeffs, xk)))
}
