//! Associated Legendre functions *P*<sub>*l*</sub><sup>*m*</sup>(*x*),
//! computed by three-term recurrence.
//!
//! The recurrences used here carry the Condon-Shortley phase, so that e.g.
//! *P*<sub>1</sub><sup>1</sup>(*x*) = -√(1 - *x*²). See
//! [`docs`][crate::docs#associated-legendre-functions] for the relations
//! themselves.
//!
//! ```
//! use ndarray as nd;
//! use hatom::legendre::assoc_legendre;
//!
//! let x: nd::Array1<f64> = nd::Array::linspace(-0.9, 0.9, 7);
//! let p = assoc_legendre(&x, 2, 2).unwrap();
//! assert!(
//!     x.iter().zip(&p)
//!         .all(|(xk, pk)| (pk - 3.0 * (1.0 - xk * xk)).abs() < 1e-12)
//! );
//! ```

use ndarray as nd;
use crate::{
    error::{ HError, HResult },
    utils::{ ln_factorial_ratio, scale_ln },
};

// P_l^m for m >= 0, with l >= m assumed
//
// the order is climbed from 0 to m carrying P_M^M, P_{M+1}^M, P_{M+2}^M, then
// the degree is climbed at fixed order if l > m + 2
//
// at x = ±1 the order climb divides by zero, giving NaN for any m > 0
fn plm(x: f64, l: u32, m: u32) -> f64 {
    let sx = (1.0 - x * x).sqrt();
    let mut p1: f64 = 1.0;
    let mut p2: f64 = x;
    let mut p3: f64 = (3.0 * x * p2 - p1) / 2.0;
    for k in 1..=m {
        let M = f64::from(k);
        let mut L = M;
        p1 = ((L - M + 1.0) * x * p2 - (L + M - 1.0) * p1) / sx;
        L += 1.0;
        p2 = ((L - M + 1.0) * x * p3 - (L + M - 1.0) * p2) / sx;
        L += 1.0;
        p3 = ((2.0 * L - 1.0) * x * p2 - (L + M - 1.0) * p1) / (L - M);
    }
    match l - m {
        0 => p1,
        1 => p2,
        2 => p3,
        _ => {
            let M = f64::from(m);
            let mut prev = p2;
            let mut cur = p3;
            for k in m + 3..=l {
                let L = f64::from(k);
                let next = ((2.0 * L - 1.0) * x * cur - (L + M - 1.0) * prev)
                    / (L - M);
                prev = cur;
                cur = next;
            }
            cur
        },
    }
}

// sign and log-magnitude of the factor relating P_l^m to P_l^|m|
//
// P_l^-k = (-1)^k (l - k)! / (l + k)! P_l^k
//
// the magnitude is returned as a logarithm; the ratio itself leaves f64 range
// near l = 85
fn order_factor(l: u32, m: i32) -> (f64, f64) {
    if m >= 0 { return (1.0, 0.0); }
    let k = m.unsigned_abs();
    let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
    (sign, ln_factorial_ratio(l - k, l + k))
}

fn warn_at_poles<'a, I>(x: I, l: i32, m: i32)
where I: IntoIterator<Item = &'a f64>
{
    if m != 0 && x.into_iter().any(|xk| xk.abs() == 1.0) {
        tracing::warn!(
            l = l, m = m,
            "legendre: sampled at x = ±1 with nonzero order; results at these \
            points are not finite"
        );
    }
}

/// Compute the associated Legendre function *P*<sub>*l*</sub><sup>*m*</sup>
/// for each element of `x`.
///
/// `l` must be non-negative and `m` must satisfy |`m`| ≤ `l`; otherwise
/// [`HError::InvalidDegree`] or [`HError::InvalidOrder`] is returned before
/// any evaluation. Negative orders are obtained from positive ones through
/// ```text
///  -k          k  (l - k)!   k
/// P  (x) = (-1)   -------- P  (x)
///  l              (l + k)!  l
/// ```
///
/// Elements of `x` are nominally in [-1, 1]. For `m` ≠ 0, elements equal to
/// ±1 produce NaN: the order recurrence divides by √(1 - *x*²) and no attempt
/// is made to take the limit.
pub fn assoc_legendre<S, D>(x: &nd::ArrayBase<S, D>, l: i32, m: i32)
    -> HResult<nd::Array<f64, D>>
where
    S: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    HError::check_degree_order(l, m)?;
    warn_at_poles(x.iter(), l, m);
    let l = l.unsigned_abs();
    let (sign, ln_factor) = order_factor(l, m);
    let m_abs = m.unsigned_abs();
    Ok(x.mapv(|xk| sign * scale_ln(plm(xk, l, m_abs), ln_factor)))
}

/// Like [`assoc_legendre`], but for a single point.
pub fn assoc_legendre_single(x: f64, l: i32, m: i32) -> HResult<f64> {
    HError::check_degree_order(l, m)?;
    warn_at_poles([x].iter(), l, m);
    let l = l.unsigned_abs();
    let (sign, ln_factor) = order_factor(l, m);
    Ok(sign * scale_ln(plm(x, l, m.unsigned_abs()), ln_factor))
}
