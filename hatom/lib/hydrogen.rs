//! Bound-state wavefunctions of the hydrogen atom (and hydrogen-like ions) in
//! position space.
//!
//! For quantum numbers (*n*, *l*, *m*) with 1 ≤ *n*, 0 ≤ *l* < *n*, and
//! |*m*| ≤ *l*,
//! ```text
//!                    -ρ/2  l   2l+1
//! ψ   (r, θ, φ) = N e     ρ   L     (ρ)  Y (θ, φ)
//!  nlm                         n-l-1      l
//!
//!      2 r            / /  2  \3  (n - l - 1)! \1/2
//! ρ = -----,      N = | | --- |   ------------ |
//!     n a             \ \ n a /   2n (n + l)!  /
//! ```
//! where *a* is the Bohr radius. Wavefunctions are normalized with respect to
//! the volume element *r*² sin *θ* d*r* d*θ* d*φ*.
//!
//! ```
//! use std::f64::consts::PI;
//! use ndarray as nd;
//! use hatom::hydrogen::hydrogen_wf_scaled;
//!
//! // ground state in atomic units
//! let r: nd::Array1<f64> = nd::Array::linspace(0.0, 5.0, 11);
//! let theta = nd::Array1::from_elem(11, 0.7);
//! let phi = nd::Array1::from_elem(11, 1.3);
//! let psi = hydrogen_wf_scaled(&r, &theta, &phi, 1, 0, 0, 1.0).unwrap();
//! assert!(
//!     r.iter().zip(&psi)
//!         .all(|(rk, pk)| (pk.re - (-rk).exp() / PI.sqrt()).abs() < 1e-12)
//! );
//! ```

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    error::{ HError, HResult, ShapeError },
    harmonic::spherical_harmonic,
    laguerre::gen_laguerre,
    units,
    utils::{ ln_factorial_ratio, scale_ln },
};

/// Compute the radial factor *R*<sub>*nl*</sub>(*r*) of the wavefunction for
/// each element of `r`, with length scale `a` in the same units as `r`.
///
/// ```text
///                 -ρ/2  l   2l+1
/// R  (r) = N e     ρ   L     (ρ)
///  nl                   n-l-1
/// ```
/// This is normalized such that ∫ |*R*|² *r*² d*r* = 1 over [0, ∞). The
/// normalization, *ρ*<sup>*l*</sup>, and the exponential are combined as a
/// single logarithm before being applied to the Laguerre factor, so large `n`
/// and `l` do not under- or overflow on their own.
///
/// Fails with [`HError::InvalidDegree`] if `l` is negative or
/// [`HError::InvalidQuantumState`] if `n` < 1 or `l` ≥ `n`.
pub fn radial_wf<S, D>(r: &nd::ArrayBase<S, D>, n: i32, l: i32, a: f64)
    -> HResult<nd::Array<f64, D>>
where
    S: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    HError::check_state(n, l, 0)?;
    let nf = f64::from(n);
    let ln_norm: f64
        = 0.5 * (
            3.0 * (2.0 / (nf * a)).ln()
            + ln_factorial_ratio((n - l - 1).unsigned_abs(), (n + l).unsigned_abs())
            - (2.0 * nf).ln()
        );
    let rho: nd::Array<f64, D> = r.mapv(|rk| 2.0 * rk / (nf * a));
    let lag = gen_laguerre(n - l - 1, f64::from(2 * l + 1), &rho)?;
    let lf = f64::from(l);
    let R: nd::Array<f64, D>
        = nd::Zip::from(&rho).and(&lag)
        .map_collect(|rhok, lk| {
            // ρ^l, with 0^0 = 1
            let (ln_rho_l, sign)
                = if l == 0 {
                    (0.0, 1.0)
                } else {
                    let s = if l % 2 == 1 && *rhok < 0.0 { -1.0 } else { 1.0 };
                    (lf * rhok.abs().ln(), s)
                };
            sign * scale_ln(*lk, ln_norm - rhok / 2.0 + ln_rho_l)
        });
    Ok(R)
}

/// Compute the wavefunction *ψ*<sub>*nlm*</sub> for each triple of elements
/// in `r`, `theta`, and `phi`, with length scale `a` in the same units as `r`.
///
/// Use `a` = [`units::a0`] for `r` in meters, `a` = 1 for `r` in Bohr radii,
/// or `a` = *a*<sub>0</sub> / *Z* for a hydrogen-like ion of nuclear charge
/// *Z*.
///
/// Invalid `l` or `m` fail with [`HError::InvalidDegree`] or
/// [`HError::InvalidOrder`] as in
/// [`assoc_legendre`][crate::legendre::assoc_legendre]; otherwise,
/// [`HError::InvalidQuantumState`] is returned if `n` < 1 or `l` ≥ `n`, and
/// [`HError::Shape`] if the coordinate arrays differ in shape.
pub fn hydrogen_wf_scaled<S, T, U, D>(
    r: &nd::ArrayBase<S, D>,
    theta: &nd::ArrayBase<T, D>,
    phi: &nd::ArrayBase<U, D>,
    n: i32,
    l: i32,
    m: i32,
    a: f64,
) -> HResult<nd::Array<C64, D>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    HError::check_state(n, l, m)?;
    ShapeError::check(r, theta)?;
    ShapeError::check(r, phi)?;
    tracing::debug!(
        n = n, l = l, m = m, points = r.len(),
        "evaluating hydrogen wavefunction"
    );
    let R = radial_wf(r, n, l, a)?;
    let Y = spherical_harmonic(theta, phi, l, m)?;
    let psi: nd::Array<C64, D>
        = nd::Zip::from(&R).and(&Y)
        .map_collect(|Rk, Yk| Yk * *Rk);
    Ok(psi)
}

/// Compute the wavefunction *ψ*<sub>*nlm*</sub> for each triple of elements
/// in `r` (meters), `theta`, and `phi`.
///
/// This is [`hydrogen_wf_scaled`] with `a` = [`units::a0`]; see there for
/// failure conditions.
pub fn hydrogen_wf<S, T, U, D>(
    r: &nd::ArrayBase<S, D>,
    theta: &nd::ArrayBase<T, D>,
    phi: &nd::ArrayBase<U, D>,
    n: i32,
    l: i32,
    m: i32,
) -> HResult<nd::Array<C64, D>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    hydrogen_wf_scaled(r, theta, phi, n, l, m, units::a0)
}

/// Compute the probability density |*ψ*<sub>*nlm*</sub>|² for each triple of
/// elements in `r` (meters), `theta`, and `phi`.
pub fn probability_density<S, T, U, D>(
    r: &nd::ArrayBase<S, D>,
    theta: &nd::ArrayBase<T, D>,
    phi: &nd::ArrayBase<U, D>,
    n: i32,
    l: i32,
    m: i32,
) -> HResult<nd::Array<f64, D>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    let psi = hydrogen_wf(r, theta, phi, n, l, m)?;
    Ok(psi.mapv(|psik| psik.norm_sqr()))
}

/// Energy of the `n`-th Bohr level, -*E*<sub>*h*</sub> / 2*n*² (J), for an
/// infinitely heavy nucleus.
///
/// Fails with [`HError::InvalidQuantumState`] if `n` < 1.
pub fn energy(n: i32) -> HResult<f64> {
    HError::check_state(n, 0, 0)?;
    Ok(-units::Eh / 2.0 / f64::from(n).powi(2))
}

/// A validated set of hydrogen quantum numbers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct QuantumState {
    n: i32,
    l: i32,
    m: i32,
}

impl QuantumState {
    /// Create a new state, checking that 1 ≤ `n`, 0 ≤ `l` < `n`, and |`m`| ≤
    /// `l`.
    pub fn new(n: i32, l: i32, m: i32) -> HResult<Self> {
        HError::check_state(n, l, m)?;
        Ok(Self { n, l, m })
    }

    /// Return all `n`² states in the `n`-th shell, ordered by increasing `l`,
    /// then increasing `m`.
    pub fn shell(n: i32) -> HResult<Vec<Self>> {
        HError::check_state(n, 0, 0)?;
        let states: Vec<Self>
            = (0..n)
            .flat_map(move |l| (-l..=l).map(move |m| Self { n, l, m }))
            .collect();
        Ok(states)
    }

    /// Principal quantum number.
    pub fn n(&self) -> i32 { self.n }

    /// Orbital angular momentum quantum number.
    pub fn l(&self) -> i32 { self.l }

    /// Magnetic quantum number.
    pub fn m(&self) -> i32 { self.m }

    /// Energy of the state (J).
    pub fn energy(&self) -> f64 { -units::Eh / 2.0 / f64::from(self.n).powi(2) }

    /// Evaluate the wavefunction with `r` in meters. See [`hydrogen_wf`].
    pub fn wf<S, T, U, D>(
        &self,
        r: &nd::ArrayBase<S, D>,
        theta: &nd::ArrayBase<T, D>,
        phi: &nd::ArrayBase<U, D>,
    ) -> HResult<nd::Array<C64, D>>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
        U: nd::Data<Elem = f64>,
        D: nd::Dimension,
    {
        hydrogen_wf(r, theta, phi, self.n, self.l, self.m)
    }

    /// Evaluate the wavefunction with an explicit length scale. See
    /// [`hydrogen_wf_scaled`].
    pub fn wf_scaled<S, T, U, D>(
        &self,
        r: &nd::ArrayBase<S, D>,
        theta: &nd::ArrayBase<T, D>,
        phi: &nd::ArrayBase<U, D>,
        a: f64,
    ) -> HResult<nd::Array<C64, D>>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
        U: nd::Data<Elem = f64>,
        D: nd::Dimension,
    {
        hydrogen_wf_scaled(r, theta, phi, self.n, self.l, self.m, a)
    }

    /// Evaluate the radial factor of the wavefunction with an explicit length
    /// scale. See [`radial_wf`].
    pub fn radial<S, D>(&self, r: &nd::ArrayBase<S, D>, a: f64)
        -> HResult<nd::Array<f64, D>>
    where
        S: nd::Data<Elem = f64>,
        D: nd::Dimension,
    {
        radial_wf(r, self.n, self.l, a)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use super::*;

    fn trapz(y: &nd::Array1<f64>, dx: f64) -> f64 {
        let n = y.len();
        dx * (y.sum() - (y[0] + y[n - 1]) / 2.0)
    }

    #[test]
    fn radial_normalization() {
        let r: nd::Array1<f64> = nd::Array::linspace(0.0, 80.0, 16001);
        let dr = r[1] - r[0];
        for n in 1..=4 {
            for l in 0..n {
                let R = radial_wf(&r, n, l, 1.0).unwrap();
                let integrand = nd::Zip::from(&R).and(&r)
                    .map_collect(|Rk, rk| Rk * Rk * rk * rk);
                let norm = trapz(&integrand, dr);
                assert!((norm - 1.0).abs() < 1e-6, "n = {n}, l = {l}: {norm}");
            }
        }
    }

    #[test]
    fn radial_closed_forms() {
        let r: nd::Array1<f64> = nd::Array::linspace(0.0, 20.0, 41);
        let r20 = radial_wf(&r, 2, 0, 1.0).unwrap();
        let r21 = radial_wf(&r, 2, 1, 1.0).unwrap();
        let r32 = radial_wf(&r, 3, 2, 1.0).unwrap();
        for k in 0..r.len() {
            let rk = r[k];
            let e20 = (2.0 - rk) * (-rk / 2.0).exp() / 8.0_f64.sqrt();
            let e21 = rk * (-rk / 2.0).exp() / 24.0_f64.sqrt();
            let e32 = 4.0 * rk * rk * (-rk / 3.0).exp()
                / (81.0 * 30.0_f64.sqrt());
            assert!((r20[k] - e20).abs() < 1e-12);
            assert!((r21[k] - e21).abs() < 1e-12);
            assert!((r32[k] - e32).abs() < 1e-12);
        }
    }

    #[test]
    fn high_angular_momentum_state() {
        // (n - l - 1)! / (n + l)! = 1 / 199! is below the smallest f64
        let (n, l) = (100, 99);
        let r = nd::array![120.0, 400.0];
        let theta = nd::array![1.2, 1.2];
        let phi = nd::array![0.3, 0.3];
        let R = radial_wf(&r, n, l, 1.0).unwrap();
        // R_{n,n-1} = N ρ^(n-1) exp(-ρ/2) with N² = (2/n)³ / (2n (2n - 1)!)
        let nf = f64::from(n);
        for (rk, Rk) in r.iter().zip(&R) {
            let rho = 2.0 * rk / nf;
            let ln_expected
                = 0.5 * (
                    3.0 * (2.0 / nf).ln()
                    - (2.0 * nf).ln()
                    - crate::utils::ln_factorial(2 * n.unsigned_abs() - 1)
                )
                - rho / 2.0
                + f64::from(l) * rho.ln();
            assert!(*Rk > 0.0 && Rk.is_finite());
            assert!((Rk.ln() - ln_expected).abs() < 1e-9, "r = {rk}");
        }
        let psi = hydrogen_wf_scaled(&r, &theta, &phi, n, l, 0, 1.0).unwrap();
        assert!(psi.iter().all(|p| p.re.is_finite() && p.norm() > 0.0));
    }

    #[test]
    fn ground_state_si() {
        let a0 = units::a0;
        let r: nd::Array1<f64> = nd::Array::linspace(0.0, 6.0 * a0, 31);
        let theta: nd::Array1<f64> = nd::Array::linspace(0.1, 3.0, 31);
        let phi: nd::Array1<f64> = nd::Array::linspace(-3.0, 3.0, 31);
        let psi = hydrogen_wf(&r, &theta, &phi, 1, 0, 0).unwrap();
        let scale = (PI * a0.powi(3)).sqrt().recip();
        for (rk, pk) in r.iter().zip(&psi) {
            let expected = scale * (-rk / a0).exp();
            assert!(((pk.re - expected) / scale).abs() < 1e-12);
            assert_eq!(pk.im, 0.0);
            assert!(pk.re > 0.0);
        }
        assert!(psi.iter().zip(psi.iter().skip(1)).all(|(p, q)| q.re < p.re));
    }

    #[test]
    fn density_is_norm_squared() {
        let a0 = units::a0;
        let r = nd::array![0.5 * a0, a0, 2.0 * a0];
        let theta = nd::array![0.4, 1.1, 2.0];
        let phi = nd::array![0.2, -1.0, 2.5];
        let psi = hydrogen_wf(&r, &theta, &phi, 3, 2, -1).unwrap();
        let rho = probability_density(&r, &theta, &phi, 3, 2, -1).unwrap();
        for (pk, dk) in psi.iter().zip(&rho) {
            assert!((pk.norm_sqr() - dk).abs() <= 1e-12 * dk);
        }
    }

    #[test]
    fn state_errors() {
        let r = nd::array![1.0];
        let theta = nd::array![1.0];
        let phi = nd::array![1.0];
        assert!(matches!(
            hydrogen_wf(&r, &theta, &phi, 2, 1, 2),
            Err(HError::InvalidOrder { l: 1, m: 2 })
        ));
        assert!(matches!(
            hydrogen_wf(&r, &theta, &phi, 2, -1, 0),
            Err(HError::InvalidDegree(-1))
        ));
        assert!(matches!(
            hydrogen_wf(&r, &theta, &phi, 2, 2, 0),
            Err(HError::InvalidQuantumState { n: 2, l: 2, m: 0 })
        ));
        assert!(matches!(
            hydrogen_wf(&r, &theta, &phi, 0, 0, 0),
            Err(HError::InvalidQuantumState { .. })
        ));
        let phi2 = nd::array![1.0, 2.0];
        assert!(matches!(
            hydrogen_wf(&r, &theta, &phi2, 1, 0, 0),
            Err(HError::Shape(_))
        ));
        assert!(QuantumState::new(3, 3, 0).is_err());
        assert!(energy(0).is_err());
    }

    #[test]
    fn energies() {
        let e1 = energy(1).unwrap();
        let e1_ev = e1 / units::e;
        assert!((e1_ev + 13.605693).abs() < 1e-5);
        let state = QuantumState::new(3, 1, -1).unwrap();
        assert!((state.energy() - e1 / 9.0).abs() < 1e-30);
    }

    #[test]
    fn shells() {
        for n in 1..=5 {
            let shell = QuantumState::shell(n).unwrap();
            assert_eq!(shell.len(), (n * n) as usize);
            assert!(shell.iter().all(|s| QuantumState::new(s.n(), s.l(), s.m()).is_ok()));
        }
        let shell = QuantumState::shell(2).unwrap();
        let ordered: Vec<(i32, i32)> = shell.iter().map(|s| (s.l(), s.m())).collect();
        assert_eq!(ordered, vec![(0, 0), (1, -1), (1, 0), (1, 1)]);
    }

    #[test]
    fn state_methods_delegate() {
        let r = nd::array![0.5, 1.0, 4.0];
        let theta = nd::array![0.4, 1.1, 2.0];
        let phi = nd::array![0.2, -1.0, 2.5];
        let state = QuantumState::new(2, 1, 1).unwrap();
        let direct = hydrogen_wf_scaled(&r, &theta, &phi, 2, 1, 1, 1.0).unwrap();
        let method = state.wf_scaled(&r, &theta, &phi, 1.0).unwrap();
        assert_eq!(direct, method);
        let radial = state.radial(&r, 1.0).unwrap();
        assert_eq!(radial, radial_wf(&r, 2, 1, 1.0).unwrap());
    }
}
