//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Associated Legendre functions](#associated-legendre-functions)
//! - [Generalized Laguerre polynomials](#generalized-laguerre-polynomials)
//! - [Spherical harmonics](#spherical-harmonics)
//! - [Units](#units)
//!
//! # Background
//! The time-independent Schrödinger equation for an electron bound to a point
//! nucleus of charge *Z* *e*,
//! ```text
//!    ħ²           Z e²
//! - --- ∇²ψ - ---------- ψ = E ψ
//!   2 μ        4π ε₀ r
//! ```
//! separates in spherical coordinates (*r*, *θ*, *φ*) into a radial equation
//! and the eigenvalue problem for the angular part of the Laplacian. Bound
//! solutions are indexed by three integers: the principal quantum number *n* ≥
//! 1, the orbital angular momentum quantum number 0 ≤ *l* < *n*, and the
//! magnetic quantum number |*m*| ≤ *l*, and take the form
//! ```text
//! ψ   (r, θ, φ) = R  (r) Y (θ, φ)
//!  nlm             nl     l
//! ```
//! where *R*<sub>*nl*</sub> is built from a
//! [generalized Laguerre polynomial](#generalized-laguerre-polynomials) and
//! *Y*<sub>*l*</sub><sup>*m*</sup> is a [spherical harmonic](#spherical-harmonics).
//! Energies depend only on *n*,
//! ```text
//!          Z² E_h  μ
//! E  = - -------- --
//!  n       2 n²   mₑ
//! ```
//! with *E*<sub>*h*</sub> the Hartree energy.
//!
//! Each building block here is computed by recurrence rather than by explicit
//! sums over factorials, which is both cheaper and better conditioned. The
//! remaining factorials, appearing only in normalization constants, are always
//! needed as ratios. They are kept as logarithms (log-gamma when the arguments
//! are far apart) and only exponentiated after being combined with the
//! logarithm of the function value they multiply, since e.g. 1/180! is not
//! representable while |*Y*<sub>90</sub><sup>-90</sup>| ~ 10<sup>-3</sup> is.
//!
//! # Associated Legendre functions
//! For integer degree *l* ≥ 0 and order 0 ≤ *m* ≤ *l*, the associated
//! Legendre functions *P*<sub>*l*</sub><sup>*m*</sup>(*x*) (with the
//! Condon-Shortley phase) satisfy the fixed-order recurrence in degree
//! ```text
//!          m                 m                  m
//! (l - m) P (x) = (2l - 1) x P   (x) - (l + m - 1) P   (x)
//!          l                 l-1                   l-2
//! ```
//! and the recurrence raising the order
//! ```text
//!   ________   m        m-1                     m-1
//! √(1 - x²)  P (x) = (l - m + 1) x P (x) - (l + m - 1) P   (x)
//!             l                     l                  l-1
//! ```
//! Starting from *P*<sub>0</sub><sup>0</sup> = 1, *P*<sub>1</sub><sup>0</sup> =
//! *x*, and *P*<sub>2</sub><sup>0</sup> = (3*x*² - 1)/2, the second relation is
//! used to step the three functions at degrees *M*, *M* + 1, *M* + 2 up one
//! order at a time (with the third of them coming from the first relation)
//! until *M* = *m*, after which the first relation climbs the degree to *l*.
//! Negative orders follow from
//! ```text
//!  -m          m  (l - m)!   m
//! P  (x) = (-1)   -------- P  (x)
//!  l              (l + m)!  l
//! ```
//! At *x* = ±1 the order-raising relation is singular. The limit is finite (in
//! fact zero for all *m* ≠ 0) but is not taken; such points evaluate to NaN.
//!
//! # Generalized Laguerre polynomials
//! The generalized Laguerre polynomials *L*<sub>*n*</sub><sup>*α*</sup>(*x*)
//! are orthogonal over [0, ∞) with weight *x*<sup>*α*</sup> e<sup>-*x*</sup> and
//! satisfy
//! ```text
//!   α            α
//! L (x) = 1,   L (x) = α + 1 - x
//!  0            1
//!
//!   α      /     α - 1    x \  α       /     α - 1 \  α
//! L (x) = | 2 + ----- - - |  L (x) - | 1 + ----- | L (x)
//!  k       \      k      k /   k-1     \      k   /   k-2
//! ```
//! Since the recurrence is linear in the polynomials, it can be applied
//! directly to their coefficient arrays, with multiplication by *x* becoming a
//! shift by one place. The full coefficient array is then evaluated wherever
//! needed using Horner's scheme. The radial part of the hydrogen wavefunction
//! uses *α* = 2*l* + 1 and degree *n* - *l* - 1, evaluated at *ρ* = 2*r* / *n*
//! *a*:
//! ```text
//!             / /  2  \3  (n - l - 1)! \1/2   -ρ/2  l   2l+1
//! R  (r) =  | | --- |   ------------ |     e     ρ   L     (ρ)
//!  nl         \ \ n a /   2n (n + l)!  /                 n-l-1
//! ```
//! Note that older texts use a convention for the Laguerre polynomials which
//! differs from this one by a factor of (*n* + *l*)!, with the normalization
//! constant adjusted to match.
//!
//! # Spherical harmonics
//! The spherical harmonics
//! ```text
//!  m          / (2l + 1) (l - m)! \1/2   m            i m φ
//! Y (θ, φ) = | ------------------- |    P  (cos θ)  e
//!  l          \   4π   (l + m)!   /      l
//! ```
//! are orthonormal over the unit sphere,
//! ```text
//! ⌠ 2π ⌠ π   m   *  m'
//! |    |    Y (θ, φ)  Y  (θ, φ) sin θ dθ dφ = δ    δ
//! ⌡ 0  ⌡ 0   l         l'                     l l'  m m'
//! ```
//! and, with the Condon-Shortley phase carried by *P*<sub>*l*</sub><sup>*m*</sup>,
//! satisfy *Y*<sub>*l*</sub><sup>-*m*</sup> = (-1)<sup>*m*</sup>
//! (*Y*<sub>*l*</sub><sup>*m*</sup>)<sup>\*</sup>.
//!
//! # Units
//! The wavefunction depends on *r* only through *r* / *a* for a length scale
//! *a*, equal to the Bohr radius *a*₀ for hydrogen with an infinitely heavy
//! nucleus. For a nucleus of finite mass *M* and charge *Z* the electron mass
//! is replaced by the reduced mass *μ* = *mₑ* *M* / (*mₑ* + *M*), giving
//! ```text
//!      a₀  mₑ
//! a = --- ---
//!      Z   μ
//! ```
//! [`hydrogen_wf`][crate::hydrogen::hydrogen_wf] works in meters with *a* =
//! *a*₀, while [`hydrogen_wf_scaled`][crate::hydrogen::hydrogen_wf_scaled]
//! accepts any *a*, e.g. *a* = 1 for atomic units.
//! [`Units`][crate::units::Units] collects the length and energy scales for
//! these cases.
