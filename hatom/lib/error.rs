//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! Every check here runs before any numerical work is done, so a call either
//! returns a fully computed array or one of these errors.
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use thiserror::Error;

/// Returned when an operation requiring equal-shape arrays encounters arrays
/// with unequal shapes.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible shapes; got {0:?} and {1:?}")]
pub struct ShapeError(pub Vec<usize>, pub Vec<usize>);

impl ShapeError {
    pub(crate) fn check<S, A, T, B, D>(
        a: &nd::ArrayBase<S, D>,
        b: &nd::ArrayBase<T, D>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
        D: nd::Dimension,
    {
        let sa = a.shape();
        let sb = b.shape();
        (sa == sb).then_some(()).ok_or_else(|| Self(sa.to_vec(), sb.to_vec()))
    }
}

/// Returned from all special-function and wavefunction evaluations.
#[derive(Debug, Error)]
pub enum HError {
    /// Returned when a degree (`l` for Legendre functions and spherical
    /// harmonics, `n` for Laguerre polynomials) is negative.
    #[error("degree must be a non-negative integer; got {0}")]
    InvalidDegree(i32),

    /// Returned when an order `m` has magnitude greater than its degree `l`.
    #[error("order must satisfy |m| <= l; got l = {l}, m = {m}")]
    InvalidOrder { l: i32, m: i32 },

    /// Returned when a set of hydrogen quantum numbers does not satisfy
    /// `1 <= n` and `l < n`.
    #[error("quantum numbers must satisfy 0 <= l < n; got n = {n}, l = {l}, m = {m}")]
    InvalidQuantumState { n: i32, l: i32, m: i32 },

    /// [`ShapeError`]
    #[error("array shape error: {0}")]
    Shape(#[from] ShapeError),
}

impl HError {
    pub(crate) fn check_degree(l: i32) -> Result<(), Self> {
        (l >= 0).then_some(()).ok_or(Self::InvalidDegree(l))
    }

    pub(crate) fn check_order(l: i32, m: i32) -> Result<(), Self> {
        (m.unsigned_abs() <= l.unsigned_abs()).then_some(())
            .ok_or(Self::InvalidOrder { l, m })
    }

    // degree first so that a negative `l` is never reported as a bad order
    pub(crate) fn check_degree_order(l: i32, m: i32) -> Result<(), Self> {
        Self::check_degree(l)?;
        Self::check_order(l, m)
    }

    pub(crate) fn check_state(n: i32, l: i32, m: i32) -> Result<(), Self> {
        Self::check_degree_order(l, m)?;
        (n >= 1 && l < n).then_some(())
            .ok_or(Self::InvalidQuantumState { n, l, m })
    }
}

pub type HResult<T> = Result<T, HError>;
