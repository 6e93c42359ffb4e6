#![allow(non_snake_case)]

//! Provides functions to compute the bound-state wavefunctions of the hydrogen
//! atom, along with the special functions from which they are built.
//!
//! All functions are pure and operate elementwise over [`ndarray`] arrays of
//! any dimension, returning a newly allocated array of the same shape.
//! Provides implementations for the following:
//! - Associated Legendre functions *P*<sub>*l*</sub><sup>*m*</sup>(*x*) by
//!   three-term recurrence in order and degree
//! - Generalized Laguerre polynomials *L*<sub>*n*</sub><sup>*α*</sup>(*x*) by
//!   coefficient recurrence and Horner evaluation
//! - Complex spherical harmonics *Y*<sub>*l*</sub><sup>*m*</sup>(*θ*, *φ*)
//! - Hydrogen wavefunctions *ψ*<sub>*nlm*</sub>(*r*, *θ*, *φ*), their radial
//!   parts, probability densities, and energies
//!
//! Invalid quantum numbers are reported through [`error::HError`] before any
//! computation is done.
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod utils;
pub mod units;
pub mod legendre;
pub mod laguerre;
pub mod harmonic;
pub mod hydrogen;

pub mod docs;

pub use error::{ HError, HResult };
