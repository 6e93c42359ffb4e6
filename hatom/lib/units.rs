#![allow(non_upper_case_globals)]

//! Physical constants and conversion to and from the natural (atomic) units in
//! which hydrogenic quantities are most conveniently expressed.
//!
//! Concrete physical constants are taken from NIST (CODATA 2018).

use std::f64::consts::PI;

/// Planck constant (kg m^2 s^-1)
pub const h: f64 = 6.62607015e-34;
//             +/- 0 (exact)

/// reduced Planck constant (kg m^2 s^-1)
pub const hbar: f64 = h / 2.0 / PI;
//                +/- 0 (exact)

/// speed of light in vacuum (m s^-1)
pub const c: f64 = 2.99792458e8;
//             +/- 0 (exact)

/// elementary charge (C)
pub const e: f64 = 1.602176634e-19;
//             +/- 0 (exact)

/// electric permittivity in vacuum (F m^-1)
pub const e0: f64 = 8.8541878128e-12;
//              +/- 0.0000000013e-12

/// electron mass (kg)
pub const me: f64 = 9.1093837015e-31;
//              +/- 0.0000000028e-31

/// proton mass (kg)
pub const mp: f64 = 1.67262192369e-27;
//              +/- 0.00000000051e-27

/// fine structure constant
pub const alpha: f64 = 7.2973525693e-3;
//                 +/- 0.0000000011e-3

/// Rydberg constant for an infinite-mass nucleus (m^-1)
pub const Rinf: f64 = 10973731.568160;
//                       +/- 0.000021

/// Bohr radius (m)
pub const a0: f64 = 5.29177210903e-11;
//              +/- 0.00000000080e-11

/// Hartree energy (J) = 2\*Rinf\*h\*c
pub const Eh: f64 = 4.3597447222071e-18;
//              +/- 0.0000000000085e-18

/// Bohr radius corrected for the finite mass of a nucleus of mass `m_nuc`
/// (kg), i.e. with the electron mass replaced by the reduced mass.
pub fn reduced_bohr_radius(m_nuc: f64) -> f64 {
    a0 * (1.0 + me / m_nuc)
}

/// A collection of natural unit scaling factors relative to SI.
///
/// Hydrogenic wavefunctions depend on position only through `r / a` for some
/// length scale `a`; this struct carries that scale along with the energy and
/// time scales that go with it.
#[derive(Copy, Clone, Debug)]
pub struct Units {
    /// Particle mass (kg).
    pub m: f64,
    /// Base length scale (m).
    pub a: f64,
    /// Associated energy scale (J).
    pub e: f64,
    /// Associated time scale (s).
    pub t: f64,
}

impl Units {
    /// Hartree atomic units: lengths in Bohr radii, energies in Hartrees.
    pub fn atomic() -> Self {
        Self { m: me, a: a0, e: Eh, t: hbar / Eh }
    }

    /// Atomic units for a hydrogen-like ion of nuclear charge `z` and nuclear
    /// mass `m_nuc` (kg), using the electron-nucleus reduced mass.
    ///
    /// Lengths scale as 1/*z* and energies as *z*².
    pub fn hydrogenic(z: f64, m_nuc: f64) -> Self {
        let mass = me * m_nuc / (me + m_nuc);
        Self::from_mks(mass, reduced_bohr_radius(m_nuc) / z)
    }

    /// Construct from a mass and length scale given in SI units, with the
    /// energy scale ħ²/(*m* *a*²).
    pub fn from_mks(mass: f64, a: f64) -> Self {
        let e_unit = hbar.powi(2) / mass / a.powi(2);
        Self { m: mass, a, e: e_unit, t: hbar / e_unit }
    }

    /// Construct from a mass in electron masses and a length scale in Bohr
    /// radii.
    ///
    /// E.g. muonic hydrogen has reduced mass *μ* ≈ 186 *m*<sub>e</sub> and
    /// natural length *a*<sub>0</sub> / 186, i.e. `from_au(186.0, 1.0 /
    /// 186.0)`.
    pub fn from_au(mass: f64, a: f64) -> Self {
        Self::from_mks(me * mass, a0 * a)
    }

    /// Convert a quantity with dimensions of length in SI units to natural
    /// units.
    pub fn to_nat_length<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.a.recip()
    }

    /// Convert a dimensionless quantity to one with length units in SI.
    pub fn from_nat_length<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.a
    }

    /// Convert a quantity with dimensions of energy in SI units to natural
    /// units.
    pub fn to_nat_energy<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.e.recip()
    }

    /// Convert a dimensionless quantity to one with energy units in SI.
    pub fn from_nat_energy<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.e
    }
}
