use ndarray as nd;
use hatom::{ hydrogen::QuantumState, units, utils::cartesian_to_spherical };
use lib::{ init_tracing, print_table };

// probability density of a single state of a hydrogen-like ion over the x-z
// plane (y = 0), in the ion's natural units, written out as (x, z, |ψ|²)
// triples

const N: i32 = 3;
const L: i32 = 2;
const M: i32 = 0;
const Z: f64 = 1.0; // nuclear charge
const MASS: f64 = 1.0; // electron masses
const EXTENT: f64 = 25.0; // natural lengths
const NPOINTS: usize = 200; // even, so that no sample falls on the z axis

fn main() -> anyhow::Result<()> {
    init_tracing();
    let state = QuantumState::new(N, L, M)?;
    let uu = units::Units::from_au(MASS, (Z * MASS).recip());
    let a0_nat: f64 = uu.to_nat_length(units::a0);
    tracing::info!(
        length_bohr = a0_nat.recip(),
        energy_ev = uu.e / units::e,
        "natural units"
    );
    let ax: nd::Array1<f64> = nd::Array1::linspace(-EXTENT, EXTENT, NPOINTS);
    let x: nd::Array2<f64>
        = nd::Array2::from_shape_fn((NPOINTS, NPOINTS), |(_, j)| ax[j]);
    let z: nd::Array2<f64>
        = nd::Array2::from_shape_fn((NPOINTS, NPOINTS), |(i, _)| ax[i]);
    let y: nd::Array2<f64> = nd::Array2::zeros((NPOINTS, NPOINTS));
    let (r, theta, phi) = cartesian_to_spherical(&x, &y, &z)?;

    let r_si: nd::Array2<f64> = uu.from_nat_length(&r);
    let psi = state.wf_scaled(&r_si, &theta, &phi, uu.a)?;
    let vol = uu.a.powi(3);
    let density: nd::Array2<f64> = psi.mapv(|psik| psik.norm_sqr() * vol);
    let peak = density.iter().cloned().fold(0.0, f64::max);
    tracing::info!(
        n = state.n(), l = state.l(), m = state.m(), peak = peak,
        "computed density over {}x{} grid", NPOINTS, NPOINTS,
    );

    let flat = |a: &nd::Array2<f64>| -> nd::Array1<f64> {
        a.iter().cloned().collect()
    };
    let (xf, zf, df) = (flat(&x), flat(&z), flat(&density));
    print_table(&["x", "z", "density"], &[xf.view(), zf.view(), df.view()])?;
    Ok(())
}
