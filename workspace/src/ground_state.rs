use ndarray as nd;
use hatom::{ hydrogen::QuantumState, units };
use lib::{ init_tracing, print_table };

// radial probability distributions P(r) = r² |R(r)|² for the s-states of the
// first few shells, in atomic units

const N_MAX: i32 = 3;
const R_MAX: f64 = 30.0; // Bohr radii
const NPOINTS: usize = 601;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let uu = units::Units::atomic();
    let r: nd::Array1<f64> = nd::Array1::linspace(0.0, R_MAX, NPOINTS);
    let dr = r[1] - r[0];

    let mut columns: Vec<nd::Array1<f64>> = vec![r.clone()];
    let mut header: Vec<String> = vec!["r".to_string()];
    for n in 1..=N_MAX {
        let state = QuantumState::new(n, 0, 0)?;
        let radial = state.radial(&r, 1.0)?;
        let prob: nd::Array1<f64>
            = nd::Zip::from(&radial).and(&r)
            .map_collect(|radk, rk| (radk * rk).powi(2));
        let (kmax, _)
            = prob.iter().enumerate()
            .fold((0, f64::NEG_INFINITY), |(kmax, pmax), (k, pk)| {
                if *pk > pmax { (k, *pk) } else { (kmax, pmax) }
            });
        let total = prob.sum() * dr;
        let e_n: f64 = uu.to_nat_energy(state.energy());
        tracing::info!(
            n = n,
            energy_hartree = e_n,
            energy_ev = state.energy() / units::e,
            most_probable_r = r[kmax],
            total_probability = total,
            "{}s",
            n,
        );
        columns.push(prob);
        header.push(format!("P{}s", n));
    }

    let header: Vec<&str> = header.iter().map(String::as_str).collect();
    let views: Vec<nd::ArrayView1<f64>> = columns.iter().map(|c| c.view()).collect();
    print_table(&header, &views)?;
    Ok(())
}
