use ndarray as nd;
use hatom::hydrogen::radial_wf;

// count the nodes of each radial function; there should be n - l - 1 of them

fn main() {
    let r: nd::Array1<f64> = nd::Array1::linspace(0.01, 80.0, 8000);
    for n in 1..=5 {
        for l in 0..n {
            let radial = radial_wf(&r, n, l, 1.0).unwrap();
            let nodes
                = radial.iter().zip(radial.iter().skip(1))
                .filter(|(a, b)| a.signum() != b.signum())
                .count();
            println!("n = {n}, l = {l}: {nodes} nodes (expected {})", n - l - 1);
        }
    }
}
