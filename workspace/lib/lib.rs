//! Shared setup for driver binaries.

use std::io::{ self, Write };
use ndarray as nd;
use tracing_subscriber::{ fmt, EnvFilter };

/// Install a `fmt` subscriber filtered by `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter
        = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).init();
}

/// Write equal-length columns to stdout as whitespace-delimited text, preceded
/// by a `#`-commented header line.
///
/// Columns are truncated to the shortest one.
pub fn print_table(header: &[&str], columns: &[nd::ArrayView1<f64>])
    -> io::Result<()>
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "# {}", header.join(" "))?;
    let n = columns.iter().map(|col| col.len()).min().unwrap_or(0);
    for k in 0..n {
        let row: Vec<String>
            = columns.iter().map(|col| format!("{:+.8e}", col[k])).collect();
        writeln!(out, "{}", row.join(" "))?;
    }
    Ok(())
}
