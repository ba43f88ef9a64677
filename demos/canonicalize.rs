//! Reads URLs from stdin, one per line, and prints their canonical forms.
//!
//! Each output line is tab-separated: the input, the ambiguous form, and the
//! unambiguous form. Set `RUST_LOG=url_canon=debug` to see repairs.

use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;
use url_canon::{CanonicalizeOptions, Canonicalizer};

fn main() -> io::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let ambiguous = Canonicalizer::new(CanonicalizeOptions::ambiguous());
    let unambiguous = Canonicalizer::default();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        match (ambiguous.canonicalize(&line), unambiguous.canonicalize(&line)) {
            (Ok(a), Ok(u)) => writeln!(out, "{}\t{}\t{}", line, a, u)?,
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!(input = %line, error = %e, "skipping URL");
            }
        }
    }
    Ok(())
}
