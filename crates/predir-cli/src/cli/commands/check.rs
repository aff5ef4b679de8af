//! `predir check <scheme>` – normalize and validate a scheme.

use anyhow::Result;
use predir_core::Scheme;

/// Normalized scheme, or an error naming the failed check.
pub(crate) fn check_scheme(raw: &str) -> Result<Scheme> {
    Scheme::parse(raw).map_err(|e| anyhow::anyhow!("{}: {}", e.name(), e))
}

pub fn run_check(raw: &str) -> Result<()> {
    let scheme = check_scheme(raw)?;
    println!("{scheme}");
    Ok(())
}
