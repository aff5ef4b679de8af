//! `predir schemes` – list routed schemes and the blacklist.

use anyhow::Result;
use predir_core::config::PredirConfig;

/// One line per route (`scheme -> target`), then the blacklist.
pub(crate) fn format_listing(cfg: &PredirConfig) -> Result<String> {
    let handler = cfg.build_handler()?;
    let mut out = String::new();
    for scheme in handler.protocols() {
        // Later routes for the same scheme replace earlier ones.
        let target = cfg
            .routes
            .iter()
            .rev()
            .find(|r| predir_core::scheme::normalize(&r.scheme) == scheme)
            .map(|r| r.target.as_str())
            .unwrap_or("?");
        out.push_str(&format!("{scheme} -> {target}\n"));
    }
    out.push_str(&format!("blacklist: {}\n", handler.blacklist().join(", ")));
    Ok(out)
}

pub fn run_schemes(cfg: &PredirConfig) -> Result<()> {
    print!("{}", format_listing(cfg)?);
    Ok(())
}
