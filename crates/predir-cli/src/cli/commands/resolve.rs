//! `predir resolve <url>` – resolve one URL with the configured routes.

use anyhow::{Context, Result};
use predir_core::config::PredirConfig;

pub async fn run_resolve(cfg: &PredirConfig, url: &str) -> Result<()> {
    let target = resolve_target(cfg, url).await?;
    println!("{target}");
    Ok(())
}

/// Builds the handler from `cfg` and resolves `url`. Errors carry the
/// error name and code.
pub(crate) async fn resolve_target(cfg: &PredirConfig, url: &str) -> Result<String> {
    let handler = cfg.build_handler()?;
    handler
        .resolve(url)
        .await
        .map_err(|e| anyhow::anyhow!("{} ({}): {}", e.name(), e.code(), e))
        .with_context(|| format!("resolve {url}"))
}
