//! `predir serve` – run the HTTP redirect endpoint.

use anyhow::{Context, Result};
use predir_core::config::PredirConfig;
use predir_core::http;
use std::sync::Arc;
use tokio::net::TcpListener;

pub async fn run_serve(cfg: &PredirConfig, bind: Option<&str>, param: Option<&str>) -> Result<()> {
    let mut cfg = cfg.clone();
    if let Some(param) = param {
        cfg.param = param.to_string();
    }
    let bind = bind.unwrap_or(&cfg.bind).to_string();

    let handler = cfg.build_handler()?;
    let listener = TcpListener::bind(&bind)
        .await
        .with_context(|| format!("bind {bind}"))?;
    let addr = listener.local_addr()?;
    println!("Serving redirects on http://{addr}/?{}=<url>", cfg.param);

    http::serve(listener, Arc::new(handler))
        .await
        .context("HTTP server stopped")?;
    Ok(())
}
