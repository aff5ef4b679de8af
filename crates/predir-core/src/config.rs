use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::handler::{HandlerOptions, SchemeHandler, DEFAULT_PARAM};
use crate::route::RouteResolver;

/// One `[[routes]]` entry: a scheme served by a target template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Scheme to register, e.g. `"s3:"` or `"ipfs://"`.
    pub scheme: String,
    /// Target template; see [`RouteResolver`] for placeholders.
    pub target: String,
}

/// Global configuration loaded from `~/.config/predir/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredirConfig {
    /// Query parameter carrying the URL to resolve.
    pub param: String,
    /// Listen address for `predir serve`.
    pub bind: String,
    /// Keep `file:` in the default blacklist (passes through unresolved).
    pub block_file_scheme: bool,
    /// Extra blacklisted schemes, merged with `http:` and `https:`.
    pub blacklist: Vec<String>,
    /// Registered in order; a later route for the same scheme wins.
    pub routes: Vec<RouteConfig>,
}

impl Default for PredirConfig {
    fn default() -> Self {
        Self {
            param: DEFAULT_PARAM.to_string(),
            bind: "127.0.0.1:8080".to_string(),
            block_file_scheme: true,
            blacklist: Vec::new(),
            routes: Vec::new(),
        }
    }
}

impl PredirConfig {
    pub fn handler_options(&self) -> HandlerOptions {
        HandlerOptions {
            param: self.param.clone(),
            blacklist: self.blacklist.clone(),
            block_file_scheme: self.block_file_scheme,
        }
    }

    /// Builds a handler with every configured route registered.
    pub fn build_handler(&self) -> Result<SchemeHandler> {
        let mut handler =
            SchemeHandler::new(self.handler_options()).context("invalid blacklist in config")?;
        for route in &self.routes {
            handler
                .register(&route.scheme, RouteResolver::new(route.target.clone()))
                .with_context(|| format!("invalid route for scheme {:?}", route.scheme))?;
        }
        Ok(handler)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("predir")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PredirConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PredirConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit path; the file must exist.
pub fn load_from(path: &Path) -> Result<PredirConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: PredirConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
