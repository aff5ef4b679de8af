//! Template-based resolvers configured from `[[routes]]` entries.

use anyhow::{Context, Result};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use url::Url;

use crate::resolver::Resolver;

/// `{path}` or `{url}` inside a target template.
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(path|url)\}").expect("valid placeholder pattern"));

/// Resolves a URL by substituting parts of it into a target template.
///
/// - `{path}` is replaced by everything after `scheme:` (and an optional `//`)
/// - `{url}` is replaced by the whole URL, form-urlencoded
/// - a template without placeholders gets the path appended
///
/// # Examples
///
/// - template `https://{path}.storage.example`: `s3://bucket` → `https://bucket.storage.example`
/// - template `https://gw.example/ipfs/`: `ipfs://Qm123` → `https://gw.example/ipfs/Qm123`
#[derive(Debug, Clone)]
pub struct RouteResolver {
    template: String,
}

impl RouteResolver {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Builds the target for `url`. `Ok(None)` when the URL has nothing after
    /// its scheme; `Err` when the rendered target is not an absolute URL.
    pub fn render(&self, url: &str) -> Result<Option<String>> {
        let path = path_after_scheme(url);
        if path.is_empty() {
            return Ok(None);
        }

        // Substituted text is never rescanned for placeholders.
        let target = if PLACEHOLDER.is_match(&self.template) {
            let encoded: String = url::form_urlencoded::byte_serialize(url.trim().as_bytes()).collect();
            PLACEHOLDER
                .replace_all(&self.template, |caps: &Captures| match &caps[1] {
                    "path" => path.to_string(),
                    _ => encoded.clone(),
                })
                .into_owned()
        } else {
            format!("{}{}", self.template, path)
        };

        Url::parse(&target).with_context(|| format!("route target is not an absolute URL: {target}"))?;
        Ok(Some(target))
    }
}

#[async_trait]
impl Resolver for RouteResolver {
    async fn resolve(&self, url: &str) -> Result<Option<String>> {
        self.render(url)
    }
}

/// Part of `url` after the first `:` and an optional `//`.
fn path_after_scheme(url: &str) -> &str {
    let url = url.trim();
    let rest = match url.find(':') {
        Some(i) => &url[i + 1..],
        None => url,
    };
    rest.strip_prefix("//").unwrap_or(rest)
}
