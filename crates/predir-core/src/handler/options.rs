//! Construction options for [`SchemeHandler`](super::SchemeHandler).

/// Query parameter read by the HTTP adapter when none is configured.
pub const DEFAULT_PARAM: &str = "url";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerOptions {
    /// Query parameter carrying the URL to resolve.
    pub param: String,
    /// Schemes blacklisted in addition to `http:` and `https:`.
    pub blacklist: Vec<String>,
    /// Whether `file:` joins the default blacklist.
    pub block_file_scheme: bool,
}

impl Default for HandlerOptions {
    fn default() -> Self {
        Self {
            param: DEFAULT_PARAM.to_string(),
            blacklist: Vec::new(),
            block_file_scheme: true,
        }
    }
}

impl HandlerOptions {
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = param.into();
        self
    }

    pub fn with_blacklist<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blacklist.extend(schemes.into_iter().map(Into::into));
        self
    }
}
