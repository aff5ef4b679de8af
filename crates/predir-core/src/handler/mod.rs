//! Scheme registry and resolver dispatch.
//!
//! A [`SchemeHandler`] owns a fixed blacklist and an ordered map from
//! [`Scheme`] to boxed [`Resolver`]. Registration needs `&mut self`; once the
//! handler is shared (e.g. behind `Arc` in the HTTP adapter) it is read-only
//! and concurrent `resolve` calls do not interfere.
//!
//! Resolution policy for URLs whose scheme has no resolver: blacklisted
//! schemes (`http:`, `https:`, `file:` by default) pass through unchanged,
//! anything else is [`ResolveError::UnknownProtocol`].

mod options;

use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use indexmap::{IndexMap, IndexSet};

use crate::error::{ResolveError, SchemeError};
use crate::resolver::Resolver;
use crate::scheme::{extract_scheme, is_protocol_relative, Scheme};

pub use options::{HandlerOptions, DEFAULT_PARAM};

/// Schemes that are always blacklisted.
const DEFAULT_BLACKLIST: [&str; 2] = ["http:", "https:"];
/// Blacklisted unless [`HandlerOptions::block_file_scheme`] is off.
const FILE_SCHEME: &str = "file:";

pub struct SchemeHandler {
    param: String,
    blacklist: IndexSet<Scheme>,
    registry: IndexMap<Scheme, Box<dyn Resolver>>,
}

impl SchemeHandler {
    /// Builds an empty handler. Extra blacklist entries are normalized like
    /// registered schemes; an invalid entry fails with `InvalidProtocol`.
    pub fn new(options: HandlerOptions) -> Result<Self, SchemeError> {
        let mut handler = Self::with_defaults(options.param, options.block_file_scheme);
        for raw in &options.blacklist {
            let scheme = Scheme::parse(raw)?;
            handler.blacklist.insert(scheme);
        }
        Ok(handler)
    }

    fn with_defaults(param: String, block_file_scheme: bool) -> Self {
        let mut blacklist: IndexSet<Scheme> =
            DEFAULT_BLACKLIST.into_iter().map(Scheme::from_static).collect();
        if block_file_scheme {
            blacklist.insert(Scheme::from_static(FILE_SCHEME));
        }
        Self {
            param,
            blacklist,
            registry: IndexMap::new(),
        }
    }

    /// Registers `resolver` for `raw_scheme`, replacing any earlier resolver
    /// for the same normalized scheme. Returns `self` so calls chain with `?`:
    ///
    /// ```ignore
    /// handler.register("s3://", s3)?.register("gdrive:", gdrive)?;
    /// ```
    pub fn register<R>(&mut self, raw_scheme: &str, resolver: R) -> Result<&mut Self, SchemeError>
    where
        R: Resolver + 'static,
    {
        let scheme = Scheme::parse(raw_scheme)?;
        if self.is_blacklisted(&scheme) {
            return Err(SchemeError::BlacklistedProtocol { scheme });
        }
        let replaced = self.registry.insert(scheme.clone(), Box::new(resolver)).is_some();
        tracing::debug!(%scheme, replaced, "registered resolver");
        Ok(self)
    }

    /// Resolves `url` to a redirect target.
    ///
    /// Protocol-relative URLs and unhandled blacklisted schemes are returned
    /// unchanged. A panic inside the resolver is caught and reported as
    /// [`ResolveError::ResolverPanicked`].
    pub async fn resolve(&self, url: &str) -> Result<String, ResolveError> {
        if is_protocol_relative(url) {
            return Ok(url.to_string());
        }

        let scheme = extract_scheme(url).ok_or_else(|| ResolveError::InvalidProtocol {
            url: url.to_string(),
        })?;

        let Some(resolver) = self.registry.get(&scheme) else {
            if self.is_blacklisted(&scheme) {
                tracing::debug!(%scheme, "no resolver for blacklisted scheme, passing through");
                return Ok(url.to_string());
            }
            return Err(ResolveError::UnknownProtocol { scheme });
        };

        match AssertUnwindSafe(resolver.resolve(url)).catch_unwind().await {
            Ok(Ok(Some(target))) => {
                tracing::debug!(%scheme, %target, "resolved");
                Ok(target)
            }
            Ok(Ok(None)) => Err(ResolveError::Declined {
                scheme,
                url: url.to_string(),
            }),
            Ok(Err(source)) => {
                tracing::warn!(%scheme, "resolver failed: {:#}", source);
                Err(ResolveError::Resolver { scheme, source })
            }
            Err(payload) => {
                let message = panic_message(payload);
                tracing::warn!(%scheme, "resolver panicked: {}", message);
                Err(ResolveError::ResolverPanicked { scheme, message })
            }
        }
    }

    /// Registered schemes in registration order.
    pub fn protocols(&self) -> Vec<&str> {
        self.registry.keys().map(Scheme::as_str).collect()
    }

    /// Blacklisted schemes: defaults first, then caller additions.
    pub fn blacklist(&self) -> Vec<&str> {
        self.blacklist.iter().map(Scheme::as_str).collect()
    }

    pub fn is_blacklisted(&self, scheme: &Scheme) -> bool {
        self.blacklist.contains(scheme)
    }

    /// Query parameter the HTTP adapter reads the URL from.
    pub fn param(&self) -> &str {
        &self.param
    }
}

impl Default for SchemeHandler {
    fn default() -> Self {
        Self::with_defaults(DEFAULT_PARAM.to_string(), true)
    }
}

impl std::fmt::Debug for SchemeHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemeHandler")
            .field("param", &self.param)
            .field("blacklist", &self.blacklist)
            .field("protocols", &self.protocols())
            .finish()
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "resolver panicked".to_string()
    }
}
