//! Error taxonomy for registration and resolution.

use thiserror::Error;

use crate::scheme::Scheme;

/// Synchronous failure raised while registering a scheme or building a handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemeError {
    /// The input does not normalize to `^[a-z0-9+]{2,}:$`.
    #[error("invalid protocol {scheme:?}: expected letters, digits or '+' followed by ':'")]
    InvalidProtocol { scheme: String },

    /// The scheme is reserved and cannot carry a custom resolver.
    #[error("protocol {scheme} is blacklisted and cannot be registered")]
    BlacklistedProtocol { scheme: Scheme },
}

impl SchemeError {
    pub fn name(&self) -> &'static str {
        match self {
            SchemeError::InvalidProtocol { .. } => "InvalidProtocol",
            SchemeError::BlacklistedProtocol { .. } => "BlacklistedProtocol",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            SchemeError::InvalidProtocol { .. } => "ERR_INVALID_PROTOCOL",
            SchemeError::BlacklistedProtocol { .. } => "ERR_BLACKLISTED_PROTOCOL",
        }
    }
}

/// Failure carried through the result of an asynchronous resolution.
///
/// Classified variants (see [`ResolveError::is_classified`]) describe a bad
/// request or a resolver that declined; the HTTP adapter answers them with
/// `400`. The remaining variants are unexpected and go to the error hook.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("invalid protocol: no scheme could be extracted from {url:?}")]
    InvalidProtocol { url: String },

    #[error("unknown protocol {scheme}: no resolver registered")]
    UnknownProtocol { scheme: Scheme },

    /// The resolver ran but produced no target.
    #[error("resolver for {scheme} returned no target for {url:?}")]
    Declined { scheme: Scheme, url: String },

    #[error("missing query parameter {param:?}")]
    MissingParameter { param: String },

    #[error("resolver for {scheme} failed: {source:#}")]
    Resolver {
        scheme: Scheme,
        #[source]
        source: anyhow::Error,
    },

    #[error("resolver for {scheme} panicked: {message}")]
    ResolverPanicked { scheme: Scheme, message: String },

    /// The target cannot be sent as a `Location` header.
    #[error("resolved target {target:?} is not a valid redirect location")]
    InvalidTarget { target: String },
}

impl ResolveError {
    pub fn name(&self) -> &'static str {
        match self {
            ResolveError::InvalidProtocol { .. } => "InvalidProtocol",
            ResolveError::UnknownProtocol { .. } => "UnknownProtocol",
            ResolveError::Declined { .. } => "DeclinedUrl",
            ResolveError::MissingParameter { .. } => "MissingParameter",
            ResolveError::Resolver { .. } => "ResolverError",
            ResolveError::ResolverPanicked { .. } => "ResolverPanic",
            ResolveError::InvalidTarget { .. } => "InvalidTarget",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ResolveError::InvalidProtocol { .. } => "ERR_INVALID_PROTOCOL",
            ResolveError::UnknownProtocol { .. } => "ERR_UNKNOWN_PROTOCOL",
            ResolveError::Declined { .. } => "ERR_DECLINED_URL",
            ResolveError::MissingParameter { .. } => "ERR_MISSING_PARAMETER",
            ResolveError::Resolver { .. } => "ERR_RESOLVER",
            ResolveError::ResolverPanicked { .. } => "ERR_RESOLVER_PANIC",
            ResolveError::InvalidTarget { .. } => "ERR_INVALID_TARGET",
        }
    }

    /// True for request/validation outcomes the HTTP adapter maps to `400`.
    pub fn is_classified(&self) -> bool {
        matches!(
            self,
            ResolveError::InvalidProtocol { .. }
                | ResolveError::UnknownProtocol { .. }
                | ResolveError::Declined { .. }
                | ResolveError::MissingParameter { .. }
        )
    }
}
