//! Resolver interface for turning scheme-specific URLs into redirect targets.
//!
//! The handler only depends on this trait and does not know about routes,
//! closures, or any other concrete resolver.

use std::future::Future;

use async_trait::async_trait;

/// A capability that maps a URL under one scheme to a redirect target.
///
/// - `Ok(Some(target))`: redirect to `target`
/// - `Ok(None)`: the resolver declined this URL
/// - `Err(_)`: the resolver failed
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn resolve(&self, url: &str) -> anyhow::Result<Option<String>>;
}

/// Resolver backed by a synchronous closure. See [`from_fn`].
pub struct FnResolver<F>(F);

/// Wraps a synchronous closure as a [`Resolver`].
pub fn from_fn<F>(f: F) -> FnResolver<F>
where
    F: Fn(&str) -> anyhow::Result<Option<String>> + Send + Sync + 'static,
{
    FnResolver(f)
}

#[async_trait]
impl<F> Resolver for FnResolver<F>
where
    F: Fn(&str) -> anyhow::Result<Option<String>> + Send + Sync + 'static,
{
    async fn resolve(&self, url: &str) -> anyhow::Result<Option<String>> {
        (self.0)(url)
    }
}

/// Resolver backed by a closure returning a future. See [`from_async_fn`].
pub struct AsyncFnResolver<F>(F);

/// Wraps an async closure as a [`Resolver`]. The closure receives an owned URL
/// so the returned future does not borrow from the caller.
pub fn from_async_fn<F, Fut>(f: F) -> AsyncFnResolver<F>
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<Option<String>>> + Send + 'static,
{
    AsyncFnResolver(f)
}

#[async_trait]
impl<F, Fut> Resolver for AsyncFnResolver<F>
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<Option<String>>> + Send + 'static,
{
    async fn resolve(&self, url: &str) -> anyhow::Result<Option<String>> {
        (self.0)(url.to_string()).await
    }
}
