pub mod config;
pub mod logging;

pub mod error;
pub mod handler;
pub mod http;
pub mod resolver;
pub mod route;
pub mod scheme;

pub use error::{ResolveError, SchemeError};
pub use handler::{HandlerOptions, SchemeHandler};
pub use resolver::{from_async_fn, from_fn, Resolver};
pub use scheme::Scheme;
