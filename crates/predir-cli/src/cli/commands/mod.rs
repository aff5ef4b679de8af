//! CLI command handlers. Each command is in its own file.

mod check;
mod resolve;
mod schemes;
mod serve;

pub use check::run_check;
pub use resolve::run_resolve;
pub use schemes::run_schemes;
pub use serve::run_serve;

#[cfg(test)]
pub(crate) use check::check_scheme;
#[cfg(test)]
pub(crate) use resolve::resolve_target;
#[cfg(test)]
pub(crate) use schemes::format_listing;
