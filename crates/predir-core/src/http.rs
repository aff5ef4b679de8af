//! HTTP adapter: exposes a [`SchemeHandler`] as an axum request handler.
//!
//! `GET /?url=<encoded>` answers `302 Found` with the resolved target in
//! `Location`. Classified resolution errors become `400` with a JSON body
//! `{"error": {"name", "code", "message"}}`; everything else goes to the
//! error hook.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::Query;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, MethodRouter};
use axum::{Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;

use crate::error::ResolveError;
use crate::handler::SchemeHandler;

/// Called with errors that are not classified as bad requests.
pub type ErrorHook = Arc<dyn Fn(ResolveError) -> Response + Send + Sync>;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    name: &'static str,
    code: &'static str,
    message: String,
}

#[derive(Debug, Serialize)]
struct SchemeListing<'a> {
    protocols: Vec<&'a str>,
    blacklist: Vec<&'a str>,
}

impl SchemeHandler {
    /// Request handler reading the URL from `param` (or the handler's configured
    /// parameter). Unclassified errors go to `on_error`, or to
    /// [`internal_error`] when no hook is given.
    pub fn middleware(self: Arc<Self>, param: Option<&str>, on_error: Option<ErrorHook>) -> MethodRouter {
        let param = param.unwrap_or(self.param()).to_string();
        get(move |Query(query): Query<HashMap<String, String>>| {
            let handler = Arc::clone(&self);
            let param = param.clone();
            let on_error = on_error.clone();
            async move {
                let result = match query.get(&param) {
                    Some(url) => handler.resolve(url).await,
                    None => Err(ResolveError::MissingParameter { param }),
                };
                into_response(result, on_error.as_ref())
            }
        })
    }
}

/// Router with the redirect handler at `/` and a JSON listing at `/schemes`.
pub fn router(handler: Arc<SchemeHandler>) -> Router {
    let listing = Arc::clone(&handler);
    Router::new()
        .route("/", handler.middleware(None, None))
        .route(
            "/schemes",
            get(move || {
                let handler = Arc::clone(&listing);
                async move {
                    Json(SchemeListing {
                        protocols: handler.protocols(),
                        blacklist: handler.blacklist(),
                    })
                    .into_response()
                }
            }),
        )
}

/// Serves [`router`] on an already bound listener until the server stops.
pub async fn serve(listener: TcpListener, handler: Arc<SchemeHandler>) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, protocols = ?handler.protocols(), "serving redirects");
    }
    axum::serve(listener, router(handler)).await
}

fn into_response(result: Result<String, ResolveError>, on_error: Option<&ErrorHook>) -> Response {
    let err = match result {
        Ok(target) => match HeaderValue::try_from(target.as_str()) {
            Ok(location) => return (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
            Err(_) => ResolveError::InvalidTarget { target },
        },
        Err(err) => err,
    };

    if err.is_classified() {
        tracing::debug!(name = err.name(), "rejecting request: {}", err);
        return bad_request(&err);
    }
    match on_error {
        Some(hook) => hook(err),
        None => internal_error(err),
    }
}

/// `400 Bad Request` with the structured error body.
pub fn bad_request(err: &ResolveError) -> Response {
    let body = ErrorBody {
        error: ErrorDetail {
            name: err.name(),
            code: err.code(),
            message: err.to_string(),
        },
    };
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

/// Default error hook: logs the error and answers `500` without details.
pub fn internal_error(err: ResolveError) -> Response {
    tracing::error!(name = err.name(), "resolution failed: {}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
}
