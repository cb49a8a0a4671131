//! Shared application router builder.
//!
//! Provides [`build_app_router`] so both the production binary (`main.rs`)
//! and integration tests use the exact same route table and middleware
//! stack.

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::locale;
use crate::routes;
use crate::state::AppState;

/// Build the full application [`Router`] with all middleware layers.
///
/// Route table:
/// - `/health` -- service health
/// - `/admin/...` -- token-protected back office
/// - `/media/...` -- uploaded media files served from the media root
/// - `/{lang}/...` -- the public site, one tree per language
/// - everything else -- redirected to a language-prefixed path
///
/// The middleware stack is applied bottom-up: CORS, request-id set,
/// tracing, request-id propagate, timeout, panic recovery.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let cors = build_cors_layer(config);
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/admin", routes::admin::router())
        .nest_service("/media", ServeDir::new(&config.media_root))
        .nest("/{lang}", routes::site_routes())
        .fallback(redirect_bare_path)
        // -- Middleware stack (applied bottom-up) --
        // Panic recovery: catch panics and return 500 JSON.
        .layer(CatchPanicLayer::new())
        // Request timeout.
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        // Propagate request ID to response.
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        // Structured request/response tracing.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Set request ID on incoming requests.
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        // CORS.
        .layer(cors)
        // Shared state.
        .with_state(state)
}

/// Fallback for paths that matched no route.
///
/// Bare paths (no language prefix) are redirected to the same path under
/// the language detected from `Accept-Language`, so `/news/` becomes
/// `/en/news/` or `/ja/news/`. Language-prefixed paths that only miss the
/// canonical trailing slash are redirected to the slashed form; anything
/// else under a known language is a genuine 404.
async fn redirect_bare_path(headers: HeaderMap, uri: Uri) -> Response {
    let path = uri.path();

    if is_language_prefixed(path) {
        if !path.ends_with('/') {
            return redirect_with_query(&format!("{path}/"), uri.query());
        }
        return AppError::NotFound(format!("No route for {path}")).into_response();
    }

    let language = locale::detect_language(&headers);
    redirect_with_query(&format!("/{}{}", language.code(), path), uri.query())
}

fn is_language_prefixed(path: &str) -> bool {
    ["/en", "/ja"]
        .iter()
        .any(|prefix| path == *prefix || path.starts_with(&format!("{prefix}/")))
}

fn redirect_with_query(path: &str, query: Option<&str>) -> Response {
    let target = match query {
        Some(q) => format!("{path}?{q}"),
        None => path.to_string(),
    };
    Redirect::temporary(&target).into_response()
}

/// Build the CORS middleware layer from server configuration.
///
/// Panics at startup if any configured origin is invalid, which is the
/// desired behaviour -- we want misconfiguration to fail fast.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_prefix_detection() {
        assert!(is_language_prefixed("/en/"));
        assert!(is_language_prefixed("/ja/news/3/"));
        assert!(is_language_prefixed("/en"));
        assert!(!is_language_prefixed("/"));
        assert!(!is_language_prefixed("/news/"));
        assert!(!is_language_prefixed("/english/"));
    }
}
