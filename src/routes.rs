//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Leptos page is server-rendered at `/` and hydrated from the compiled
//! bundle under `/pkg`. A health probe sits beside it. Every request passes
//! through a tracing span and gzip compression.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;

/// Routes that need no Leptos configuration.
pub fn probe_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Directory holding the compiled WASM, JS, and CSS bundle.
pub fn pkg_dir(options: &LeptosOptions) -> PathBuf {
    PathBuf::from(options.site_root.as_ref()).join(options.site_pkg_dir.as_ref())
}

/// Full site router: SSR page, static bundle, and health probe.
///
/// # Errors
///
/// Returns [`ServerError::LeptosConfig`] if the Leptos settings cannot be
/// loaded (missing or malformed `[package.metadata.leptos]`).
pub fn app() -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(site::app::App);
    tracing::debug!(count = routes.len(), "generated leptos routes");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || site::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    Ok(probe_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir(&leptos_options)))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
