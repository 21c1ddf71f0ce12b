//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos SSR routes are generated from the client `App` and served under a
//! single Axum router together with the static hydration bundle and a
//! health probe.

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;

/// Directory holding the compiled WASM/JS/CSS bundle.
pub fn pkg_dir(site_root: &str) -> PathBuf {
    Path::new(site_root).join("pkg")
}

/// Full application router: Leptos pages, `/pkg` assets, `/healthz`.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let assets = pkg_dir(&leptos_options.site_root);
    tracing::debug!(assets = %assets.display(), routes = routes.len(), "assembling router");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .with_state(leptos_options);

    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(assets))
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
