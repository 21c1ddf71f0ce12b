//! `onegoal` SSR host.
//!
//! Renders the Leptos app shell on the server, serves the hydration bundle
//! from `/pkg`, and exposes a `/healthz` probe.

mod config;
mod error;
mod routes;

use std::sync::Arc;

use leptos::prelude::get_configuration;

use crate::config::Config;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env file is normal outside development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let addr = config.socket_addr();

    let mut leptos_options = get_configuration(None)
        .map_err(|e| ServerError::Leptos(e.to_string()))?
        .leptos_options;
    leptos_options.site_addr = addr;
    if let Some(site_root) = &config.site_root {
        leptos_options.site_root = Arc::from(site_root.as_str());
    }

    let app = routes::app(leptos_options);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "onegoal listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
