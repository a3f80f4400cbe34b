//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the server-rendered storefront routes, the compiled client bundle
//! under `/pkg`, catalog images and models under `/assets`, and a liveness
//! check under a single Axum router.

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

use crate::config::ServerConfig;

/// Storefront router: SSR pages + static bundle + assets + `/healthz`.
pub fn app(config: &ServerConfig, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let pkg_dir = PathBuf::from(leptos_options.site_root.as_ref()).join(leptos_options.site_pkg_dir.as_ref());
    tracing::debug!(pkg = %pkg_dir.display(), assets = %config.assets_dir.display(), "static directories");

    Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .nest_service("/assets", ServeDir::new(&config.assets_dir))
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
