//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds Leptos SSR rendering, the compiled WASM/CSS bundle under `/pkg`, and
//! a health probe under a single Axum router.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::app::{App, shell};

/// Leptos SSR frontend plus static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let pkg_path = site_root_path.join(leptos_options.site_pkg_dir.as_ref());

    let router = Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(pkg_path))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    Ok(router)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
