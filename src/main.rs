#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use leptos::prelude::*;
    use marcenaria::{config::SiteConfig, server::site_router, state::AppState};
    use std::sync::Arc;

    // Load env vars
    dotenvy::dotenv().ok();
    marcenaria::logging::init_logger();

    let config = match SiteConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(%e, "invalid configuration");
            std::process::exit(1);
        }
    };
    tracing::debug!(?config, "site configuration loaded");

    let state = AppState {
        config: Arc::new(config),
    };

    // Leptos config
    let conf = get_configuration(None).expect("Failed to load Leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let app = site_router(leptos_options, state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind site address");
    tracing::info!("listening on http://{}", addr);
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // Client-side entry point handled by hydrate() in lib.rs
}
