use axum::{Extension, Router};
use leptos::config::LeptosOptions;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use leptos_meta::*;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::App;

/// Axum router serving the Leptos routes, static files and the HTML shell
pub fn site_router(leptos_options: LeptosOptions, state: AppState) -> Router {
    let routes = generate_route_list(App);

    Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(Extension(state)),
        )
        .with_state(leptos_options)
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use axum::body::Body;
    use axum::http::{header, Request};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router() -> Router {
        let options = LeptosOptions::builder()
            .output_name("marcenaria")
            .site_root("target/site")
            .build();
        let state = AppState {
            config: Arc::new(SiteConfig::default()),
        };
        site_router(options, state)
    }

    #[tokio::test]
    async fn unknown_paths_redirect_home() {
        let response = router()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert!(!response.status().is_success(), "{}", response.status());
        assert_eq!(response.headers()[header::LOCATION], "/");
    }

    #[tokio::test]
    async fn known_paths_render() {
        let response = router()
            .oneshot(Request::builder().uri("/portfolio").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert!(response.status().is_success(), "{}", response.status());
    }
}
