use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use aloha_common::Config;
use content_api_client::ContentApiClient;

mod components;
mod pages;
mod templates;

pub struct AppState {
    pub api: ContentApiClient,
    pub config: Config,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(pages::health))
        // Dashboard pages (Dioxus SSR)
        .route("/", get(pages::dashboard::home))
        .route("/clients", get(pages::clients::list).post(pages::clients::create))
        .route("/clients/{id}", get(pages::clients::detail))
        .route("/clients/{id}/delete", post(pages::clients::delete))
        .route("/clients/{id}/keywords", post(pages::clients::add_keyword))
        .route("/clients/{id}/platforms", post(pages::clients::connect_platform))
        .route("/clients/{id}/status", post(pages::clients::set_status))
        .route("/content", get(pages::content::list))
        .route("/content/generate", post(pages::content::generate))
        .route("/content/scripts/{id}", get(pages::content::script_detail))
        .route("/content/renders/{id}/score", post(pages::content::score))
        .route("/content/renders/{id}/publish", post(pages::content::publish))
        .route("/review", get(pages::review::queue))
        .route("/review/{id}/approve", post(pages::review::approve))
        .route("/review/{id}/schedule", post(pages::review::schedule))
        .route("/calendar", get(pages::calendar::month))
        .route("/analytics", get(pages::analytics::overview))
        .route("/analytics/refresh", post(pages::analytics::refresh))
        .with_state(state)
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Pages always reflect live backend state
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::PRAGMA,
            HeaderValue::from_static("no-cache"),
        ))
        // method + path + status + latency only
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("aloha_web=info".parse()?)
                .add_directive("aloha_common=info".parse()?)
                .add_directive("content_api_client=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let addr = format!("{}:{}", config.web_host, config.web_port);

    let state = Arc::new(AppState {
        api: ContentApiClient::new(&config.content_api_url),
        config,
    });

    info!(backend = %state.api.base_url(), "Aloha dashboard starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, build_router(state)).await?;

    Ok(())
}
