use std::{env, net::SocketAddr, sync::Arc};

#[macro_use]
extern crate lazy_static;

use axum::{
    extract::DefaultBodyLimit,
    http::header::CONTENT_TYPE,
    http::Method,
    routing::{get, patch, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use crate::{app::env::Envy, store::models::store::Store};

mod app;
mod media;
mod store;
mod tryon;

// above the 5MB photo limit; overflow while reading a form is still a json error
pub static MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub client: reqwest::Client,
    pub store: Arc<Store>,
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ]);

    Router::new()
        .route("/", get(app::controller::get_root))
        // tryon
        .route("/api/tryon", post(tryon::controller::try_on))
        // store
        .route(
            "/api/settings",
            get(store::controller::get_settings).put(store::controller::save_settings),
        )
        .route(
            "/api/products",
            get(store::controller::get_products).put(store::controller::save_products),
        )
        .route(
            "/api/products/:id",
            patch(store::controller::edit_product_by_id),
        )
        .route(
            "/api/results",
            get(store::controller::get_cached_results)
                .post(store::controller::save_cached_result)
                .delete(store::controller::clear_cached_results),
        )
        // layers
        .layer(
            ServiceBuilder::new()
                .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
                .layer(cors),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tryon_api=debug,tower_http=info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    tracing::info!(
        "starting in {} mode",
        envy.app_env.as_deref().unwrap_or(&app_env)
    );

    if envy.gemini_api_key().is_none() {
        tracing::warn!("GEMINI_API_KEY is not set, try-on requests will fail");
    }

    // properties
    let port = envy.port();
    let client = reqwest::Client::builder()
        .timeout(envy.request_timeout())
        .build()
        .expect("failed to build http client");

    let state = AppState {
        envy: Arc::new(envy),
        client,
        store: Arc::new(Store::default()),
    };

    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!("server error: {}", e);
    }
}
