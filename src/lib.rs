use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use diesel::r2d2::{self, ConnectionManager};
use diesel::SqliteConnection;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod capture;
pub mod config;
pub mod error;
pub mod schema;
pub mod models {
    pub mod signup_models;
}
pub mod repositories {
    pub mod firestore_store;
    pub mod signup_store;
    pub mod sqlite_store;
}
pub mod handlers {
    pub mod landing_handlers;
    pub mod signup_dtos;
    pub mod signup_handlers;
}
pub mod components {
    pub mod email_form;
}
pub mod pages {
    pub mod content;
    pub mod document;
    pub mod landing;
}

use config::AppConfig;
use handlers::{landing_handlers, signup_handlers};
use repositories::signup_store::SignupStore;

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub struct AppState {
    pub config: AppConfig,
    pub signup_store: Arc<dyn SignupStore>,
}

impl AppState {
    pub fn new(config: AppConfig, signup_store: Arc<dyn SignupStore>) -> Self {
        Self {
            config,
            signup_store,
        }
    }
}

async fn health_check() -> &'static str {
    "OK"
}

fn cors_layer(frontend_url: &str) -> CorsLayer {
    // AppConfig already rejected origins that aren't valid header values
    let origin = HeaderValue::from_str(frontend_url)
        .unwrap_or_else(|_| HeaderValue::from_static("http://localhost:3000"));
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(AllowOrigin::exact(origin))
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let page_routes = Router::new()
        .route(
            "/",
            get(landing_handlers::comparateur_page).post(landing_handlers::submit_comparateur),
        )
        .route(
            "/simulateurs",
            get(landing_handlers::simulateurs_page).post(landing_handlers::submit_simulateurs),
        );

    let api_routes = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/beta-signups", post(signup_handlers::create_beta_signup))
        .layer(cors_layer(&state.config.frontend_url));

    Router::new()
        .merge(page_routes)
        .merge(api_routes)
        .nest_service("/static", ServeDir::new("static"))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
