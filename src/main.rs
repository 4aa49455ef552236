use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use simupatri::{
    build_router,
    config::{AppConfig, SignupBackend},
    repositories::{
        firestore_store::FirestoreSignupStore,
        signup_store::SignupStore,
        sqlite_store::{build_pool, run_migrations, SqliteSignupStore},
    },
    AppState,
};

fn build_signup_store(config: &AppConfig) -> anyhow::Result<Arc<dyn SignupStore>> {
    match config.signup_backend {
        SignupBackend::Sqlite => {
            let pool = build_pool(&config.database_url, 8)
                .with_context(|| format!("opening {}", config.database_url))?;
            run_migrations(&pool)?;
            Ok(Arc::new(SqliteSignupStore::new(pool)))
        }
        SignupBackend::Firestore => {
            let firestore = config
                .firestore
                .clone()
                .context("firestore backend selected without firestore settings")?;
            Ok(Arc::new(FirestoreSignupStore::new(firestore)))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = AppConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,simupatri=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(!config.is_production())
        .init();

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                environment: Some(config.environment.clone().into()),
                ..Default::default()
            },
        ))
    });

    let signup_store = build_signup_store(&config)?;
    tracing::info!(
        "Beta signups go to {} (collection {})",
        signup_store.backend_name(),
        config.collection
    );

    let port = config.port;
    let state = Arc::new(AppState::new(config, signup_store));
    let app = build_router(state);

    tracing::info!("Starting server on port {}", port);
    let listener = TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("binding port {}", port))?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
