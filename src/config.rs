use std::str::FromStr;

use axum::http::HeaderValue;

use crate::error::ConfigError;
use crate::repositories::firestore_store::{FirestoreConfig, DEFAULT_FIRESTORE_URL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupBackend {
    Sqlite,
    Firestore,
}

impl FromStr for SignupBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sqlite" => Ok(SignupBackend::Sqlite),
            "firestore" => Ok(SignupBackend::Firestore),
            other => Err(ConfigError::Invalid {
                name: "SIGNUP_BACKEND",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub port: u16,
    pub signup_backend: SignupBackend,
    pub database_url: String,
    pub collection: String,
    pub firestore: Option<FirestoreConfig>,
    pub frontend_url: String,
    pub sentry_dsn: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            signup_backend: SignupBackend::Sqlite,
            database_url: "simupatri.db".to_string(),
            collection: "beta-signups".to_string(),
            firestore: None,
            frontend_url: "http://localhost:3000".to_string(),
            sentry_dsn: None,
        }
    }
}

impl AppConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to
    /// pick up a local `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw,
            })?,
            None => defaults.port,
        };

        let signup_backend = match var("SIGNUP_BACKEND") {
            Some(raw) => raw.parse()?,
            None => defaults.signup_backend,
        };

        let collection = var("SIGNUP_COLLECTION").unwrap_or(defaults.collection);

        let firestore = match signup_backend {
            SignupBackend::Firestore => Some(FirestoreConfig {
                base_url: var("FIRESTORE_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_FIRESTORE_URL.to_string()),
                project_id: var("FIRESTORE_PROJECT_ID")
                    .ok_or(ConfigError::Missing("FIRESTORE_PROJECT_ID"))?,
                api_key: var("FIREBASE_API_KEY").ok_or(ConfigError::Missing("FIREBASE_API_KEY"))?,
                collection: collection.clone(),
            }),
            SignupBackend::Sqlite => None,
        };

        let frontend_url = var("FRONTEND_URL").unwrap_or(defaults.frontend_url);
        if HeaderValue::from_str(&frontend_url).is_err() {
            return Err(ConfigError::Invalid {
                name: "FRONTEND_URL",
                value: frontend_url,
            });
        }

        Ok(Self {
            environment: var("ENVIRONMENT").unwrap_or(defaults.environment),
            port,
            signup_backend,
            database_url: var("DATABASE_URL").unwrap_or(defaults.database_url),
            collection,
            firestore,
            frontend_url,
            sentry_dsn: var("SENTRY_DSN"),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment != "development"
    }
}
