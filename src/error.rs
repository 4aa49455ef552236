use thiserror::Error;

/// Failures raised by a persistence collaborator while writing a signup.
///
/// Every variant ends up as the same generic error on the page; the
/// distinction only shows up in logs.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("migration error: {0}")]
    Migration(String),
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error("request to document store failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("document store rejected write ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}
