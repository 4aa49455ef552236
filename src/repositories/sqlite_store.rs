use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use uuid::Uuid;

use crate::{
    error::StoreError,
    models::signup_models::{BetaSignup, SignupIntent, StoredSignup},
    repositories::signup_store::SignupStore,
    schema::beta_signups,
    DbPool,
};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub fn build_pool(database_url: &str, max_size: u32) -> Result<DbPool, StoreError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = r2d2::Pool::builder().max_size(max_size).build(manager)?;
    Ok(pool)
}

pub fn run_migrations(pool: &DbPool) -> Result<(), StoreError> {
    let mut conn = pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| StoreError::Migration(e.to_string()))?;
    tracing::info!("Applied {} pending migration(s)", applied.len());
    Ok(())
}

pub struct SqliteSignupStore {
    pool: DbPool,
}

impl SqliteSignupStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Total number of signups recorded, duplicates included.
    pub fn count(&self) -> Result<i64, StoreError> {
        let mut conn = self.pool.get()?;
        let total: i64 = beta_signups::table.count().get_result(&mut conn)?;
        Ok(total)
    }

    fn insert(pool: &DbPool, email: String) -> Result<BetaSignup, StoreError> {
        let mut conn = pool.get()?;

        let row = BetaSignup {
            id: Uuid::new_v4().to_string(),
            email,
            created_at: Utc::now().timestamp(),
        };

        diesel::insert_into(beta_signups::table)
            .values(&row)
            .execute(&mut conn)?;

        Ok(row)
    }
}

#[async_trait]
impl SignupStore for SqliteSignupStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn add_signup(&self, intent: &SignupIntent) -> Result<StoredSignup, StoreError> {
        let pool = self.pool.clone();
        let email = intent.email().to_string();
        // diesel is blocking
        let row = tokio::task::spawn_blocking(move || Self::insert(&pool, email)).await??;
        tracing::debug!("Stored beta signup {}", row.id);
        Ok(StoredSignup::from(row))
    }
}
