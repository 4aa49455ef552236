use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::signup_models::{SignupIntent, StoredSignup};

/// The persistence collaborator behind the capture forms.
///
/// Implementations append one record `{email, createdAt}` per call and
/// assign both the timestamp and the identifier themselves. Nothing in
/// the crate reads, updates or deletes through this trait.
#[async_trait]
pub trait SignupStore: Send + Sync {
    fn backend_name(&self) -> &'static str;

    async fn add_signup(&self, intent: &SignupIntent) -> Result<StoredSignup, StoreError>;
}
