use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::{distributions::Alphanumeric, Rng};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::StoreError,
    models::signup_models::{SignupIntent, StoredSignup},
    repositories::signup_store::SignupStore,
};

pub const DEFAULT_FIRESTORE_URL: &str = "https://firestore.googleapis.com/v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirestoreConfig {
    pub base_url: String,
    pub project_id: String,
    pub api_key: String,
    pub collection: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommitResponse {
    commit_time: Option<String>,
    #[serde(default)]
    write_results: Vec<WriteResult>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WriteResult {
    #[serde(default)]
    transform_results: Vec<Value>,
}

/// Writes signups into a Firestore collection over the REST API.
///
/// Each signup is a single `documents:commit` carrying the email field and
/// a `REQUEST_TIME` transform for `createdAt`, so the timestamp comes from
/// the server and never from this process.
pub struct FirestoreSignupStore {
    client: Client,
    config: FirestoreConfig,
}

impl FirestoreSignupStore {
    pub fn new(config: FirestoreConfig) -> Self {
        // no request timeout: a pending write keeps its form loading until it settles
        Self {
            client: Client::new(),
            config,
        }
    }

    fn database_path(&self) -> String {
        format!("projects/{}/databases/(default)", self.config.project_id)
    }

    pub fn commit_url(&self) -> String {
        format!(
            "{}/{}/documents:commit",
            self.config.base_url.trim_end_matches('/'),
            self.database_path()
        )
    }

    pub fn commit_body(&self, document_id: &str, email: &str) -> Value {
        let name = format!(
            "{}/documents/{}/{}",
            self.database_path(),
            self.config.collection,
            document_id
        );
        json!({
            "writes": [{
                "update": {
                    "name": name,
                    "fields": {
                        "email": { "stringValue": email }
                    }
                },
                "updateTransforms": [{
                    "fieldPath": "createdAt",
                    "setToServerValue": "REQUEST_TIME"
                }],
                "currentDocument": { "exists": false }
            }]
        })
    }
}

/// 20 alphanumeric characters, the same shape Firestore clients use for
/// auto-generated document ids.
pub fn auto_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(20)
        .map(char::from)
        .collect()
}

fn server_timestamp(response: &CommitResponse) -> Option<DateTime<Utc>> {
    let from_transform = response
        .write_results
        .first()
        .and_then(|w| w.transform_results.first())
        .and_then(|t| t.get("timestampValue"))
        .and_then(Value::as_str);
    from_transform
        .or(response.commit_time.as_deref())
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|t| t.with_timezone(&Utc))
}

#[async_trait]
impl SignupStore for FirestoreSignupStore {
    fn backend_name(&self) -> &'static str {
        "firestore"
    }

    async fn add_signup(&self, intent: &SignupIntent) -> Result<StoredSignup, StoreError> {
        let document_id = auto_id();
        let body = self.commit_body(&document_id, intent.email());

        let response = self
            .client
            .post(self.commit_url())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let commit: CommitResponse = response.json().await?;
        tracing::debug!(
            "Committed {}/{} to Firestore",
            self.config.collection,
            document_id
        );

        Ok(StoredSignup {
            id: document_id,
            email: intent.email().to_string(),
            created_at: server_timestamp(&commit),
        })
    }
}
