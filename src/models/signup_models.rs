use chrono::{DateTime, TimeZone, Utc};
use diesel::prelude::*;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::schema::beta_signups;

// Same pattern browsers apply to <input type="email">.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentError {
    Empty,
    InvalidFormat,
}

/// A request to join the beta waitlist, ready to be written.
///
/// Only built from a non-empty address that passes the browser email
/// pattern. The address is kept exactly as typed (no trimming, no case
/// folding).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupIntent {
    email: String,
}

impl SignupIntent {
    pub fn parse(email: &str) -> Result<Self, IntentError> {
        if email.is_empty() {
            return Err(IntentError::Empty);
        }
        if !is_valid_email(email) {
            return Err(IntentError::InvalidFormat);
        }
        Ok(Self {
            email: email.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[derive(Queryable, Selectable, Insertable, Clone, Debug)]
#[diesel(table_name = beta_signups)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BetaSignup {
    pub id: String,
    pub email: String,
    pub created_at: i64, // unix seconds, set by the store at insert time
}

/// What a store hands back after a successful write.
#[derive(Debug, Clone, Serialize)]
pub struct StoredSignup {
    pub id: String,
    pub email: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<BetaSignup> for StoredSignup {
    fn from(row: BetaSignup) -> Self {
        Self {
            created_at: Utc.timestamp_opt(row.created_at, 0).single(),
            id: row.id,
            email: row.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email("first.last+beta@sub.example.fr"));
        assert!(is_valid_email("user@localhost"));
    }

    #[test]
    fn rejects_what_the_browser_rejects() {
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@-example.com"));
        assert!(!is_valid_email(" test@example.com"));
    }

    #[test]
    fn parse_keeps_address_verbatim() {
        let intent = SignupIntent::parse("Test@Example.COM").unwrap();
        assert_eq!(intent.email(), "Test@Example.COM");
    }

    #[test]
    fn parse_distinguishes_empty_from_malformed() {
        assert_eq!(SignupIntent::parse(""), Err(IntentError::Empty));
        assert_eq!(SignupIntent::parse("nope"), Err(IntentError::InvalidFormat));
    }

    #[test]
    fn stored_signup_from_row_converts_timestamp() {
        let row = BetaSignup {
            id: "abc".to_string(),
            email: "test@example.com".to_string(),
            created_at: 1_760_000_000,
        };
        let stored = StoredSignup::from(row);
        assert_eq!(stored.created_at.map(|t| t.timestamp()), Some(1_760_000_000));
    }
}
