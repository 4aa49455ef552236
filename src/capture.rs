//! The email capture form.
//!
//! A `CaptureForm` owns one input value and one status. It moves
//! `Idle -> Loading -> Success | Error` and allows `Error -> Loading` again
//! when the visitor resubmits. `Success` is terminal for the instance: the
//! form is replaced by the confirmation message and cannot submit again.
//!
//! The transitions are split in `begin_submit` / `finish_submit` so the
//! in-flight state can be observed; `submit` drives both around a single
//! write to the injected [`SignupStore`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::signup_models::{IntentError, SignupIntent};
use crate::repositories::signup_store::SignupStore;

pub const CONFIRMATION_MESSAGE: &str =
    "Merci ! Vous serez parmi les premiers informes du lancement.";
pub const ERROR_MESSAGE: &str = "Une erreur est survenue. Reessayez.";
pub const SUBMIT_LABEL: &str = "Rejoindre la beta";
pub const LOADING_LABEL: &str = "...";
pub const EMAIL_PLACEHOLDER: &str = "votre@email.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// Presentation only. Both styles go through the exact same transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStyle {
    #[default]
    Light,
    Dark,
}

/// Which of the two forms on a landing page an instance is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormSlot {
    #[default]
    Hero,
    Cta,
}

impl FormSlot {
    pub fn as_str(self) -> &'static str {
        match self {
            FormSlot::Hero => "hero",
            FormSlot::Cta => "cta",
        }
    }

    pub fn html_id(self) -> &'static str {
        match self {
            FormSlot::Hero => "hero-form",
            FormSlot::Cta => "cta-form",
        }
    }

    pub fn default_style(self) -> FormStyle {
        match self {
            FormSlot::Hero => FormStyle::Dark,
            FormSlot::Cta => FormStyle::Light,
        }
    }
}

impl fmt::Display for FormSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSlot(pub String);

impl FromStr for FormSlot {
    type Err = UnknownSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hero" => Ok(FormSlot::Hero),
            "cta" => Ok(FormSlot::Cta),
            other => Err(UnknownSlot(other.to_string())),
        }
    }
}

/// Why a submit did not start. None of these change the form's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    Empty,
    InvalidFormat,
    InFlight,
    AlreadySubmitted,
}

impl From<IntentError> for SubmitBlocked {
    fn from(err: IntentError) -> Self {
        match err {
            IntentError::Empty => SubmitBlocked::Empty,
            IntentError::InvalidFormat => SubmitBlocked::InvalidFormat,
        }
    }
}

/// Render snapshot of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureView {
    pub slot: FormSlot,
    pub style: FormStyle,
    pub email: String,
    pub status: CaptureStatus,
}

#[derive(Debug, Clone)]
pub struct CaptureForm {
    slot: FormSlot,
    style: FormStyle,
    email: String,
    status: CaptureStatus,
}

impl CaptureForm {
    pub fn new(slot: FormSlot, style: FormStyle) -> Self {
        Self {
            slot,
            style,
            email: String::new(),
            status: CaptureStatus::Idle,
        }
    }

    pub fn slot(&self) -> FormSlot {
        self.slot
    }

    pub fn status(&self) -> CaptureStatus {
        self.status
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// The submit control is disabled while loading and gone after success.
    pub fn can_submit(&self) -> bool {
        matches!(self.status, CaptureStatus::Idle | CaptureStatus::Error)
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        if self.status == CaptureStatus::Success {
            return;
        }
        self.email = value.into();
    }

    pub fn begin_submit(&mut self) -> Result<SignupIntent, SubmitBlocked> {
        match self.status {
            CaptureStatus::Loading => return Err(SubmitBlocked::InFlight),
            CaptureStatus::Success => return Err(SubmitBlocked::AlreadySubmitted),
            CaptureStatus::Idle | CaptureStatus::Error => {}
        }
        let intent = SignupIntent::parse(&self.email)?;
        self.status = CaptureStatus::Loading;
        Ok(intent)
    }

    pub fn finish_submit<T, E>(&mut self, result: Result<T, E>) {
        if self.status != CaptureStatus::Loading {
            return;
        }
        match result {
            Ok(_) => {
                self.status = CaptureStatus::Success;
                self.email.clear();
            }
            Err(_) => self.status = CaptureStatus::Error,
        }
    }

    /// Runs one submission against `store`.
    ///
    /// Exactly one write is attempted when the submit starts. There is no
    /// timeout and no automatic retry: a store that never answers keeps
    /// this future pending and the form in `Loading`.
    pub async fn submit(&mut self, store: &dyn SignupStore) -> Result<CaptureStatus, SubmitBlocked> {
        let intent = match self.begin_submit() {
            Ok(intent) => intent,
            Err(blocked) => {
                tracing::debug!(form = %self.slot, ?blocked, "Signup submit did not start");
                return Err(blocked);
            }
        };

        let result = store.add_signup(&intent).await;
        match &result {
            Ok(stored) => tracing::info!(
                form = %self.slot,
                backend = store.backend_name(),
                "Beta signup stored as {}",
                stored.id
            ),
            Err(e) => tracing::error!(
                form = %self.slot,
                backend = store.backend_name(),
                "Beta signup write failed: {}",
                e
            ),
        }
        self.finish_submit(result);
        Ok(self.status)
    }

    pub fn view(&self) -> CaptureView {
        CaptureView {
            slot: self.slot,
            style: self.style,
            email: self.email.clone(),
            status: self.status,
        }
    }
}

/// The hero and closing call-to-action forms of one rendered page.
/// They share nothing; submitting one leaves the other untouched.
#[derive(Debug, Clone)]
pub struct LandingForms {
    pub hero: CaptureForm,
    pub cta: CaptureForm,
}

impl LandingForms {
    pub fn new() -> Self {
        Self {
            hero: CaptureForm::new(FormSlot::Hero, FormSlot::Hero.default_style()),
            cta: CaptureForm::new(FormSlot::Cta, FormSlot::Cta.default_style()),
        }
    }

    pub fn slot_mut(&mut self, slot: FormSlot) -> &mut CaptureForm {
        match slot {
            FormSlot::Hero => &mut self.hero,
            FormSlot::Cta => &mut self.cta,
        }
    }
}

impl Default for LandingForms {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::models::signup_models::StoredSignup;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingStore {
        emails: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SignupStore for RecordingStore {
        fn backend_name(&self) -> &'static str {
            "recording"
        }

        async fn add_signup(&self, intent: &SignupIntent) -> Result<StoredSignup, StoreError> {
            self.emails.lock().unwrap().push(intent.email().to_string());
            Ok(StoredSignup {
                id: "doc-1".to_string(),
                email: intent.email().to_string(),
                created_at: None,
            })
        }
    }

    #[derive(Default)]
    struct FailingStore {
        attempts: AtomicUsize,
    }

    #[async_trait]
    impl SignupStore for FailingStore {
        fn backend_name(&self) -> &'static str {
            "failing"
        }

        async fn add_signup(&self, _intent: &SignupIntent) -> Result<StoredSignup, StoreError> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            Err(StoreError::Rejected {
                status: 403,
                body: "PERMISSION_DENIED".to_string(),
            })
        }
    }

    struct HangingStore;

    #[async_trait]
    impl SignupStore for HangingStore {
        fn backend_name(&self) -> &'static str {
            "hanging"
        }

        async fn add_signup(&self, _intent: &SignupIntent) -> Result<StoredSignup, StoreError> {
            std::future::pending().await
        }
    }

    fn hero() -> CaptureForm {
        CaptureForm::new(FormSlot::Hero, FormStyle::Dark)
    }

    #[tokio::test]
    async fn valid_email_reaches_success_and_clears_input() {
        let store = RecordingStore::default();
        let mut form = hero();
        form.set_email("test@example.com");

        let status = form.submit(&store).await.unwrap();

        assert_eq!(status, CaptureStatus::Success);
        assert_eq!(form.email(), "");
        assert!(!form.can_submit());
        assert_eq!(*store.emails.lock().unwrap(), vec!["test@example.com".to_string()]);
    }

    #[tokio::test]
    async fn empty_email_is_ignored_without_a_write() {
        let store = RecordingStore::default();
        let mut form = hero();

        assert_eq!(form.submit(&store).await, Err(SubmitBlocked::Empty));
        assert_eq!(form.status(), CaptureStatus::Idle);
        assert!(store.emails.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_email_is_ignored_without_a_write() {
        let store = RecordingStore::default();
        let mut form = hero();
        form.set_email("not-an-email");

        assert_eq!(form.submit(&store).await, Err(SubmitBlocked::InvalidFormat));
        assert_eq!(form.status(), CaptureStatus::Idle);
        assert_eq!(form.email(), "not-an-email");
        assert!(store.emails.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failure_keeps_input_and_allows_retry() {
        let store = FailingStore::default();
        let mut form = hero();
        form.set_email("test@example.com");

        assert_eq!(form.submit(&store).await, Ok(CaptureStatus::Error));
        assert_eq!(form.email(), "test@example.com");
        assert!(form.can_submit());

        assert_eq!(form.submit(&store).await, Ok(CaptureStatus::Error));
        assert_eq!(store.attempts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn error_then_success_on_resubmit() {
        let mut form = hero();
        form.set_email("test@example.com");
        form.submit(&FailingStore::default()).await.unwrap();
        assert_eq!(form.status(), CaptureStatus::Error);

        let store = RecordingStore::default();
        assert_eq!(form.submit(&store).await, Ok(CaptureStatus::Success));
        assert_eq!(store.emails.lock().unwrap().len(), 1);
    }

    #[test]
    fn loading_blocks_a_second_submit() {
        let mut form = hero();
        form.set_email("test@example.com");

        let intent = form.begin_submit().unwrap();
        assert_eq!(intent.email(), "test@example.com");
        assert_eq!(form.status(), CaptureStatus::Loading);
        assert!(!form.can_submit());
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::InFlight));

        form.finish_submit::<(), ()>(Ok(()));
        assert_eq!(form.status(), CaptureStatus::Success);
    }

    #[test]
    fn success_is_terminal() {
        let mut form = hero();
        form.set_email("test@example.com");
        form.begin_submit().unwrap();
        form.finish_submit::<(), ()>(Ok(()));

        form.set_email("other@example.com");
        assert_eq!(form.email(), "");
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::AlreadySubmitted));
        form.finish_submit::<(), ()>(Err(()));
        assert_eq!(form.status(), CaptureStatus::Success);
    }

    #[test]
    fn finish_without_begin_is_ignored() {
        let mut form = hero();
        form.finish_submit::<(), ()>(Err(()));
        assert_eq!(form.status(), CaptureStatus::Idle);
    }

    #[tokio::test]
    async fn unresponsive_store_leaves_submit_pending() {
        let mut form = hero();
        form.set_email("test@example.com");

        let pending = tokio::time::timeout(Duration::from_millis(50), form.submit(&HangingStore)).await;
        assert!(pending.is_err());
    }

    #[tokio::test]
    async fn landing_forms_are_independent() {
        let store = RecordingStore::default();
        let mut forms = LandingForms::new();
        forms.slot_mut(FormSlot::Hero).set_email("test@example.com");
        forms.slot_mut(FormSlot::Hero).submit(&store).await.unwrap();

        assert_eq!(forms.hero.status(), CaptureStatus::Success);
        assert_eq!(forms.cta.status(), CaptureStatus::Idle);
        assert!(forms.cta.can_submit());
    }

    #[test]
    fn style_does_not_change_behaviour() {
        for style in [FormStyle::Light, FormStyle::Dark] {
            let mut form = CaptureForm::new(FormSlot::Cta, style);
            form.set_email("test@example.com");
            assert!(form.begin_submit().is_ok());
            form.finish_submit::<(), ()>(Err(()));
            assert_eq!(form.status(), CaptureStatus::Error);
            assert_eq!(form.view().style, style);
        }
    }

    #[test]
    fn slots_parse_from_form_field() {
        assert_eq!("hero".parse::<FormSlot>(), Ok(FormSlot::Hero));
        assert_eq!("cta".parse::<FormSlot>(), Ok(FormSlot::Cta));
        assert!("footer".parse::<FormSlot>().is_err());
        assert_eq!(FormSlot::Cta.html_id(), "cta-form");
    }
}
