use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    Form, Json,
};
use serde_json::json;

use crate::{
    capture::{FormSlot, LandingForms},
    handlers::signup_dtos::SignupFormRequest,
    pages::{content::PageVariant, document::render_page},
    AppState,
};

pub async fn comparateur_page() -> Html<String> {
    Html(render_page(PageVariant::Comparateur, &LandingForms::new()).await)
}

pub async fn simulateurs_page() -> Html<String> {
    Html(render_page(PageVariant::Simulateurs, &LandingForms::new()).await)
}

pub async fn submit_comparateur(
    State(state): State<Arc<AppState>>,
    Form(request): Form<SignupFormRequest>,
) -> Result<Html<String>, (StatusCode, Json<serde_json::Value>)> {
    submit_on_page(&state, PageVariant::Comparateur, request).await
}

pub async fn submit_simulateurs(
    State(state): State<Arc<AppState>>,
    Form(request): Form<SignupFormRequest>,
) -> Result<Html<String>, (StatusCode, Json<serde_json::Value>)> {
    submit_on_page(&state, PageVariant::Simulateurs, request).await
}

/// Runs the posted form through a fresh capture instance and renders the
/// page back with that instance's outcome. The other form on the page is
/// rendered idle.
async fn submit_on_page(
    state: &AppState,
    variant: PageVariant,
    request: SignupFormRequest,
) -> Result<Html<String>, (StatusCode, Json<serde_json::Value>)> {
    let slot: FormSlot = request.form.parse().map_err(|_| {
        tracing::debug!("Form post with unknown form id {:?}", request.form);
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Unknown form" })),
        )
    })?;

    let mut forms = LandingForms::new();
    let capture = forms.slot_mut(slot);
    capture.set_email(request.email);
    match capture.submit(state.signup_store.as_ref()).await {
        Ok(status) => tracing::debug!("Form {} submitted, now {:?}", slot, status),
        // the form is re-rendered untouched with its own hint
        Err(blocked) => tracing::debug!("Form {} not submitted: {:?}", slot, blocked),
    }

    Ok(Html(render_page(variant, &forms).await))
}
