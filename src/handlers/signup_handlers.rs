use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{
    capture::{CaptureForm, CaptureStatus, SubmitBlocked, CONFIRMATION_MESSAGE, ERROR_MESSAGE},
    handlers::signup_dtos::{BetaSignupRequest, BetaSignupResponse},
    AppState,
};

pub async fn create_beta_signup(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BetaSignupRequest>,
) -> Result<Response, (StatusCode, Json<serde_json::Value>)> {
    let mut capture = CaptureForm::new(request.form, request.form.default_style());
    capture.set_email(request.email);

    match capture.submit(state.signup_store.as_ref()).await {
        Ok(CaptureStatus::Success) => Ok((
            StatusCode::CREATED,
            Json(BetaSignupResponse {
                status: CaptureStatus::Success,
                message: CONFIRMATION_MESSAGE,
            }),
        )
            .into_response()),
        Ok(status) => Ok((
            StatusCode::BAD_GATEWAY,
            Json(BetaSignupResponse {
                status,
                message: ERROR_MESSAGE,
            }),
        )
            .into_response()),
        Err(SubmitBlocked::Empty) => Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Email is required" })),
        )),
        Err(SubmitBlocked::InvalidFormat) => Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": "Invalid email format" })),
        )),
        Err(blocked @ (SubmitBlocked::InFlight | SubmitBlocked::AlreadySubmitted)) => {
            tracing::warn!("Fresh capture form refused submit: {:?}", blocked);
            Err((
                StatusCode::CONFLICT,
                Json(json!({ "error": "Submission already handled" })),
            ))
        }
    }
}
