use serde::{Deserialize, Serialize};

use crate::capture::{CaptureStatus, FormSlot};

/// Body of a native form post from either landing page.
#[derive(Deserialize, Debug)]
pub struct SignupFormRequest {
    #[serde(default)]
    pub email: String,
    pub form: String,
}

#[derive(Deserialize, Debug)]
pub struct BetaSignupRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub form: FormSlot,
}

#[derive(Serialize, Debug)]
pub struct BetaSignupResponse {
    pub status: CaptureStatus,
    pub message: &'static str,
}
