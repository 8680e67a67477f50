use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
    routing::post,
};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::SignupOutcome,
};

#[derive(Deserialize)]
struct SignupPayload {
    // A missing field reads as an empty string and fails email validation,
    // matching how the signup form treats it; only an unparseable body is
    // reported as a malformed request.
    #[serde(default)]
    email: String,
}

#[derive(Serialize)]
struct SignupResponse {
    ok: bool,
    message: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/signup", post(signup))
}

/// POST /api/signup
/// Adds the submitted email to the waitlist. Duplicate submissions are a
/// success outcome with their own message, never an error.
async fn signup(
    State(app_state): State<AppState>,
    payload: Result<Json<SignupPayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload.map_err(|_| AppError::InvalidBody)?;

    let outcome = app_state.waitlist_use_cases.join(&payload.email).await?;

    let message = match outcome {
        SignupOutcome::Joined => "You're on the waitlist! 🎉",
        SignupOutcome::AlreadyJoined => "You're already on the waitlist ✅",
    };

    Ok(Json(SignupResponse { ok: true, message }))
}
