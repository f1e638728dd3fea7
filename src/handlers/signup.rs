use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::db::NewUser;
use crate::error::AppError;
use crate::router::AppState;
use crate::security::hash_password_async;
use crate::validation::{SignupFeedback, validate_signup};

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmationPassword")]
    pub confirmation_password: String,
}

/// Wire contract of the signup form: `completed_signup` is the string
/// "true"/"false"; an empty feedback string means that field passed.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub completed_signup: String,
    #[serde(rename = "usernameFeedback")]
    pub username_feedback: String,
    #[serde(rename = "emailFeedback")]
    pub email_feedback: String,
    #[serde(rename = "passwordFeedback")]
    pub password_feedback: String,
    #[serde(rename = "confirmationPasswordFeedback")]
    pub confirmation_password_feedback: String,
}

impl SignupResponse {
    fn completed() -> Self {
        Self::from_feedback(true, SignupFeedback::default())
    }

    fn rejected(feedback: SignupFeedback) -> Self {
        Self::from_feedback(false, feedback)
    }

    fn from_feedback(completed: bool, feedback: SignupFeedback) -> Self {
        Self {
            completed_signup: completed.to_string(),
            username_feedback: feedback.username,
            email_feedback: feedback.email,
            password_feedback: feedback.password,
            confirmation_password_feedback: feedback.confirmation,
        }
    }
}

/// Validate, hash off-thread, persist. Validation failures are a normal
/// response, not an error; a duplicate username/email surfaces as the
/// integrity error envelope.
pub async fn signup_handler(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<SignupResponse>, AppError> {
    let feedback = validate_signup(
        &req.username,
        &req.email,
        &req.password,
        &req.confirmation_password,
    );
    if !feedback.is_valid() {
        return Ok(Json(SignupResponse::rejected(feedback)));
    }

    let password_hash = hash_password_async(req.password).await?;
    let user_id = state
        .db
        .add_user(NewUser {
            username: req.username,
            email: req.email,
            password_hash,
        })
        .await?;
    info!(user_id, "new user signed up");

    Ok(Json(SignupResponse::completed()))
}
