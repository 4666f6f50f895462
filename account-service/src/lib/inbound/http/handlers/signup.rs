use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use crate::domain::user::models::Password;
use crate::domain::user::models::RegistrationForm;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let Json(body) = payload?;

    state
        .user_service
        .register(body.into())
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, MessageData::new("User created successfully")))
}

/// HTTP request body for registration (raw JSON)
///
/// Absent fields deserialize as empty strings and are reported by validation.
#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SignupRequest {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
}

impl From<SignupRequest> for RegistrationForm {
    fn from(request: SignupRequest) -> Self {
        RegistrationForm {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            password: Password::presented(request.password),
        }
    }
}
