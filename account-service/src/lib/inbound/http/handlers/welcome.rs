use axum::http::StatusCode;
use axum::Extension;

use super::ApiSuccess;
use super::MessageData;
use crate::inbound::http::middleware::AuthenticatedUser;

pub async fn welcome(
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiSuccess<MessageData> {
    ApiSuccess::new(
        StatusCode::OK,
        MessageData::new(format!("Welcome {}", user.username)),
    )
}
