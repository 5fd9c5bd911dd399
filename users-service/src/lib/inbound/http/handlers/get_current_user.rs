use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiErrorData;
use super::ApiSuccess;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::identity::RequestIdentity;
use crate::user::models::UserResponse;

/// Profile of the authenticated caller, resolved from its identity
/// claim.
pub async fn get_current_user(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
) -> Result<ApiSuccess<UserResponse>, ApiError> {
    let user_id = identity.user_id().ok_or_else(|| {
        ApiError::Unauthorized(ApiErrorData::new(
            "token.subject.invalid",
            "Token carries no usable identity.",
        ))
    })?;

    state
        .user_service
        .get_user(&user_id)
        .await
        .map_err(ApiError::from)
        .map(|user| ApiSuccess::new(StatusCode::OK, user))
}
