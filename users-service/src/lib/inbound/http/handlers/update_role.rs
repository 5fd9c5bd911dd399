use std::str::FromStr;

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiErrorData;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::ValidationFailure;
use crate::user::models::UserRole;

pub async fn update_role(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<UpdateRoleRequestBody>,
) -> Result<StatusCode, ApiError> {
    let user_id = UserId::from_string(&user_id).map_err(|e| {
        ApiError::UnprocessableEntity(vec![ApiErrorData::new("user.id.invalid", e.to_string())])
    })?;

    let role = UserRole::from_str(&body.role).map_err(|_| {
        ApiError::UnprocessableEntity(vec![ApiErrorData::from(&ValidationFailure::UnknownRole)])
    })?;

    state
        .user_service
        .update_role(&user_id, role)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateRoleRequestBody {
    role: String,
}
