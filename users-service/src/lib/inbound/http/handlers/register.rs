use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::RegisterUserRequest;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::identity::RequestIdentity;
use crate::user::models::UserResponse;

pub async fn register(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<ApiSuccess<UserResponse>, ApiError> {
    state
        .user_service
        .register(body.into_request(), &identity)
        .await
        .map_err(ApiError::from)
        .map(|user| ApiSuccess::new(StatusCode::CREATED, user))
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    email: String,
    name: String,
    password: String,
    #[serde(default)]
    role: Option<String>,
}

impl RegisterRequestBody {
    fn into_request(self) -> RegisterUserRequest {
        RegisterUserRequest {
            email: self.email,
            name: self.name,
            password: self.password,
            role: self.role,
        }
    }
}
