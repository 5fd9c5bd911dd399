use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::user::errors::UserError;
use crate::user::errors::ValidationFailure;

pub mod get_current_user;
pub mod health;
pub mod login;
pub mod register;
pub mod update_role;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Outward error signal: one or more machine-readable codes with
/// human descriptions. Business outcomes map to 4xx; infrastructure
/// and configuration failures map to 500 without internal detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(Vec<ApiErrorData>),
    NotFound(ApiErrorData),
    Conflict(ApiErrorData),
    Unauthorized(ApiErrorData),
    Forbidden(ApiErrorData),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub code: String,
    pub message: String,
}

impl ApiErrorData {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<&ValidationFailure> for ApiErrorData {
    fn from(failure: &ValidationFailure) -> Self {
        Self::new(failure.code(), failure.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, errors) = match self {
            ApiError::InternalServerError(detail) => {
                // Logged here; the response body carries no internal detail.
                tracing::error!(%detail, "request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    vec![ApiErrorData::new("internal.error", "Internal server error.")],
                )
            }
            ApiError::UnprocessableEntity(errors) => (StatusCode::UNPROCESSABLE_ENTITY, errors),
            ApiError::NotFound(error) => (StatusCode::NOT_FOUND, vec![error]),
            ApiError::Conflict(error) => (StatusCode::CONFLICT, vec![error]),
            ApiError::Unauthorized(error) => (StatusCode::UNAUTHORIZED, vec![error]),
            ApiError::Forbidden(error) => (StatusCode::FORBIDDEN, vec![error]),
        };

        (
            status,
            Json(ApiResponseBody::new(status, ApiErrorBody { errors })),
        )
            .into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match &err {
            UserError::Validation(failures) => {
                ApiError::UnprocessableEntity(failures.iter().map(ApiErrorData::from).collect())
            }
            UserError::EmailAlreadyExists(_) => ApiError::Conflict(ApiErrorData::new(
                "user.email.already_exists",
                "Email already registered.",
            )),
            UserError::ForbiddenAdminCreation => ApiError::Forbidden(ApiErrorData::new(
                "user.admin_creation.forbidden",
                "Only administrators can create admin accounts.",
            )),
            UserError::NotFound(_) => {
                ApiError::NotFound(ApiErrorData::new("user.not_found", "User not found."))
            }
            UserError::InvalidCredentials => ApiError::Unauthorized(ApiErrorData::new(
                "user.credentials.invalid",
                "Invalid email or password.",
            )),
            UserError::Configuration(_)
            | UserError::Token(_)
            | UserError::Password(_)
            | UserError::DatabaseError(_)
            | UserError::Publish(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub errors: Vec<ApiErrorData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failures_keep_their_codes() {
        let err = UserError::Validation(vec![
            ValidationFailure::InvalidEmail,
            ValidationFailure::NameRequired,
            ValidationFailure::UnsafePassword,
        ]);

        let ApiError::UnprocessableEntity(errors) = ApiError::from(err) else {
            panic!("expected unprocessable entity");
        };

        let codes: Vec<&str> = errors.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(
            codes,
            vec![
                "user.email.invalid",
                "user.name.required",
                "user.password.unsafe"
            ]
        );
    }

    #[test]
    fn test_business_errors_map_to_4xx_variants() {
        assert!(matches!(
            ApiError::from(UserError::EmailAlreadyExists("a@b.c".into())),
            ApiError::Conflict(_)
        ));
        assert!(matches!(
            ApiError::from(UserError::ForbiddenAdminCreation),
            ApiError::Forbidden(_)
        ));
        assert!(matches!(
            ApiError::from(UserError::NotFound("id".into())),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from(UserError::InvalidCredentials),
            ApiError::Unauthorized(_)
        ));
    }

    #[test]
    fn test_infrastructure_errors_map_to_internal() {
        assert!(matches!(
            ApiError::from(UserError::DatabaseError("connection refused".into())),
            ApiError::InternalServerError(_)
        ));
        assert!(matches!(
            ApiError::from(UserError::Configuration("secret".into())),
            ApiError::InternalServerError(_)
        ));
    }
}
