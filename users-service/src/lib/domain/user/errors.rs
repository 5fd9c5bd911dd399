use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for role parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserRoleError {
    #[error("Unknown role: {0}")]
    Unknown(String),
}

/// A single registration rule violation.
///
/// Every variant carries a stable machine-readable code so callers can
/// act on failures without parsing descriptions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("Invalid email format.")]
    InvalidEmail,

    #[error("Name is required.")]
    NameRequired,

    #[error(
        "Password does not meet safety requirements. Minimum 8 characters, \
         including uppercase, lowercase, digit, and special character."
    )]
    UnsafePassword,

    #[error("Requested role is not recognized.")]
    UnknownRole,
}

impl ValidationFailure {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationFailure::InvalidEmail => "user.email.invalid",
            ValidationFailure::NameRequired => "user.name.required",
            ValidationFailure::UnsafePassword => "user.password.unsafe",
            ValidationFailure::UnknownRole => "user.role.unknown",
        }
    }
}

/// Error for event publishing operations
#[derive(Debug, Clone, Error)]
pub enum EventPublisherError {
    #[error("Failed to serialize event: {0}")]
    SerializationFailed(String),

    #[error("Failed to publish event to broker: {0}")]
    PublishFailed(String),
}

/// Top-level error for all user-related operations.
///
/// The first five variants are business outcomes surfaced to callers
/// as 4xx-class signals; the rest are infrastructure or configuration
/// failures surfaced as 5xx without internal detail.
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("Registration request is invalid")]
    Validation(Vec<ValidationFailure>),

    #[error("Email already registered: {0}")]
    EmailAlreadyExists(String),

    #[error("Only administrators can create admin accounts")]
    ForbiddenAdminCreation,

    #[error("User not found: {0}")]
    NotFound(String),

    // Single variant for both unknown email and wrong password, so the
    // caller cannot probe which emails are registered.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Signing configuration is incomplete: {0}")]
    Configuration(String),

    #[error("Token generation failed: {0}")]
    Token(String),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Event publishing failed: {0}")]
    Publish(#[from] EventPublisherError),
}

impl From<auth::TokenError> for UserError {
    fn from(err: auth::TokenError) -> Self {
        match err {
            auth::TokenError::Misconfigured(field) => {
                UserError::Configuration(field.to_string())
            }
            other => UserError::Token(other.to_string()),
        }
    }
}
