use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::user::errors::UserIdError;
use crate::user::errors::UserRoleError;

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Role of a user account.
///
/// Parsing is case-insensitive; `Display` yields the canonical name
/// used in token claims and responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRole {
    #[default]
    User,
    Administrator,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "User",
            UserRole::Administrator => "Administrator",
        }
    }
}

impl FromStr for UserRole {
    type Err = UserRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("user") {
            Ok(UserRole::User)
        } else if s.eq_ignore_ascii_case("administrator") {
            Ok(UserRole::Administrator)
        } else {
            Err(UserRoleError::Unknown(s.to_string()))
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User aggregate entity.
///
/// `email` is immutable after creation (no update path exists); the
/// password hash is produced only by the password hasher and never
/// equals the plaintext. The only mutation in scope is a role change,
/// which refreshes `updated_at`.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Construct a new user with a fresh identifier and UTC timestamps.
    pub fn new(email: String, name: String, password_hash: String, role: UserRole) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            email,
            name,
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Change the role, refreshing `updated_at`.
    pub fn update_role(&mut self, role: UserRole) {
        self.role = role;
        self.updated_at = Utc::now();
    }
}

/// Registration input as received from the caller.
///
/// Fields are raw strings; the validator reports every rule violation
/// in one pass before any of them are acted upon. `role` is optional
/// and defaults to `User` when absent.
#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: Option<String>,
}

/// Login input: email plus plaintext password.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Outward projection of a user.
///
/// Deliberately excludes the password hash; no response ever carries
/// password material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role.to_string(),
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing_is_case_insensitive() {
        assert_eq!("user".parse::<UserRole>().unwrap(), UserRole::User);
        assert_eq!("USER".parse::<UserRole>().unwrap(), UserRole::User);
        assert_eq!(
            "administrator".parse::<UserRole>().unwrap(),
            UserRole::Administrator
        );
        assert_eq!(
            "Administrator".parse::<UserRole>().unwrap(),
            UserRole::Administrator
        );
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        assert!("superuser".parse::<UserRole>().is_err());
        assert!("".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_new_user_timestamps_match() {
        let user = User::new(
            "alice@example.com".to_string(),
            "Alice".to_string(),
            "$argon2id$digest".to_string(),
            UserRole::User,
        );
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_update_role_refreshes_updated_at() {
        let mut user = User::new(
            "alice@example.com".to_string(),
            "Alice".to_string(),
            "$argon2id$digest".to_string(),
            UserRole::User,
        );
        let created_at = user.created_at;
        let before = user.updated_at;

        user.update_role(UserRole::Administrator);

        assert_eq!(user.role, UserRole::Administrator);
        assert_eq!(user.created_at, created_at);
        assert!(user.updated_at >= before);
    }

    #[test]
    fn test_response_projection_has_no_password_material() {
        let user = User::new(
            "alice@example.com".to_string(),
            "Alice".to_string(),
            "$argon2id$digest".to_string(),
            UserRole::User,
        );

        let response = UserResponse::from(&user);
        let body = serde_json::to_string(&response).unwrap();

        assert!(!body.contains("password"));
        assert!(!body.contains("$argon2id"));
        assert_eq!(response.role, "User");
    }
}
