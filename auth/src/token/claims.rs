use serde::Deserialize;
use serde::Serialize;

/// Claim set carried by every issued token.
///
/// All fields are required: an issued token always identifies the
/// subject, carries its role for authorization decisions, and is
/// bounded by `exp`. `jti` is unique per issuance so two tokens for
/// the same user never compare equal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Email of the subject
    pub email: String,

    /// Display name of the subject
    pub name: String,

    /// Role of the subject, canonical name ("User" or "Administrator")
    pub role: String,

    /// Unique token identifier (fresh UUID per issuance)
    pub jti: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,
}
