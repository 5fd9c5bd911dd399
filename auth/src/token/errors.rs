use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    /// Signing configuration is incomplete. Issuance must fail with
    /// this rather than sign a token with missing issuer or audience.
    #[error("Token signing is not configured: missing {0}")]
    Misconfigured(&'static str),

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Failed to decode token: {0}")]
    DecodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,
}
