use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use uuid::Uuid;

use super::claims::Claims;
use super::errors::TokenError;

/// Fixed token lifetime.
const TOKEN_LIFETIME_HOURS: i64 = 1;

/// Process-wide signing configuration, resolved once at startup and
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct TokenSettings {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
}

/// Identity embedded into an issued token.
#[derive(Debug, Clone)]
pub struct TokenIdentity {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

/// Issues and validates signed tokens (JWT, HS256).
///
/// Issuance checks the signing configuration on every call: a blank
/// secret, issuer, or audience surfaces as `TokenError::Misconfigured`
/// instead of producing a token that downstream validation would
/// reject.
pub struct TokenIssuer {
    settings: TokenSettings,
}

impl TokenIssuer {
    pub fn new(settings: TokenSettings) -> Self {
        Self { settings }
    }

    /// Issue a signed token for the given identity.
    ///
    /// The claim set carries subject, email, name, role, a fresh `jti`,
    /// `iat`, `exp = iat + 1h`, and the configured issuer and audience.
    ///
    /// # Errors
    /// * `Misconfigured` - Secret, issuer, or audience is absent
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, identity: &TokenIdentity) -> Result<String, TokenError> {
        self.checked_settings()?;

        let now = Utc::now();
        let claims = Claims {
            sub: identity.id.clone(),
            email: identity.email.clone(),
            name: identity.name.clone(),
            role: identity.role.clone(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_LIFETIME_HOURS)).timestamp(),
            iss: self.settings.issuer.clone(),
            aud: self.settings.audience.clone(),
        };

        let header = Header::new(Algorithm::HS256);
        let key = EncodingKey::from_secret(self.settings.secret.as_bytes());

        encode(&header, &claims, &key).map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Validate a presented token and return its claims.
    ///
    /// Checks signature, issuer, audience, and expiry.
    ///
    /// # Errors
    /// * `Misconfigured` - Signing configuration is incomplete
    /// * `TokenExpired` - Token is past its `exp` claim
    /// * `DecodingFailed` - Signature invalid or token malformed
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        self.checked_settings()?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.settings.issuer]);
        validation.set_audience(&[&self.settings.audience]);

        let key = DecodingKey::from_secret(self.settings.secret.as_bytes());

        let token_data = decode::<Claims>(token, &key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                _ => TokenError::DecodingFailed(e.to_string()),
            }
        })?;

        Ok(token_data.claims)
    }

    fn checked_settings(&self) -> Result<(), TokenError> {
        if self.settings.secret.is_empty() {
            return Err(TokenError::Misconfigured("secret"));
        }
        if self.settings.issuer.is_empty() {
            return Err(TokenError::Misconfigured("issuer"));
        }
        if self.settings.audience.is_empty() {
            return Err(TokenError::Misconfigured("audience"));
        }
        Ok(())
    }
}
