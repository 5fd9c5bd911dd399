//! Authentication primitives for the users service.
//!
//! Provides the two security-sensitive building blocks the service
//! depends on:
//! - Password hashing and verification (Argon2id, salted, PHC format)
//! - Signed token issuance and validation (JWT, HS256)
//!
//! Both are pure CPU-bound operations with no I/O; the service wires
//! them into its flows and keeps all orchestration logic out of here.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest));
//! assert!(!hasher.verify("not_my_password", &digest));
//! ```
//!
//! ## Token Issuance
//! ```
//! use auth::{TokenIssuer, TokenSettings, TokenIdentity};
//!
//! let issuer = TokenIssuer::new(TokenSettings {
//!     secret: "secret_key_at_least_32_bytes_long!".into(),
//!     issuer: "users-api".into(),
//!     audience: "users-api-clients".into(),
//! });
//!
//! let token = issuer
//!     .issue(&TokenIdentity {
//!         id: "c1f3".into(),
//!         email: "alice@example.com".into(),
//!         name: "Alice".into(),
//!         role: "User".into(),
//!     })
//!     .unwrap();
//!
//! let claims = issuer.decode(&token).unwrap();
//! assert_eq!(claims.sub, "c1f3");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenIdentity;
pub use token::TokenIssuer;
pub use token::TokenSettings;
