use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenIdentity;
use auth::TokenIssuer;

use crate::domain::user::events::UserCreatedEvent;
use crate::domain::user::models::LoginRequest;
use crate::domain::user::models::RegisterUserRequest;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::validation;
use crate::user::errors::UserError;
use crate::user::identity::RequestIdentity;
use crate::user::models::UserResponse;
use crate::user::models::UserRole;
use crate::user::ports::EventPublisher;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for identity operations.
///
/// Orchestrates validation, authorization, hashing, persistence, and
/// event emission. Holds no per-request state; the signing
/// configuration inside the token issuer is read-only after startup.
pub struct UserService<UR, EP>
where
    UR: UserRepository,
    EP: EventPublisher,
{
    repository: Arc<UR>,
    event_publisher: Arc<EP>,
    password_hasher: PasswordHasher,
    token_issuer: Arc<TokenIssuer>,
}

impl<UR, EP> UserService<UR, EP>
where
    UR: UserRepository,
    EP: EventPublisher,
{
    pub fn new(repository: Arc<UR>, event_publisher: Arc<EP>, token_issuer: Arc<TokenIssuer>) -> Self {
        Self {
            repository,
            event_publisher,
            password_hasher: PasswordHasher::new(),
            token_issuer,
        }
    }
}

#[async_trait]
impl<UR, EP> UserServicePort for UserService<UR, EP>
where
    UR: UserRepository,
    EP: EventPublisher,
{
    async fn register(
        &self,
        request: RegisterUserRequest,
        identity: &RequestIdentity,
    ) -> Result<UserResponse, UserError> {
        tracing::info!(email = %request.email, "registering user");

        // Every rule is evaluated; the caller gets the complete
        // failure set in one pass. Nothing below runs until the
        // request is clean.
        let failures = validation::validate(&request);
        if !failures.is_empty() {
            return Err(UserError::Validation(failures));
        }

        if self.repository.email_exists(&request.email).await? {
            tracing::warn!(email = %request.email, "registration failed: email already exists");
            return Err(UserError::EmailAlreadyExists(request.email));
        }

        // Validation guarantees the role string parses, so a miss here
        // falls back to the default rather than panicking.
        let role = request
            .role
            .as_deref()
            .and_then(|s| UserRole::from_str(s).ok())
            .unwrap_or_default();

        // An administrator account can only be created by an already
        // authenticated administrator. Plain accounts need no privilege.
        if role == UserRole::Administrator {
            if !identity.is_admin() {
                tracing::warn!(
                    email = %request.email,
                    "non-admin caller attempted to create an admin account"
                );
                return Err(UserError::ForbiddenAdminCreation);
            }
            tracing::info!("admin caller creating another admin account");
        }

        let password_hash = self.password_hasher.hash(&request.password)?;

        let user = User::new(request.email, request.name, password_hash, role);

        // A duplicate insert racing past the pre-check maps to the
        // same conflict error inside the repository.
        let user = self.repository.add(user).await?;

        let event = UserCreatedEvent::new(&user);
        self.event_publisher.publish_user_created(&event).await?;

        tracing::info!(user_id = %user.id, "user registered");

        Ok(UserResponse::from(&user))
    }

    async fn login(&self, request: LoginRequest) -> Result<String, UserError> {
        tracing::info!(email = %request.email, "logging in user");

        let user = self.repository.find_by_email(&request.email).await?;

        // Unknown email and wrong password are indistinguishable to
        // the caller.
        let user = match user {
            Some(user) if self.password_hasher.verify(&request.password, &user.password_hash) => {
                user
            }
            _ => {
                tracing::warn!(email = %request.email, "login failed: invalid credentials");
                return Err(UserError::InvalidCredentials);
            }
        };

        let token = self.token_issuer.issue(&TokenIdentity {
            id: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role.to_string(),
        })?;

        tracing::info!(user_id = %user.id, "user logged in");

        Ok(token)
    }

    async fn get_user(&self, id: &UserId) -> Result<UserResponse, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(|ref user| UserResponse::from(user))
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn update_role(&self, id: &UserId, role: UserRole) -> Result<(), UserError> {
        tracing::info!(user_id = %id, role = %role, "updating user role");

        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(user_id = %id, "role update failed: user not found");
                UserError::NotFound(id.to_string())
            })?;

        user.update_role(role);
        self.repository.update(user).await?;

        tracing::info!(user_id = %id, role = %role, "user role updated");

        Ok(())
    }
}
