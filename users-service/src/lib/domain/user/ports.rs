use async_trait::async_trait;

use crate::domain::user::events::UserCreatedEvent;
use crate::domain::user::models::LoginRequest;
use crate::domain::user::models::RegisterUserRequest;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::EventPublisherError;
use crate::user::errors::UserError;
use crate::user::identity::RequestIdentity;
use crate::user::models::UserResponse;
use crate::user::models::UserRole;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user with validated credentials.
    ///
    /// Runs every validation rule, checks email uniqueness, gates
    /// administrator creation on the caller's identity, hashes the
    /// password, persists, and publishes a UserCreated event.
    ///
    /// # Errors
    /// * `Validation` - One or more rules failed (all reported)
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `ForbiddenAdminCreation` - Non-admin requested an admin account
    /// * `Publish` - Persisted, but downstream consumers were not notified
    /// * `DatabaseError` - Repository operation failed
    async fn register(
        &self,
        request: RegisterUserRequest,
        identity: &RequestIdentity,
    ) -> Result<UserResponse, UserError>;

    /// Authenticate by email and password, returning a signed token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password, merged
    /// * `Configuration` - Token signing is not configured
    /// * `DatabaseError` - Repository operation failed
    async fn login(&self, request: LoginRequest) -> Result<String, UserError>;

    /// Retrieve the outward projection of a user by id.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Repository operation failed
    async fn get_user(&self, id: &UserId) -> Result<UserResponse, UserError>;

    /// Change a user's role, refreshing its update timestamp.
    ///
    /// Authorization for this operation is caller-side policy; the
    /// flow itself performs no further privilege check.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Repository operation failed
    async fn update_role(&self, id: &UserId, role: UserRole) -> Result<(), UserError>;
}

/// Persistence operations for the user aggregate.
///
/// "Not found" and "does not exist" are normal outcomes (`None` /
/// `false`), not errors; `UserError` is reserved for transient
/// infrastructure failures and the uniqueness conflict on insert.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// A unique violation on email surfaces as `EmailAlreadyExists`,
    /// covering the race where a duplicate slips past the pre-check.
    async fn add(&self, user: User) -> Result<User, UserError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    async fn email_exists(&self, email: &str) -> Result<bool, UserError>;

    /// Update an existing user.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, user: User) -> Result<User, UserError>;
}

/// Event publishing for domain events.
#[async_trait]
pub trait EventPublisher: Send + Sync + 'static {
    /// Publish the user creation event.
    ///
    /// Failure propagates to the caller: the stored user is the source
    /// of truth, but a registration whose event was lost must not be
    /// reported as a full success.
    async fn publish_user_created(
        &self,
        event: &UserCreatedEvent,
    ) -> Result<(), EventPublisherError>;
}
