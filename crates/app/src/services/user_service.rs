//! User service: account registration and lookup.

use homecare_domain::error::{ConflictError, HomecareError};
use homecare_domain::id::UserId;
use homecare_domain::user::{NewUser, User};

use crate::ports::UserRepository;

/// Application service for user accounts.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Look up a user by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_user(&self, id: UserId) -> Result<Option<User>, HomecareError> {
        self.repo.get_by_id(id).await
    }

    /// First user with exactly this username.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, HomecareError> {
        self.repo.find_by_username(username).await
    }

    /// Register a new user.
    ///
    /// The returned record still carries the password.
    ///
    /// # Errors
    ///
    /// Returns [`HomecareError::Conflict`] when the username is already
    /// taken (nothing is stored in that case), or a storage error from the
    /// repository.
    #[tracing::instrument(skip(self, user), fields(username = %user.username))]
    pub async fn create_user(&self, user: NewUser) -> Result<User, HomecareError> {
        if self.repo.find_by_username(&user.username).await?.is_some() {
            tracing::debug!("username already registered");
            return Err(ConflictError::UsernameTaken(user.username).into());
        }
        let created = self.repo.create(user).await?;
        tracing::info!(user_id = %created.id, "user registered");
        Ok(created)
    }
}
