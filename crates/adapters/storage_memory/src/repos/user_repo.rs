//! In-memory implementation of [`UserRepository`].

use std::future::Future;

use homecare_app::ports::UserRepository;
use homecare_domain::error::{ConflictError, HomecareError};
use homecare_domain::id::UserId;
use homecare_domain::user::{NewUser, User};

use crate::store::MemoryStore;

/// User repository backed by a [`MemoryStore`].
///
/// The username check and the insert happen under the same lock, so two
/// racing registrations for one username cannot both succeed.
pub struct MemoryUserRepository {
    store: MemoryStore,
}

impl MemoryUserRepository {
    /// Create a new repository over the given store.
    #[must_use]
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    fn insert(&self, user: NewUser) -> Result<User, HomecareError> {
        let mut table = self.store.users()?;
        if table.values().any(|u| u.username == user.username) {
            return Err(ConflictError::UsernameTaken(user.username).into());
        }
        let id = table.next_id()?;
        let stored = user.into_user(id);
        table.put(id, stored.clone());
        Ok(stored)
    }

    fn lookup(&self, username: &str) -> Result<Option<User>, HomecareError> {
        let table = self.store.users()?;
        Ok(table.values().find(|u| u.username == username).cloned())
    }
}

impl UserRepository for MemoryUserRepository {
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, HomecareError>> + Send {
        let result = self.insert(user);
        async move { result }
    }

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, HomecareError>> + Send {
        let result = self.store.users().map(|table| table.get(id));
        async move { result.map_err(HomecareError::from) }
    }

    fn find_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Option<User>, HomecareError>> + Send {
        let result = self.lookup(username);
        async move { result }
    }

    fn count(&self) -> impl Future<Output = Result<usize, HomecareError>> + Send {
        let result = self.store.users().map(|table| table.len());
        async move { result.map_err(HomecareError::from) }
    }
}
