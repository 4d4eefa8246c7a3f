//! In-memory implementation of [`ContactMessageRepository`].

use std::future::Future;

use homecare_app::ports::ContactMessageRepository;
use homecare_domain::contact::{ContactMessage, NewContactMessage};
use homecare_domain::error::HomecareError;
use homecare_domain::id::ContactMessageId;
use homecare_domain::time;

use crate::error::StorageError;
use crate::store::MemoryStore;

/// Append-only contact-message repository backed by a [`MemoryStore`].
pub struct MemoryContactMessageRepository {
    store: MemoryStore,
}

impl MemoryContactMessageRepository {
    /// Create a new repository over the given store.
    #[must_use]
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    fn insert(&self, message: NewContactMessage) -> Result<ContactMessage, StorageError> {
        let mut table = self.store.contact_messages()?;
        let id = table.next_id()?;
        let stored = message.into_message(id, time::now());
        table.put(id, stored.clone());
        Ok(stored)
    }
}

impl ContactMessageRepository for MemoryContactMessageRepository {
    fn append(
        &self,
        message: NewContactMessage,
    ) -> impl Future<Output = Result<ContactMessage, HomecareError>> + Send {
        let result = self.insert(message);
        async move { result.map_err(HomecareError::from) }
    }

    fn get_by_id(
        &self,
        id: ContactMessageId,
    ) -> impl Future<Output = Result<Option<ContactMessage>, HomecareError>> + Send {
        let result = self.store.contact_messages().map(|table| table.get(id));
        async move { result.map_err(HomecareError::from) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<ContactMessage>, HomecareError>> + Send {
        let result = self.store.contact_messages().map(|table| table.all());
        async move { result.map_err(HomecareError::from) }
    }
}
