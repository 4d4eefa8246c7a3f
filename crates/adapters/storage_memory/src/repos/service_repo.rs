//! In-memory implementation of [`ServiceRepository`].

use std::future::Future;

use homecare_app::ports::ServiceRepository;
use homecare_domain::catalog::{NewService, Service};
use homecare_domain::error::HomecareError;
use homecare_domain::id::{CategoryId, ServiceId};

use crate::error::StorageError;
use crate::store::MemoryStore;

/// Service repository backed by a [`MemoryStore`].
///
/// The category a service points at is not checked; dangling references are
/// stored as given.
pub struct MemoryServiceRepository {
    store: MemoryStore,
}

impl MemoryServiceRepository {
    /// Create a new repository over the given store.
    #[must_use]
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    fn insert(&self, service: NewService) -> Result<Service, StorageError> {
        let mut table = self.store.services()?;
        let id = table.next_id()?;
        let stored = service.into_service(id);
        table.put(id, stored.clone());
        Ok(stored)
    }

    fn filter(&self, predicate: impl Fn(&Service) -> bool) -> Result<Vec<Service>, StorageError> {
        let table = self.store.services()?;
        Ok(table.values().filter(|s| predicate(s)).cloned().collect())
    }
}

impl ServiceRepository for MemoryServiceRepository {
    fn create(
        &self,
        service: NewService,
    ) -> impl Future<Output = Result<Service, HomecareError>> + Send {
        let result = self.insert(service);
        async move { result.map_err(HomecareError::from) }
    }

    fn get_by_id(
        &self,
        id: ServiceId,
    ) -> impl Future<Output = Result<Option<Service>, HomecareError>> + Send {
        let result = self.store.services().map(|table| table.get(id));
        async move { result.map_err(HomecareError::from) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Service>, HomecareError>> + Send {
        let result = self.store.services().map(|table| table.all());
        async move { result.map_err(HomecareError::from) }
    }

    fn find_by_category(
        &self,
        category_id: CategoryId,
    ) -> impl Future<Output = Result<Vec<Service>, HomecareError>> + Send {
        let result = self.filter(|s| s.category_id == category_id);
        async move { result.map_err(HomecareError::from) }
    }

    fn find_featured(&self) -> impl Future<Output = Result<Vec<Service>, HomecareError>> + Send {
        let result = self.filter(|s| s.featured);
        async move { result.map_err(HomecareError::from) }
    }
}
