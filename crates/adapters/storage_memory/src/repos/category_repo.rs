//! In-memory implementation of [`CategoryRepository`].

use std::future::Future;

use homecare_app::ports::CategoryRepository;
use homecare_domain::catalog::{NewServiceCategory, ServiceCategory};
use homecare_domain::error::HomecareError;
use homecare_domain::id::CategoryId;

use crate::error::StorageError;
use crate::store::MemoryStore;

/// Service-category repository backed by a [`MemoryStore`].
pub struct MemoryCategoryRepository {
    store: MemoryStore,
}

impl MemoryCategoryRepository {
    /// Create a new repository over the given store.
    #[must_use]
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    fn insert(&self, category: NewServiceCategory) -> Result<ServiceCategory, StorageError> {
        let mut table = self.store.categories()?;
        let id = table.next_id()?;
        let stored = category.into_category(id);
        table.put(id, stored.clone());
        Ok(stored)
    }
}

impl CategoryRepository for MemoryCategoryRepository {
    fn create(
        &self,
        category: NewServiceCategory,
    ) -> impl Future<Output = Result<ServiceCategory, HomecareError>> + Send {
        let result = self.insert(category);
        async move { result.map_err(HomecareError::from) }
    }

    fn get_by_id(
        &self,
        id: CategoryId,
    ) -> impl Future<Output = Result<Option<ServiceCategory>, HomecareError>> + Send {
        let result = self.store.categories().map(|table| table.get(id));
        async move { result.map_err(HomecareError::from) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<ServiceCategory>, HomecareError>> + Send {
        let result = self.store.categories().map(|table| table.all());
        async move { result.map_err(HomecareError::from) }
    }
}
