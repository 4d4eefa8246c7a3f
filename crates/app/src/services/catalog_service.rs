//! Catalog service: use-cases for service categories and services.

use homecare_domain::catalog::{NewService, NewServiceCategory, Service, ServiceCategory};
use homecare_domain::error::HomecareError;
use homecare_domain::id::{CategoryId, ServiceId};

use crate::ports::{CategoryRepository, ServiceRepository};

/// Application service for the storefront catalog.
///
/// Lookups by id return `Ok(None)` when the record is absent; callers decide
/// what absence means for them.
pub struct CatalogService<CR, SR> {
    categories: CR,
    services: SR,
}

impl<CR, SR> CatalogService<CR, SR>
where
    CR: CategoryRepository,
    SR: ServiceRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(categories: CR, services: SR) -> Self {
        Self {
            categories,
            services,
        }
    }

    /// List all categories in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_service_categories(&self) -> Result<Vec<ServiceCategory>, HomecareError> {
        self.categories.get_all().await
    }

    /// Look up a category by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_service_category(
        &self,
        id: CategoryId,
    ) -> Result<Option<ServiceCategory>, HomecareError> {
        self.categories.get_by_id(id).await
    }

    /// Store a new category.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, category), fields(category_name = %category.name))]
    pub async fn create_service_category(
        &self,
        category: NewServiceCategory,
    ) -> Result<ServiceCategory, HomecareError> {
        self.categories.create(category).await
    }

    /// List all services in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_services(&self) -> Result<Vec<Service>, HomecareError> {
        self.services.get_all().await
    }

    /// Look up a service by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_service(&self, id: ServiceId) -> Result<Option<Service>, HomecareError> {
        self.services.get_by_id(id).await
    }

    /// Services in the given category, empty when none match.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_services_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<Service>, HomecareError> {
        self.services.find_by_category(category_id).await
    }

    /// Services flagged as featured.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_featured_services(&self) -> Result<Vec<Service>, HomecareError> {
        self.services.find_featured().await
    }

    /// Store a new service. The category reference is not checked.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, service), fields(service_name = %service.name))]
    pub async fn create_service(&self, service: NewService) -> Result<Service, HomecareError> {
        self.services.create(service).await
    }

    /// Resolve the category a service belongs to.
    ///
    /// A dangling `category_id` yields `Ok(None)`, same as an unknown id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn category_of(
        &self,
        service: &Service,
    ) -> Result<Option<ServiceCategory>, HomecareError> {
        self.categories.get_by_id(service.category_id).await
    }
}
