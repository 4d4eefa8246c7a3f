//! Shared application state for axum handlers.

use std::sync::Arc;

use homecare_app::ports::{
    CategoryRepository, ContactMessageRepository, PlanRepository, ServiceRepository,
    UserRepository,
};
use homecare_app::services::catalog_service::CatalogService;
use homecare_app::services::contact_service::ContactService;
use homecare_app::services::plan_service::PlanService;
use homecare_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<CR, SR, PR, MR, UR> {
    /// Categories and services.
    pub catalog_service: Arc<CatalogService<CR, SR>>,
    /// Subscription plans.
    pub plan_service: Arc<PlanService<PR>>,
    /// Contact form submissions.
    pub contact_service: Arc<ContactService<MR>>,
    /// Account registration.
    pub user_service: Arc<UserService<UR>>,
}

impl<CR, SR, PR, MR, UR> Clone for AppState<CR, SR, PR, MR, UR> {
    fn clone(&self) -> Self {
        Self {
            catalog_service: Arc::clone(&self.catalog_service),
            plan_service: Arc::clone(&self.plan_service),
            contact_service: Arc::clone(&self.contact_service),
            user_service: Arc::clone(&self.user_service),
        }
    }
}

impl<CR, SR, PR, MR, UR> AppState<CR, SR, PR, MR, UR>
where
    CR: CategoryRepository + Send + Sync + 'static,
    SR: ServiceRepository + Send + Sync + 'static,
    PR: PlanRepository + Send + Sync + 'static,
    MR: ContactMessageRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        catalog_service: CatalogService<CR, SR>,
        plan_service: PlanService<PR>,
        contact_service: ContactService<MR>,
        user_service: UserService<UR>,
    ) -> Self {
        Self {
            catalog_service: Arc::new(catalog_service),
            plan_service: Arc::new(plan_service),
            contact_service: Arc::new(contact_service),
            user_service: Arc::new(user_service),
        }
    }

    /// Create a new application state from pre-wrapped `Arc` services.
    ///
    /// Use this when the services were already used before the router is
    /// built, e.g. by the seeder.
    pub fn from_arcs(
        catalog_service: Arc<CatalogService<CR, SR>>,
        plan_service: Arc<PlanService<PR>>,
        contact_service: Arc<ContactService<MR>>,
        user_service: Arc<UserService<UR>>,
    ) -> Self {
        Self {
            catalog_service,
            plan_service,
            contact_service,
            user_service,
        }
    }
}
