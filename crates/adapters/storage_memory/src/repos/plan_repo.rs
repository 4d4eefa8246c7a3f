//! In-memory implementation of [`PlanRepository`].

use std::future::Future;

use homecare_app::ports::PlanRepository;
use homecare_domain::error::HomecareError;
use homecare_domain::id::PlanId;
use homecare_domain::plan::{NewSubscriptionPlan, SubscriptionPlan};

use crate::error::StorageError;
use crate::store::MemoryStore;

/// Subscription-plan repository backed by a [`MemoryStore`].
pub struct MemoryPlanRepository {
    store: MemoryStore,
}

impl MemoryPlanRepository {
    /// Create a new repository over the given store.
    #[must_use]
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    fn insert(&self, plan: NewSubscriptionPlan) -> Result<SubscriptionPlan, StorageError> {
        let mut table = self.store.plans()?;
        let id = table.next_id()?;
        let stored = plan.into_plan(id);
        table.put(id, stored.clone());
        Ok(stored)
    }
}

impl PlanRepository for MemoryPlanRepository {
    fn create(
        &self,
        plan: NewSubscriptionPlan,
    ) -> impl Future<Output = Result<SubscriptionPlan, HomecareError>> + Send {
        let result = self.insert(plan);
        async move { result.map_err(HomecareError::from) }
    }

    fn get_by_id(
        &self,
        id: PlanId,
    ) -> impl Future<Output = Result<Option<SubscriptionPlan>, HomecareError>> + Send {
        let result = self.store.plans().map(|table| table.get(id));
        async move { result.map_err(HomecareError::from) }
    }

    fn get_all(
        &self,
    ) -> impl Future<Output = Result<Vec<SubscriptionPlan>, HomecareError>> + Send {
        let result = self.store.plans().map(|table| table.all());
        async move { result.map_err(HomecareError::from) }
    }
}
