//! Plan service: use-cases for subscription plans.

use homecare_domain::error::HomecareError;
use homecare_domain::id::PlanId;
use homecare_domain::plan::{NewSubscriptionPlan, SubscriptionPlan};

use crate::ports::PlanRepository;

/// Application service for subscription plans.
pub struct PlanService<R> {
    repo: R,
}

impl<R: PlanRepository> PlanService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all plans in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_subscription_plans(&self) -> Result<Vec<SubscriptionPlan>, HomecareError> {
        self.repo.get_all().await
    }

    /// Look up a plan by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_subscription_plan(
        &self,
        id: PlanId,
    ) -> Result<Option<SubscriptionPlan>, HomecareError> {
        self.repo.get_by_id(id).await
    }

    /// Store a new plan.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, plan), fields(plan_name = %plan.name))]
    pub async fn create_subscription_plan(
        &self,
        plan: NewSubscriptionPlan,
    ) -> Result<SubscriptionPlan, HomecareError> {
        self.repo.create(plan).await
    }
}
