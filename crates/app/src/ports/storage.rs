//! Storage ports: repository traits for the entity store.
//!
//! The store assigns identifiers: every `create` takes the insertable shape
//! and returns the stored record with its new id. Lookups by id return
//! `Ok(None)` for an absent record; `Err` is reserved for store failures.
//! `get_all` and the `find_*` queries return records in insertion order.

use std::future::Future;

use homecare_domain::catalog::{NewService, NewServiceCategory, Service, ServiceCategory};
use homecare_domain::contact::{ContactMessage, NewContactMessage};
use homecare_domain::error::HomecareError;
use homecare_domain::id::{CategoryId, ContactMessageId, PlanId, ServiceId, UserId};
use homecare_domain::plan::{NewSubscriptionPlan, SubscriptionPlan};
use homecare_domain::user::{NewUser, User};

/// Repository for [`ServiceCategory`] records.
pub trait CategoryRepository {
    fn create(
        &self,
        category: NewServiceCategory,
    ) -> impl Future<Output = Result<ServiceCategory, HomecareError>> + Send;

    fn get_by_id(
        &self,
        id: CategoryId,
    ) -> impl Future<Output = Result<Option<ServiceCategory>, HomecareError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<ServiceCategory>, HomecareError>> + Send;
}

/// Repository for [`Service`] records.
pub trait ServiceRepository {
    fn create(
        &self,
        service: NewService,
    ) -> impl Future<Output = Result<Service, HomecareError>> + Send;

    fn get_by_id(
        &self,
        id: ServiceId,
    ) -> impl Future<Output = Result<Option<Service>, HomecareError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Service>, HomecareError>> + Send;

    /// Services whose `category_id` equals `category_id`. The category
    /// itself does not need to exist.
    fn find_by_category(
        &self,
        category_id: CategoryId,
    ) -> impl Future<Output = Result<Vec<Service>, HomecareError>> + Send;

    /// Services flagged as featured.
    fn find_featured(&self) -> impl Future<Output = Result<Vec<Service>, HomecareError>> + Send;
}

/// Repository for [`SubscriptionPlan`] records.
pub trait PlanRepository {
    fn create(
        &self,
        plan: NewSubscriptionPlan,
    ) -> impl Future<Output = Result<SubscriptionPlan, HomecareError>> + Send;

    fn get_by_id(
        &self,
        id: PlanId,
    ) -> impl Future<Output = Result<Option<SubscriptionPlan>, HomecareError>> + Send;

    fn get_all(&self)
    -> impl Future<Output = Result<Vec<SubscriptionPlan>, HomecareError>> + Send;
}

/// Append-only repository for [`ContactMessage`] records.
pub trait ContactMessageRepository {
    /// Store a message, stamping its id and `created_at`.
    fn append(
        &self,
        message: NewContactMessage,
    ) -> impl Future<Output = Result<ContactMessage, HomecareError>> + Send;

    fn get_by_id(
        &self,
        id: ContactMessageId,
    ) -> impl Future<Output = Result<Option<ContactMessage>, HomecareError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<ContactMessage>, HomecareError>> + Send;
}

/// Repository for [`User`] records.
pub trait UserRepository {
    /// Store a new user.
    ///
    /// Implementations must reject a username that is already taken with
    /// [`HomecareError::Conflict`] without storing anything, even when two
    /// inserts race.
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, HomecareError>> + Send;

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, HomecareError>> + Send;

    /// First user with exactly this username.
    fn find_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Option<User>, HomecareError>> + Send;

    /// Number of stored users.
    fn count(&self) -> impl Future<Output = Result<usize, HomecareError>> + Send;
}
