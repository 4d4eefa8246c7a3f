//! The entity store: every record collection behind its own lock.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use homecare_domain::catalog::{Service, ServiceCategory};
use homecare_domain::contact::ContactMessage;
use homecare_domain::id::{CategoryId, ContactMessageId, PlanId, ServiceId, UserId};
use homecare_domain::plan::SubscriptionPlan;
use homecare_domain::profile::{Profile, Uid};
use homecare_domain::user::User;

use crate::error::StorageError;
use crate::table::Table;

struct Inner {
    categories: Mutex<Table<CategoryId, ServiceCategory>>,
    services: Mutex<Table<ServiceId, Service>>,
    plans: Mutex<Table<PlanId, SubscriptionPlan>>,
    contact_messages: Mutex<Table<ContactMessageId, ContactMessage>>,
    users: Mutex<Table<UserId, User>>,
    profiles: Mutex<HashMap<Uid, Profile>>,
}

/// Handle to a process-local entity store.
///
/// Cloning is cheap and every clone sees the same data. Each test should
/// build its own store with [`MemoryStore::new`]; there is no global one.
#[derive(Clone)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<'a, T>(
    mutex: &'a Mutex<T>,
    table: &'static str,
) -> Result<MutexGuard<'a, T>, StorageError> {
    mutex.lock().map_err(|_| {
        tracing::error!(table, "table lock poisoned");
        StorageError::Poisoned { table }
    })
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                categories: Mutex::new(Table::new("service_categories")),
                services: Mutex::new(Table::new("services")),
                plans: Mutex::new(Table::new("subscription_plans")),
                contact_messages: Mutex::new(Table::new("contact_messages")),
                users: Mutex::new(Table::new("users")),
                profiles: Mutex::new(HashMap::new()),
            }),
        }
    }

    pub(crate) fn categories(
        &self,
    ) -> Result<MutexGuard<'_, Table<CategoryId, ServiceCategory>>, StorageError> {
        lock(&self.inner.categories, "service_categories")
    }

    pub(crate) fn services(&self) -> Result<MutexGuard<'_, Table<ServiceId, Service>>, StorageError> {
        lock(&self.inner.services, "services")
    }

    pub(crate) fn plans(
        &self,
    ) -> Result<MutexGuard<'_, Table<PlanId, SubscriptionPlan>>, StorageError> {
        lock(&self.inner.plans, "subscription_plans")
    }

    pub(crate) fn contact_messages(
        &self,
    ) -> Result<MutexGuard<'_, Table<ContactMessageId, ContactMessage>>, StorageError> {
        lock(&self.inner.contact_messages, "contact_messages")
    }

    pub(crate) fn users(&self) -> Result<MutexGuard<'_, Table<UserId, User>>, StorageError> {
        lock(&self.inner.users, "users")
    }

    pub(crate) fn profiles(&self) -> Result<MutexGuard<'_, HashMap<Uid, Profile>>, StorageError> {
        lock(&self.inner.profiles, "profiles")
    }
}
