#![cfg(test)]
//! Vec-backed port fakes shared by the service unit tests.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use homecare_domain::catalog::{NewService, NewServiceCategory, Service, ServiceCategory};
use homecare_domain::contact::{ContactMessage, NewContactMessage};
use homecare_domain::error::{ConflictError, HomecareError};
use homecare_domain::id::{CategoryId, ContactMessageId, PlanId, ServiceId, UserId};
use homecare_domain::plan::{NewSubscriptionPlan, SubscriptionPlan};
use homecare_domain::profile::{Profile, Uid};
use homecare_domain::user::{NewUser, User};

use crate::ports::{
    CategoryRepository, ContactMessageRepository, PlanRepository, ProfileStore,
    ServiceRepository, UserRepository,
};

fn next_id(len: usize) -> u32 {
    u32::try_from(len + 1).unwrap()
}

#[derive(Default)]
pub struct InMemoryCategoryRepo {
    rows: Mutex<Vec<ServiceCategory>>,
}

impl CategoryRepository for InMemoryCategoryRepo {
    fn create(
        &self,
        category: NewServiceCategory,
    ) -> impl Future<Output = Result<ServiceCategory, HomecareError>> + Send {
        let mut rows = self.rows.lock().unwrap();
        let stored = category.into_category(CategoryId::new(next_id(rows.len())));
        rows.push(stored.clone());
        async { Ok(stored) }
    }

    fn get_by_id(
        &self,
        id: CategoryId,
    ) -> impl Future<Output = Result<Option<ServiceCategory>, HomecareError>> + Send {
        let rows = self.rows.lock().unwrap();
        let found = rows.iter().find(|c| c.id == id).cloned();
        async { Ok(found) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<ServiceCategory>, HomecareError>> + Send {
        let rows = self.rows.lock().unwrap().clone();
        async { Ok(rows) }
    }
}

#[derive(Default)]
pub struct InMemoryServiceRepo {
    rows: Mutex<Vec<Service>>,
}

impl ServiceRepository for InMemoryServiceRepo {
    fn create(
        &self,
        service: NewService,
    ) -> impl Future<Output = Result<Service, HomecareError>> + Send {
        let mut rows = self.rows.lock().unwrap();
        let stored = service.into_service(ServiceId::new(next_id(rows.len())));
        rows.push(stored.clone());
        async { Ok(stored) }
    }

    fn get_by_id(
        &self,
        id: ServiceId,
    ) -> impl Future<Output = Result<Option<Service>, HomecareError>> + Send {
        let rows = self.rows.lock().unwrap();
        let found = rows.iter().find(|s| s.id == id).cloned();
        async { Ok(found) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Service>, HomecareError>> + Send {
        let rows = self.rows.lock().unwrap().clone();
        async { Ok(rows) }
    }

    fn find_by_category(
        &self,
        category_id: CategoryId,
    ) -> impl Future<Output = Result<Vec<Service>, HomecareError>> + Send {
        let rows = self.rows.lock().unwrap();
        let found: Vec<Service> = rows
            .iter()
            .filter(|s| s.category_id == category_id)
            .cloned()
            .collect();
        async { Ok(found) }
    }

    fn find_featured(&self) -> impl Future<Output = Result<Vec<Service>, HomecareError>> + Send {
        let rows = self.rows.lock().unwrap();
        let found: Vec<Service> = rows.iter().filter(|s| s.featured).cloned().collect();
        async { Ok(found) }
    }
}

#[derive(Default)]
pub struct InMemoryPlanRepo {
    rows: Mutex<Vec<SubscriptionPlan>>,
}

impl PlanRepository for InMemoryPlanRepo {
    fn create(
        &self,
        plan: NewSubscriptionPlan,
    ) -> impl Future<Output = Result<SubscriptionPlan, HomecareError>> + Send {
        let mut rows = self.rows.lock().unwrap();
        let stored = plan.into_plan(PlanId::new(next_id(rows.len())));
        rows.push(stored.clone());
        async { Ok(stored) }
    }

    fn get_by_id(
        &self,
        id: PlanId,
    ) -> impl Future<Output = Result<Option<SubscriptionPlan>, HomecareError>> + Send {
        let rows = self.rows.lock().unwrap();
        let found = rows.iter().find(|p| p.id == id).cloned();
        async { Ok(found) }
    }

    fn get_all(
        &self,
    ) -> impl Future<Output = Result<Vec<SubscriptionPlan>, HomecareError>> + Send {
        let rows = self.rows.lock().unwrap().clone();
        async { Ok(rows) }
    }
}

#[derive(Default)]
pub struct InMemoryContactRepo {
    rows: Mutex<Vec<ContactMessage>>,
}

impl ContactMessageRepository for InMemoryContactRepo {
    fn append(
        &self,
        message: NewContactMessage,
    ) -> impl Future<Output = Result<ContactMessage, HomecareError>> + Send {
        let mut rows = self.rows.lock().unwrap();
        let stored = message.into_message(
            ContactMessageId::new(next_id(rows.len())),
            homecare_domain::time::now(),
        );
        rows.push(stored.clone());
        async { Ok(stored) }
    }

    fn get_by_id(
        &self,
        id: ContactMessageId,
    ) -> impl Future<Output = Result<Option<ContactMessage>, HomecareError>> + Send {
        let rows = self.rows.lock().unwrap();
        let found = rows.iter().find(|m| m.id == id).cloned();
        async { Ok(found) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<ContactMessage>, HomecareError>> + Send {
        let rows = self.rows.lock().unwrap().clone();
        async { Ok(rows) }
    }
}

#[derive(Default)]
pub struct InMemoryUserRepo {
    rows: Mutex<Vec<User>>,
}

impl UserRepository for InMemoryUserRepo {
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, HomecareError>> + Send {
        let mut rows = self.rows.lock().unwrap();
        let result = if rows.iter().any(|u| u.username == user.username) {
            Err(ConflictError::UsernameTaken(user.username).into())
        } else {
            let stored = user.into_user(UserId::new(next_id(rows.len())));
            rows.push(stored.clone());
            Ok(stored)
        };
        async { result }
    }

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, HomecareError>> + Send {
        let rows = self.rows.lock().unwrap();
        let found = rows.iter().find(|u| u.id == id).cloned();
        async { Ok(found) }
    }

    fn find_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Option<User>, HomecareError>> + Send {
        let rows = self.rows.lock().unwrap();
        let found = rows.iter().find(|u| u.username == username).cloned();
        async { Ok(found) }
    }

    fn count(&self) -> impl Future<Output = Result<usize, HomecareError>> + Send {
        let count = self.rows.lock().unwrap().len();
        async move { Ok(count) }
    }
}

#[derive(Default)]
pub struct InMemoryProfileStore {
    docs: Mutex<HashMap<Uid, Profile>>,
}

impl ProfileStore for InMemoryProfileStore {
    fn get(&self, uid: &Uid) -> impl Future<Output = Result<Option<Profile>, HomecareError>> + Send {
        let found = self.docs.lock().unwrap().get(uid).cloned();
        async { Ok(found) }
    }

    fn set_subscription(
        &self,
        uid: &Uid,
        plan: &str,
    ) -> impl Future<Output = Result<(), HomecareError>> + Send {
        self.docs
            .lock()
            .unwrap()
            .entry(uid.clone())
            .or_default()
            .subscription = Some(plan.to_string());
        async { Ok(()) }
    }
}
