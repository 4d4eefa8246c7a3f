//! Stub repositories and request helpers shared by the handler tests.

use std::sync::Mutex;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use homecare_app::ports::{
    CategoryRepository, ContactMessageRepository, PlanRepository, ServiceRepository,
    UserRepository,
};
use homecare_app::services::catalog_service::CatalogService;
use homecare_app::services::contact_service::ContactService;
use homecare_app::services::plan_service::PlanService;
use homecare_app::services::user_service::UserService;
use homecare_domain::catalog::{NewService, NewServiceCategory, Service, ServiceCategory};
use homecare_domain::contact::{ContactMessage, NewContactMessage};
use homecare_domain::error::{ConflictError, HomecareError};
use homecare_domain::id::{CategoryId, ContactMessageId, PlanId, ServiceId, UserId};
use homecare_domain::money::Cents;
use homecare_domain::plan::{NewSubscriptionPlan, SubscriptionPlan};
use homecare_domain::time;
use homecare_domain::user::{NewUser, User};

use crate::router;
use crate::state::AppState;

/// Vec-backed rows; ids are `len + 1`.
pub struct Rows<T>(Mutex<Vec<T>>);

impl<T> Default for Rows<T> {
    fn default() -> Self {
        Self(Mutex::new(Vec::new()))
    }
}

impl<T: Clone> Rows<T> {
    fn with(rows: Vec<T>) -> Self {
        Self(Mutex::new(rows))
    }

    fn snapshot(&self) -> Vec<T> {
        self.0.lock().unwrap().clone()
    }

    fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.0.lock().unwrap().iter().find(|row| predicate(row)).cloned()
    }

    fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }

    fn push(&self, make: impl FnOnce(u32) -> T) -> T {
        let mut rows = self.0.lock().unwrap();
        let row = make(u32::try_from(rows.len() + 1).unwrap());
        rows.push(row.clone());
        row
    }
}

impl CategoryRepository for Rows<ServiceCategory> {
    async fn create(&self, category: NewServiceCategory) -> Result<ServiceCategory, HomecareError> {
        Ok(self.push(|id| category.into_category(CategoryId::new(id))))
    }
    async fn get_by_id(&self, id: CategoryId) -> Result<Option<ServiceCategory>, HomecareError> {
        Ok(self.find(|c| c.id == id))
    }
    async fn get_all(&self) -> Result<Vec<ServiceCategory>, HomecareError> {
        Ok(self.snapshot())
    }
}

impl ServiceRepository for Rows<Service> {
    async fn create(&self, service: NewService) -> Result<Service, HomecareError> {
        Ok(self.push(|id| service.into_service(ServiceId::new(id))))
    }
    async fn get_by_id(&self, id: ServiceId) -> Result<Option<Service>, HomecareError> {
        Ok(self.find(|s| s.id == id))
    }
    async fn get_all(&self) -> Result<Vec<Service>, HomecareError> {
        Ok(self.snapshot())
    }
    async fn find_by_category(&self, category_id: CategoryId) -> Result<Vec<Service>, HomecareError> {
        Ok(self.filter(|s| s.category_id == category_id))
    }
    async fn find_featured(&self) -> Result<Vec<Service>, HomecareError> {
        Ok(self.filter(|s| s.featured))
    }
}

impl PlanRepository for Rows<SubscriptionPlan> {
    async fn create(&self, plan: NewSubscriptionPlan) -> Result<SubscriptionPlan, HomecareError> {
        Ok(self.push(|id| plan.into_plan(PlanId::new(id))))
    }
    async fn get_by_id(&self, id: PlanId) -> Result<Option<SubscriptionPlan>, HomecareError> {
        Ok(self.find(|p| p.id == id))
    }
    async fn get_all(&self) -> Result<Vec<SubscriptionPlan>, HomecareError> {
        Ok(self.snapshot())
    }
}

impl ContactMessageRepository for Rows<ContactMessage> {
    async fn append(&self, message: NewContactMessage) -> Result<ContactMessage, HomecareError> {
        Ok(self.push(|id| message.into_message(ContactMessageId::new(id), time::now())))
    }
    async fn get_by_id(&self, id: ContactMessageId) -> Result<Option<ContactMessage>, HomecareError> {
        Ok(self.find(|m| m.id == id))
    }
    async fn get_all(&self) -> Result<Vec<ContactMessage>, HomecareError> {
        Ok(self.snapshot())
    }
}

impl UserRepository for Rows<User> {
    async fn create(&self, user: NewUser) -> Result<User, HomecareError> {
        if self.find(|u| u.username == user.username).is_some() {
            return Err(ConflictError::UsernameTaken(user.username).into());
        }
        Ok(self.push(|id| user.into_user(UserId::new(id))))
    }
    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, HomecareError> {
        Ok(self.find(|u| u.id == id))
    }
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, HomecareError> {
        Ok(self.find(|u| u.username == username))
    }
    async fn count(&self) -> Result<usize, HomecareError> {
        Ok(self.snapshot().len())
    }
}

/// Every call fails like a store whose locks are poisoned.
pub struct Broken;

fn broken() -> HomecareError {
    HomecareError::Storage("store unavailable".into())
}

impl CategoryRepository for Broken {
    async fn create(&self, _category: NewServiceCategory) -> Result<ServiceCategory, HomecareError> {
        Err(broken())
    }
    async fn get_by_id(&self, _id: CategoryId) -> Result<Option<ServiceCategory>, HomecareError> {
        Err(broken())
    }
    async fn get_all(&self) -> Result<Vec<ServiceCategory>, HomecareError> {
        Err(broken())
    }
}

impl ServiceRepository for Broken {
    async fn create(&self, _service: NewService) -> Result<Service, HomecareError> {
        Err(broken())
    }
    async fn get_by_id(&self, _id: ServiceId) -> Result<Option<Service>, HomecareError> {
        Err(broken())
    }
    async fn get_all(&self) -> Result<Vec<Service>, HomecareError> {
        Err(broken())
    }
    async fn find_by_category(&self, _category_id: CategoryId) -> Result<Vec<Service>, HomecareError> {
        Err(broken())
    }
    async fn find_featured(&self) -> Result<Vec<Service>, HomecareError> {
        Err(broken())
    }
}

impl PlanRepository for Broken {
    async fn create(&self, _plan: NewSubscriptionPlan) -> Result<SubscriptionPlan, HomecareError> {
        Err(broken())
    }
    async fn get_by_id(&self, _id: PlanId) -> Result<Option<SubscriptionPlan>, HomecareError> {
        Err(broken())
    }
    async fn get_all(&self) -> Result<Vec<SubscriptionPlan>, HomecareError> {
        Err(broken())
    }
}

impl ContactMessageRepository for Broken {
    async fn append(&self, _message: NewContactMessage) -> Result<ContactMessage, HomecareError> {
        Err(broken())
    }
    async fn get_by_id(&self, _id: ContactMessageId) -> Result<Option<ContactMessage>, HomecareError> {
        Err(broken())
    }
    async fn get_all(&self) -> Result<Vec<ContactMessage>, HomecareError> {
        Err(broken())
    }
}

impl UserRepository for Broken {
    async fn create(&self, _user: NewUser) -> Result<User, HomecareError> {
        Err(broken())
    }
    async fn get_by_id(&self, _id: UserId) -> Result<Option<User>, HomecareError> {
        Err(broken())
    }
    async fn find_by_username(&self, _username: &str) -> Result<Option<User>, HomecareError> {
        Err(broken())
    }
    async fn count(&self) -> Result<usize, HomecareError> {
        Err(broken())
    }
}

pub type StubState = AppState<
    Rows<ServiceCategory>,
    Rows<Service>,
    Rows<SubscriptionPlan>,
    Rows<ContactMessage>,
    Rows<User>,
>;

fn state_with(
    categories: Vec<ServiceCategory>,
    services: Vec<Service>,
    plans: Vec<SubscriptionPlan>,
) -> StubState {
    AppState::new(
        CatalogService::new(Rows::with(categories), Rows::with(services)),
        PlanService::new(Rows::with(plans)),
        ContactService::new(Rows::default()),
        UserService::new(Rows::default()),
    )
}

pub fn empty_state() -> StubState {
    state_with(Vec::new(), Vec::new(), Vec::new())
}

/// Two categories, three services (two featured) and two plans.
pub fn seeded_state() -> StubState {
    let category = |id: u32, name: &str| ServiceCategory {
        id: CategoryId::new(id),
        name: name.to_string(),
        description: format!("All about {name}"),
        icon: "fa-broom".to_string(),
    };
    let service = |id: u32, category: u32, name: &str, featured: bool, tag: Option<&str>| Service {
        id: ServiceId::new(id),
        category_id: CategoryId::new(category),
        name: name.to_string(),
        description: format!("{name} for your home"),
        price: Cents::new(9900),
        image_url: None,
        featured,
        tag: tag.map(str::to_string),
    };
    let plan = |id: u32, name: &str, price: u32, is_popular: bool, features: &[&str]| {
        SubscriptionPlan {
            id: PlanId::new(id),
            name: name.to_string(),
            description: format!("{name} description"),
            price: Cents::new(price),
            is_popular,
            features: features.iter().map(ToString::to_string).collect(),
        }
    };

    state_with(
        vec![
            category(1, "Cleaning Services"),
            category(2, "Repair Services"),
        ],
        vec![
            service(1, 1, "Home Cleaning", true, Some("Popular")),
            service(2, 2, "Lawn Care", true, None),
            service(3, 1, "Deep Cleaning", false, Some("Thorough")),
        ],
        vec![
            plan(1, "Basic Plan", 9900, false, &["Monthly cleaning service (3 hours)"]),
            plan(
                2,
                "Plus Plan",
                19_900,
                true,
                &["Bi-weekly cleaning service (4 hours)"],
            ),
        ],
    )
}

pub type BrokenState = AppState<Broken, Broken, Broken, Broken, Broken>;

pub fn broken_state() -> BrokenState {
    AppState::new(
        CatalogService::new(Broken, Broken),
        PlanService::new(Broken),
        ContactService::new(Broken),
        UserService::new(Broken),
    )
}

async fn send<CR, SR, PR, MR, UR>(
    state: AppState<CR, SR, PR, MR, UR>,
    request: Request<Body>,
) -> (StatusCode, serde_json::Value)
where
    CR: CategoryRepository + Send + Sync + 'static,
    SR: ServiceRepository + Send + Sync + 'static,
    PR: PlanRepository + Send + Sync + 'static,
    MR: ContactMessageRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let response = router::build(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub async fn get_json<CR, SR, PR, MR, UR>(
    state: AppState<CR, SR, PR, MR, UR>,
    uri: &str,
) -> (StatusCode, serde_json::Value)
where
    CR: CategoryRepository + Send + Sync + 'static,
    SR: ServiceRepository + Send + Sync + 'static,
    PR: PlanRepository + Send + Sync + 'static,
    MR: ContactMessageRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(state, request).await
}

pub async fn post_json<CR, SR, PR, MR, UR>(
    state: AppState<CR, SR, PR, MR, UR>,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value)
where
    CR: CategoryRepository + Send + Sync + 'static,
    SR: ServiceRepository + Send + Sync + 'static,
    PR: PlanRepository + Send + Sync + 'static,
    MR: ContactMessageRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(state, request).await
}
