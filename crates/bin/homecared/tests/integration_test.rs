//! End-to-end tests for the full homecared stack.
//!
//! Each test builds the complete application (in-memory store, real repos,
//! real services, seeded catalog, real axum router) and exercises the HTTP
//! layer via `tower::ServiceExt::oneshot`; no TCP port is bound.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use homecare_adapter_http_axum::router;
use homecare_adapter_http_axum::state::AppState;
use homecare_adapter_storage_memory::{
    MemoryCategoryRepository, MemoryContactMessageRepository, MemoryPlanRepository,
    MemoryServiceRepository, MemoryStore, MemoryUserRepository,
};
use homecare_app::seed;
use homecare_app::services::catalog_service::CatalogService;
use homecare_app::services::contact_service::ContactService;
use homecare_app::services::plan_service::PlanService;
use homecare_app::services::user_service::UserService;

type State = AppState<
    MemoryCategoryRepository,
    MemoryServiceRepository,
    MemoryPlanRepository,
    MemoryContactMessageRepository,
    MemoryUserRepository,
>;

/// Build fully-wired, seeded state over a fresh store.
async fn state() -> State {
    let store = MemoryStore::new();
    let catalog = Arc::new(CatalogService::new(
        MemoryCategoryRepository::new(store.clone()),
        MemoryServiceRepository::new(store.clone()),
    ));
    let plans = Arc::new(PlanService::new(MemoryPlanRepository::new(store.clone())));
    seed::seed(&catalog, &plans)
        .await
        .expect("seeding a fresh store should succeed");

    AppState::from_arcs(
        catalog,
        plans,
        Arc::new(ContactService::new(MemoryContactMessageRepository::new(
            store.clone(),
        ))),
        Arc::new(UserService::new(MemoryUserRepository::new(store))),
    )
}

async fn send(state: State, request: Request<Body>) -> (StatusCode, Value) {
    let resp = router::build(state).oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

async fn get(state: State, uri: &str) -> (StatusCode, Value) {
    send(state, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post(state: State, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(state, request).await
}

fn names(body: &Value) -> Vec<&str> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect()
}

fn ids(body: &Value) -> Vec<u64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_u64().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (status, body) = get(state().await, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("OK".to_string()));
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_seeded_categories() {
    let (status, body) = get(state().await, "/api/service-categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), [1, 2, 3]);
    assert_eq!(
        names(&body),
        ["Cleaning Services", "Maintenance Services", "Repair Services"]
    );
}

#[tokio::test]
async fn should_get_category_by_id() {
    let (status, body) = get(state().await, "/api/service-categories/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 3,
            "name": "Repair Services",
            "description": "Expert repair services for your home and appliances",
            "icon": "fa-hammer"
        })
    );
}

#[tokio::test]
async fn should_return_404_for_unknown_category() {
    let (status, body) = get(state().await, "/api/service-categories/4").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Service category not found");
}

#[tokio::test]
async fn should_list_all_eight_services() {
    let (status, body) = get(state().await, "/api/services").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), [1, 2, 3, 4, 5, 6, 7, 8]);
}

#[tokio::test]
async fn should_list_featured_services() {
    let (status, body) = get(state().await, "/api/services?featured=true").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), ["Home Cleaning", "Lawn Care", "Appliance Repair"]);
}

#[tokio::test]
async fn should_list_services_of_a_category() {
    let (status, body) = get(state().await, "/api/services?categoryId=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        names(&body),
        ["Lawn Care", "HVAC Maintenance", "Plumbing Maintenance"]
    );
}

#[tokio::test]
async fn should_prefer_category_filter_over_featured() {
    let (_, body) = get(state().await, "/api/services?categoryId=3&featured=true").await;
    assert_eq!(names(&body), ["Appliance Repair", "Electrical Repairs"]);
}

#[tokio::test]
async fn should_ignore_featured_unless_exactly_true() {
    let (_, body) = get(state().await, "/api/services?featured=yes").await;
    assert_eq!(body.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn should_return_service_with_camel_case_fields() {
    let (status, body) = get(state().await, "/api/services/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["categoryId"], 1);
    assert_eq!(body["price"], 9900);
    assert_eq!(body["featured"], true);
    assert_eq!(body["tag"], "Popular");
    assert!(
        body["imageUrl"]
            .as_str()
            .unwrap()
            .starts_with("https://images.unsplash.com/")
    );
}

#[tokio::test]
async fn should_serialize_missing_tag_as_null() {
    let (_, body) = get(state().await, "/api/services/7").await;
    assert_eq!(body["name"], "Plumbing Maintenance");
    assert!(body["tag"].is_null());
}

#[tokio::test]
async fn should_return_404_for_unknown_service() {
    let (status, body) = get(state().await, "/api/services/999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Service not found");
}

#[tokio::test]
async fn should_return_404_for_non_numeric_service_id() {
    let (status, body) = get(state().await, "/api/services/abc").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Service not found");
}

#[tokio::test]
async fn should_read_ids_from_their_integer_prefix() {
    let state = state().await;

    let (status, body) = get(state.clone(), "/api/services/2xyz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 2);

    let (_, body) = get(state.clone(), "/api/services?categoryId=2abc").await;
    let categories: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["categoryId"].as_u64().unwrap())
        .collect();
    assert!(!categories.is_empty());
    assert!(categories.iter().all(|id| *id == 2));

    let (status, body) = get(state, "/api/services?categoryId=-3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

// ---------------------------------------------------------------------------
// Plans
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_seeded_plans() {
    let (status, body) = get(state().await, "/api/subscription-plans").await;
    assert_eq!(status, StatusCode::OK);
    let rows: Vec<(&str, u64, bool)> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| {
            (
                p["name"].as_str().unwrap(),
                p["price"].as_u64().unwrap(),
                p["isPopular"].as_bool().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        rows,
        [
            ("Basic Plan", 9900, false),
            ("Plus Plan", 19_900, true),
            ("Premium Plan", 34_900, false)
        ]
    );
}

#[tokio::test]
async fn should_return_plan_features_in_order() {
    let (status, body) = get(state().await, "/api/subscription-plans/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["features"],
        json!([
            "Monthly cleaning service (3 hours)",
            "Quarterly HVAC filter replacement",
            "Annual home maintenance inspection",
            "Priority scheduling for additional services"
        ])
    );
}

#[tokio::test]
async fn should_return_404_for_unknown_plan() {
    let (status, body) = get(state().await, "/api/subscription-plans/0").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Subscription plan not found");
}

// ---------------------------------------------------------------------------
// Contact form
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_accept_valid_contact_message() {
    let (status, body) = post(
        state().await,
        "/api/contact",
        &json!({
            "fullName": "Jane Doe",
            "email": "jane@example.com",
            "message": "Please contact me about lawn care."
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_u64());
    assert_eq!(body["fullName"], "Jane Doe");
    assert_eq!(body["email"], "jane@example.com");
    assert_eq!(body["message"], "Please contact me about lawn care.");
    assert!(body["phone"].is_null());
    let created_at = body["createdAt"].as_str().unwrap();
    assert_eq!(created_at.len(), "2024-05-01T09:30:00.000Z".len());
    assert!(created_at.ends_with('Z'));
}

#[tokio::test]
async fn should_assign_increasing_contact_ids() {
    let state = state().await;
    let message = json!({
        "fullName": "Jane Doe",
        "email": "jane@example.com",
        "message": "Please contact me about lawn care."
    });

    let (_, first) = post(state.clone(), "/api/contact", &message).await;
    let (_, second) = post(state.clone(), "/api/contact", &message).await;
    assert!(second["id"].as_u64().unwrap() > first["id"].as_u64().unwrap());
    assert_eq!(
        state
            .contact_service
            .get_contact_messages()
            .await
            .unwrap()
            .len(),
        2
    );
}

#[tokio::test]
async fn should_reject_short_contact_message() {
    let state = state().await;
    let (status, body) = post(
        state.clone(),
        "/api/contact",
        &json!({"fullName": "Jane Doe", "email": "jane@example.com", "message": "hi"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("Validation error:")
    );
    assert!(
        state
            .contact_service
            .get_contact_messages()
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn should_reject_malformed_json_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(state().await, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_register_once_and_reject_duplicate_username() {
    let state = state().await;
    let jane = json!({
        "username": "jane",
        "password": "hunter22",
        "email": "jane@example.com",
        "fullName": "Jane Doe",
        "phone": "555-0100"
    });

    let (first, created) = post(state.clone(), "/api/register", &jane).await;
    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(created["username"], "jane");
    assert_eq!(created["phone"], "555-0100");
    assert!(created.get("password").is_none());

    let (second, body) = post(state.clone(), "/api/register", &jane).await;
    assert_eq!(second, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "Username already taken"}));

    let stored = state
        .user_service
        .get_user_by_username("jane")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.id.get(), 1);
    assert_eq!(stored.password, "hunter22");
}

#[tokio::test]
async fn should_reject_registration_without_required_fields() {
    let (status, body) = post(
        state().await,
        "/api/register",
        &json!({"username": "jane", "email": "jane@example.com"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Validation error: password is required; fullName is required"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn should_register_concurrent_duplicates_only_once() {
    let state = state().await;
    let jane = json!({
        "username": "racer",
        "password": "hunter22",
        "email": "racer@example.com",
        "fullName": "Race Condition"
    });

    let attempts: Vec<_> = (0..8)
        .map(|_| {
            let state = state.clone();
            let body = jane.clone();
            tokio::spawn(async move { post(state, "/api/register", &body).await })
        })
        .collect();
    let mut created = 0;
    for attempt in attempts {
        let (status, _) = attempt.await.unwrap();
        if status == StatusCode::CREATED {
            created += 1;
        }
    }

    assert_eq!(created, 1);
    assert!(
        state
            .user_service
            .get_user_by_username("racer")
            .await
            .unwrap()
            .is_some()
    );
}
