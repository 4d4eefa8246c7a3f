//! JSON handlers for subscription plans.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use homecare_app::ports::{
    CategoryRepository, ContactMessageRepository, PlanRepository, ServiceRepository,
    UserRepository,
};
use homecare_domain::id::PlanId;
use homecare_domain::plan::SubscriptionPlan;

use crate::error::ApiError;
use crate::state::AppState;

const ENTITY: &str = "Subscription plan";
const LIST_FAILURE: &str = "Failed to fetch subscription plans";
const GET_FAILURE: &str = "Failed to fetch subscription plan";

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<SubscriptionPlan>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<SubscriptionPlan>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/subscription-plans`
pub async fn list<CR, SR, PR, MR, UR>(
    State(state): State<AppState<CR, SR, PR, MR, UR>>,
) -> Result<ListResponse, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    SR: ServiceRepository + Send + Sync + 'static,
    PR: PlanRepository + Send + Sync + 'static,
    MR: ContactMessageRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let plans = state
        .plan_service
        .get_subscription_plans()
        .await
        .map_err(ApiError::failed(LIST_FAILURE))?;
    Ok(ListResponse::Ok(Json(plans)))
}

/// `GET /api/subscription-plans/:id`
pub async fn get<CR, SR, PR, MR, UR>(
    State(state): State<AppState<CR, SR, PR, MR, UR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    SR: ServiceRepository + Send + Sync + 'static,
    PR: PlanRepository + Send + Sync + 'static,
    MR: ContactMessageRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let plan_id: PlanId = super::parse_id(&id, ENTITY, GET_FAILURE)?;
    let plan = state
        .plan_service
        .get_subscription_plan(plan_id)
        .await
        .map_err(ApiError::failed(GET_FAILURE))?;
    let plan = super::found(plan, ENTITY, &id, GET_FAILURE)?;
    Ok(GetResponse::Ok(Json(plan)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::test_support::{broken_state, get_json, seeded_state};

    #[tokio::test]
    async fn should_list_plans_with_camel_case_fields() {
        let (status, body) = get_json(seeded_state(), "/api/subscription-plans").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["name"], "Basic Plan");
        assert_eq!(body[0]["price"], 9900);
        assert_eq!(body[0]["isPopular"], false);
        assert_eq!(body[1]["isPopular"], true);
        assert_eq!(body[1]["features"][0], "Bi-weekly cleaning service (4 hours)");
    }

    #[tokio::test]
    async fn should_return_plan_when_present() {
        let (status, body) = get_json(seeded_state(), "/api/subscription-plans/2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Plus Plan");
    }

    #[tokio::test]
    async fn should_return_404_when_plan_missing() {
        let (status, body) = get_json(seeded_state(), "/api/subscription-plans/9").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Subscription plan not found");
    }

    #[tokio::test]
    async fn should_return_500_when_store_fails() {
        let (status, body) = get_json(broken_state(), "/api/subscription-plans").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Failed to fetch subscription plans");

        let (status, body) = get_json(broken_state(), "/api/subscription-plans/1").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Failed to fetch subscription plan");
    }
}
