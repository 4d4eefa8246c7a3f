//! JSON handlers for service categories.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use homecare_app::ports::{
    CategoryRepository, ContactMessageRepository, PlanRepository, ServiceRepository,
    UserRepository,
};
use homecare_domain::catalog::ServiceCategory;
use homecare_domain::id::CategoryId;

use crate::error::ApiError;
use crate::state::AppState;

const ENTITY: &str = "Service category";
const LIST_FAILURE: &str = "Failed to fetch service categories";
const GET_FAILURE: &str = "Failed to fetch service category";

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<ServiceCategory>>),
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
    Ok(Json<ServiceCategory>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/service-categories`
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
    let categories = state
        .catalog_service
        .get_service_categories()
        .await
        .map_err(ApiError::failed(LIST_FAILURE))?;
    Ok(ListResponse::Ok(Json(categories)))
}

/// `GET /api/service-categories/:id`
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
    let category_id: CategoryId = super::parse_id(&id, ENTITY, GET_FAILURE)?;
    let category = state
        .catalog_service
        .get_service_category(category_id)
        .await
        .map_err(ApiError::failed(GET_FAILURE))?;
    let category = super::found(category, ENTITY, &id, GET_FAILURE)?;
    Ok(GetResponse::Ok(Json(category)))
}
