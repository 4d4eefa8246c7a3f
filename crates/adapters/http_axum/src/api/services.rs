//! JSON handlers for services.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use homecare_app::ports::{
    CategoryRepository, ContactMessageRepository, PlanRepository, ServiceRepository,
    UserRepository,
};
use homecare_domain::catalog::Service;
use homecare_domain::error::ValidationError;
use homecare_domain::id::{CategoryId, ServiceId};

use super::LeadingInt;
use crate::error::ApiError;
use crate::state::AppState;

const ENTITY: &str = "Service";
const LIST_FAILURE: &str = "Failed to fetch services";
const GET_FAILURE: &str = "Failed to fetch service";

/// Query string accepted by the list endpoint.
///
/// Both filters are kept as raw text. `categoryId` is read from its integer
/// prefix: no prefix or zero leaves it unset, while a negative or oversized
/// number still filters and matches nothing. `featured` only counts when it
/// is exactly `true`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub category_id: Option<String>,
    pub featured: Option<String>,
}

/// Which subset of the catalog a list request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    All,
    Featured,
    Category(CategoryId),
    /// A category filter no record can satisfy.
    Nothing,
}

impl ListQuery {
    fn selection(&self) -> Selection {
        match self.category_id.as_deref().and_then(super::leading_int) {
            Some(LeadingInt::Id(id)) => Selection::Category(CategoryId::new(id)),
            Some(LeadingInt::OutOfRange) => Selection::Nothing,
            Some(LeadingInt::Zero) | None if self.featured_only() => Selection::Featured,
            Some(LeadingInt::Zero) | None => Selection::All,
        }
    }

    fn featured_only(&self) -> bool {
        self.featured.as_deref() == Some("true")
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Service>>),
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
    Ok(Json<Service>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/services?categoryId=&featured=`
///
/// `categoryId` wins over `featured` when both are given.
pub async fn list<CR, SR, PR, MR, UR>(
    State(state): State<AppState<CR, SR, PR, MR, UR>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<ListResponse, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    SR: ServiceRepository + Send + Sync + 'static,
    PR: PlanRepository + Send + Sync + 'static,
    MR: ContactMessageRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let Query(query) = query.map_err(|rejection| {
        ApiError::new(ValidationError::Body(rejection.body_text()), LIST_FAILURE)
    })?;

    let catalog = &state.catalog_service;
    let services = match query.selection() {
        Selection::Category(category_id) => catalog.get_services_by_category(category_id).await,
        Selection::Featured => catalog.get_featured_services().await,
        Selection::All => catalog.get_services().await,
        Selection::Nothing => Ok(Vec::new()),
    }
    .map_err(ApiError::failed(LIST_FAILURE))?;

    Ok(ListResponse::Ok(Json(services)))
}

/// `GET /api/services/:id`
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
    let service_id: ServiceId = super::parse_id(&id, ENTITY, GET_FAILURE)?;
    let service = state
        .catalog_service
        .get_service(service_id)
        .await
        .map_err(ApiError::failed(GET_FAILURE))?;
    let service = super::found(service, ENTITY, &id, GET_FAILURE)?;
    Ok(GetResponse::Ok(Json(service)))
}
