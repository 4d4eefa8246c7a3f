//! JSON handler for the contact form.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use homecare_app::ports::{
    CategoryRepository, ContactMessageRepository, PlanRepository, ServiceRepository,
    UserRepository,
};
use homecare_domain::contact::{ContactMessage, NewContactMessage};
use homecare_domain::error::HomecareError;

use crate::error::ApiError;
use crate::state::AppState;

const FAILURE: &str = "Failed to submit contact message";

/// Request body for submitting a contact message.
///
/// Every field is optional at the wire level so that a missing field is
/// reported by validation rather than by the JSON decoder.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub plan_interest: Option<String>,
    pub message: Option<String>,
}

impl ContactRequest {
    fn validate(self) -> Result<NewContactMessage, HomecareError> {
        let mut builder = NewContactMessage::builder();
        if let Some(full_name) = self.full_name {
            builder = builder.full_name(full_name);
        }
        if let Some(email) = self.email {
            builder = builder.email(email);
        }
        if let Some(phone) = self.phone {
            builder = builder.phone(phone);
        }
        if let Some(plan_interest) = self.plan_interest {
            builder = builder.plan_interest(plan_interest);
        }
        if let Some(message) = self.message {
            builder = builder.message(message);
        }
        builder.build()
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<ContactMessage>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `POST /api/contact`
pub async fn create<CR, SR, PR, MR, UR>(
    State(state): State<AppState<CR, SR, PR, MR, UR>>,
    body: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    SR: ServiceRepository + Send + Sync + 'static,
    PR: PlanRepository + Send + Sync + 'static,
    MR: ContactMessageRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let Json(req) = body.map_err(|rejection| super::rejected_body(&rejection, FAILURE))?;
    let message = req.validate().map_err(ApiError::failed(FAILURE))?;
    let created = state
        .contact_service
        .create_contact_message(message)
        .await
        .map_err(ApiError::failed(FAILURE))?;
    Ok(CreateResponse::Created(Json(created)))
}
