//! JSON handler for account registration.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use homecare_app::ports::{
    CategoryRepository, ContactMessageRepository, PlanRepository, ServiceRepository,
    UserRepository,
};
use homecare_domain::error::HomecareError;
use homecare_domain::id::UserId;
use homecare_domain::user::{NewUser, User};

use crate::error::ApiError;
use crate::state::AppState;

const FAILURE: &str = "Failed to register user";

/// Request body for registering an account.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
}

impl RegisterRequest {
    fn validate(self) -> Result<NewUser, HomecareError> {
        let mut builder = NewUser::builder();
        if let Some(username) = self.username {
            builder = builder.username(username);
        }
        if let Some(password) = self.password {
            builder = builder.password(password);
        }
        if let Some(email) = self.email {
            builder = builder.email(email);
        }
        if let Some(full_name) = self.full_name {
            builder = builder.full_name(full_name);
        }
        if let Some(phone) = self.phone {
            builder = builder.phone(phone);
        }
        builder.build()
    }
}

/// A registered user as returned to clients: everything but the password.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            phone: user.phone,
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<UserResponse>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `POST /api/register`
pub async fn create<CR, SR, PR, MR, UR>(
    State(state): State<AppState<CR, SR, PR, MR, UR>>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    CR: CategoryRepository + Send + Sync + 'static,
    SR: ServiceRepository + Send + Sync + 'static,
    PR: PlanRepository + Send + Sync + 'static,
    MR: ContactMessageRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let Json(req) = body.map_err(|rejection| super::rejected_body(&rejection, FAILURE))?;
    let user = req.validate().map_err(ApiError::failed(FAILURE))?;
    let created = state
        .user_service
        .create_user(user)
        .await
        .map_err(ApiError::failed(FAILURE))?;
    Ok(CreateResponse::Created(Json(created.into())))
}
