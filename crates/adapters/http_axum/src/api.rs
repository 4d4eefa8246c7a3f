//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod categories;
#[allow(clippy::missing_errors_doc)]
pub mod contact;
#[allow(clippy::missing_errors_doc)]
pub mod plans;
#[allow(clippy::missing_errors_doc)]
pub mod register;
#[allow(clippy::missing_errors_doc)]
pub mod services;

use axum::Router;
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};

use homecare_app::ports::{
    CategoryRepository, ContactMessageRepository, PlanRepository, ServiceRepository,
    UserRepository,
};
use homecare_domain::error::{NotFoundError, ValidationError};

use crate::error::ApiError;
use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<CR, SR, PR, MR, UR>() -> Router<AppState<CR, SR, PR, MR, UR>>
where
    CR: CategoryRepository + Send + Sync + 'static,
    SR: ServiceRepository + Send + Sync + 'static,
    PR: PlanRepository + Send + Sync + 'static,
    MR: ContactMessageRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    Router::new()
        // Catalog
        .route(
            "/service-categories",
            get(categories::list::<CR, SR, PR, MR, UR>),
        )
        .route(
            "/service-categories/{id}",
            get(categories::get::<CR, SR, PR, MR, UR>),
        )
        .route("/services", get(services::list::<CR, SR, PR, MR, UR>))
        .route("/services/{id}", get(services::get::<CR, SR, PR, MR, UR>))
        // Plans
        .route(
            "/subscription-plans",
            get(plans::list::<CR, SR, PR, MR, UR>),
        )
        .route(
            "/subscription-plans/{id}",
            get(plans::get::<CR, SR, PR, MR, UR>),
        )
        // Forms
        .route("/contact", post(contact::create::<CR, SR, PR, MR, UR>))
        .route("/register", post(register::create::<CR, SR, PR, MR, UR>))
}

/// Integer prefix of a raw id: optional leading whitespace, an optional
/// sign, then at least one digit. Whatever follows the digits is ignored,
/// so `"12abc"` reads as 12 and `"abc"` reads as nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LeadingInt {
    Zero,
    /// A positive value that fits an id.
    Id(u32),
    /// Negative, or too large for an id: a number no record can carry.
    OutOfRange,
}

pub(crate) fn leading_int(raw: &str) -> Option<LeadingInt> {
    let raw = raw.trim_start();
    let (negative, unsigned) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];
    if digits.is_empty() {
        return None;
    }
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Some(LeadingInt::Zero);
    }
    if negative {
        return Some(LeadingInt::OutOfRange);
    }
    Some(
        significant
            .parse()
            .map_or(LeadingInt::OutOfRange, LeadingInt::Id),
    )
}

/// Parse a path identifier from its integer prefix. Anything without a
/// positive prefix that fits an id can never match a record, so it is
/// reported as not found.
fn parse_id<I: From<u32>>(
    raw: &str,
    entity: &'static str,
    failure: &'static str,
) -> Result<I, ApiError> {
    match leading_int(raw) {
        Some(LeadingInt::Id(id)) => Ok(I::from(id)),
        _ => Err(ApiError::new(NotFoundError::new(entity, raw), failure)),
    }
}

/// Turn a lookup result into the record or a not-found error.
fn found<T>(
    record: Option<T>,
    entity: &'static str,
    raw: &str,
    failure: &'static str,
) -> Result<T, ApiError> {
    record.ok_or_else(|| ApiError::new(NotFoundError::new(entity, raw), failure))
}

/// A body axum could not decode is a validation failure like any other.
fn rejected_body(rejection: &JsonRejection, failure: &'static str) -> ApiError {
    tracing::debug!(error = %rejection, "request body rejected");
    ApiError::new(ValidationError::Body(rejection.body_text()), failure)
}
