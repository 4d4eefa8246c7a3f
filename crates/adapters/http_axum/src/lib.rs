//! # homecare-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the storefront's **JSON API** under `/api`
//!   (`/api/service-categories`, `/api/services`, `/api/subscription-plans`,
//!   `/api/contact`, `/api/register`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses; every error
//!   body is `{"message": "..."}`
//!
//! ## Dependency rule
//! Depends on `homecare-app` (for port traits and services) and `homecare-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
mod test_support;
