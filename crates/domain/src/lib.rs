//! # homecare-domain
//!
//! Pure domain model for the homecare subscription storefront.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps, money
//! - Define the **catalog** (service categories and the services they group)
//! - Define **subscription plans** (pricing tiers with ordered feature lists)
//! - Define **contact messages** (append-only enquiries from visitors)
//! - Define **users** (registered accounts, unique by username)
//! - Define **profiles** (per-identity documents held by a hosted provider)
//! - Contain all field validation for insertable shapes
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod money;
pub mod time;
mod validation;

pub mod catalog;
pub mod contact;
pub mod plan;
pub mod profile;
pub mod user;
