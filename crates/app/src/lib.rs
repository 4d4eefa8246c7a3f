//! # homecare-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `CategoryRepository`, `ServiceRepository`, `PlanRepository`: catalog storage
//!   - `ContactMessageRepository`: append-only enquiry storage
//!   - `UserRepository`: account storage with unique usernames
//!   - `AuthProvider`, `ProfileStore`: the hosted identity/document provider
//! - Define **driving/inbound ports** as use-case structs:
//!   - `CatalogService`, `PlanService`, `ContactService`, `UserService`
//!   - `ProfileService`: subscription choice of the signed-in visitor
//! - Provide the **seeder** that loads the fixed storefront catalog
//! - Provide an in-process `AuthProvider` for local runs and tests
//!
//! ## Dependency rule
//! Depends on `homecare-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod local_auth;
pub mod ports;
pub mod seed;
pub mod services;

mod test_support;
