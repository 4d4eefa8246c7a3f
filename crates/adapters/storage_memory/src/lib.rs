//! # homecare-adapter-storage-memory
//!
//! Volatile, process-local persistence adapter.
//!
//! ## Responsibilities
//! - Own the entity store: one [`table::Table`] per record collection, each
//!   assigning its own strictly increasing ids starting at 1
//! - Implement the repository port traits defined in `homecare-app::ports::storage`
//! - Implement the `ProfileStore` port for local runs
//! - Enforce username uniqueness atomically at insert time
//!
//! Nothing survives a restart.
//!
//! ## Dependency rule
//! Depends on `homecare-app` (for port traits) and `homecare-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
pub mod table;

mod store;
pub use store::MemoryStore;

pub mod repos;
pub use repos::{
    MemoryCategoryRepository, MemoryContactMessageRepository, MemoryPlanRepository,
    MemoryProfileStore, MemoryServiceRepository, MemoryUserRepository,
};

pub use error::StorageError;
