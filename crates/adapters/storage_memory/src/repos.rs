//! Repository implementations over [`MemoryStore`](crate::MemoryStore).
//!
//! Every method takes its table lock, does the work synchronously and
//! releases the lock before the returned future is polled, so no guard is
//! ever held across an `.await`.

mod category_repo;
mod contact_repo;
mod plan_repo;
mod profile_store;
mod service_repo;
mod user_repo;

pub use category_repo::MemoryCategoryRepository;
pub use contact_repo::MemoryContactMessageRepository;
pub use plan_repo::MemoryPlanRepository;
pub use profile_store::MemoryProfileStore;
pub use service_repo::MemoryServiceRepository;
pub use user_repo::MemoryUserRepository;
