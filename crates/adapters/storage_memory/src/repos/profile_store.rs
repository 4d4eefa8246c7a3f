//! In-memory implementation of [`ProfileStore`].

use std::future::Future;

use homecare_app::ports::ProfileStore;
use homecare_domain::error::HomecareError;
use homecare_domain::profile::{Profile, Uid};

use crate::error::StorageError;
use crate::store::MemoryStore;

/// Profile documents keyed by uid, backed by a [`MemoryStore`].
pub struct MemoryProfileStore {
    store: MemoryStore,
}

impl MemoryProfileStore {
    #[must_use]
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    fn merge_subscription(&self, uid: &Uid, plan: &str) -> Result<(), StorageError> {
        let mut profiles = self.store.profiles()?;
        profiles.entry(uid.clone()).or_default().subscription = Some(plan.to_owned());
        Ok(())
    }
}

impl ProfileStore for MemoryProfileStore {
    fn get(&self, uid: &Uid) -> impl Future<Output = Result<Option<Profile>, HomecareError>> + Send {
        let result = self
            .store
            .profiles()
            .map(|profiles| profiles.get(uid).cloned());
        async move { result.map_err(HomecareError::from) }
    }

    fn set_subscription(
        &self,
        uid: &Uid,
        plan: &str,
    ) -> impl Future<Output = Result<(), HomecareError>> + Send {
        let result = self.merge_subscription(uid, plan);
        async move { result.map_err(HomecareError::from) }
    }
}
