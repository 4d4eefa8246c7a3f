//! In-process [`AuthProvider`] backed by a tokio broadcast channel.
//!
//! Stands in for the hosted identity provider in local runs and tests.
//! Sign-in is driven explicitly with [`LocalAuthProvider::sign_in`].

use std::future::Future;
use std::sync::RwLock;

use tokio::sync::broadcast;

use homecare_domain::error::HomecareError;
use homecare_domain::profile::Identity;

use crate::ports::AuthProvider;

/// Local identity provider holding at most one signed-in identity.
///
/// Notifications are dropped when nobody is subscribed.
pub struct LocalAuthProvider {
    current: RwLock<Option<Identity>>,
    sender: broadcast::Sender<Option<Identity>>,
}

impl LocalAuthProvider {
    /// Create a provider with nobody signed in and the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            current: RwLock::new(None),
            sender,
        }
    }

    /// Sign `identity` in, replacing whoever was signed in before.
    pub fn sign_in(&self, identity: Identity) {
        tracing::debug!(uid = %identity.uid, "identity signed in");
        self.replace(Some(identity));
    }

    fn replace(&self, next: Option<Identity>) {
        let changed = match self.current.write() {
            Ok(mut current) => {
                let changed = *current != next;
                current.clone_from(&next);
                changed
            }
            Err(poisoned) => {
                let mut current = poisoned.into_inner();
                *current = next.clone();
                true
            }
        };
        if changed {
            let _ = self.sender.send(next);
        }
    }
}

impl AuthProvider for LocalAuthProvider {
    fn current_identity(&self) -> Option<Identity> {
        match self.current.read() {
            Ok(current) => current.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn sign_out(&self) -> impl Future<Output = Result<(), HomecareError>> + Send {
        tracing::debug!("identity signed out");
        self.replace(None);
        async { Ok(()) }
    }

    fn subscribe(&self) -> broadcast::Receiver<Option<Identity>> {
        self.sender.subscribe()
    }
}
