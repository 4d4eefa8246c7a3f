//! Identity ports: the hosted sign-in provider and its profile documents.
//!
//! Neither capability is implemented locally in production; the storefront
//! talks to a hosted provider. Both are injected so the core never calls a
//! third-party SDK directly.

use std::future::Future;

use tokio::sync::broadcast;

use homecare_domain::error::HomecareError;
use homecare_domain::profile::{Identity, Profile, Uid};

/// Who is signed in, and notifications when that changes.
pub trait AuthProvider {
    /// The currently signed-in identity, if any.
    fn current_identity(&self) -> Option<Identity>;

    /// Sign the current identity out. Signing out while signed out is a no-op.
    fn sign_out(&self) -> impl Future<Output = Result<(), HomecareError>> + Send;

    /// Subscribe to identity changes. `None` means "signed out".
    ///
    /// Only changes that happen after the call are delivered.
    fn subscribe(&self) -> broadcast::Receiver<Option<Identity>>;
}

/// Per-identity profile documents, read and written by uid.
pub trait ProfileStore {
    /// Fetch the profile document, or `None` when it was never written.
    fn get(&self, uid: &Uid) -> impl Future<Output = Result<Option<Profile>, HomecareError>> + Send;

    /// Write the subscription field, creating the document if needed and
    /// leaving any other fields untouched.
    fn set_subscription(
        &self,
        uid: &Uid,
        plan: &str,
    ) -> impl Future<Output = Result<(), HomecareError>> + Send;
}
