//! Profile service: the subscription choice of a signed-in visitor.
//!
//! Mirrors what the storefront does against the hosted provider: with nobody
//! signed in, reads yield nothing and writes are skipped.

use homecare_domain::error::HomecareError;
use homecare_domain::profile::Identity;

use crate::ports::{AuthProvider, ProfileStore};

/// Application service reading and writing per-identity subscription state.
pub struct ProfileService<A, P> {
    auth: A,
    profiles: P,
}

impl<A, P> ProfileService<A, P>
where
    A: AuthProvider,
    P: ProfileStore,
{
    /// Create a new service from an identity provider and a profile store.
    pub fn new(auth: A, profiles: P) -> Self {
        Self { auth, profiles }
    }

    /// Access the identity provider, e.g. to subscribe to identity changes.
    pub fn auth(&self) -> &A {
        &self.auth
    }

    /// The subscription recorded for `identity`.
    ///
    /// Returns `Ok(None)` when `identity` is `None`, when no profile document
    /// exists, or when the document has no subscription.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the profile store.
    pub async fn subscription_for(
        &self,
        identity: Option<&Identity>,
    ) -> Result<Option<String>, HomecareError> {
        let Some(identity) = identity else {
            return Ok(None);
        };
        let profile = self.profiles.get(&identity.uid).await?;
        Ok(profile.and_then(|p| p.subscription))
    }

    /// Record `plan` as the subscription of `identity`. Skipped when nobody
    /// is signed in; returns whether anything was written.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the profile store.
    #[tracing::instrument(skip(self, identity))]
    pub async fn choose_subscription(
        &self,
        identity: Option<&Identity>,
        plan: &str,
    ) -> Result<bool, HomecareError> {
        let Some(identity) = identity else {
            tracing::debug!("no identity signed in, subscription not recorded");
            return Ok(false);
        };
        self.profiles.set_subscription(&identity.uid, plan).await?;
        Ok(true)
    }

    /// The subscription of whoever the identity provider reports as signed in.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the profile store.
    pub async fn current_subscription(&self) -> Result<Option<String>, HomecareError> {
        let identity = self.auth.current_identity();
        self.subscription_for(identity.as_ref()).await
    }

    /// Record `plan` for whoever is currently signed in.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the profile store.
    pub async fn choose_current_subscription(&self, plan: &str) -> Result<bool, HomecareError> {
        let identity = self.auth.current_identity();
        self.choose_subscription(identity.as_ref(), plan).await
    }

    /// Sign the current identity out.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the identity provider.
    pub async fn sign_out(&self) -> Result<(), HomecareError> {
        self.auth.sign_out().await
    }
}
