//! Contact service: accepting enquiries from the storefront.

use homecare_domain::contact::{ContactMessage, NewContactMessage};
use homecare_domain::error::HomecareError;

use crate::ports::ContactMessageRepository;

/// Application service for contact messages.
pub struct ContactService<R> {
    repo: R,
}

impl<R: ContactMessageRepository> ContactService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store an already validated message, stamping its id and creation time.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, message), fields(plan_interest = ?message.plan_interest))]
    pub async fn create_contact_message(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, HomecareError> {
        let stored = self.repo.append(message).await?;
        tracing::info!(message_id = %stored.id, "contact message received");
        Ok(stored)
    }

    /// List every stored message, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_contact_messages(&self) -> Result<Vec<ContactMessage>, HomecareError> {
        self.repo.get_all().await
    }
}
