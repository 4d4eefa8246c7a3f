//! Contact messages: enquiries submitted through the storefront's form.
//!
//! Messages are append-only: once stored they are never edited or removed,
//! and `created_at` is stamped exactly once, at insertion.

use serde::{Deserialize, Serialize};

use crate::error::HomecareError;
use crate::id::ContactMessageId;
use crate::time::Timestamp;
use crate::validation::Checks;

/// Minimum length of the sender's name, in characters.
pub const MIN_FULL_NAME_CHARS: usize = 2;
/// Minimum length of the message body, in characters.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// A stored enquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: ContactMessageId,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Name of the plan the visitor asked about, if any.
    pub plan_interest: Option<String>,
    pub message: String,
    #[serde(with = "crate::time::iso_millis")]
    pub created_at: Timestamp,
}

/// A validated enquiry waiting to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub plan_interest: Option<String>,
    pub message: String,
}

impl NewContactMessage {
    #[must_use]
    pub fn builder() -> NewContactMessageBuilder {
        NewContactMessageBuilder::default()
    }

    /// Attach the store-assigned id and creation time.
    #[must_use]
    pub fn into_message(self, id: ContactMessageId, created_at: Timestamp) -> ContactMessage {
        ContactMessage {
            id,
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            plan_interest: self.plan_interest,
            message: self.message,
            created_at,
        }
    }
}

#[derive(Debug, Default)]
pub struct NewContactMessageBuilder {
    full_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    plan_interest: Option<String>,
    message: Option<String>,
}

impl NewContactMessageBuilder {
    #[must_use]
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    #[must_use]
    pub fn plan_interest(mut self, plan_interest: impl Into<String>) -> Self {
        self.plan_interest = Some(plan_interest.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Validate and return a [`NewContactMessage`].
    ///
    /// Every failing field is reported, not just the first one.
    ///
    /// # Errors
    ///
    /// Returns [`HomecareError::Validation`] when `fullName`, `email` or
    /// `message` is missing, when `fullName` is shorter than
    /// [`MIN_FULL_NAME_CHARS`], when `email` is malformed, or when `message`
    /// is shorter than [`MIN_MESSAGE_CHARS`].
    pub fn build(self) -> Result<NewContactMessage, HomecareError> {
        let mut checks = Checks::default();
        let full_name = checks.required("fullName", self.full_name);
        checks.min_chars("fullName", &full_name, MIN_FULL_NAME_CHARS);
        let email = checks.required("email", self.email);
        checks.email("email", &email);
        let message = checks.required("message", self.message);
        checks.min_chars("message", &message, MIN_MESSAGE_CHARS);
        checks.finish()?;
        Ok(NewContactMessage {
            full_name,
            email,
            phone: self.phone,
            plan_interest: self.plan_interest,
            message,
        })
    }
}
