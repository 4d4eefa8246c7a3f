//! Users: registered storefront accounts.
//!
//! Usernames are unique across all users. The password is stored as given;
//! hiding it from API responses is the HTTP layer's job.

use serde::{Deserialize, Serialize};

use crate::error::HomecareError;
use crate::id::UserId;
use crate::validation::Checks;

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
}

/// A validated registration waiting to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
}

impl NewUser {
    #[must_use]
    pub fn builder() -> NewUserBuilder {
        NewUserBuilder::default()
    }

    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
            email: self.email,
            full_name: self.full_name,
            phone: self.phone,
        }
    }
}

#[derive(Debug, Default)]
pub struct NewUserBuilder {
    username: Option<String>,
    password: Option<String>,
    email: Option<String>,
    full_name: Option<String>,
    phone: Option<String>,
}

impl NewUserBuilder {
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Validate and return a [`NewUser`].
    ///
    /// # Errors
    ///
    /// Returns [`HomecareError::Validation`] when `username`, `password` or
    /// `fullName` is missing or blank, or when `email` is missing or malformed.
    pub fn build(self) -> Result<NewUser, HomecareError> {
        let mut checks = Checks::default();
        let username = checks.non_empty("username", self.username);
        let password = checks.non_empty("password", self.password);
        let email = checks.required("email", self.email);
        checks.email("email", &email);
        let full_name = checks.non_empty("fullName", self.full_name);
        checks.finish()?;
        Ok(NewUser {
            username,
            password,
            email,
            full_name,
            phone: self.phone,
        })
    }
}
