//! Catalog: service categories and the services offered within them.
//!
//! A [`Service`] points at its [`ServiceCategory`] by id only. The reference
//! is not enforced, so readers must treat an unknown `category_id` as
//! "category not found" rather than as corrupt data.

use serde::{Deserialize, Serialize};

use crate::error::HomecareError;
use crate::id::{CategoryId, ServiceId};
use crate::money::Cents;
use crate::validation::Checks;

/// A top-level grouping of services, e.g. "Cleaning Services".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCategory {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    /// Icon token understood by the storefront, e.g. `fa-broom`.
    pub icon: String,
}

/// Insertable shape of a [`ServiceCategory`]; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewServiceCategory {
    pub name: String,
    pub description: String,
    pub icon: String,
}

impl NewServiceCategory {
    #[must_use]
    pub fn builder() -> NewServiceCategoryBuilder {
        NewServiceCategoryBuilder::default()
    }

    /// Attach the store-assigned id.
    #[must_use]
    pub fn into_category(self, id: CategoryId) -> ServiceCategory {
        ServiceCategory {
            id,
            name: self.name,
            description: self.description,
            icon: self.icon,
        }
    }
}

#[derive(Debug, Default)]
pub struct NewServiceCategoryBuilder {
    name: Option<String>,
    description: Option<String>,
    icon: Option<String>,
}

impl NewServiceCategoryBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Validate and return a [`NewServiceCategory`].
    ///
    /// # Errors
    ///
    /// Returns [`HomecareError::Validation`] when `name` is missing or blank,
    /// or when `description` or `icon` is missing.
    pub fn build(self) -> Result<NewServiceCategory, HomecareError> {
        let mut checks = Checks::default();
        let name = checks.non_empty("name", self.name);
        let description = checks.required("description", self.description);
        let icon = checks.required("icon", self.icon);
        checks.finish()?;
        Ok(NewServiceCategory {
            name,
            description,
            icon,
        })
    }
}

/// A bookable service such as "Home Cleaning".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: ServiceId,
    pub category_id: CategoryId,
    pub name: String,
    pub description: String,
    pub price: Cents,
    pub image_url: Option<String>,
    pub featured: bool,
    /// Short marketing label, e.g. "Popular" or "Seasonal".
    pub tag: Option<String>,
}

/// Insertable shape of a [`Service`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewService {
    pub category_id: CategoryId,
    pub name: String,
    pub description: String,
    pub price: Cents,
    pub image_url: Option<String>,
    pub featured: bool,
    pub tag: Option<String>,
}

impl NewService {
    #[must_use]
    pub fn builder() -> NewServiceBuilder {
        NewServiceBuilder::default()
    }

    #[must_use]
    pub fn into_service(self, id: ServiceId) -> Service {
        Service {
            id,
            category_id: self.category_id,
            name: self.name,
            description: self.description,
            price: self.price,
            image_url: self.image_url,
            featured: self.featured,
            tag: self.tag,
        }
    }
}

#[derive(Debug, Default)]
pub struct NewServiceBuilder {
    category_id: Option<CategoryId>,
    name: Option<String>,
    description: Option<String>,
    price: Option<Cents>,
    image_url: Option<String>,
    featured: bool,
    tag: Option<String>,
}

impl NewServiceBuilder {
    #[must_use]
    pub fn category_id(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: Cents) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    #[must_use]
    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Validate and return a [`NewService`].
    ///
    /// # Errors
    ///
    /// Returns [`HomecareError::Validation`] when `category_id`, `price` or
    /// `description` is missing, or when `name` is missing or blank.
    pub fn build(self) -> Result<NewService, HomecareError> {
        let mut checks = Checks::default();
        let category_id = checks.required("categoryId", self.category_id);
        let name = checks.non_empty("name", self.name);
        let description = checks.required("description", self.description);
        let price = checks.required("price", self.price);
        checks.finish()?;
        Ok(NewService {
            category_id,
            name,
            description,
            price,
            image_url: self.image_url,
            featured: self.featured,
            tag: self.tag,
        })
    }
}
