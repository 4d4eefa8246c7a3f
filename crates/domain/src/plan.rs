//! Subscription plans: the monthly pricing tiers shown on the pricing page.

use serde::{Deserialize, Serialize};

use crate::error::HomecareError;
use crate::id::PlanId;
use crate::money::Cents;
use crate::validation::Checks;

/// A monthly subscription tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    pub id: PlanId,
    pub name: String,
    pub description: String,
    /// Monthly price.
    pub price: Cents,
    pub is_popular: bool,
    /// Feature bullet points, in display order.
    pub features: Vec<String>,
}

/// Insertable shape of a [`SubscriptionPlan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubscriptionPlan {
    pub name: String,
    pub description: String,
    pub price: Cents,
    pub is_popular: bool,
    pub features: Vec<String>,
}

impl NewSubscriptionPlan {
    #[must_use]
    pub fn builder() -> NewSubscriptionPlanBuilder {
        NewSubscriptionPlanBuilder::default()
    }

    #[must_use]
    pub fn into_plan(self, id: PlanId) -> SubscriptionPlan {
        SubscriptionPlan {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            is_popular: self.is_popular,
            features: self.features,
        }
    }
}

#[derive(Debug, Default)]
pub struct NewSubscriptionPlanBuilder {
    name: Option<String>,
    description: Option<String>,
    price: Option<Cents>,
    is_popular: bool,
    features: Vec<String>,
}

impl NewSubscriptionPlanBuilder {
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
    pub fn popular(mut self, is_popular: bool) -> Self {
        self.is_popular = is_popular;
        self
    }

    /// Append one feature line.
    #[must_use]
    pub fn feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }

    /// Append several feature lines, keeping their order.
    #[must_use]
    pub fn features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features.extend(features.into_iter().map(Into::into));
        self
    }

    /// Validate and return a [`NewSubscriptionPlan`].
    ///
    /// # Errors
    ///
    /// Returns [`HomecareError::Validation`] when `name` is missing or blank,
    /// or when `description` or `price` is missing.
    pub fn build(self) -> Result<NewSubscriptionPlan, HomecareError> {
        let mut checks = Checks::default();
        let name = checks.non_empty("name", self.name);
        let description = checks.required("description", self.description);
        let price = checks.required("price", self.price);
        checks.finish()?;
        Ok(NewSubscriptionPlan {
            name,
            description,
            price,
            is_popular: self.is_popular,
            features: self.features,
        })
    }
}
