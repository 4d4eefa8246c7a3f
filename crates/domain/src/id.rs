//! Typed identifier newtypes backed by store-assigned integers.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(
            Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Wrap a raw identifier value.
            #[must_use]
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            /// Access the inner integer.
            #[must_use]
            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`ServiceCategory`](crate::catalog::ServiceCategory).
    CategoryId
);

define_id!(
    /// Unique identifier for a [`Service`](crate::catalog::Service).
    ServiceId
);

define_id!(
    /// Unique identifier for a [`SubscriptionPlan`](crate::plan::SubscriptionPlan).
    PlanId
);

define_id!(
    /// Unique identifier for a [`ContactMessage`](crate::contact::ContactMessage).
    ContactMessageId
);

define_id!(
    /// Unique identifier for a [`User`](crate::user::User).
    UserId
);
