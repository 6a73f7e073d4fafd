//! Newtype wrappers for domain identifiers.
//!
//! Every entity uses an integer surrogate key; the wrappers keep a movie id
//! from being passed where a cart item id is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! int_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }
    };
}

int_id!(
    /// Identifies a registered account.
    UserId
);
int_id!(
    /// Identifies a movie in the catalog.
    MovieId
);
int_id!(
    /// Identifies a review.
    ReviewId
);
int_id!(
    /// Identifies a line in a user's cart.
    CartItemId
);
int_id!(
    /// Identifies a placed order.
    OrderId
);
