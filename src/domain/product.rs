use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::ProductId;

/// A persisted product.
///
/// `id` and `created_at` never change after insertion; `updated_at` is
/// refreshed by the store on every mutation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
}

impl NewProduct {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Replacement values for the mutable fields of a [`Product`].
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct UpdateProduct {
    pub name: String,
    pub description: String,
}

impl UpdateProduct {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}
