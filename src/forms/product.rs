use serde::Deserialize;
use validator::Validate;

use crate::domain::product::{NewProduct, UpdateProduct};
use crate::forms::FormError;

/// JSON body used both to create and to replace a product.
///
/// Fields are optional at the deserialisation level so that a missing or
/// `null` value surfaces as a validation error rather than a parse failure.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ProductForm {
    #[validate(required)]
    pub name: Option<String>,
    #[validate(required)]
    pub description: Option<String>,
}

/// Validated product fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
}

impl TryFrom<ProductForm> for ProductPayload {
    type Error = FormError;

    fn try_from(form: ProductForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let ProductForm {
            name: Some(name),
            description: Some(description),
        } = form
        else {
            return Err(FormError::Incomplete);
        };

        Ok(Self { name, description })
    }
}

impl ProductPayload {
    pub fn into_new_product(self) -> NewProduct {
        NewProduct::new(self.name, self.description)
    }

    pub fn into_update(self) -> UpdateProduct {
        UpdateProduct::new(self.name, self.description)
    }
}
