use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct,
    UpdateProduct as DomainUpdateProduct,
};
use crate::domain::types::{ProductId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::product::Product`].
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
/// Insertable form of [`Product`]. Both timestamps are stamped at insert time.
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
/// Data used when updating a [`Product`] record. `created_at` is never touched.
pub struct UpdateProduct<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProductId::new(product.id)?,
            name: product.name,
            description: product.description,
            created_at: product.created_at,
            updated_at: product.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(product: &'a DomainNewProduct) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            name: product.name.as_str(),
            description: product.description.as_str(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl<'a> From<&'a DomainUpdateProduct> for UpdateProduct<'a> {
    fn from(product: &'a DomainUpdateProduct) -> Self {
        Self {
            name: product.name.as_str(),
            description: product.description.as_str(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_domain_new_stamps_equal_timestamps() {
        let domain = DomainNewProduct::new("Pantalon bonito", "Nuevo pantalon 2021 verano");
        let new: NewProduct = (&domain).into();
        assert_eq!(new.name, domain.name);
        assert_eq!(new.description, domain.description);
        assert_eq!(new.created_at, new.updated_at);
    }

    #[test]
    fn from_domain_update_creates_changeset() {
        let before = Utc::now().naive_utc();
        let domain = DomainUpdateProduct::new("Vaqueiro curto", "Vaqueiro classico verano");
        let update: UpdateProduct = (&domain).into();
        assert_eq!(update.name, "Vaqueiro curto");
        assert_eq!(update.description, "Vaqueiro classico verano");
        assert!(update.updated_at >= before);
    }

    #[test]
    fn product_into_domain() {
        let now: NaiveDateTime = Utc::now().naive_utc();
        let db_product = Product {
            id: 1,
            name: "n".to_string(),
            description: "d".to_string(),
            created_at: now,
            updated_at: now,
        };
        let domain = DomainProduct::try_from(db_product).unwrap();
        assert_eq!(domain.id.get(), 1);
        assert_eq!(domain.name, "n");
        assert_eq!(domain.description, "d");
        assert_eq!(domain.created_at, now);
        assert_eq!(domain.updated_at, now);
    }

    #[test]
    fn product_with_invalid_id_is_rejected() {
        let now: NaiveDateTime = Utc::now().naive_utc();
        let db_product = Product {
            id: 0,
            name: "n".to_string(),
            description: "d".to_string(),
            created_at: now,
            updated_at: now,
        };
        assert_eq!(
            DomainProduct::try_from(db_product),
            Err(TypeConstraintError::NonPositiveId)
        );
    }
}
