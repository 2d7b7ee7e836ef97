//! Diesel implementation of the product repository traits.

use diesel::prelude::*;
use diesel::sql_types::{Integer, Text};
use diesel::sqlite::Sqlite;

use crate::{
    domain::{
        product::{NewProduct, Product, UpdateProduct},
        types::ProductId,
    },
    models::product::{
        NewProduct as DbNewProduct, Product as DbProduct, UpdateProduct as DbUpdateProduct,
    },
    repository::{
        DieselRepository, ProductFilter, ProductListQuery, ProductReader, ProductWriter,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::products,
};

define_sql_function! {
    /// SQLite `instr`: 1-based position of `needle` inside `haystack`, 0 when absent.
    ///
    /// Unlike `LIKE` it is case-sensitive and has no wildcard characters.
    fn instr(haystack: Text, needle: Text) -> Integer;
}

/// Compiles a [`ProductFilter`] into a boxed `SELECT` over `products`.
fn filtered_products(filter: &ProductFilter) -> products::BoxedQuery<'_, Sqlite> {
    let mut query = products::table.into_boxed::<Sqlite>();

    if let Some(name) = filter.name() {
        query = query.filter(instr(products::name, name).gt(0));
    }
    if let Some(description) = filter.description() {
        query = query.filter(instr(products::description, description).gt(0));
    }

    query
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        let mut conn = self.conn()?;
        let db_product = products::table
            .find(id.get())
            .first::<DbProduct>(&mut conn)
            .optional()?;

        match db_product {
            Some(db_product) => Ok(Some(
                Product::try_from(db_product).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)> {
        let mut conn = self.conn()?;
        let page = query.pagination;

        // Count and page come from the same snapshot.
        let (total, db_products) =
            conn.transaction::<_, diesel::result::Error, _>(|conn| {
                let total = filtered_products(&query.filter)
                    .count()
                    .get_result::<i64>(conn)?;

                let db_products = filtered_products(&query.filter)
                    .order(products::id.asc())
                    .offset(to_i64(page.offset()))
                    .limit(to_i64(page.size()))
                    .load::<DbProduct>(conn)?;

                Ok((total, db_products))
            })?;

        let items = db_products
            .into_iter()
            .map(|db_product| Product::try_from(db_product).map_err(RepositoryError::from))
            .collect::<RepositoryResult<Vec<Product>>>()?;

        Ok((usize::try_from(total).unwrap_or_default(), items))
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product> {
        let mut conn = self.conn()?;
        let insertable: DbNewProduct = new_product.into();

        let db_product = diesel::insert_into(products::table)
            .values(&insertable)
            .get_result::<DbProduct>(&mut conn)?;

        Product::try_from(db_product).map_err(RepositoryError::from)
    }

    fn update_product(&self, id: ProductId, updates: &UpdateProduct) -> RepositoryResult<Product> {
        let mut conn = self.conn()?;
        let db_updates: DbUpdateProduct = updates.into();

        let db_product = diesel::update(products::table.find(id.get()))
            .set(&db_updates)
            .get_result::<DbProduct>(&mut conn)?;

        Product::try_from(db_product).map_err(RepositoryError::from)
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        let deleted = diesel::delete(products::table.find(id.get())).execute(&mut conn)?;
        Ok(deleted)
    }
}
