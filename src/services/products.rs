//! Product listing and CRUD workflows.

use crate::domain::product::Product;
use crate::domain::types::ProductId;
use crate::dto::products::ProductsQuery;
use crate::forms::product::{ProductForm, ProductPayload};
use crate::pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, PageEnvelope, PageRequest};
use crate::repository::{ProductFilter, ProductListQuery, ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

/// Runs `filter` against the store for a single page.
///
/// A page without rows is reported as [`ServiceError::EmptyPage`], which also
/// covers page indexes past the last page.
pub fn fetch_page<R>(
    repo: &R,
    filter: ProductFilter,
    page: PageRequest,
) -> ServiceResult<PageEnvelope<Product>>
where
    R: ProductReader + ?Sized,
{
    let (total, products) = repo.list_products(ProductListQuery::new(filter).paginate(page))?;

    if products.is_empty() {
        return Err(ServiceError::EmptyPage);
    }

    Ok(PageEnvelope::new(products, page, total))
}

/// Builds the filter and page request from query parameters and fetches the page.
pub fn list_products<R>(repo: &R, params: ProductsQuery) -> ServiceResult<PageEnvelope<Product>>
where
    R: ProductReader + ?Sized,
{
    let page = PageRequest::new(
        params.page.unwrap_or(DEFAULT_PAGE),
        params.size.unwrap_or(DEFAULT_PAGE_SIZE),
    )?;
    let filter = ProductFilter::new(params.name, params.description);

    fetch_page(repo, filter, page)
}

/// Fetches a single product. Identifiers that cannot exist are reported as missing.
pub fn get_product<R>(repo: &R, product_id: i64) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    let id = ProductId::try_from(product_id).map_err(|_| ServiceError::NotFound)?;

    repo.get_product_by_id(id)?.ok_or(ServiceError::NotFound)
}

/// Validates the form and persists a new product.
pub fn create_product<R>(repo: &R, form: ProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let payload = ProductPayload::try_from(form)?;

    let product = repo.create_product(&payload.into_new_product())?;

    log::info!("Created product {}", product.id);
    Ok(product)
}

/// Replaces the name and description of an existing product.
pub fn update_product<R>(repo: &R, product_id: i64, form: ProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let payload = ProductPayload::try_from(form)?;
    let id = ProductId::try_from(product_id).map_err(|_| ServiceError::NotFound)?;

    repo.update_product(id, &payload.into_update())
        .map_err(ServiceError::from)
}

/// Deletes a product. Deleting an absent product succeeds.
pub fn delete_product<R>(repo: &R, product_id: i64) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    let Ok(id) = ProductId::try_from(product_id) else {
        return Ok(());
    };

    let deleted = repo.delete_product(id)?;

    if deleted == 0 {
        log::debug!("Product {id} was already absent");
    }

    Ok(())
}
