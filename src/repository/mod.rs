use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        product::{NewProduct, Product, UpdateProduct},
        types::ProductId,
    },
    pagination::PageRequest,
    repository::errors::RepositoryResult,
};

pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod product;

/// Diesel-backed repository shared by all handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

/// Substring constraints applied to a product listing.
///
/// Each component is optional on its own; an absent component adds no
/// constraint, while a present one requires case-sensitive, unanchored
/// containment of the verbatim text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProductFilter {
    #[default]
    All,
    ByName(String),
    ByDescription(String),
    ByBoth {
        name: String,
        description: String,
    },
}

impl ProductFilter {
    pub fn new(name: Option<String>, description: Option<String>) -> Self {
        match (name, description) {
            (None, None) => Self::All,
            (Some(name), None) => Self::ByName(name),
            (None, Some(description)) => Self::ByDescription(description),
            (Some(name), Some(description)) => Self::ByBoth { name, description },
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::ByName(name) | Self::ByBoth { name, .. } => Some(name),
            Self::All | Self::ByDescription(_) => None,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::ByDescription(description) | Self::ByBoth { description, .. } => {
                Some(description)
            }
            Self::All | Self::ByName(_) => None,
        }
    }

    /// Evaluates the filter against an in-memory product.
    pub fn matches(&self, product: &Product) -> bool {
        self.name().is_none_or(|name| product.name.contains(name))
            && self
                .description()
                .is_none_or(|description| product.description.contains(description))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    pub filter: ProductFilter,
    pub pagination: PageRequest,
}

impl ProductListQuery {
    pub fn new(filter: ProductFilter) -> Self {
        Self {
            filter,
            pagination: PageRequest::default(),
        }
    }

    pub fn paginate(mut self, pagination: PageRequest) -> Self {
        self.pagination = pagination;
        self
    }
}

pub trait ProductReader {
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
    /// Returns the total number of matching products and the requested page,
    /// ordered by ascending id.
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
}

pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    /// Fails with [`errors::RepositoryError::NotFound`] when no row has `id`.
    fn update_product(&self, id: ProductId, updates: &UpdateProduct) -> RepositoryResult<Product>;
    /// Returns the number of deleted rows, zero when `id` did not exist.
    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize>;
}
