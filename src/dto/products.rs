//! DTOs exposed by the product API endpoints.

use serde::Deserialize;

/// Query parameters accepted by `GET /products`.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    /// Optional substring the product name must contain.
    pub name: Option<String>,
    /// Optional substring the product description must contain.
    pub description: Option<String>,
    /// Zero-based page index.
    pub page: Option<usize>,
    /// Number of products per page.
    pub size: Option<usize>,
}
