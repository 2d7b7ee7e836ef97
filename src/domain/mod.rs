//! Domain aggregates exposed by the product catalog service layer.

pub mod product;
pub mod types;
