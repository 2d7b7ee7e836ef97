//! Database models shared across the product repository.

#[cfg(feature = "server")]
pub mod config;
pub mod product;
