//! catalog-api - a read-only product catalog over HTTP
//!
//! Serves a fixed, in-memory list of products as JSON:
//! - `GET /api/products` lists every product
//! - `GET /api/products/{id}` fetches one product or answers 404
//! - Optional bearer-token gate in front of the product routes

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod types;

pub use error::{Error, Result};
