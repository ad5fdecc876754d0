//! Product catalog domain module.
//!
//! An in-memory catalog of products with insert-if-absent, delete-by-id and two
//! case-sensitive substring searches. Pure domain logic: no IO, no storage.

pub mod catalog;
pub mod command;
pub mod product;
pub mod shared;

pub use catalog::{Catalog, MAX_RESULTS};
pub use command::{CatalogCommand, CatalogReply};
pub use product::Product;
pub use shared::SharedCatalog;
