//! `stockroom-catalog`: the session catalog of parts and products.
//!
//! - [`validation`]: the business rules every candidate must pass before a write.
//! - [`catalog`]: the in-memory repository (CRUD, search, id allocation).
//! - [`shared`]: a single-writer handle for callers that cross threads.
//! - [`seed`]: sample data for demos and tests.

pub mod catalog;
pub mod error;
pub mod seed;
pub mod shared;
pub mod validation;

pub use catalog::{AssociatedPart, Catalog};
pub use error::{CatalogError, CatalogResult};
pub use shared::SharedCatalog;
pub use validation::{
    RuleViolation, ensure_unique_product_id, validate_part, validate_product,
    validate_product_update,
};

pub use stockroom_core::{PartId, Price, ProductId, StockLevels};
pub use stockroom_inventory::{Part, PartSource};
pub use stockroom_products::Product;
