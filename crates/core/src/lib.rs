//! `stockroom-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the part, product and
//! catalog crates (no storage, no logging).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{NumericId, PartId, ProductId};
pub use value_object::{Price, StockLevels, ValueObject};
