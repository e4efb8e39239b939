//! Products: assemblies built from inventory parts.
//!
//! A product refers to its parts by id only. Whether those ids still resolve to a
//! part is a question for the catalog that holds both.

pub mod product;

pub use product::Product;
