//! Inventory parts.
//!
//! A part is a stocked item that is either manufactured in-house or bought from an
//! outside company. This crate only models the data; the rules a part must satisfy
//! before it enters a catalog live in `stockroom-catalog`.

pub mod part;

pub use part::{Part, PartSource};
