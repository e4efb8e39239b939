//! Business rules checked before any catalog write.
//!
//! Every create/update path (part or product) goes through the same functions, so a
//! candidate is judged identically no matter which form produced it. Checks run in a
//! fixed order and stop at the first broken rule:
//!
//! 1. price >= 0
//! 2. stock >= 0
//! 3. min >= 0 and max >= 0
//! 4. min <= max
//! 5. stock >= min
//! 6. stock <= max
//! 7. name is not empty
//! 8. part source: machine id >= 0, company name not empty
//! 9. product updates: the id is not held by another product
//!
//! Candidates arrive already parsed; text that failed to parse never reaches here.

use thiserror::Error;

use stockroom_core::{Price, ProductId, StockLevels};
use stockroom_inventory::{Part, PartSource};
use stockroom_products::Product;

/// A broken business rule, with the values that broke it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("Price cannot be negative (got {price})")]
    PriceNegative { price: Price },

    #[error("Stock cannot be negative (got {stock})")]
    StockNegative { stock: i64 },

    #[error("Min and Max values cannot be negative (min {min}, max {max})")]
    BoundsNegative { min: i64, max: i64 },

    #[error("Min value cannot be greater than Max value (min {min}, max {max})")]
    BoundsInverted { min: i64, max: i64 },

    #[error("Stock cannot be less than minimum storage (stock {stock}, min {min})")]
    StockBelowMinimum { stock: i64, min: i64 },

    #[error("Stock cannot be more than maximum storage (stock {stock}, max {max})")]
    StockAboveMaximum { stock: i64, max: i64 },

    #[error("Name cannot be empty")]
    NameEmpty,

    #[error("Machine ID cannot be negative (got {machine_id})")]
    MachineIdNegative { machine_id: i64 },

    #[error("Company Name cannot be empty")]
    CompanyNameEmpty,

    #[error("Id cannot be an another products existing id (id {id})")]
    DuplicateProductId { id: ProductId },
}

impl RuleViolation {
    /// Stable machine-readable tag.
    pub fn code(&self) -> &'static str {
        match self {
            RuleViolation::PriceNegative { .. } => "price_negative",
            RuleViolation::StockNegative { .. } => "stock_negative",
            RuleViolation::BoundsNegative { .. } => "bounds_negative",
            RuleViolation::BoundsInverted { .. } => "bounds_inverted",
            RuleViolation::StockBelowMinimum { .. } => "stock_below_minimum",
            RuleViolation::StockAboveMaximum { .. } => "stock_above_maximum",
            RuleViolation::NameEmpty => "name_empty",
            RuleViolation::MachineIdNegative { .. } => "machine_id_negative",
            RuleViolation::CompanyNameEmpty => "company_name_empty",
            RuleViolation::DuplicateProductId { .. } => "duplicate_product_id",
        }
    }

    /// The input field a form should highlight.
    pub fn field(&self) -> &'static str {
        match self {
            RuleViolation::PriceNegative { .. } => "price",
            RuleViolation::StockNegative { .. }
            | RuleViolation::StockBelowMinimum { .. }
            | RuleViolation::StockAboveMaximum { .. } => "stock",
            RuleViolation::BoundsNegative { min, .. } if *min < 0 => "min",
            RuleViolation::BoundsNegative { .. } => "max",
            RuleViolation::BoundsInverted { .. } => "min",
            RuleViolation::NameEmpty => "name",
            RuleViolation::MachineIdNegative { .. } => "machine_id",
            RuleViolation::CompanyNameEmpty => "company_name",
            RuleViolation::DuplicateProductId { .. } => "id",
        }
    }
}

/// Checks a part candidate (rules 1-8).
pub fn validate_part(part: &Part) -> Result<(), RuleViolation> {
    check_listing(part.name(), part.price(), part.levels())?;
    check_source(part.source())
}

/// Checks a product candidate for creation (rules 1-7).
pub fn validate_product(product: &Product) -> Result<(), RuleViolation> {
    check_listing(product.name(), product.price(), product.levels())
}

/// Checks a product candidate that will replace a stored product (rules 1-7, then 9).
///
/// `others` must not include the product being replaced.
pub fn validate_product_update<'a>(
    candidate: &Product,
    others: impl IntoIterator<Item = &'a Product>,
) -> Result<(), RuleViolation> {
    validate_product(candidate)?;
    ensure_unique_product_id(candidate.id_typed(), others)
}

/// Rule 9: `id` must not be held by any of `others`.
pub fn ensure_unique_product_id<'a>(
    id: ProductId,
    others: impl IntoIterator<Item = &'a Product>,
) -> Result<(), RuleViolation> {
    if others.into_iter().any(|p| p.id_typed() == id) {
        return Err(RuleViolation::DuplicateProductId { id });
    }
    Ok(())
}

fn check_listing(name: &str, price: Price, levels: StockLevels) -> Result<(), RuleViolation> {
    let StockLevels { stock, min, max } = levels;

    if price.is_negative() {
        return Err(RuleViolation::PriceNegative { price });
    }
    if stock < 0 {
        return Err(RuleViolation::StockNegative { stock });
    }
    if min < 0 || max < 0 {
        return Err(RuleViolation::BoundsNegative { min, max });
    }
    if min > max {
        return Err(RuleViolation::BoundsInverted { min, max });
    }
    if stock < min {
        return Err(RuleViolation::StockBelowMinimum { stock, min });
    }
    if stock > max {
        return Err(RuleViolation::StockAboveMaximum { stock, max });
    }
    if name.is_empty() {
        return Err(RuleViolation::NameEmpty);
    }
    Ok(())
}

fn check_source(source: &PartSource) -> Result<(), RuleViolation> {
    match source {
        PartSource::Manufactured { machine_id } if *machine_id < 0 => {
            Err(RuleViolation::MachineIdNegative {
                machine_id: *machine_id,
            })
        }
        PartSource::Outsourced { company_name } if company_name.is_empty() => {
            Err(RuleViolation::CompanyNameEmpty)
        }
        _ => Ok(()),
    }
}
