//! In-memory catalog of parts and products.
//!
//! The catalog owns two ordered lists. Insertion order is preserved and is what
//! position-based updates refer to. Every write validates its candidate first and
//! touches the lists only once the candidate is accepted.

use serde::Serialize;

use stockroom_core::{Entity, NumericId, PartId, ProductId};
use stockroom_inventory::Part;
use stockroom_products::Product;

use crate::error::{CatalogError, CatalogResult};
use crate::validation::{self, RuleViolation};

/// One entry of a product's association list, looked up in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociatedPart<'a> {
    /// The id still names a part in the catalog (the first one, if ids repeat).
    Resolved(&'a Part),
    /// No part with this id remains; the product still lists it.
    Dangling(PartId),
}

impl<'a> AssociatedPart<'a> {
    pub fn part_id(&self) -> PartId {
        match self {
            AssociatedPart::Resolved(part) => part.id_typed(),
            AssociatedPart::Dangling(id) => *id,
        }
    }

    pub fn part(&self) -> Option<&'a Part> {
        match self {
            AssociatedPart::Resolved(part) => Some(*part),
            AssociatedPart::Dangling(_) => None,
        }
    }

    pub fn is_dangling(&self) -> bool {
        matches!(self, AssociatedPart::Dangling(_))
    }
}

/// The session's parts and products.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    parts: Vec<Part>,
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends a part.
    ///
    /// Part ids are not checked for uniqueness: a caller-chosen id may repeat one
    /// already stored.
    pub fn add_part(&mut self, part: Part) -> CatalogResult<()> {
        validation::validate_part(&part).map_err(|v| rejected("add_part", v))?;
        tracing::debug!(part_id = %part.id_typed(), name = part.name(), "part added");
        self.parts.push(part);
        Ok(())
    }

    /// Validates and appends a product.
    pub fn add_product(&mut self, product: Product) -> CatalogResult<()> {
        validation::validate_product(&product).map_err(|v| rejected("add_product", v))?;
        tracing::debug!(product_id = %product.id_typed(), name = product.name(), "product added");
        self.products.push(product);
        Ok(())
    }

    /// First part whose id equals `id`.
    pub fn find_part_by_id(&self, id: PartId) -> Option<&Part> {
        self.parts.iter().find(|p| p.id_typed() == id)
    }

    /// First product whose id equals `id`.
    pub fn find_product_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id_typed() == id)
    }

    /// Parts whose name contains `query` (ignoring case) or whose id, written in
    /// decimal, contains `query`. `"1"` therefore matches ids 1, 10 and 21.
    pub fn find_parts_by_text(&self, query: &str) -> Vec<&Part> {
        search(&self.parts, query)
    }

    /// Same matching as [`Catalog::find_parts_by_text`], over products.
    pub fn find_products_by_text(&self, query: &str) -> Vec<&Product> {
        search(&self.products, query)
    }

    /// Replaces the part stored at `index` with `part`.
    ///
    /// The new part may have a different id or source; nothing of the old record is
    /// kept.
    pub fn update_part_at(&mut self, index: usize, part: Part) -> CatalogResult<()> {
        let len = self.parts.len();
        if index >= len {
            return Err(out_of_bounds("part", index, len));
        }
        validation::validate_part(&part).map_err(|v| rejected("update_part", v))?;

        tracing::debug!(index, part_id = %part.id_typed(), "part replaced");
        self.parts[index] = part;
        Ok(())
    }

    /// Replaces the product stored at `index` with `product`.
    ///
    /// The replacement's id must not be held by any other stored product. Its
    /// association list is taken as given; carry the old one forward with
    /// [`Product::with_associated_parts`] to keep it.
    pub fn update_product_at(&mut self, index: usize, product: Product) -> CatalogResult<()> {
        let len = self.products.len();
        if index >= len {
            return Err(out_of_bounds("product", index, len));
        }
        let others = self
            .products
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, p)| p);
        validation::validate_product_update(&product, others)
            .map_err(|v| rejected("update_product", v))?;

        tracing::debug!(index, product_id = %product.id_typed(), "product replaced");
        self.products[index] = product;
        Ok(())
    }

    /// Removes the first stored part equal to `part`.
    ///
    /// Products that list the part's id keep listing it.
    pub fn delete_part(&mut self, part: &Part) -> bool {
        match self.part_position(part) {
            Some(index) => {
                let removed = self.parts.remove(index);
                tracing::debug!(index, part_id = %removed.id_typed(), "part deleted");
                true
            }
            None => false,
        }
    }

    /// Removes the first stored product equal to `product`.
    pub fn delete_product(&mut self, product: &Product) -> bool {
        match self.product_position(product) {
            Some(index) => {
                let removed = self.products.remove(index);
                tracing::debug!(index, product_id = %removed.id_typed(), "product deleted");
                true
            }
            None => false,
        }
    }

    /// Position of the first stored part equal to `part`.
    pub fn part_position(&self, part: &Part) -> Option<usize> {
        self.parts.iter().position(|p| p == part)
    }

    /// Position of the first stored product equal to `product`.
    pub fn product_position(&self, product: &Product) -> Option<usize> {
        self.products.iter().position(|p| p == product)
    }

    pub fn all_parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn all_products(&self) -> &[Product] {
        &self.products
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty() && self.products.is_empty()
    }

    /// Smallest positive id not held by any stored part.
    ///
    /// Nothing is reserved: two calls without an insert in between return the same id.
    pub fn next_part_id(&self) -> PartId {
        next_free_id(&self.parts)
    }

    /// Smallest positive id not held by any stored product.
    pub fn next_product_id(&self) -> ProductId {
        next_free_id(&self.products)
    }

    /// Resolves each id in `product`'s association list, in order.
    pub fn associated_parts_of(&self, product: &Product) -> Vec<AssociatedPart<'_>> {
        product
            .associated_parts()
            .iter()
            .map(|id| match self.find_part_by_id(*id) {
                Some(part) => AssociatedPart::Resolved(part),
                None => AssociatedPart::Dangling(*id),
            })
            .collect()
    }
}

fn rejected(operation: &'static str, violation: RuleViolation) -> CatalogError {
    tracing::warn!(
        operation,
        code = violation.code(),
        field = violation.field(),
        "rejected: {violation}"
    );
    CatalogError::Rule(violation)
}

fn out_of_bounds(kind: &'static str, index: usize, len: usize) -> CatalogError {
    tracing::warn!(kind, index, len, "update position out of bounds");
    CatalogError::IndexOutOfBounds { kind, index, len }
}

fn search<'a, T>(items: &'a [T], query: &str) -> Vec<&'a T>
where
    T: Entity,
    T::Id: NumericId,
{
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.name().to_lowercase().contains(&needle)
                || item.id().value().to_string().contains(query)
        })
        .collect()
}

fn next_free_id<T>(items: &[T]) -> T::Id
where
    T: Entity,
    T::Id: NumericId,
{
    let count = items.len() as i64;
    (1..=count + 1)
        .find(|candidate| !items.iter().any(|item| item.id().value() == *candidate))
        .map(<T::Id as NumericId>::from_value)
        // Unreachable: count + 1 candidates cannot all be taken by count items.
        .unwrap_or_else(|| <T::Id as NumericId>::from_value(count + 1))
}
