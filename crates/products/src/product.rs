use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, PartId, Price, ProductId, StockLevels};

/// Entity: Product.
///
/// Associated parts are stored as part ids, in the order they were attached. The list
/// is a weak relation: removing a part from a catalog leaves its id here untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Price,
    #[serde(flatten)]
    levels: StockLevels,
    #[serde(default)]
    associated_parts: Vec<PartId>,
}

impl Product {
    /// New product with no associated parts.
    pub fn new(id: ProductId, name: impl Into<String>, price: Price, levels: StockLevels) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            levels,
            associated_parts: Vec::new(),
        }
    }

    /// Builder used when replacing a stored product: the caller carries the previous
    /// association list forward explicitly.
    pub fn with_associated_parts(mut self, part_ids: impl IntoIterator<Item = PartId>) -> Self {
        self.set_associated_parts(part_ids);
        self
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn levels(&self) -> StockLevels {
        self.levels
    }

    pub fn stock(&self) -> i64 {
        self.levels.stock
    }

    pub fn min(&self) -> i64 {
        self.levels.min
    }

    pub fn max(&self) -> i64 {
        self.levels.max
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_price(&mut self, price: Price) {
        self.price = price;
    }

    pub fn set_levels(&mut self, levels: StockLevels) {
        self.levels = levels;
    }

    pub fn set_stock(&mut self, stock: i64) {
        self.levels.stock = stock;
    }

    pub fn set_min(&mut self, min: i64) {
        self.levels.min = min;
    }

    pub fn set_max(&mut self, max: i64) {
        self.levels.max = max;
    }

    /// Appends a part reference. The same part may be attached more than once.
    pub fn add_associated_part(&mut self, part_id: PartId) {
        self.associated_parts.push(part_id);
    }

    /// Replaces the whole association list, keeping the given order.
    pub fn set_associated_parts(&mut self, part_ids: impl IntoIterator<Item = PartId>) {
        self.associated_parts = part_ids.into_iter().collect();
    }

    /// Removes the first reference to `part_id`; returns whether one was removed.
    pub fn remove_associated_part(&mut self, part_id: PartId) -> bool {
        match self.associated_parts.iter().position(|id| *id == part_id) {
            Some(index) => {
                self.associated_parts.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn associated_parts(&self) -> &[PartId] {
        &self.associated_parts
    }

    pub fn has_associated_parts(&self) -> bool {
        !self.associated_parts.is_empty()
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
