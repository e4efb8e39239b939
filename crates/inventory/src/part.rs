use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, PartId, Price, StockLevels};

/// Where a part comes from.
///
/// The variant carries the only field that differs between the two kinds of part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PartSource {
    /// Built in-house on a specific machine.
    Manufactured { machine_id: i64 },
    /// Bought from an outside supplier.
    Outsourced { company_name: String },
}

impl PartSource {
    pub fn manufactured(machine_id: i64) -> Self {
        Self::Manufactured { machine_id }
    }

    pub fn outsourced(company_name: impl Into<String>) -> Self {
        Self::Outsourced {
            company_name: company_name.into(),
        }
    }
}

/// Entity: Part.
///
/// The id is fixed at construction. Editing a part in a catalog means building a new
/// `Part` (possibly with another id or another source) and replacing the stored one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    id: PartId,
    name: String,
    price: Price,
    #[serde(flatten)]
    levels: StockLevels,
    source: PartSource,
}

impl Part {
    pub fn new(
        id: PartId,
        name: impl Into<String>,
        price: Price,
        levels: StockLevels,
        source: PartSource,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            levels,
            source,
        }
    }

    /// Shorthand for an in-house part.
    pub fn manufactured(
        id: PartId,
        name: impl Into<String>,
        price: Price,
        levels: StockLevels,
        machine_id: i64,
    ) -> Self {
        Self::new(id, name, price, levels, PartSource::manufactured(machine_id))
    }

    /// Shorthand for a part bought from `company_name`.
    pub fn outsourced(
        id: PartId,
        name: impl Into<String>,
        price: Price,
        levels: StockLevels,
        company_name: impl Into<String>,
    ) -> Self {
        Self::new(id, name, price, levels, PartSource::outsourced(company_name))
    }

    pub fn id_typed(&self) -> PartId {
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

    pub fn source(&self) -> &PartSource {
        &self.source
    }

    pub fn is_manufactured(&self) -> bool {
        matches!(self.source, PartSource::Manufactured { .. })
    }

    pub fn is_outsourced(&self) -> bool {
        matches!(self.source, PartSource::Outsourced { .. })
    }

    /// Machine id, for manufactured parts only.
    pub fn machine_id(&self) -> Option<i64> {
        match &self.source {
            PartSource::Manufactured { machine_id } => Some(*machine_id),
            PartSource::Outsourced { .. } => None,
        }
    }

    /// Supplier name, for outsourced parts only.
    pub fn company_name(&self) -> Option<&str> {
        match &self.source {
            PartSource::Manufactured { .. } => None,
            PartSource::Outsourced { company_name } => Some(company_name),
        }
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

    pub fn set_source(&mut self, source: PartSource) {
        self.source = source;
    }
}

impl Entity for Part {
    type Id = PartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
