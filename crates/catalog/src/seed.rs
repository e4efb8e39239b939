//! Sample catalog used by demos and tests.

use stockroom_core::{PartId, Price, StockLevels};
use stockroom_inventory::Part;
use stockroom_products::Product;

use crate::catalog::Catalog;
use crate::error::CatalogResult;

/// Home-goods sample: four parts and three products built from them.
///
/// Everything is inserted through the validated catalog API; product ids come from the
/// catalog's allocator.
pub fn home_goods() -> CatalogResult<Catalog> {
    let mut catalog = Catalog::new();

    catalog.add_part(Part::manufactured(
        PartId::new(1),
        "Sofa Cushion",
        Price::from_cents(1999),
        StockLevels::new(10, 1, 100),
        101,
    ))?;
    catalog.add_part(Part::manufactured(
        PartId::new(2),
        "Bath Towel",
        Price::from_cents(999),
        StockLevels::new(25, 1, 100),
        102,
    ))?;
    catalog.add_part(Part::outsourced(
        PartId::new(3),
        "Kitchen Mat",
        Price::from_cents(1499),
        StockLevels::new(15, 1, 100),
        "HomeGoods Inc.",
    ))?;
    catalog.add_part(Part::outsourced(
        PartId::new(4),
        "Pillow Cover",
        Price::from_cents(799),
        StockLevels::new(20, 1, 100),
        "HomeGoods Inc.",
    ))?;

    let products: [(&str, i64, StockLevels, &[i64]); 3] = [
        ("Living Room Set", 49999, StockLevels::new(5, 1, 10), &[1, 4]),
        ("Bathroom Set", 9999, StockLevels::new(10, 1, 20), &[2]),
        ("Kitchen Set", 19999, StockLevels::new(8, 1, 15), &[3, 4]),
    ];
    for (name, cents, levels, part_ids) in products {
        let id = catalog.next_product_id();
        let product = Product::new(id, name, Price::from_cents(cents), levels)
            .with_associated_parts(part_ids.iter().copied().map(PartId::new));
        catalog.add_product(product)?;
    }

    tracing::debug!(
        parts = catalog.part_count(),
        products = catalog.product_count(),
        "seeded home goods catalog"
    );
    Ok(catalog)
}
