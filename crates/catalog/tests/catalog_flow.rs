//! End-to-end flows through the public catalog API, the way a form-driven front end
//! would drive it: build a candidate, submit it, render the rejection if any.

use stockroom_catalog::{
    AssociatedPart, Catalog, CatalogError, Part, PartId, PartSource, Price, Product, ProductId,
    RuleViolation, StockLevels, seed, validate_part,
};

fn part(id: i64, name: &str, stock: i64) -> Part {
    Part::manufactured(
        PartId::new(id),
        name,
        Price::from_cents(500),
        StockLevels::new(stock, 0, 50),
        3,
    )
}

#[test]
fn create_modify_delete_part() {
    let mut catalog = Catalog::new();

    let id = catalog.next_part_id();
    catalog.add_part(part(id.get(), "Hinge", 10)).unwrap();
    assert_eq!(id, PartId::new(1));

    // Modify: resolve the stored record's position, then submit a whole new record.
    let stored = catalog.find_part_by_id(id).unwrap().clone();
    let index = catalog.part_position(&stored).unwrap();
    let edited = Part::new(
        id,
        "Hinge",
        Price::from_cents(650),
        StockLevels::new(12, 0, 50),
        PartSource::outsourced("Hardware Co"),
    );
    catalog.update_part_at(index, edited.clone()).unwrap();
    assert_eq!(catalog.find_part_by_id(id), Some(&edited));

    assert!(catalog.delete_part(&edited));
    assert!(catalog.find_part_by_id(id).is_none());
    assert_eq!(catalog.next_part_id(), PartId::new(1));
}

#[test]
fn rejection_carries_field_value_and_message() {
    let mut catalog = Catalog::new();
    let err = catalog.add_part(part(1, "Hinge", 51)).unwrap_err();

    let violation = err.violation().unwrap();
    assert_eq!(violation.code(), "stock_above_maximum");
    assert_eq!(violation.field(), "stock");
    assert_eq!(
        err.to_string(),
        "Stock cannot be more than maximum storage (stock 51, max 50)"
    );
    assert!(catalog.is_empty());
}

#[test]
fn caller_side_check_matches_catalog_check() {
    let candidate = Part::outsourced(
        PartId::new(1),
        "Mat",
        Price::from_cents(100),
        StockLevels::new(1, 0, 1),
        "",
    );
    let upfront = validate_part(&candidate).unwrap_err();

    let mut catalog = Catalog::new();
    let on_write = catalog.add_part(candidate).unwrap_err();
    assert_eq!(on_write, CatalogError::Rule(upfront));
    assert_eq!(on_write.violation(), Some(&RuleViolation::CompanyNameEmpty));
}

#[test]
fn product_update_round_trips_association_order() {
    let mut catalog = Catalog::new();
    catalog.add_part(part(1, "Leg", 40)).unwrap();
    catalog.add_part(part(2, "Top", 10)).unwrap();

    let mut table = Product::new(
        catalog.next_product_id(),
        "Table",
        Price::from_cents(12_000),
        StockLevels::new(2, 1, 5),
    );
    table.add_associated_part(PartId::new(2));
    table.add_associated_part(PartId::new(1));
    catalog.add_product(table.clone()).unwrap();

    let index = catalog.product_position(&table).unwrap();
    let updated = Product::new(
        table.id_typed(),
        "Dining Table",
        Price::from_cents(15_000),
        StockLevels::new(3, 1, 5),
    )
    .with_associated_parts(table.associated_parts().iter().copied());
    catalog.update_product_at(index, updated).unwrap();

    let stored = catalog.find_product_by_id(ProductId::new(1)).unwrap();
    assert_eq!(stored.name(), "Dining Table");
    assert_eq!(stored.associated_parts(), &[PartId::new(2), PartId::new(1)]);
}

#[test]
fn product_update_without_carrying_parts_drops_them() {
    let mut catalog = Catalog::new();
    let kit = Product::new(
        ProductId::new(1),
        "Kit",
        Price::from_cents(100),
        StockLevels::new(1, 1, 1),
    )
    .with_associated_parts([PartId::new(1)]);
    catalog.add_product(kit).unwrap();

    catalog
        .update_product_at(
            0,
            Product::new(
                ProductId::new(1),
                "Kit",
                Price::from_cents(100),
                StockLevels::new(1, 1, 1),
            ),
        )
        .unwrap();
    assert!(catalog.all_products()[0].associated_parts().is_empty());
}

#[test]
fn product_id_change_on_update_checks_other_products_only() {
    let mut catalog = seed::home_goods().unwrap();

    let bathroom = catalog.find_product_by_id(ProductId::new(2)).unwrap().clone();
    let index = catalog.product_position(&bathroom).unwrap();

    let clash = Product::new(
        ProductId::new(3),
        bathroom.name(),
        bathroom.price(),
        bathroom.levels(),
    )
    .with_associated_parts(bathroom.associated_parts().iter().copied());
    let err = catalog.update_product_at(index, clash).unwrap_err();
    assert_eq!(err.violation().map(|v| v.code()), Some("duplicate_product_id"));

    let moved = Product::new(
        ProductId::new(9),
        bathroom.name(),
        bathroom.price(),
        bathroom.levels(),
    )
    .with_associated_parts(bathroom.associated_parts().iter().copied());
    catalog.update_product_at(index, moved).unwrap();
    assert!(catalog.find_product_by_id(ProductId::new(2)).is_none());
    assert_eq!(catalog.next_product_id(), ProductId::new(2));
}

#[test]
fn deleting_a_shared_part_leaves_products_dangling() {
    let mut catalog = seed::home_goods().unwrap();
    let pillow = catalog.find_part_by_id(PartId::new(4)).unwrap().clone();

    assert!(catalog.delete_part(&pillow));

    for product_id in [1, 3] {
        let product = catalog.find_product_by_id(ProductId::new(product_id)).unwrap();
        assert!(product.associated_parts().contains(&PartId::new(4)));

        let dangling: Vec<PartId> = catalog
            .associated_parts_of(product)
            .into_iter()
            .filter(AssociatedPart::is_dangling)
            .map(|a| a.part_id())
            .collect();
        assert_eq!(dangling, vec![PartId::new(4)]);
    }

    // A new part that reuses the freed id is picked up by the old reference.
    let id = catalog.next_part_id();
    assert_eq!(id, PartId::new(4));
    catalog.add_part(part(id.get(), "Throw Pillow", 5)).unwrap();
    let living = catalog.find_product_by_id(ProductId::new(1)).unwrap();
    let names: Vec<&str> = catalog
        .associated_parts_of(living)
        .iter()
        .filter_map(|a| a.part().map(|p| p.name()))
        .collect();
    assert_eq!(names, vec!["Sofa Cushion", "Throw Pillow"]);
}

#[test]
fn search_over_seed_data() {
    let catalog = seed::home_goods().unwrap();

    let names: Vec<&str> = catalog
        .find_parts_by_text("OW")
        .iter()
        .map(|p| p.name())
        .collect();
    assert_eq!(names, vec!["Bath Towel", "Pillow Cover"]);

    let names: Vec<&str> = catalog
        .find_products_by_text("SET")
        .iter()
        .map(|p| p.name())
        .collect();
    assert_eq!(names.len(), 3);

    assert!(catalog.find_parts_by_text("lamp").is_empty());
}
