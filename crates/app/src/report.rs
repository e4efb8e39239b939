//! JSON report of (a filtered view of) the catalog.

use serde::Serialize;

use stockroom_catalog::{AssociatedPart, Catalog, Part, PartId, Product};

use crate::config::AppConfig;

/// What the binary prints.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub parts: Vec<&'a Part>,
    pub products: Vec<ProductEntry<'a>>,
}

/// A product plus its association list looked up against the catalog.
#[derive(Debug, Serialize)]
pub struct ProductEntry<'a> {
    #[serde(flatten)]
    pub product: &'a Product,
    pub resolved_parts: Vec<ResolvedPart<'a>>,
}

/// `name` is `None` when the part has been deleted from the catalog.
#[derive(Debug, Serialize)]
pub struct ResolvedPart<'a> {
    pub id: PartId,
    pub name: Option<&'a str>,
}

impl<'a> From<AssociatedPart<'a>> for ResolvedPart<'a> {
    fn from(value: AssociatedPart<'a>) -> Self {
        Self {
            id: value.part_id(),
            name: value.part().map(Part::name),
        }
    }
}

pub fn build_report<'a>(catalog: &'a Catalog, config: &AppConfig) -> Report<'a> {
    let parts = match config.part_query.as_deref() {
        Some(query) => catalog.find_parts_by_text(query),
        None => catalog.all_parts().iter().collect(),
    };
    let products = match config.product_query.as_deref() {
        Some(query) => catalog.find_products_by_text(query),
        None => catalog.all_products().iter().collect(),
    };

    Report {
        parts,
        products: products
            .into_iter()
            .map(|product| ProductEntry {
                product,
                resolved_parts: catalog
                    .associated_parts_of(product)
                    .into_iter()
                    .map(ResolvedPart::from)
                    .collect(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_catalog::seed;

    #[test]
    fn unfiltered_report_lists_everything() {
        let catalog = seed::home_goods().unwrap();
        let report = build_report(&catalog, &AppConfig::default());
        assert_eq!(report.parts.len(), 4);
        assert_eq!(report.products.len(), 3);
    }

    #[test]
    fn queries_filter_each_list() {
        let catalog = seed::home_goods().unwrap();
        let config = AppConfig {
            part_query: Some("mat".to_string()),
            product_query: Some("2".to_string()),
            ..AppConfig::default()
        };

        let report = build_report(&catalog, &config);
        let part_names: Vec<&str> = report.parts.iter().map(|p| p.name()).collect();
        assert_eq!(part_names, vec!["Kitchen Mat"]);
        assert_eq!(report.products.len(), 1);
        assert_eq!(report.products[0].product.name(), "Bathroom Set");
    }

    #[test]
    fn json_marks_deleted_parts_with_null_name() {
        let mut catalog = seed::home_goods().unwrap();
        let towel = catalog.all_parts()[1].clone();
        assert!(catalog.delete_part(&towel));

        let report = build_report(&catalog, &AppConfig::default());
        let value = serde_json::to_value(&report).unwrap();

        let bathroom = &value["products"][1];
        assert_eq!(bathroom["name"], "Bathroom Set");
        assert_eq!(bathroom["associated_parts"][0], 2);
        assert_eq!(bathroom["resolved_parts"][0]["id"], 2);
        assert!(bathroom["resolved_parts"][0]["name"].is_null());
    }
}
