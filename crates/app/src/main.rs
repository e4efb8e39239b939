use anyhow::Context;

use stockroom_app::{AppConfig, build_report};
use stockroom_catalog::{Catalog, seed};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("reading configuration from environment")?;
    stockroom_observability::init(config.log_format);

    let catalog = if config.seed {
        seed::home_goods().context("seeding sample catalog")?
    } else {
        tracing::info!("STOCKROOM_SEED disabled; starting with an empty catalog");
        Catalog::new()
    };
    tracing::info!(
        parts = catalog.part_count(),
        products = catalog.product_count(),
        "catalog ready"
    );

    let report = build_report(&catalog, &config);
    tracing::info!(
        parts = report.parts.len(),
        products = report.products.len(),
        "report built"
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
