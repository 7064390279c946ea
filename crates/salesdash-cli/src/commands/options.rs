//! Filter options command implementation

use anyhow::Result;
use salesdash_core::Dashboard;

pub fn cmd_options(dashboard: &Dashboard, json: bool) -> Result<()> {
    let table = dashboard.table();
    let regions = table.regions();
    let products = table.products();

    if json {
        let body = serde_json::json!({
            "records": table.len(),
            "date_range": table.date_range(),
            "regions": regions,
            "products": products,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!();
    println!("🔎 Filter Options");
    println!("   Records: {}", table.len());
    if let Some((from, to)) = table.date_range() {
        println!("   Period: {} to {}", from, to);
    }
    println!("   ─────────────────────────────────────────────────────────────");

    println!("   Regions ({}):", regions.len());
    for region in &regions {
        println!("     - {}", region);
    }
    println!("   Products ({}):", products.len());
    for product in &products {
        println!("     - {}", product);
    }
    println!();

    Ok(())
}
