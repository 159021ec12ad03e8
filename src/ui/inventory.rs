//! Inventory browse/search screen

use crate::catalog::Catalog;
use crate::models::InventoryItem;

use super::console::{render_table, Console};

/// Show the full catalog, then run the search loop
pub fn run(console: &mut Console, catalog: &Catalog) {
    console.say("\n--- Inventory ---");
    render_items(console, &catalog.items().iter().collect::<Vec<_>>());

    loop {
        let Some(query) = console.read_line("\nSearch inventory (blank to go back): ") else {
            return;
        };
        if query.is_empty() {
            return;
        }

        let results = catalog.search(&query);
        if results.is_empty() {
            console.say("No matching items.");
        } else {
            render_items(console, &results);
        }
    }
}

fn render_items(console: &mut Console, items: &[&InventoryItem]) {
    let rows: Vec<Vec<String>> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            vec![
                (i + 1).to_string(),
                item.name.clone(),
                item.description.clone(),
                item.sku.clone(),
                format!("${}", item.price.round_dp(2)),
                item.quantity.to_string(),
            ]
        })
        .collect();

    let table = render_table(
        &["#", "Item Name", "Description", "SKU", "Price", "Quantity"],
        &rows,
    );
    console.say(&table);
}
