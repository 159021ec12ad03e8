//! Material order form
//!
//! Collects raw (SKU, quantity) rows and hands them to the submission
//! pipeline. The form itself does no validation; unusable rows are dropped
//! by the pipeline's extraction filter.

use crate::catalog::Catalog;
use crate::engine::{submit_order, OrderLedger, Prompt, SubmissionOutcome};

use super::console::Console;

pub fn run(
    console: &mut Console,
    ledger: &mut OrderLedger,
    catalog: &Catalog,
    high_quantity_threshold: u32,
) {
    console.say("\n--- Order Material ---");
    console.say("Enter one SKU per row (format ABC-1234). Leave SKU blank to submit.");

    let mut rows: Vec<(String, String)> = Vec::new();
    loop {
        let Some(sku) = console.read_line("SKU: ") else {
            return;
        };
        if sku.is_empty() {
            break;
        }
        let Some(quantity) = console.read_line("Quantity: ") else {
            return;
        };
        rows.push((sku, quantity));
    }

    match submit_order(&rows, ledger, catalog, console, high_quantity_threshold) {
        Ok(SubmissionOutcome::Placed { .. }) => {
            // The form is reset for the next visit by dropping the rows
            rows.clear();
        }
        Ok(_) => {}
        Err(e) => console.notify("Order Error", &e.to_string()),
    }
}
