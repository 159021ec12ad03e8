//! Outgoing work orders screen
//!
//! Lists placed orders newest-first and lets the user move an order through
//! the status lifecycle.

use crate::engine::{OrderLedger, Prompt};
use crate::models::OrderStatus;

use super::console::{render_table, Console};

pub fn run(console: &mut Console, ledger: &mut OrderLedger) {
    loop {
        render_orders(console, ledger);

        let Some(id) = console.read_line("\nOrder ID to update (blank to go back): ") else {
            return;
        };
        if id.is_empty() {
            return;
        }

        if ledger.find_by_id(&id).is_none() {
            console.notify("Not Found", &format!("No order with ID {id}."));
            continue;
        }

        let Some(status) = read_status(console) else {
            continue;
        };

        match ledger.change_status(&id, status) {
            Ok(()) => console.say(&format!("Order {id} is now {status}.")),
            Err(e) => console.notify("Not Found", &e.to_string()),
        }
    }
}

fn render_orders(console: &mut Console, ledger: &OrderLedger) {
    console.say("\n--- Outgoing Work Orders ---");

    let rows: Vec<Vec<String>> = ledger
        .list(true)
        .into_iter()
        .map(|order| {
            vec![
                order.id.clone(),
                order.date.to_string(),
                order.shipping.to_string(),
                format!("${}", order.price.round_dp(2)),
                order.status.to_string(),
            ]
        })
        .collect();

    let table = render_table(&["Order ID", "Date", "Shipping", "Price", "Status"], &rows);
    console.say(&table);
}

/// Show the status menu and read a choice (number or name)
fn read_status(console: &mut Console) -> Option<OrderStatus> {
    for (i, status) in OrderStatus::ALL.iter().enumerate() {
        console.say(&format!("  {}. {status}", i + 1));
    }

    let input = console.read_line("New status: ")?;
    if let Ok(index) = input.parse::<usize>() {
        return OrderStatus::ALL.get(index.checked_sub(1)?).copied();
    }
    OrderStatus::parse(&input)
}
