//! Home dashboard screen

use crate::dashboard::DashboardSummary;

use super::console::Console;

/// Render the three dashboard cards
pub fn render(console: &mut Console, summary: &DashboardSummary) {
    console.say("\n--- Orders to Be Verified ---");
    if summary.pending_orders.is_empty() {
        console.say("No orders awaiting approval.");
    }
    for order in &summary.pending_orders {
        console.say(&format!("Order ID: {} - Awaiting Approval", order.id));
    }

    console.say("\n--- Inventory Arriving Soon ---");
    if summary.arriving_shipments.is_empty() {
        console.say("No arriving orders found.");
    }
    for shipment in &summary.arriving_shipments {
        console.say(&format!(
            "Order Number: {} - Arriving on {}",
            shipment.id, shipment.arrival
        ));
    }

    console.say("\n--- Low Inventory Alerts ---");
    if summary.reorder_alerts.is_empty() {
        console.say("No items need to be reordered.");
    }
    for item in &summary.reorder_alerts {
        console.say(&format!("SKU: {} needs to be reordered!", item.sku));
    }
}
