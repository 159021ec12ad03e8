//! Dashboard aggregation for the home screen
//!
//! Collects the three cards shown after login: orders awaiting approval,
//! inbound shipments arriving soon, and out-of-stock reorder alerts.

use crate::catalog::Catalog;
use crate::engine::OrderLedger;
use crate::models::{InventoryItem, Order, OrderStatus, Shipment};

/// A point-in-time snapshot of the dashboard cards
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub pending_orders: Vec<Order>,
    pub arriving_shipments: Vec<Shipment>,
    pub reorder_alerts: Vec<InventoryItem>,
}

impl DashboardSummary {
    /// Build a fresh summary from the current session state
    pub fn build(ledger: &OrderLedger, shipments: &[Shipment], catalog: &Catalog) -> Self {
        let pending_orders = ledger
            .list(true)
            .into_iter()
            .filter(|order| order.status == OrderStatus::Pending)
            .collect();

        let arriving_shipments = shipments
            .iter()
            .filter(|shipment| shipment.is_arriving_soon())
            .cloned()
            .collect();

        let reorder_alerts = catalog.out_of_stock().into_iter().cloned().collect();

        Self {
            pending_orders,
            arriving_shipments,
            reorder_alerts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShipmentStatus;

    #[test]
    fn test_summary_partitions_session_state() {
        let ledger = OrderLedger::seeded();
        let shipments = Shipment::seeded();
        let catalog = Catalog::seeded();

        let summary = DashboardSummary::build(&ledger, &shipments, &catalog);

        assert!(summary
            .pending_orders
            .iter()
            .all(|o| o.status == OrderStatus::Pending));
        assert_eq!(summary.pending_orders.len(), 6);

        assert!(summary
            .arriving_shipments
            .iter()
            .all(|s| s.status == ShipmentStatus::Shipped));

        assert!(summary.reorder_alerts.iter().all(|i| i.quantity == 0));
    }

    #[test]
    fn test_empty_state() {
        let summary = DashboardSummary::build(&OrderLedger::new(), &[], &Catalog::default());

        assert!(summary.pending_orders.is_empty());
        assert!(summary.arriving_shipments.is_empty());
        assert!(summary.reorder_alerts.is_empty());
    }
}
