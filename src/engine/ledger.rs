//! Order Ledger
//!
//! The session-lifetime collection of placed orders. Insertion enforces
//! order-ID uniqueness; lookups are linear scans over the (small) list.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use crate::models::{Order, OrderStatus, ShippingMethod};

use super::errors::OrderError;

/// In-memory ledger of placed orders, keyed by unique order ID
#[derive(Debug, Clone, Default)]
pub struct OrderLedger {
    orders: Vec<Order>,
}

impl OrderLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger populated with the hardcoded session orders
    pub fn seeded() -> Self {
        let mut ledger = Self::new();
        for order in seed_orders() {
            // Seed IDs are distinct by construction
            let _ = ledger.insert(order);
        }
        ledger
    }

    /// Append an order to the ledger
    ///
    /// # Returns
    /// * `Err(OrderError::DuplicateOrder)` if the ID is already present
    pub fn insert(&mut self, order: Order) -> Result<(), OrderError> {
        if self.find_by_id(&order.id).is_some() {
            return Err(OrderError::DuplicateOrder(order.id));
        }
        tracing::debug!(order_id = %order.id, "order recorded in ledger");
        self.orders.push(order);
        Ok(())
    }

    /// All orders, optionally sorted by date descending (newest first)
    pub fn list(&self, newest_first: bool) -> Vec<Order> {
        let mut orders = self.orders.clone();
        if newest_first {
            orders.sort_by(|a, b| b.date.cmp(&a.date));
        }
        orders
    }

    /// Find an order by ID. Linear scan; `None` on a miss, never a panic.
    pub fn find_by_id(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// Overwrite the status of the order with the given ID
    ///
    /// # Returns
    /// * `Err(OrderError::OrderNotFound)` if no order has that ID
    pub fn change_status(&mut self, id: &str, new_status: OrderStatus) -> Result<(), OrderError> {
        let order = self
            .orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or_else(|| OrderError::OrderNotFound(id.to_string()))?;

        tracing::info!(order_id = %id, status = %new_status, "order status changed");
        order.change_status(new_status);
        Ok(())
    }

    /// Next free order ID in the `ORDnnn` sequence
    pub fn next_order_id(&self) -> String {
        let next = self
            .orders
            .iter()
            .filter_map(|order| order.id.strip_prefix("ORD"))
            .filter_map(|suffix| suffix.parse::<u32>().ok())
            .max()
            .map_or(100, |max| max + 1);
        format!("ORD{next}")
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// Hardcoded order data for initial setup
fn seed_orders() -> Vec<Order> {
    use OrderStatus::*;
    use ShippingMethod::*;

    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date");
    let order = |id: &str, date, shipping, price, status| {
        let mut order = Order::new(id.to_string(), date, shipping, price);
        order.change_status(status);
        order
    };

    vec![
        order("ORD123", date(2025, 4, 10), Standard, dec!(45.99), Delivered),
        order("ORD124", date(2025, 4, 11), Express, dec!(99.49), Delivered),
        order("ORD125", date(2025, 4, 12), Standard, dec!(34.76), Delivered),
        order("ORD126", date(2025, 4, 15), Air, dec!(89.65), Delivered),
        order("ORD127", date(2025, 4, 17), Overnight, dec!(156.23), Delivered),
        order("ORD128", date(2025, 4, 18), Standard, dec!(1564.56), Delivered),
        order("ORD129", date(2025, 4, 19), Express, dec!(274.89), Delivered),
        order("ORD130", date(2025, 4, 20), Standard, dec!(67.45), Delivered),
        order("ORD131", date(2025, 4, 21), Air, dec!(512.30), Delivered),
        order("ORD132", date(2025, 4, 22), Overnight, dec!(321.99), Delivered),
        order("ORD133", date(2025, 4, 23), Standard, dec!(278.00), Delivered),
        order("ORD134", date(2025, 4, 24), Express, dec!(899.99), Delivered),
        order("ORD135", date(2025, 4, 25), Air, dec!(1034.56), Delivered),
        order("ORD136", date(2025, 4, 26), Overnight, dec!(425.65), Delivered),
        order("ORD137", date(2025, 4, 27), Standard, dec!(121.70), Delivered),
        order("ORD138", date(2025, 4, 28), Express, dec!(1350.45), Delivered),
        order("ORD139", date(2025, 4, 29), Air, dec!(199.89), Pending),
        order("ORD140", date(2025, 4, 30), Overnight, dec!(465.30), Delivered),
        order("ORD141", date(2025, 5, 1), Standard, dec!(76.22), Pending),
        order("ORD142", date(2025, 5, 2), Express, dec!(154.50), Shipped),
        order("ORD143", date(2025, 5, 3), Air, dec!(875.80), Processing),
        order("ORD144", date(2025, 5, 4), Overnight, dec!(654.35), Delivered),
        order("ORD145", date(2025, 5, 5), Standard, dec!(48.99), Shipped),
        order("ORD146", date(2025, 5, 6), Express, dec!(264.55), Delivered),
        order("ORD147", date(2025, 5, 7), Air, dec!(340.80), Shipped),
        order("ORD148", date(2025, 5, 8), Overnight, dec!(199.95), Delivered),
        order("ORD149", date(2025, 5, 9), Standard, dec!(550.33), Shipped),
        order("ORD150", date(2025, 5, 10), Express, dec!(1234.80), Pending),
        order("ORD151", date(2025, 5, 11), Air, dec!(657.20), Delivered),
        order("ORD152", date(2025, 5, 12), Overnight, dec!(782.11), Delivered),
        order("ORD153", date(2025, 5, 13), Standard, dec!(899.95), Pending),
        order("ORD154", date(2025, 5, 14), Express, dec!(389.60), Pending),
        order("ORD155", date(2025, 5, 15), Overnight, dec!(512.75), Pending),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, y: i32, m: u32, d: u32) -> Order {
        Order::new(
            id.to_string(),
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            ShippingMethod::Standard,
            dec!(10.00),
        )
    }

    #[test]
    fn test_list_sorted_by_date_desc() {
        let mut ledger = OrderLedger::new();
        ledger.insert(order("ORD1", 2025, 4, 10)).unwrap();
        ledger.insert(order("ORD2", 2025, 4, 12)).unwrap();
        ledger.insert(order("ORD3", 2025, 4, 11)).unwrap();

        let ids: Vec<_> = ledger.list(true).into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["ORD2", "ORD3", "ORD1"]);

        // Unsorted listing preserves insertion order
        let ids: Vec<_> = ledger.list(false).into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["ORD1", "ORD2", "ORD3"]);
    }

    #[test]
    fn test_find_by_id_miss_returns_none() {
        let ledger = OrderLedger::new();
        assert!(ledger.find_by_id("ORD999").is_none());

        let ledger = OrderLedger::seeded();
        assert!(ledger.find_by_id("ORD999").is_none());
        assert!(ledger.find_by_id("ORD123").is_some());
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut ledger = OrderLedger::new();
        ledger.insert(order("ORD1", 2025, 4, 10)).unwrap();

        let err = ledger.insert(order("ORD1", 2025, 4, 11)).unwrap_err();
        assert!(matches!(err, OrderError::DuplicateOrder(id) if id == "ORD1"));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_change_status() {
        let mut ledger = OrderLedger::seeded();
        ledger
            .change_status("ORD139", OrderStatus::Processing)
            .unwrap();

        assert_eq!(
            ledger.find_by_id("ORD139").unwrap().status,
            OrderStatus::Processing
        );

        let err = ledger
            .change_status("ORD999", OrderStatus::Shipped)
            .unwrap_err();
        assert!(matches!(err, OrderError::OrderNotFound(_)));
    }

    #[test]
    fn test_seeded_ledger() {
        let ledger = OrderLedger::seeded();
        assert_eq!(ledger.len(), 33);
        assert_eq!(ledger.next_order_id(), "ORD156");

        let pending = ledger
            .list(true)
            .into_iter()
            .filter(|o| o.status == OrderStatus::Pending)
            .count();
        assert_eq!(pending, 6);
    }

    #[test]
    fn test_next_order_id_on_empty_ledger() {
        assert_eq!(OrderLedger::new().next_order_id(), "ORD100");
    }
}
