use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A placed material order, tracked for the lifetime of the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub date: NaiveDate,
    pub shipping: ShippingMethod,
    pub price: Decimal,
    pub status: OrderStatus,
}

/// Order status throughout its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
}

/// Shipping method for a placed order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingMethod {
    Standard,
    Express,
    Air,
    Overnight,
}

/// A single accepted (SKU, quantity) pair from the order form.
///
/// Transient: built from raw input during validation and discarded once the
/// submission either completes or is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEntry {
    pub sku: String,
    pub quantity: u32,
}

impl Order {
    /// Create a new order with the default `Pending` status
    pub fn new(id: String, date: NaiveDate, shipping: ShippingMethod, price: Decimal) -> Self {
        Self {
            id,
            date,
            shipping,
            price,
            status: OrderStatus::Pending,
        }
    }

    /// Overwrite the order status. All other fields are immutable after creation.
    pub fn change_status(&mut self, new_status: OrderStatus) {
        self.status = new_status;
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {} | Date: {} | Shipping: {} | Price: ${} | Status: {}",
            self.id,
            self.date,
            self.shipping,
            self.price.round_dp(2),
            self.status
        )
    }
}

impl OrderStatus {
    /// All statuses, in lifecycle order. Used to render the status menu.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        }
    }

    /// Parse a status from its display name, case-insensitively.
    /// Returns `None` for anything outside the closed set.
    pub fn parse(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(text.trim()))
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ShippingMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "Standard",
            ShippingMethod::Express => "Express",
            ShippingMethod::Air => "Air",
            ShippingMethod::Overnight => "Overnight",
        }
    }
}

impl std::fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl OrderEntry {
    pub fn new(sku: impl Into<String>, quantity: u32) -> Self {
        Self {
            sku: sku.into(),
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_order_defaults_to_pending() {
        let order = Order::new(
            "ORD200".to_string(),
            date(2025, 5, 20),
            ShippingMethod::Standard,
            dec!(45.99),
        );

        assert_eq!(order.id, "ORD200");
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_change_status() {
        let mut order = Order::new(
            "ORD200".to_string(),
            date(2025, 5, 20),
            ShippingMethod::Express,
            dec!(12.50),
        );

        order.change_status(OrderStatus::Shipped);
        assert_eq!(order.status, OrderStatus::Shipped);
    }

    #[test]
    fn test_order_display() {
        let order = Order::new(
            "ORD201".to_string(),
            date(2025, 5, 21),
            ShippingMethod::Air,
            dec!(89.65),
        );

        assert_eq!(
            order.to_string(),
            "ID: ORD201 | Date: 2025-05-21 | Shipping: Air | Price: $89.65 | Status: Pending"
        );
    }

    #[test]
    fn test_status_parse_round_trip() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::parse("  shipped "), Some(OrderStatus::Shipped));
        assert_eq!(OrderStatus::parse("Cancelled"), None);
    }
}
