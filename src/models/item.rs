use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single line item in the inventory catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    pub description: String,
    pub sku: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl InventoryItem {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        sku: impl Into<String>,
        price: Decimal,
        quantity: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            sku: sku.into(),
            price,
            quantity,
        }
    }

    /// An item with zero stock needs to be reordered
    pub fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }

    /// Check whether any field of this item contains the query substring.
    ///
    /// Every field participates through its lowercase string form, so a
    /// query can hit the name, description, SKU, price, or quantity.
    /// `needle` must already be lowercased by the caller.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.sku.to_lowercase().contains(needle)
            || self.price.to_string().contains(needle)
            || self.quantity.to_string().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn hammer() -> InventoryItem {
        InventoryItem::new("Hammer", "16oz claw hammer", "HAM-0001", dec!(14.99), 25)
    }

    #[test]
    fn test_matches_any_field() {
        let item = hammer();

        assert!(item.matches("hammer"));
        assert!(item.matches("claw"));
        assert!(item.matches("ham-0001"));
        assert!(item.matches("14.99"));
        assert!(item.matches("25"));
        assert!(!item.matches("wrench"));
    }

    #[test]
    fn test_out_of_stock() {
        let mut item = hammer();
        assert!(!item.is_out_of_stock());

        item.quantity = 0;
        assert!(item.is_out_of_stock());
    }
}
