//! Inventory Catalog
//!
//! The static list of known inventory items, used for browsing, substring
//! search, SKU-existence lookups, and out-of-stock alerts. No indexing and
//! no ranking; every query is a linear scan over a small fixed list.

mod seed;

use crate::models::InventoryItem;

/// The static inventory catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<InventoryItem>,
}

impl Catalog {
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Self { items }
    }

    /// Create a catalog populated with the hardcoded item list
    pub fn seeded() -> Self {
        Self::new(seed::seed_items())
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    /// Items where any field's lowercase string form contains the
    /// lowercased query substring. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&InventoryItem> {
        let needle = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.matches(&needle))
            .collect()
    }

    pub fn find_by_sku(&self, sku: &str) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.sku == sku)
    }

    pub fn contains_sku(&self, sku: &str) -> bool {
        self.find_by_sku(sku).is_some()
    }

    /// Items with zero stock, for the reorder alerts card
    pub fn out_of_stock(&self) -> Vec<&InventoryItem> {
        self.items
            .iter()
            .filter(|item| item.is_out_of_stock())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
