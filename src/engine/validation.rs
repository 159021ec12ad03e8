//! Order validation functions
//!
//! This module provides centralized validation for material orders before
//! they are submitted. All validation logic is contained here to ensure
//! consistency and make it easy to add new validation rules.

use std::sync::OnceLock;

use regex::Regex;

use crate::catalog::Catalog;
use crate::models::OrderEntry;
use crate::utils::validation::is_all_digits;

use super::errors::OrderError;

/// Entries at or above this quantity require explicit user confirmation
pub const HIGH_QUANTITY_THRESHOLD: u32 = 100;

/// Expected SKU shape: three uppercase letters, a hyphen, four digits
const SKU_PATTERN: &str = r"^[A-Z]{3}-[0-9]{4}$";

fn sku_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(SKU_PATTERN).expect("SKU pattern compiles"))
}

/// The outcome of validating one batch of forwarded (SKU, quantity) pairs
///
/// Never partially valid per pair: each forwarded pair either lands in
/// `valid` or contributes an error message. If `errors` is non-empty the
/// caller must discard `valid` and re-prompt.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub valid: Vec<OrderEntry>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

// ============================================================================
// Pre-validation filter
// ============================================================================

/// Extract the usable (SKU, quantity) pairs from raw form input.
///
/// This is the presentation layer's filter, not validation proper: a pair
/// is forwarded only if the SKU text is non-empty and the quantity text is
/// all ASCII digits after trimming. Everything else is silently dropped,
/// mirroring form rows the user never filled in.
pub fn extract_entries(raw: &[(String, String)]) -> Vec<(String, String)> {
    raw.iter()
        .filter_map(|(sku, qty)| {
            let sku = sku.trim();
            let qty = qty.trim();
            if !sku.is_empty() && is_all_digits(qty) {
                Some((sku.to_string(), qty.to_string()))
            } else {
                None
            }
        })
        .collect()
}

// ============================================================================
// Individual Validation Functions
// ============================================================================

/// Validate that SKU text matches the expected format (e.g. `ABC-1234`)
///
/// # Returns
/// * `Ok(())` if the SKU is well-formed
/// * `Err(OrderError::InvalidSku)` otherwise
pub fn validate_sku(sku: &str) -> Result<(), OrderError> {
    if sku_regex().is_match(sku) {
        Ok(())
    } else {
        Err(OrderError::InvalidSku(sku.to_string()))
    }
}

/// Parse quantity text into a non-negative integer
///
/// The extraction filter only forwards all-digit text, but parsing can
/// still fail on overflow, and callers may bypass the filter.
///
/// # Returns
/// * `Ok(quantity)` on success
/// * `Err(OrderError::InvalidQuantity)` if the text does not parse
pub fn parse_quantity(sku: &str, text: &str) -> Result<u32, OrderError> {
    text.parse::<u32>().map_err(|_| OrderError::InvalidQuantity {
        sku: sku.to_string(),
        text: text.to_string(),
    })
}

// ============================================================================
// Composite Validation Function
// ============================================================================

/// Validate a batch of forwarded (SKU, quantity) pairs.
///
/// This is the single entry point for order validation. It checks every
/// pair and accumulates one human-readable error per invalid pair rather
/// than short-circuiting, so the caller can report every problem at once.
///
/// # Validations Performed
/// 1. SKU must match the `AAA-9999` format
/// 2. Quantity text must parse to a non-negative integer
/// 3. With `Some(catalog)`, the SKU must also exist in the catalog
///
/// # Arguments
/// * `pairs` - Forwarded pairs from [`extract_entries`]
/// * `catalog` - Optional catalog for SKU-existence checking
pub fn check_order_validity(pairs: &[(String, String)], catalog: Option<&Catalog>) -> ValidationResult {
    let mut result = ValidationResult::default();

    for (sku, qty_text) in pairs {
        let mut pair_ok = true;

        if let Err(e) = validate_sku(sku) {
            result.errors.push(e.to_string());
            pair_ok = false;
        } else if let Some(catalog) = catalog {
            if !catalog.contains_sku(sku) {
                result.errors.push(OrderError::UnknownSku(sku.clone()).to_string());
                pair_ok = false;
            }
        }

        match parse_quantity(sku, qty_text) {
            Ok(quantity) if pair_ok => result.valid.push(OrderEntry::new(sku.clone(), quantity)),
            Ok(_) => {}
            Err(e) => result.errors.push(e.to_string()),
        }
    }

    result
}

/// Partition accepted entries by the high-quantity confirmation threshold.
///
/// The two halves are disjoint, keep their relative order, and their union
/// recovers the input exactly.
pub fn partition_high_quantity(
    entries: &[OrderEntry],
    threshold: u32,
) -> (Vec<OrderEntry>, Vec<OrderEntry>) {
    entries
        .iter()
        .cloned()
        .partition(|entry| entry.quantity >= threshold)
}

// ============================================================================
// Tests
// ============================================================================
