//! Error types for order-desk operations
//!
//! This module centralizes all error types used by the order engine,
//! making error handling consistent across the codebase.

use thiserror::Error;

/// Errors that can occur while validating or managing orders
///
/// # Error Categories
///
/// - **Validation Errors**: `InvalidSku`, `InvalidQuantity`, `UnknownSku`
/// - **State Errors**: `OrderNotFound`, `DuplicateOrder`
#[derive(Debug, Error)]
pub enum OrderError {
    /// SKU text does not match the expected `AAA-9999` format
    #[error("Invalid SKU format: {0}")]
    InvalidSku(String),

    /// Quantity text does not parse to a non-negative integer
    #[error("Invalid quantity for {sku}: {text}")]
    InvalidQuantity { sku: String, text: String },

    /// SKU is well-formed but does not exist in the catalog
    #[error("Unknown SKU: {0}")]
    UnknownSku(String),

    /// Order with the specified ID was not found in the ledger
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// An order with the same ID already exists in the ledger
    #[error("Duplicate order: {0}")]
    DuplicateOrder(String),
}

impl OrderError {
    /// Returns true if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            OrderError::InvalidSku(_)
                | OrderError::InvalidQuantity { .. }
                | OrderError::UnknownSku(_)
        )
    }

    /// Returns true if this is a state error (order doesn't exist or ID clash)
    pub fn is_state_error(&self) -> bool {
        matches!(
            self,
            OrderError::OrderNotFound(_) | OrderError::DuplicateOrder(_)
        )
    }
}
