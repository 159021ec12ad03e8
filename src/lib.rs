// Library Crate Root
// lib.rs

pub mod auth;
pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

// pub use = re-export at crate root
pub use auth::Credentials;
pub use catalog::Catalog;
pub use config::AppConfig;
pub use dashboard::DashboardSummary;
pub use engine::{
    check_order_validity, extract_entries, partition_high_quantity, submit_order, OrderError,
    OrderLedger, Prompt, SubmissionOutcome, ValidationResult,
};
pub use models::{InventoryItem, Order, OrderEntry, OrderStatus, Shipment, ShippingMethod};
pub use ui::App;
