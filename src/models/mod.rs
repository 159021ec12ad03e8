pub mod item;
pub mod order;
pub mod shipment;

pub use item::InventoryItem;
pub use order::{Order, OrderEntry, OrderStatus, ShippingMethod};
pub use shipment::{Shipment, ShipmentStatus};
