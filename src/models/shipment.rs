use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inbound supplier shipment tracked on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: String,
    pub arrival: NaiveDate,
    pub status: ShipmentStatus,
}

/// Shipment status as reported by the supplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    Ordered,
    Shipped,
    Delivered,
}

impl Shipment {
    pub fn new(id: impl Into<String>, arrival: NaiveDate, status: ShipmentStatus) -> Self {
        Self {
            id: id.into(),
            arrival,
            status,
        }
    }

    /// Shipments that have left the supplier but not yet arrived
    pub fn is_arriving_soon(&self) -> bool {
        self.status == ShipmentStatus::Shipped
    }

    /// Hardcoded inbound shipments shown on the dashboard
    pub fn seeded() -> Vec<Shipment> {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date");

        vec![
            Shipment::new("PO-1012", date(2025, 5, 16), ShipmentStatus::Shipped),
            Shipment::new("PO-1013", date(2025, 5, 18), ShipmentStatus::Shipped),
            Shipment::new("PO-1014", date(2025, 5, 19), ShipmentStatus::Ordered),
            Shipment::new("PO-1015", date(2025, 5, 21), ShipmentStatus::Shipped),
            Shipment::new("PO-1016", date(2025, 5, 24), ShipmentStatus::Ordered),
            Shipment::new("PO-1017", date(2025, 5, 12), ShipmentStatus::Delivered),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arriving_soon_is_shipped_only() {
        let arriving: Vec<_> = Shipment::seeded()
            .into_iter()
            .filter(Shipment::is_arriving_soon)
            .collect();

        assert_eq!(arriving.len(), 3);
        assert!(arriving.iter().all(|s| s.status == ShipmentStatus::Shipped));
    }
}
