//! Navigation targets
//!
//! The sidebar destinations as a closed enum. The event loop dispatches on
//! the parsed variant; display labels are presentation only and never
//! compared to route a click.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    OrderMaterial,
    Inventory,
    WorkOrders,
    LogOut,
}

impl NavTarget {
    /// All destinations, in menu order
    pub const ALL: [NavTarget; 5] = [
        NavTarget::Home,
        NavTarget::OrderMaterial,
        NavTarget::Inventory,
        NavTarget::WorkOrders,
        NavTarget::LogOut,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavTarget::Home => "Home",
            NavTarget::OrderMaterial => "Order Material",
            NavTarget::Inventory => "Inventory",
            NavTarget::WorkOrders => "Outgoing Work Orders",
            NavTarget::LogOut => "Log Out",
        }
    }

    /// Map a 1-based menu choice to its destination
    pub fn from_menu_choice(input: &str) -> Option<NavTarget> {
        let index: usize = input.trim().parse().ok()?;
        Self::ALL.get(index.checked_sub(1)?).copied()
    }
}
