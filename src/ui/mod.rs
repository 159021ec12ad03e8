//! Terminal presentation layer
//!
//! One module per screen plus the console and the navigation enum. Screens
//! are thin: they collect input, call into the engine/catalog, and render
//! results. All state is passed in explicitly; nothing is global.

pub mod console;
pub mod home;
pub mod inventory;
pub mod login;
pub mod nav;
pub mod order_form;
pub mod work_orders;

pub use console::Console;
pub use nav::NavTarget;

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::dashboard::DashboardSummary;
use crate::engine::OrderLedger;
use crate::models::Shipment;

/// The assembled application: configuration plus all session state
pub struct App {
    config: AppConfig,
    catalog: Catalog,
    ledger: OrderLedger,
    shipments: Vec<Shipment>,
}

impl App {
    pub fn new(
        config: AppConfig,
        catalog: Catalog,
        ledger: OrderLedger,
        shipments: Vec<Shipment>,
    ) -> Self {
        Self {
            config,
            catalog,
            ledger,
            shipments,
        }
    }

    /// Run the login gate, then the main event loop until log-out
    pub fn run(&mut self) {
        let mut console = Console::new();

        if !login::run(&mut console, &self.config.credentials) {
            return;
        }

        let summary = DashboardSummary::build(&self.ledger, &self.shipments, &self.catalog);
        home::render(&mut console, &summary);

        loop {
            console.say("");
            for (i, target) in NavTarget::ALL.iter().enumerate() {
                console.say(&format!("  {}. {}", i + 1, target.label()));
            }

            let Some(choice) = console.read_line("Select: ") else {
                return;
            };
            if choice.is_empty() {
                continue;
            }

            match NavTarget::from_menu_choice(&choice) {
                Some(NavTarget::Home) => {
                    let summary =
                        DashboardSummary::build(&self.ledger, &self.shipments, &self.catalog);
                    home::render(&mut console, &summary);
                }
                Some(NavTarget::OrderMaterial) => order_form::run(
                    &mut console,
                    &mut self.ledger,
                    &self.catalog,
                    self.config.high_quantity_threshold,
                ),
                Some(NavTarget::Inventory) => inventory::run(&mut console, &self.catalog),
                Some(NavTarget::WorkOrders) => work_orders::run(&mut console, &mut self.ledger),
                Some(NavTarget::LogOut) => return,
                None => console.say("Enter a number from the menu."),
            }
        }
    }
}
