use inventory_desk::models::Shipment;
use inventory_desk::{App, AppConfig, Catalog, OrderLedger};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Load environment variables from .env file (if present)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inventory_desk=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();

    // Seed the session state
    let catalog = Catalog::seeded();
    let ledger = OrderLedger::seeded();
    let shipments = Shipment::seeded();

    tracing::info!(
        items = catalog.len(),
        orders = ledger.len(),
        shipments = shipments.len(),
        "session state seeded"
    );

    let mut app = App::new(config, catalog, ledger, shipments);
    app.run();

    tracing::info!("session ended");
}
