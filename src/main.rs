//! # Oficina back end
//!
//! Opens the shop database (creating it on first run), starts every actor and
//! logs a dashboard snapshot: open work orders, today's revenue and the number
//! of products at or below their minimum stock.
//!
//! Configuration comes from the environment and an optional `.env` file; see
//! [`oficina::settings`].

use oficina::clients::ActorClient;
use oficina::lifecycle::{setup_tracing, OficinaSystem};
use oficina::settings::AppConfig;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = AppConfig::from_env().map_err(|e| e.to_string())?;
    info!(path = %config.database_path.display(), "Starting oficina");

    let system = OficinaSystem::start(&config)
        .await
        .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("dashboard");
    async {
        let customers = system.customer_client.list().await.map_err(|e| e.to_string())?;
        let open_orders = system
            .work_order_client
            .open_count()
            .await
            .map_err(|e| e.to_string())?;
        let revenue = system
            .work_order_client
            .daily_revenue()
            .await
            .map_err(|e| e.to_string())?;
        let low_stock = system
            .product_client
            .count_low_stock()
            .await
            .map_err(|e| e.to_string())?;

        info!(
            customers = customers.len(),
            open_orders,
            revenue,
            low_stock,
            "Dashboard"
        );
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await
}
