use crate::bridge::Bridge;
use crate::clients::{
    ConfigClient, CustomerClient, ProductClient, QuoteClient, ServiceClient, VehicleClient,
    WorkOrderClient,
};
use crate::settings::AppConfig;
use crate::store::{Database, StoreError};
use tracing::{error, info};

/// The running shop back end: one shared database and one actor per table.
///
/// # Example
///
/// ```ignore
/// let system = OficinaSystem::start(&AppConfig::from_env()?).await?;
///
/// let customer = system.customer_client.create(Customer::new("Roberto Silva")).await?;
/// let today = system.work_order_client.daily_revenue().await?;
///
/// system.shutdown().await?;
/// ```
pub struct OficinaSystem {
    pub customer_client: CustomerClient,
    pub vehicle_client: VehicleClient,
    pub product_client: ProductClient,
    pub service_client: ServiceClient,
    pub quote_client: QuoteClient,
    pub work_order_client: WorkOrderClient,
    pub config_client: ConfigClient,

    db: Database,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OficinaSystem {
    /// Opens the configured database file, ensures the schema and starts all actors.
    ///
    /// Fails with [`StoreError::Unavailable`] when the file cannot be opened.
    pub async fn start(config: &AppConfig) -> Result<Self, StoreError> {
        let db = Database::open(&config.database_path).await?;
        Self::with_database(db, config.channel_buffer).await
    }

    /// Starts all actors on an already opened database.
    pub async fn with_database(db: Database, channel_buffer: usize) -> Result<Self, StoreError> {
        db.ensure_schema().await?;

        // 1. Create actors (no dependencies yet)
        let (vehicle_actor, vehicle_client) =
            crate::vehicle_actor::new(channel_buffer, db.clone());
        let (customer_actor, customer_client) =
            crate::customer_actor::new(channel_buffer, db.clone());
        let (product_actor, product_client) =
            crate::product_actor::new(channel_buffer, db.clone());
        let (service_actor, service_client) =
            crate::service_actor::new(channel_buffer, db.clone());
        let (work_order_actor, work_order_client) =
            crate::work_order_actor::new(channel_buffer, db.clone());
        let (quote_actor, quote_client) =
            crate::quote_actor::new(channel_buffer, db.clone(), work_order_client.clone());
        let (config_actor, config_client) = crate::config_actor::new(channel_buffer, db.clone());

        // 2. Start actors with injected context
        let handles = vec![
            tokio::spawn(vehicle_actor.run(())),
            tokio::spawn(customer_actor.run(vehicle_client.clone())),
            tokio::spawn(product_actor.run(())),
            tokio::spawn(service_actor.run(())),
            tokio::spawn(work_order_actor.run(())),
            tokio::spawn(quote_actor.run(())),
            tokio::spawn(config_actor.run()),
        ];

        info!(path = %db.location().display(), actors = handles.len(), "System started");

        Ok(Self {
            customer_client,
            vehicle_client,
            product_client,
            service_client,
            quote_client,
            work_order_client,
            config_client,
            db,
            handles,
        })
    }

    /// A named-channel dispatcher over clones of this system's clients.
    ///
    /// Drop it before calling [`shutdown`](Self::shutdown).
    pub fn bridge(&self) -> Bridge {
        Bridge::new(
            self.customer_client.clone(),
            self.vehicle_client.clone(),
            self.product_client.clone(),
            self.service_client.clone(),
            self.quote_client.clone(),
            self.work_order_client.clone(),
            self.config_client.clone(),
        )
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Drops every client, then waits for all actor tasks to finish.
    ///
    /// Returns an error if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Dropping the clients closes the channels; each actor's recv() then returns None.
        drop(self.customer_client);
        drop(self.vehicle_client);
        drop(self.product_client);
        drop(self.service_client);
        drop(self.quote_client);
        drop(self.work_order_client);
        drop(self.config_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
