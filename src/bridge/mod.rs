//! # Bridge
//!
//! Named-channel entry point for the desktop shell. Each channel takes one
//! JSON payload and answers with one JSON value, mirroring the IPC calls the
//! UI makes.
//!
//! | Channel | Payload | Response |
//! |---|---|---|
//! | `get-<entity>s` | none | every record |
//! | `add-<entity>` / `update-<entity>` | record | stored record |
//! | `delete-<entity>` | id | `true` |
//! | `get-cliente-veiculos` | customer name | `{client, vehicles}` or `null` |
//! | `count-estoque-baixo` | none | low-stock count |
//! | `converter-orcamento` | quote | new work order |
//! | `get-faturamento-diario` | none | today's revenue |
//! | `get-config` / `set-config` | key / `{key, value}` | value or `null` / value |
//!
//! Work orders use the short `os` name: `get-os`, `add-os`, `update-os`, `delete-os`.

use crate::clients::{
    ActorClient, ConfigClient, CustomerClient, ProductClient, QuoteClient, ServiceClient,
    VehicleClient, WorkOrderClient,
};
use crate::framework::{ActorEntity, RecordId};
use crate::model::Quote;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument, warn};

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("Unknown channel: {0}")]
    UnknownChannel(String),

    #[error("Invalid payload: {0}")]
    Payload(String),

    #[error("{0}")]
    Operation(String),
}

impl From<serde_json::Error> for BridgeError {
    fn from(e: serde_json::Error) -> Self {
        BridgeError::Payload(e.to_string())
    }
}

fn operation(e: impl std::fmt::Display) -> BridgeError {
    BridgeError::Operation(e.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Crud {
    List,
    Add,
    Update,
    Delete,
}

#[derive(Debug, Deserialize)]
struct SetConfig {
    key: String,
    value: Value,
}

/// Routes channel calls to the actor clients.
#[derive(Clone)]
pub struct Bridge {
    customers: CustomerClient,
    vehicles: VehicleClient,
    products: ProductClient,
    services: ServiceClient,
    quotes: QuoteClient,
    work_orders: WorkOrderClient,
    config: ConfigClient,
}

impl Bridge {
    pub fn new(
        customers: CustomerClient,
        vehicles: VehicleClient,
        products: ProductClient,
        services: ServiceClient,
        quotes: QuoteClient,
        work_orders: WorkOrderClient,
        config: ConfigClient,
    ) -> Self {
        Self {
            customers,
            vehicles,
            products,
            services,
            quotes,
            work_orders,
            config,
        }
    }

    /// Runs the call behind `channel`. Failures are logged and returned.
    #[instrument(skip(self, payload))]
    pub async fn invoke(&self, channel: &str, payload: Value) -> Result<Value, BridgeError> {
        debug!("Dispatching");
        let result = self.dispatch(channel, payload).await;
        if let Err(e) = &result {
            warn!(error = %e, "Channel call failed");
        }
        result
    }

    async fn dispatch(&self, channel: &str, payload: Value) -> Result<Value, BridgeError> {
        match channel {
            "get-clientes" => crud(&self.customers, Crud::List, payload).await,
            "add-cliente" => crud(&self.customers, Crud::Add, payload).await,
            "update-cliente" => crud(&self.customers, Crud::Update, payload).await,
            "delete-cliente" => crud(&self.customers, Crud::Delete, payload).await,
            "get-cliente-veiculos" => {
                let name: String = serde_json::from_value(payload)?;
                let found = self.customers.with_vehicles(&name).await.map_err(operation)?;
                Ok(serde_json::to_value(found)?)
            }

            "get-veiculos" => crud(&self.vehicles, Crud::List, payload).await,
            "add-veiculo" => crud(&self.vehicles, Crud::Add, payload).await,
            "update-veiculo" => crud(&self.vehicles, Crud::Update, payload).await,
            "delete-veiculo" => crud(&self.vehicles, Crud::Delete, payload).await,

            "get-produtos" => crud(&self.products, Crud::List, payload).await,
            "add-produto" => crud(&self.products, Crud::Add, payload).await,
            "update-produto" => crud(&self.products, Crud::Update, payload).await,
            "delete-produto" => crud(&self.products, Crud::Delete, payload).await,
            "count-estoque-baixo" => {
                let count = self.products.count_low_stock().await.map_err(operation)?;
                Ok(Value::from(count))
            }

            "get-servicos" => crud(&self.services, Crud::List, payload).await,
            "add-servico" => crud(&self.services, Crud::Add, payload).await,
            "update-servico" => crud(&self.services, Crud::Update, payload).await,
            "delete-servico" => crud(&self.services, Crud::Delete, payload).await,

            "get-orcamentos" => crud(&self.quotes, Crud::List, payload).await,
            "add-orcamento" => crud(&self.quotes, Crud::Add, payload).await,
            "update-orcamento" => crud(&self.quotes, Crud::Update, payload).await,
            "delete-orcamento" => crud(&self.quotes, Crud::Delete, payload).await,
            "converter-orcamento" => {
                let quote: Quote = serde_json::from_value(payload)?;
                let order = self
                    .quotes
                    .convert_to_work_order(&quote)
                    .await
                    .map_err(operation)?;
                Ok(serde_json::to_value(order)?)
            }

            "get-os" => crud(&self.work_orders, Crud::List, payload).await,
            "add-os" => crud(&self.work_orders, Crud::Add, payload).await,
            "update-os" => crud(&self.work_orders, Crud::Update, payload).await,
            "delete-os" => crud(&self.work_orders, Crud::Delete, payload).await,
            "get-faturamento-diario" => {
                let total = self.work_orders.daily_revenue().await.map_err(operation)?;
                Ok(Value::from(total))
            }

            "get-config" => {
                let key: String = serde_json::from_value(payload)?;
                let value = self.config.get(&key).await.map_err(operation)?;
                Ok(value.unwrap_or(Value::Null))
            }
            "set-config" => {
                let SetConfig { key, value } = serde_json::from_value(payload)?;
                self.config.set(&key, value).await.map_err(operation)
            }

            other => Err(BridgeError::UnknownChannel(other.to_string())),
        }
    }
}

async fn crud<T, C>(client: &C, op: Crud, payload: Value) -> Result<Value, BridgeError>
where
    T: ActorEntity + Serialize + DeserializeOwned,
    C: ActorClient<T>,
{
    let value = match op {
        Crud::List => serde_json::to_value(client.list().await.map_err(operation)?)?,
        Crud::Add => {
            let record: T = serde_json::from_value(payload)?;
            serde_json::to_value(client.create(record).await.map_err(operation)?)?
        }
        Crud::Update => {
            let record: T = serde_json::from_value(payload)?;
            serde_json::to_value(client.update(record).await.map_err(operation)?)?
        }
        Crud::Delete => {
            let id: RecordId = serde_json::from_value(payload)?;
            Value::Bool(client.delete(id).await.map_err(operation)?)
        }
    };
    Ok(value)
}
