use crate::framework::RecordId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A catalog entry for labour sold by the shop.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase", default)]
pub struct Service {
    pub id: RecordId,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    /// Estimated duration, free text ("1h30").
    pub time: Option<String>,
    pub price: f64,
}

impl Service {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            ..Self::default()
        }
    }
}
