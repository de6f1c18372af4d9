use crate::framework::RecordId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use strum_macros::Display;

/// A stocked part.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase", default)]
#[sqlx(rename_all = "camelCase")]
pub struct Product {
    pub id: RecordId,
    pub code: Option<String>,
    pub name: String,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub quantity: i64,
    pub min_quantity: i64,
    pub cost_price: f64,
    pub sell_price: f64,
    /// Shelf or bin.
    pub location: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StockStatus {
    Ok,
    Low,
    Empty,
}

impl Product {
    pub fn new(name: impl Into<String>, quantity: i64, min_quantity: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
            min_quantity,
            ..Self::default()
        }
    }

    /// At or below the configured minimum.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_quantity
    }

    pub fn stock_status(&self) -> StockStatus {
        if self.quantity <= 0 {
            StockStatus::Empty
        } else if self.is_low_stock() {
            StockStatus::Low
        } else {
            StockStatus::Ok
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_status() {
        assert_eq!(Product::new("Filtro", 0, 2).stock_status(), StockStatus::Empty);
        assert_eq!(Product::new("Filtro", 2, 2).stock_status(), StockStatus::Low);
        assert_eq!(Product::new("Filtro", 3, 2).stock_status(), StockStatus::Ok);
        assert_eq!(StockStatus::Low.to_string(), "low");
    }
}
