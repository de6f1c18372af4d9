use super::Vehicle;
use crate::framework::RecordId;
use serde::{Deserialize, Serialize};

/// A shop customer.
///
/// `cars` is a free-text list kept for display; the authoritative link to
/// vehicles is the vehicle's `client` field holding this customer's exact
/// name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    pub id: RecordId,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(deserialize_with = "super::list_field::deserialize")]
    pub cars: Vec<String>,
    pub last_visit: Option<String>,
    pub status: Option<String>,
    pub status_label: Option<String>,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A customer together with the vehicles registered under their name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerWithVehicles {
    pub client: Customer,
    pub vehicles: Vec<Vehicle>,
}
