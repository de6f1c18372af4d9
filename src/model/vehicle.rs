use crate::framework::RecordId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase", default)]
#[sqlx(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: RecordId,
    pub plate: String,
    pub model: Option<String>,
    pub brand: Option<String>,
    pub year: Option<i64>,
    pub color: Option<String>,
    /// Owner's name, matched exactly against `Customer::name`.
    pub client: Option<String>,
    /// `in-shop` or `delivered`.
    pub status: Option<String>,
    pub last_service: Option<String>,
}

impl Vehicle {
    pub fn new(plate: impl Into<String>, client: impl Into<String>) -> Self {
        Self {
            plate: plate.into(),
            client: Some(client.into()),
            ..Self::default()
        }
    }
}

/// Plates are stored trimmed and upper-case.
pub fn normalize_plate(plate: &str) -> String {
    plate.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_plate() {
        assert_eq!(normalize_plate("  abc-1d23 "), "ABC-1D23");
    }
}
