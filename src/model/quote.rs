use super::{date_field, items_total, list_field, LineItem, QuoteStatus};
use crate::framework::RecordId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A priced proposal ("orçamento") for a customer's vehicle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Quote {
    pub id: RecordId,
    pub client: String,
    /// Free-text vehicle descriptor, e.g. "Civic - ABC-1234".
    pub vehicle: String,
    #[serde(deserialize_with = "date_field::deserialize")]
    pub date: Option<NaiveDate>,
    #[serde(deserialize_with = "date_field::deserialize")]
    pub valid_until: Option<NaiveDate>,
    pub status: QuoteStatus,
    pub total: f64,
    #[serde(deserialize_with = "list_field::deserialize")]
    pub items: Vec<LineItem>,
    pub notes: Option<String>,
}

impl Quote {
    pub fn new(client: impl Into<String>, vehicle: impl Into<String>) -> Self {
        Self {
            client: client.into(),
            vehicle: vehicle.into(),
            ..Self::default()
        }
    }

    /// Sets `total` to the sum of the line totals.
    pub fn recompute_total(&mut self) {
        self.total = items_total(&self.items);
    }

    /// The quote's validity has lapsed on `today`.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.valid_until.is_some_and(|until| until < today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_form_dates_decode_as_none() {
        let quote: Quote = serde_json::from_str(
            r#"{"client":"Ana","vehicle":"Renegade","date":"2024-05-02","validUntil":"","status":"pending"}"#,
        )
        .unwrap();
        assert_eq!(quote.date, NaiveDate::from_ymd_opt(2024, 5, 2));
        assert_eq!(quote.valid_until, None);
        assert!(quote.items.is_empty());
    }

    #[test]
    fn test_null_items_decode_as_empty() {
        let quote: Quote =
            serde_json::from_str(r#"{"client":"Ana","vehicle":"Gol","items":null}"#).unwrap();
        assert!(quote.items.is_empty());

        let order: crate::model::WorkOrder =
            serde_json::from_str(r#"{"client":"Ana","vehicle":"Gol","items":null}"#).unwrap();
        assert!(order.items.is_empty());

        let customer: crate::model::Customer =
            serde_json::from_str(r#"{"name":"Ana","cars":null}"#).unwrap();
        assert!(customer.cars.is_empty());
    }

    #[test]
    fn test_expiry() {
        let mut quote = Quote::new("Ana", "Renegade");
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        assert!(!quote.is_expired(today));
        quote.valid_until = NaiveDate::from_ymd_opt(2024, 5, 9);
        assert!(quote.is_expired(today));
    }
}
