use crate::framework::RecordId;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Whether a line bills labour from the service catalog or a part from stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LineItemKind {
    #[default]
    Service,
    Product,
}

/// One billed line of a quote or work order.
///
/// `id` points at the catalog row the line was picked from; lines typed in
/// by hand have none. `total` is stored as sent and never recomputed by the
/// store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItem {
    #[serde(rename = "type")]
    pub kind: LineItemKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub qty: f64,
    pub price: f64,
    pub total: f64,
}

impl Default for LineItem {
    fn default() -> Self {
        Self {
            kind: LineItemKind::Service,
            id: None,
            name: String::new(),
            qty: 1.0,
            price: 0.0,
            total: 0.0,
        }
    }
}

impl LineItem {
    /// A single unit of a catalog service.
    pub fn service(id: RecordId, name: impl Into<String>, price: f64) -> Self {
        Self {
            kind: LineItemKind::Service,
            id: Some(id),
            name: name.into(),
            qty: 1.0,
            price,
            total: price,
        }
    }

    /// `qty` units of a stocked product. Fractional quantities (0.5 l of oil) are allowed.
    pub fn product(id: RecordId, name: impl Into<String>, price: f64, qty: f64) -> Self {
        Self {
            kind: LineItemKind::Product,
            id: Some(id),
            name: name.into(),
            qty,
            price,
            total: qty * price,
        }
    }
}

/// Sum of the line totals.
pub fn items_total(items: &[LineItem]) -> f64 {
    items.iter().map(|item| item.total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape_uses_type_key() {
        let item = LineItem::product(4, "Óleo 5W30", 40.0, 0.5);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "product");
        assert_eq!(json["qty"], 0.5);
        assert_eq!(json["total"], 20.0);
    }

    #[test]
    fn test_hand_typed_lines_decode_without_id() {
        let item: LineItem =
            serde_json::from_str(r#"{"type":"service","name":"Alinhamento","price":80,"total":80}"#)
                .unwrap();
        assert_eq!(item.id, None);
        assert_eq!(item.qty, 1.0);
        assert_eq!(item.kind, LineItemKind::Service);
    }

    #[test]
    fn test_items_total() {
        let items = vec![
            LineItem::service(1, "Troca de óleo", 100.0),
            LineItem::product(2, "Filtro", 25.25, 2.0),
        ];
        assert_eq!(items_total(&items), 150.5);
        assert_eq!(items_total(&[]), 0.0);
    }
}
