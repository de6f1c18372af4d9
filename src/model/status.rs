use serde::{Deserialize, Serialize};
use sqlx::Type;
use strum_macros::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Type, Serialize, Deserialize, Display, EnumString,
)]
#[sqlx(type_name = "quote_status", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum QuoteStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl QuoteStatus {
    /// Label shown to shop staff.
    pub fn label(self) -> &'static str {
        match self {
            QuoteStatus::Pending => "Pendente",
            QuoteStatus::Approved => "Aprovado",
            QuoteStatus::Rejected => "Rejeitado",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Type, Serialize, Deserialize, Display, EnumString,
)]
#[sqlx(type_name = "work_order_status", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum WorkOrderStatus {
    #[default]
    Pending,
    Approved,
    InProgress,
    Completed,
    Canceled,
}

impl WorkOrderStatus {
    pub fn label(self) -> &'static str {
        match self {
            WorkOrderStatus::Pending => "Pendente",
            WorkOrderStatus::Approved => "Aprovado",
            WorkOrderStatus::InProgress => "Em Andamento",
            WorkOrderStatus::Completed => "Finalizado",
            WorkOrderStatus::Canceled => "Cancelado",
        }
    }

    /// The vehicle is still in the shop.
    pub fn is_open(self) -> bool {
        matches!(self, WorkOrderStatus::Pending | WorkOrderStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_text_matches_stored_values() {
        assert_eq!(WorkOrderStatus::InProgress.to_string(), "in-progress");
        assert_eq!(
            WorkOrderStatus::from_str("completed").unwrap(),
            WorkOrderStatus::Completed
        );
        assert_eq!(
            serde_json::to_string(&QuoteStatus::Approved).unwrap(),
            "\"approved\""
        );
        assert!(QuoteStatus::from_str("Approved").is_err());
    }

    #[test]
    fn test_open_statuses() {
        assert!(WorkOrderStatus::Pending.is_open());
        assert!(WorkOrderStatus::InProgress.is_open());
        assert!(!WorkOrderStatus::Approved.is_open());
        assert!(!WorkOrderStatus::Completed.is_open());
    }
}
