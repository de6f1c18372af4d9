//! Record types stored by the shop.
//!
//! These are plain data: serde shapes match the JSON the desktop views send
//! (camelCase keys), and the SQL that reads and writes them lives in each
//! actor's `entity` module.

mod company;
mod customer;
mod line_item;
mod product;
mod quote;
pub mod search;
mod service;
mod status;
mod vehicle;
mod work_order;

pub use company::*;
pub use customer::*;
pub use line_item::*;
pub use product::*;
pub use quote::*;
pub use service::*;
pub use status::*;
pub use vehicle::*;
pub use work_order::*;

/// Serde helpers for optional ISO dates that forms send as `""` when empty.
pub(crate) mod date_field {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

/// Serde helper for list fields: `null` reads as an empty list, like a missing key.
pub(crate) mod list_field {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
    }
}

/// `true` when a required text field is missing or whitespace.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
