//! JSON encoding for list-valued columns (a customer's cars, quote and work
//! order line items).
//!
//! Reads are lenient: a NULL column, an empty string or a literal `null`
//! all decode to an empty list. Writes always store a JSON array.

use super::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub fn encode_list<T: Serialize>(items: &[T]) -> Result<String, StoreError> {
    serde_json::to_string(items).map_err(|e| StoreError::Encode(e.to_string()))
}

pub fn decode_list<T: DeserializeOwned>(raw: Option<&str>) -> Result<Vec<T>, StoreError> {
    let text = match raw.map(str::trim) {
        None | Some("") => return Ok(Vec::new()),
        Some(text) => text,
    };
    let decoded: Option<Vec<T>> =
        serde_json::from_str(text).map_err(|e| StoreError::Decode(e.to_string()))?;
    Ok(decoded.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_values_decode_to_empty() {
        assert!(decode_list::<String>(None).unwrap().is_empty());
        assert!(decode_list::<String>(Some("")).unwrap().is_empty());
        assert!(decode_list::<String>(Some("null")).unwrap().is_empty());
    }

    #[test]
    fn test_encode_then_decode_preserves_order() {
        let cars = vec!["Gol 2015".to_string(), "Onix 2020".to_string()];
        let text = encode_list(&cars).unwrap();
        assert_eq!(text, r#"["Gol 2015","Onix 2020"]"#);
        assert_eq!(decode_list::<String>(Some(&text)).unwrap(), cars);
    }

    #[test]
    fn test_malformed_json_is_a_decode_error() {
        let err = decode_list::<String>(Some("[not json")).unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
    }
}
