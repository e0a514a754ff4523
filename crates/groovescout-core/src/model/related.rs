//! Normalization for "zero-or-one related record" join shapes.
//!
//! Depending on how a row was queried, a related sub-record may arrive
//! as a bare object, as a single-element array, as an empty array, or
//! as null. This helper collapses all four at the storage boundary so
//! downstream code only ever sees an `Option`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Deserialize a field that may be an object, an array, or null into
/// `Option<T>`. Arrays keep their first element, matching the join
/// behavior the shape came from.
pub fn zero_or_one<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Array(mut items) => {
            if items.is_empty() {
                Ok(None)
            } else {
                serde_json::from_value(items.swap_remove(0))
                    .map(Some)
                    .map_err(serde::de::Error::custom)
            }
        }
        other => serde_json::from_value(other)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::listing::ListingStats;

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        #[serde(default, deserialize_with = "zero_or_one")]
        listing: Option<ListingStats>,
    }

    #[test]
    fn test_zero_or_one_object() {
        let w: Wrapper = serde_json::from_str(r#"{"listing": {"price": 9.5}}"#).unwrap();
        assert_eq!(w.listing.unwrap().price, Some(9.5));
    }

    #[test]
    fn test_zero_or_one_single_element_array() {
        let w: Wrapper = serde_json::from_str(r#"{"listing": [{"price": 9.5}]}"#).unwrap();
        assert_eq!(w.listing.unwrap().price, Some(9.5));
    }

    #[test]
    fn test_zero_or_one_keeps_first_of_many() {
        let w: Wrapper =
            serde_json::from_str(r#"{"listing": [{"price": 1.0}, {"price": 2.0}]}"#).unwrap();
        assert_eq!(w.listing.unwrap().price, Some(1.0));
    }

    #[test]
    fn test_zero_or_one_empty_array() {
        let w: Wrapper = serde_json::from_str(r#"{"listing": []}"#).unwrap();
        assert!(w.listing.is_none());
    }

    #[test]
    fn test_zero_or_one_null() {
        let w: Wrapper = serde_json::from_str(r#"{"listing": null}"#).unwrap();
        assert!(w.listing.is_none());
    }

    #[test]
    fn test_zero_or_one_missing() {
        let w: Wrapper = serde_json::from_str(r"{}").unwrap();
        assert!(w.listing.is_none());
    }
}
