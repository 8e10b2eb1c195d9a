//! Field rules for product payloads.
//!
//! `name`, `color` and `description` must be strings that are not empty once
//! surrounding whitespace is trimmed. `price` must be a number no lower than
//! zero. Errors come back in field order: name, price, color, description.

use serde_json::{Map, Value};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Create and replace: every field must be present and valid.
    Full,
    /// Patch: only the fields present in the payload are checked.
    Partial,
}

/// The client-writable product fields, in reporting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ProductField {
    Name,
    Price,
    Color,
    Description,
}

impl ProductField {
    /// JSON key of the field.
    pub fn key(self) -> &'static str {
        self.into()
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            ProductField::Price => value.as_f64().is_some_and(|price| price >= 0.0),
            ProductField::Name | ProductField::Color | ProductField::Description => value
                .as_str()
                .is_some_and(|text| !text.trim().is_empty()),
        }
    }
}

/// Check `payload` and return one message per offending field.
///
/// A missing field fails full validation with the same message as a
/// malformed one. An explicit `null` counts as present.
pub fn validate(payload: &Map<String, Value>, mode: ValidationMode) -> Vec<String> {
    ProductField::iter()
        .filter_map(|field| match payload.get(field.key()) {
            None if mode == ValidationMode::Partial => None,
            Some(value) if field.accepts(value) => None,
            _ => Some(format!("Invalid {field}")),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    fn pencil() -> Map<String, Value> {
        map(json!({
            "name": "Pencil",
            "price": 1,
            "color": "Yellow",
            "description": "Writes"
        }))
    }

    #[test]
    fn test_valid_full_payload() {
        assert!(validate(&pencil(), ValidationMode::Full).is_empty());
    }

    #[test]
    fn test_empty_payload_fails_every_field_in_order() {
        assert_eq!(
            validate(&Map::new(), ValidationMode::Full),
            vec![
                "Invalid name",
                "Invalid price",
                "Invalid color",
                "Invalid description"
            ]
        );
    }

    #[test]
    fn test_price_boundaries() {
        let mut payload = pencil();
        payload.insert("price".into(), json!(0));
        assert!(validate(&payload, ValidationMode::Full).is_empty());

        payload.insert("price".into(), json!(-0.01));
        assert_eq!(validate(&payload, ValidationMode::Full), vec!["Invalid price"]);

        payload.insert("price".into(), json!("10"));
        assert_eq!(validate(&payload, ValidationMode::Full), vec!["Invalid price"]);
    }

    #[test]
    fn test_blank_strings_are_invalid() {
        let payload = map(json!({
            "name": "",
            "price": 5,
            "color": "   ",
            "description": "\t\n"
        }));
        assert_eq!(
            validate(&payload, ValidationMode::Full),
            vec!["Invalid name", "Invalid color", "Invalid description"]
        );
    }

    #[test]
    fn test_wrong_types_are_invalid() {
        let payload = map(json!({
            "name": 12,
            "price": 5,
            "color": ["Red"],
            "description": true
        }));
        assert_eq!(
            validate(&payload, ValidationMode::Full),
            vec!["Invalid name", "Invalid color", "Invalid description"]
        );
    }

    #[test]
    fn test_partial_skips_absent_fields() {
        let payload = map(json!({ "price": 50 }));
        assert!(validate(&payload, ValidationMode::Partial).is_empty());
        assert!(validate(&Map::new(), ValidationMode::Partial).is_empty());
    }

    #[test]
    fn test_partial_checks_present_fields() {
        let payload = map(json!({ "color": " ", "name": null }));
        assert_eq!(
            validate(&payload, ValidationMode::Partial),
            vec!["Invalid name", "Invalid color"]
        );
    }
}
