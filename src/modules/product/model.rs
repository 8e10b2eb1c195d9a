use super::validation::{ProductField, ValidationMode, validate};
use crate::error::{Result, StoreError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A stored product row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub color: String,
    pub description: String,
}

/// The four writable columns, already validated
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub price: f64,
    pub color: String,
    pub description: String,
}

/// A partial update: `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub color: Option<String>,
    pub description: Option<String>,
}

impl ProductPatch {
    /// Overlay the supplied values on `existing`.
    pub fn apply(self, existing: &Product) -> ProductFields {
        ProductFields {
            name: self.name.unwrap_or_else(|| existing.name.clone()),
            price: self.price.unwrap_or(existing.price),
            color: self.color.unwrap_or_else(|| existing.color.clone()),
            description: self
                .description
                .unwrap_or_else(|| existing.description.clone()),
        }
    }

    fn into_fields(self) -> Option<ProductFields> {
        Some(ProductFields {
            name: self.name?,
            price: self.price?,
            color: self.color?,
            description: self.description?,
        })
    }
}

/// A request body as the client sent it
///
/// Any JSON object is accepted here; typing happens in
/// [`ProductPayload::into_fields`] and [`ProductPayload::into_patch`] after
/// validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPayload(Map<String, Value>);

impl ProductPayload {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Validate in full mode and extract all four fields.
    pub fn into_fields(self) -> Result<ProductFields> {
        self.check(ValidationMode::Full)?;
        self.extract().into_fields().ok_or_else(|| {
            StoreError::Internal("validated payload is missing a field".to_string())
        })
    }

    /// Validate in partial mode and extract the fields that were supplied.
    pub fn into_patch(self) -> Result<ProductPatch> {
        self.check(ValidationMode::Partial)?;
        Ok(self.extract())
    }

    fn check(&self, mode: ValidationMode) -> Result<()> {
        let errors = validate(&self.0, mode);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(StoreError::ValidationFailed(errors))
        }
    }

    fn extract(&self) -> ProductPatch {
        let text = |field: ProductField| {
            self.0
                .get(field.key())
                .and_then(Value::as_str)
                .map(str::to_owned)
        };
        ProductPatch {
            name: text(ProductField::Name),
            price: self
                .0
                .get(ProductField::Price.key())
                .and_then(Value::as_f64),
            color: text(ProductField::Color),
            description: text(ProductField::Description),
        }
    }
}

impl From<Map<String, Value>> for ProductPayload {
    fn from(map: Map<String, Value>) -> Self {
        Self::new(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> ProductPayload {
        match value {
            Value::Object(map) => ProductPayload::new(map),
            _ => ProductPayload::default(),
        }
    }

    fn stored() -> Product {
        Product {
            id: 3,
            name: "MacBook Pro".to_string(),
            price: 1999.0,
            color: "Space Gray".to_string(),
            description: "Powerful laptop".to_string(),
        }
    }

    #[test]
    fn test_into_fields_keeps_values_as_sent() {
        let fields = payload(json!({
            "name": "  Pencil ",
            "price": 1,
            "color": "Yellow",
            "description": "Writes",
            "sku": "ignored"
        }))
        .into_fields()
        .unwrap();

        assert_eq!(fields.name, "  Pencil ");
        assert_eq!(fields.price, 1.0);
    }

    #[test]
    fn test_into_fields_reports_every_missing_field() {
        let err = payload(json!({ "color": "Red" })).into_fields().unwrap_err();
        match err {
            StoreError::ValidationFailed(errors) => assert_eq!(
                errors,
                vec!["Invalid name", "Invalid price", "Invalid description"]
            ),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_patch_only_touches_supplied_fields() {
        let patch = payload(json!({ "price": 50 })).into_patch().unwrap();
        let merged = patch.apply(&stored());

        assert_eq!(merged.price, 50.0);
        assert_eq!(merged.name, "MacBook Pro");
        assert_eq!(merged.color, "Space Gray");
        assert_eq!(merged.description, "Powerful laptop");
    }

    #[test]
    fn test_empty_patch_is_a_no_op() {
        let merged = ProductPatch::default().apply(&stored());
        let original = stored();
        assert_eq!(merged.name, original.name);
        assert_eq!(merged.price, original.price);
    }
}
