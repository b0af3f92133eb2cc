//! Product record and request payload

use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;

use super::ValidationError;

/// A stored product row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
}

/// Whole-number prices go out as JSON integers (`5`, not `5.0`).
fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if price.fract() == 0.0 && price.abs() < 1e15 {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

/// Body of `POST /product` and `PUT /product/{id}`.
///
/// Mirrors the product JSON shape. `id` is accepted so a full product can be
/// sent back, but it is never used: inserts get a storage-assigned id and
/// updates take the id from the path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPayload {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
}

/// Validated name/price pair, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
}

impl ProductPayload {
    /// Check the payload against the product invariants.
    ///
    /// - name must contain a non-whitespace character
    /// - price must be finite and >= 0; it is rounded to cents
    pub fn validate(self) -> Result<ProductDraft, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ValidationError::Negative { field: "price" });
        }

        Ok(ProductDraft {
            name: self.name,
            price: round_cents(self.price),
        })
    }
}

impl ProductDraft {
    /// Attach a storage id.
    pub fn with_id(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
        }
    }
}

/// Round to the two decimal places the `NUMERIC(10,2)` column keeps.
pub fn round_cents(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}
