use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One document fetched from the data source.
///
/// The field map is opaque to the engine beyond the two configured field
/// identifiers; insertion order is preserved so records round-trip the way
/// the source emitted them. `observed_at` carries the sample timestamp of
/// the originating time-series document when the source provides one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub values: IndexMap<String, f64>,
}

impl RawRecord {
    #[must_use]
    pub fn new(values: IndexMap<String, f64>) -> Self {
        Self {
            observed_at: None,
            values,
        }
    }

    #[must_use]
    pub fn with_observed_at(mut self, observed_at: DateTime<Utc>) -> Self {
        self.observed_at = Some(observed_at);
        self
    }

    /// Looks up one field value. Absent fields are expected in sparse
    /// signal sets.
    #[must_use]
    pub fn value(&self, field_id: &str) -> Option<f64> {
        self.values.get(field_id).copied()
    }
}

/// Convenience constructor for the common two-field case.
#[must_use]
pub fn record_of(x_field_id: &str, x: f64, y_field_id: &str, y: f64) -> RawRecord {
    let mut values = IndexMap::new();
    values.insert(x_field_id.to_owned(), x);
    values.insert(y_field_id.to_owned(), y);
    RawRecord::new(values)
}
