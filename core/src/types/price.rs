use serde::{Deserialize, Serialize};

/// Product price as WooCommerce sends it: a plain string, possibly empty.
///
/// Prices are never computed with, only displayed and sorted. `sort_value`
/// maps non-numeric or missing prices to `0.0`, so they sort as lowest; this
/// is a defined tie-break, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(String);

impl Price {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value used for price sorting.
    pub fn sort_value(&self) -> f64 {
        self.0.trim().parse().unwrap_or(0.0)
    }
}

impl From<&str> for Price {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
