//! Style price-list entry
//!
//! Read-only reference data fetched from the record store's style table.
//! Every pricing lookup joins on `Code`, which must be unique per price list.

use serde::{Deserialize, Serialize};

/// Reference code for the Kuwaiti base style
pub const STY_KUWAITI: &str = "STY_KUWAITI";
/// Reference code for the design base style
pub const STY_DESIGN: &str = "STY_DESIGN";
/// Reference code for a decorative line
pub const STY_LINE: &str = "STY_LINE";

/// Style price-list entry fields (record store schema)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct StyleFields {
    /// Unique lookup key
    pub code: String,
    #[serde(default)]
    pub name: String,
    /// Style category as maintained in the sheet
    #[serde(rename = "Type", default)]
    pub kind: String,
    /// Price added per selected item
    #[serde(default)]
    pub rate_per_item: f64,
    /// Stitching cost; the sheet stores this as a number or a numeric string
    #[serde(default)]
    pub stitch: StitchRate,
}

/// Numeric-or-string stitch value as delivered by the record store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum StitchRate {
    Number(f64),
    Text(String),
}

impl StitchRate {
    /// Numeric value; unparseable text degrades to 0
    pub fn value(&self) -> f64 {
        match self {
            StitchRate::Number(n) => *n,
            StitchRate::Text(s) => s.trim().parse().unwrap_or(0.0),
        }
    }
}

impl Default for StitchRate {
    fn default() -> Self {
        StitchRate::Number(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stitch_rate_numeric() {
        assert_eq!(StitchRate::Number(3.5).value(), 3.5);
    }

    #[test]
    fn test_stitch_rate_numeric_string() {
        assert_eq!(StitchRate::Text(" 2.25 ".to_string()).value(), 2.25);
    }

    #[test]
    fn test_stitch_rate_garbage_string_degrades_to_zero() {
        assert_eq!(StitchRate::Text("n/a".to_string()).value(), 0.0);
    }

    #[test]
    fn test_style_fields_wire_schema() {
        let fields: StyleFields = serde_json::from_value(json!({
            "Code": "STY_KUWAITI",
            "Name": "Kuwaiti",
            "Type": "Base",
            "RatePerItem": 8.0,
            "Stitch": "3"
        }))
        .unwrap();

        assert_eq!(fields.code, "STY_KUWAITI");
        assert_eq!(fields.kind, "Base");
        assert_eq!(fields.rate_per_item, 8.0);
        assert_eq!(fields.stitch.value(), 3.0);
    }

    #[test]
    fn test_style_fields_tolerates_sparse_record() {
        let fields: StyleFields = serde_json::from_value(json!({ "Code": "X" })).unwrap();
        assert_eq!(fields.rate_per_item, 0.0);
        assert_eq!(fields.stitch.value(), 0.0);
    }
}
