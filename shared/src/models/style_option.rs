//! Style option - one garment's selected style configuration
//!
//! Collected by the intake forms, one per garment. All sub-selections are
//! optional; each holds price-list codes or boolean flags. `style_option_id`
//! and `garment_id` are linkage fields, not part of the style's semantic
//! content: two options that agree on everything else are interchangeable for
//! pricing and for shared-production-batch identification.

use serde::{Deserialize, Serialize};

/// Base style choice
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BaseStyle {
    #[default]
    Kuwaiti,
    Design,
}

/// Decorative line flags
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LineFlags {
    #[serde(default)]
    pub line1: bool,
    #[serde(default)]
    pub line2: bool,
}

/// Collar sub-selection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CollarSelection {
    /// Collar style code (price-list `Code`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collar_type: Option<String>,
    /// Collar button code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button: Option<String>,
}

/// Jabzoor (front placket) sub-selection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct JabzoorSelection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    /// A second jabzoor never contributes to pricing on its own
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<String>,
}

/// Front and side pocket sub-selection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FrontPocketSelection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pocket_type: Option<String>,
    /// Side pocket code; only the stitching calculation reads this
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side_type: Option<String>,
}

/// Accessory flags
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AccessoriesSelection {
    #[serde(default)]
    pub mobile_pocket: bool,
    #[serde(default)]
    pub pen_pocket: bool,
    #[serde(default)]
    pub glasses_loop: bool,
}

/// Cuffs sub-selection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CuffsSelection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuff_type: Option<String>,
}

/// One garment's selected style configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StyleOption {
    /// Shared style ID (assigned by deduplication, not semantic content)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_option_id: Option<String>,
    /// Owning garment (linkage, not semantic content)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub garment_id: Option<String>,

    pub style: BaseStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<LineFlags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collar: Option<CollarSelection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jabzoor: Option<JabzoorSelection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_pocket: Option<FrontPocketSelection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessories: Option<AccessoriesSelection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuffs: Option<CuffsSelection>,
}
