//! Order, customer and garment record schemas
//!
//! Field names mirror the record store's fixed PascalCase schema. Every field
//! is optional: the store delivers whatever the sheet row happens to contain,
//! and consumers degrade missing fields to documented fallbacks.

use crate::record::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Order table fields
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct OrderFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Billing stage code (see `FATOURA_STAGE_LABELS`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fatoura_stage: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Customer table fields
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
}

/// Garment table fields
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GarmentFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub garment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Production stage code (see `PIECE_STAGE_LABELS`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub piece_stage: Option<i64>,
    /// Promised delivery date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<NaiveDate>,
    /// Interim fitting garment flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brova: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_option_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Order aggregate as assembled by the fetch orchestration
///
/// One order, its customer (the sheet may lack the customer row) and its
/// garments in sheet order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDetail {
    pub order: Record<OrderFields>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Record<CustomerFields>>,
    #[serde(default)]
    pub garments: Vec<Record<GarmentFields>>,
}
