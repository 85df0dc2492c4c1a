//! Record envelope for the hosted record store
//!
//! The record store exposes spreadsheet-style tables; every row comes back as
//! `{id, createdTime, fields}` where `fields` carries the table's own schema.
//! The envelope is generic so each table declares its fields struct once.

use serde::{Deserialize, Serialize};

/// One row of a record-store table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record<F> {
    /// Record ID (assigned by the store)
    pub id: String,
    /// Creation timestamp (RFC 3339, as delivered by the store)
    #[serde(
        rename = "createdTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_time: Option<String>,
    /// Table-specific fields
    pub fields: F,
}

impl<F> Record<F> {
    /// Wrap fields in a new record envelope (no creation timestamp)
    pub fn new(id: impl Into<String>, fields: F) -> Self {
        Self {
            id: id.into(),
            created_time: None,
            fields,
        }
    }
}
