//! Shared types for the Khayyat showroom suite
//!
//! Common data contracts used across crates: record envelopes for the hosted
//! record store, API response structures, domain models (style options, fabric
//! selections, order aggregates), stage label tables and error types.

pub mod error;
pub mod models;
pub mod record;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, ErrorCode};
pub use record::Record;
pub use response::ApiResponse;
