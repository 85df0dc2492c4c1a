//! API Response types
//!
//! The hosted record API answers every call with a `{status, data}` envelope.

use serde::{Deserialize, Serialize};

/// HTTP-style status code for a successful call
pub const API_STATUS_OK: u16 = 200;

/// Unified record API response structure
///
/// All responses follow this format:
/// ```json
/// {
///     "status": 200,
///     "data": { ... }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response status (200 = success)
    pub status: u16,
    /// Response data (absent on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            status: API_STATUS_OK,
            data: Some(data),
        }
    }

    /// Create an error response with the given status
    pub fn error(status: u16) -> Self {
        Self { status, data: None }
    }

    /// Whether the call succeeded
    pub fn is_ok(&self) -> bool {
        self.status == API_STATUS_OK
    }

    /// Consume the envelope, returning the payload of a successful call
    pub fn into_data(self) -> Option<T> {
        if self.is_ok() { self.data } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope() {
        let resp = ApiResponse::ok(vec![1, 2, 3]);
        assert!(resp.is_ok());
        assert_eq!(resp.into_data(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_error_envelope_discards_data() {
        let resp: ApiResponse<Vec<i32>> = ApiResponse::error(500);
        assert!(!resp.is_ok());
        assert_eq!(resp.into_data(), None);
    }
}
