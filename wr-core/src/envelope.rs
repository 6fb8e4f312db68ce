//! Decoding of the uniform API response envelope.
//!
//! Every endpoint answers `{ status, message, errorCode, data }`. A call fails
//! when the HTTP status is not 2xx or `status == "error"`; the error text is
//! `"{message} ({errorCode})"`, or `message` when there is no code. A blank
//! message is replaced by the caller's fallback.

use crate::error::ApiError;
use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub error_code: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn is_error(&self) -> bool {
        self.status == STATUS_ERROR
    }

    /// User-facing text for a failed call.
    pub fn error_message(&self, fallback: &str) -> String {
        let message = self.message.trim();
        let code = self.error_code.trim();
        let message = if message.is_empty() { fallback } else { message };
        if code.is_empty() {
            message.to_string()
        } else {
            format!("{} ({})", message, code)
        }
    }
}

/// Decode a response body into its `data` payload.
///
/// `http_ok` is whether the transport reported a 2xx status. Bodies that are
/// not an envelope, and success envelopes without data, fail with `fallback`.
pub fn decode<T: DeserializeOwned>(http_ok: bool, body: &str, fallback: &str) -> Result<T, ApiError> {
    let envelope: ApiResponse<serde_json::Value> = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            warn!("{}: response is not an API envelope: {}", fallback, e);
            return Err(ApiError::Server(fallback.to_string()));
        }
    };

    if !http_ok || envelope.is_error() {
        return Err(ApiError::Server(envelope.error_message(fallback)));
    }

    match envelope.data {
        Some(data) => serde_json::from_value(data).map_err(|e| {
            warn!("{}: unexpected data shape: {}", fallback, e);
            ApiError::Server(fallback.to_string())
        }),
        None => {
            warn!("{}: success envelope without data", fallback);
            Err(ApiError::Server(fallback.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::PaginatedReportsResult;

    const FALLBACK: &str = "Failed to fetch reports";

    #[test]
    fn test_success_envelope_yields_data() {
        let body = r#"{"status":"success","message":"ok","errorCode":"","data":{"reports":[],"totalCount":3}}"#;
        let result: PaginatedReportsResult = decode(true, body, FALLBACK).unwrap();
        assert_eq!(result.total_count, 3);
    }

    #[test]
    fn test_error_status_includes_error_code() {
        let body = r#"{"status":"error","message":"Report not found","errorCode":"ERR4001","data":null}"#;
        let err = decode::<PaginatedReportsResult>(true, body, FALLBACK).unwrap_err();
        assert_eq!(err, ApiError::Server("Report not found (ERR4001)".to_string()));
    }

    #[test]
    fn test_http_failure_without_code_uses_message() {
        let body = r#"{"status":"success","message":"Bad gateway","errorCode":"","data":{}}"#;
        let err = decode::<PaginatedReportsResult>(false, body, FALLBACK).unwrap_err();
        assert_eq!(err.to_string(), "Bad gateway");
    }

    #[test]
    fn test_empty_message_keeps_error_code() {
        let body = r#"{"status":"error","message":"","errorCode":"ERR1000","data":null}"#;
        let err = decode::<PaginatedReportsResult>(false, body, FALLBACK).unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch reports (ERR1000)");

        let body = r#"{"status":"error","message":"  ","data":null}"#;
        let err = decode::<PaginatedReportsResult>(false, body, FALLBACK).unwrap_err();
        assert_eq!(err.to_string(), FALLBACK);
    }

    #[test]
    fn test_error_payload_of_other_shape_is_ignored() {
        let body = r#"{"status":"error","message":"Invalid limit parameter","errorCode":"ERR1002","data":{"field":"limit"}}"#;
        let err = decode::<PaginatedReportsResult>(false, body, FALLBACK).unwrap_err();
        assert_eq!(err.to_string(), "Invalid limit parameter (ERR1002)");
    }

    #[test]
    fn test_non_envelope_and_missing_data_fall_back() {
        let err = decode::<PaginatedReportsResult>(true, "<html>502</html>", FALLBACK).unwrap_err();
        assert_eq!(err.to_string(), FALLBACK);

        let body = r#"{"status":"success","message":"ok","errorCode":"","data":null}"#;
        let err = decode::<PaginatedReportsResult>(true, body, FALLBACK).unwrap_err();
        assert_eq!(err.to_string(), FALLBACK);
    }
}
