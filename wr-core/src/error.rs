//! Error types shared by the gateway and the controllers.

use thiserror::Error;

/// Failure of a reports API call, already narrowed to a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status or an `"error"` envelope,
    /// or the body could not be understood.
    #[error("{0}")]
    Server(String),

    /// The request never produced a response (connection refused, CORS, timeout).
    #[error("Network error: {0}")]
    Transport(String),

    /// The request could not be built (bad base URL, unserializable body).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Rejection of the history filter form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("Invalid {field} date and time: {value}")]
    InvalidDateTime { field: &'static str, value: String },

    #[error("The From date must not be after the To date")]
    InvertedRange,
}

/// Soft constraint violations of the report selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("You can only select two reports for comparison")]
    LimitReached,

    #[error("Please select exactly two reports to compare")]
    NotReady,
}
