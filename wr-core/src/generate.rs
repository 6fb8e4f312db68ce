//! The report generation form.

use crate::datetime::{local_to_utc, parse_input};
use crate::error::FilterError;
use crate::report::GenerateReportRequest;
use chrono::TimeZone;

pub const GENERATED_MESSAGE: &str = "Weather report generated successfully";
pub const GENERATE_FAILED_MESSAGE: &str = "Failed to generate weather report";

/// Optional `datetime-local` value; empty means "now" on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateForm {
    pub timestamp: String,
}

impl GenerateForm {
    /// Build the request, reading the timestamp as wall-clock time in `tz`.
    pub fn to_request<Tz: TimeZone>(&self, tz: &Tz) -> Result<GenerateReportRequest, FilterError> {
        let raw = self.timestamp.trim();
        if raw.is_empty() {
            return Ok(GenerateReportRequest::default());
        }
        let timestamp = parse_input(raw)
            .and_then(|naive| local_to_utc(&naive, tz))
            .ok_or_else(|| FilterError::InvalidDateTime {
                field: "report",
                value: raw.to_string(),
            })?;
        Ok(GenerateReportRequest {
            timestamp: Some(timestamp),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_empty_timestamp_means_now() {
        let form = GenerateForm {
            timestamp: "  ".to_string(),
        };
        assert_eq!(form.to_request(&Utc).unwrap(), GenerateReportRequest::default());
    }

    #[test]
    fn test_timestamp_is_read_in_local_zone() {
        let form = GenerateForm {
            timestamp: "2024-03-01T08:30".to_string(),
        };
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let request = form.to_request(&tz).unwrap();
        assert_eq!(
            request.timestamp,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 6, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_garbage_is_rejected() {
        let form = GenerateForm {
            timestamp: "tomorrow".to_string(),
        };
        let err = form.to_request(&Utc).unwrap_err();
        assert_eq!(err.to_string(), "Invalid report date and time: tomorrow");
    }
}
