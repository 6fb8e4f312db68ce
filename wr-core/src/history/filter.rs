//! The history filter form as a plain controlled pair of input values.

use super::url_state::TimeRange;
use crate::datetime::{format_input, parse_input};
use crate::error::FilterError;
use chrono::NaiveDateTime;

/// Raw `datetime-local` values of the From / To inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterForm {
    pub from_time: String,
    pub to_time: String,
}

impl FilterForm {
    pub fn from_range(range: &TimeRange) -> Self {
        Self {
            from_time: range.from.as_ref().map(format_input).unwrap_or_default(),
            to_time: range.to.as_ref().map(format_input).unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.from_time.trim().is_empty() && self.to_time.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.from_time.clear();
        self.to_time.clear();
    }

    /// Validate the inputs into a time range. Empty inputs leave that bound open.
    pub fn validate(&self) -> Result<TimeRange, FilterError> {
        let from = parse_field("From", &self.from_time)?;
        let to = parse_field("To", &self.to_time)?;
        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(FilterError::InvertedRange);
            }
        }
        Ok(TimeRange { from, to })
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<Option<NaiveDateTime>, FilterError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    parse_input(value)
        .map(Some)
        .ok_or_else(|| FilterError::InvalidDateTime {
            field,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(from: &str, to: &str) -> FilterForm {
        FilterForm {
            from_time: from.to_string(),
            to_time: to.to_string(),
        }
    }

    #[test]
    fn test_empty_form_is_open_range() {
        assert_eq!(form("", " ").validate(), Ok(TimeRange::default()));
        assert!(form("", " ").is_empty());
    }

    #[test]
    fn test_valid_bounds() {
        let range = form("2024-03-01T08:00", "2024-03-01T18:00").validate().unwrap();
        assert_eq!(range.from, parse_input("2024-03-01T08:00"));
        assert_eq!(range.to, parse_input("2024-03-01T18:00"));
        assert_eq!(FilterForm::from_range(&range), form("2024-03-01T08:00", "2024-03-01T18:00"));
    }

    #[test]
    fn test_invalid_value_names_field() {
        let err = form("2024-03-01T08:00", "tomorrow").validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid To date and time: tomorrow");
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = form("2024-03-02T00:00", "2024-03-01T00:00").validate().unwrap_err();
        assert_eq!(err, FilterError::InvertedRange);
    }

    #[test]
    fn test_clear() {
        let mut f = form("2024-03-01T08:00", "");
        f.clear();
        assert_eq!(f, FilterForm::default());
    }
}
