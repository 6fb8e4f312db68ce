//! Paginated listing request and response shapes.

use crate::datetime::to_iso;
use crate::report::WeatherReport;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of reports shown per history page.
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Largest page size accepted from a URL.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Report field the server sorts by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Timestamp,
    Temperature,
    Pressure,
    Humidity,
    CloudCover,
}

impl SortKey {
    /// Column order of the history table.
    pub const ALL: [SortKey; 5] = [
        SortKey::Timestamp,
        SortKey::Temperature,
        SortKey::Pressure,
        SortKey::Humidity,
        SortKey::CloudCover,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Timestamp => "timestamp",
            SortKey::Temperature => "temperature",
            SortKey::Pressure => "pressure",
            SortKey::Humidity => "humidity",
            SortKey::CloudCover => "cloudCover",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        SortKey::ALL.into_iter().find(|key| key.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Timestamp => "Timestamp",
            SortKey::Temperature => "Temperature (°C)",
            SortKey::Pressure => "Pressure (hPa)",
            SortKey::Humidity => "Humidity (%)",
            SortKey::CloudCover => "Cloud Cover (%)",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortOrder::Asc => "↑",
            SortOrder::Desc => "↓",
        }
    }
}

/// Query of `GET /reports/paginated`. `None` means "server default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginatedReportsQuery {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub from_time: Option<DateTime<Utc>>,
    pub to_time: Option<DateTime<Utc>>,
    pub sort_by: Option<SortKey>,
    pub sort_order: Option<SortOrder>,
}

impl PaginatedReportsQuery {
    /// Query-string pairs in a stable order, omitting unset fields.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        if let Some(from_time) = &self.from_time {
            pairs.push(("fromTime", to_iso(from_time)));
        }
        if let Some(to_time) = &self.to_time {
            pairs.push(("toTime", to_iso(to_time)));
        }
        if let Some(sort_by) = self.sort_by {
            pairs.push(("sortBy", sort_by.as_str().to_string()));
        }
        if let Some(sort_order) = self.sort_order {
            pairs.push(("sortOrder", sort_order.as_str().to_string()));
        }
        pairs
    }
}

/// One page of reports in server order plus the unpaginated total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedReportsResult {
    #[serde(default)]
    pub reports: Vec<WeatherReport>,
    #[serde(default)]
    pub total_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datetime::input_to_utc;

    #[test]
    fn test_sort_key_parse_matches_api_names() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(SortKey::parse("cloud_cover"), None);
        assert_eq!(SortKey::default(), SortKey::Timestamp);
    }

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::default(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
        assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
        assert_eq!(SortOrder::parse("ASC"), None);
    }

    #[test]
    fn test_to_pairs_omits_unset_fields() {
        assert!(PaginatedReportsQuery::default().to_pairs().is_empty());

        let query = PaginatedReportsQuery {
            limit: Some(10),
            offset: Some(20),
            from_time: input_to_utc("2024-03-01T08:00", &Utc),
            to_time: None,
            sort_by: Some(SortKey::CloudCover),
            sort_order: Some(SortOrder::Asc),
        };
        assert_eq!(
            query.to_pairs(),
            vec![
                ("limit", "10".to_string()),
                ("offset", "20".to_string()),
                ("fromTime", "2024-03-01T08:00:00.000Z".to_string()),
                ("sortBy", "cloudCover".to_string()),
                ("sortOrder", "asc".to_string()),
            ]
        );
    }

    #[test]
    fn test_result_tolerates_missing_reports() {
        let result: PaginatedReportsResult = serde_json::from_str(r#"{"totalCount": 0}"#).unwrap();
        assert!(result.reports.is_empty());
    }
}
