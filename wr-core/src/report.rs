//! Weather report and comparison shapes exchanged with the reports API.
//!
//! Field names follow the API's camelCase JSON. Reports are immutable on the
//! client; deviations are computed server-side and only formatted here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A weather snapshot for the airport at a given instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub id: String,
    /// Observation instant
    pub timestamp: DateTime<Utc>,
    /// Degrees Celsius
    pub temperature: f64,
    /// Hectopascal
    pub pressure: f64,
    /// Relative humidity, 0-100 %
    pub humidity: f64,
    /// Cloud cover, 0-100 %
    pub cloud_cover: f64,
    /// Server-assigned creation instant
    pub created_at: DateTime<Utc>,
}

impl WeatherReport {
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Temperature => self.temperature,
            Metric::Pressure => self.pressure,
            Metric::Humidity => self.humidity,
            Metric::CloudCover => self.cloud_cover,
        }
    }

    pub fn sky(&self) -> SkyCondition {
        SkyCondition::from_cloud_cover(self.cloud_cover)
    }
}

/// Body of `POST /reports`. Without a timestamp the server uses the current time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateReportRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Body of `POST /reports/compare`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRequest {
    pub report_id1: String,
    pub report_id2: String,
}

/// Signed per-metric difference `report2 - report1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deviation {
    pub temperature: f64,
    pub pressure: f64,
    pub humidity: f64,
    pub cloud_cover: f64,
}

impl Deviation {
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Temperature => self.temperature,
            Metric::Pressure => self.pressure,
            Metric::Humidity => self.humidity,
            Metric::CloudCover => self.cloud_cover,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub report1: WeatherReport,
    pub report2: WeatherReport,
    pub deviation: Deviation,
}

/// The numeric measurements carried by a report, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Temperature,
    Pressure,
    Humidity,
    CloudCover,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Temperature,
        Metric::Pressure,
        Metric::Humidity,
        Metric::CloudCover,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Metric::Temperature => "Temperature",
            Metric::Pressure => "Pressure",
            Metric::Humidity => "Humidity",
            Metric::CloudCover => "Cloud Cover",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Temperature => "°C",
            Metric::Pressure => "hPa",
            Metric::Humidity | Metric::CloudCover => "%",
        }
    }

    /// Column label, e.g. `Pressure (hPa)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name(), self.unit())
    }
}

/// Coarse sky description derived from cloud cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkyCondition {
    Clear,
    PartlyCloudy,
    Cloudy,
    Overcast,
}

impl SkyCondition {
    pub fn from_cloud_cover(cloud_cover: f64) -> Self {
        if cloud_cover < 20.0 {
            SkyCondition::Clear
        } else if cloud_cover < 50.0 {
            SkyCondition::PartlyCloudy
        } else if cloud_cover < 80.0 {
            SkyCondition::Cloudy
        } else {
            SkyCondition::Overcast
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkyCondition::Clear => "Clear",
            SkyCondition::PartlyCloudy => "Partly cloudy",
            SkyCondition::Cloudy => "Cloudy",
            SkyCondition::Overcast => "Overcast",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SkyCondition::Clear => "☀",
            SkyCondition::PartlyCloudy => "⛅",
            SkyCondition::Cloudy => "☁",
            SkyCondition::Overcast => "🌫",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT_JSON: &str = r#"{
        "id": "65f1c0ffee",
        "timestamp": "2024-03-01T08:00:00+08:00",
        "temperature": 29.4,
        "pressure": 1009.0,
        "humidity": 78.0,
        "cloudCover": 40.0,
        "createdAt": "2024-03-01T00:00:05Z"
    }"#;

    #[test]
    fn test_report_deserializes_camel_case_and_offsets() {
        let report: WeatherReport = serde_json::from_str(REPORT_JSON).unwrap();
        assert_eq!(report.id, "65f1c0ffee");
        assert_eq!(report.cloud_cover, 40.0);
        assert_eq!(report.timestamp.to_rfc3339(), "2024-03-01T00:00:00+00:00");
        assert_eq!(report.sky(), SkyCondition::PartlyCloudy);
        assert_eq!(report.metric(Metric::Pressure), 1009.0);
    }

    #[test]
    fn test_generate_request_omits_missing_timestamp() {
        let body = serde_json::to_string(&GenerateReportRequest::default()).unwrap();
        assert_eq!(body, "{}");
    }

    #[test]
    fn test_comparison_request_field_names() {
        let request = ComparisonRequest {
            report_id1: "a".to_string(),
            report_id2: "b".to_string(),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, serde_json::json!({"reportId1": "a", "reportId2": "b"}));
    }

    #[test]
    fn test_sky_condition_thresholds() {
        assert_eq!(SkyCondition::from_cloud_cover(0.0), SkyCondition::Clear);
        assert_eq!(SkyCondition::from_cloud_cover(19.9), SkyCondition::Clear);
        assert_eq!(SkyCondition::from_cloud_cover(20.0), SkyCondition::PartlyCloudy);
        assert_eq!(SkyCondition::from_cloud_cover(50.0), SkyCondition::Cloudy);
        assert_eq!(SkyCondition::from_cloud_cover(80.0), SkyCondition::Overcast);
    }

    #[test]
    fn test_metric_labels() {
        assert_eq!(Metric::Temperature.label(), "Temperature (°C)");
        assert_eq!(Metric::CloudCover.label(), "Cloud Cover (%)");
    }
}
