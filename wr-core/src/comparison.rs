//! Comparison view state and trend derivation.

use crate::error::ApiError;
use crate::notify::{handle_api_error, Notifier};
use crate::report::{ComparisonRequest, ComparisonResult, Metric};
use log::debug;
use url::form_urlencoded;

pub const COMPARE_PATH: &str = "/compare";
pub const MISSING_IDS_MESSAGE: &str = "Two report IDs are required for comparison";
pub const COMPARE_FAILED_MESSAGE: &str = "Failed to compare the selected reports";
pub const COMPARE_FALLBACK_MESSAGE: &str = "Failed to compare reports";

const REPORT1: &str = "report1";
const REPORT2: &str = "report2";

/// The two report ids carried by the comparison page URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonTarget {
    pub report1: String,
    pub report2: String,
}

impl ComparisonTarget {
    /// Read `report1` and `report2`; both must be present and non-empty.
    pub fn from_query_string(query_string: &str) -> Option<Self> {
        let raw = query_string.strip_prefix('?').unwrap_or(query_string);
        let mut report1 = None;
        let mut report2 = None;
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                REPORT1 => report1 = Some(value.to_string()),
                REPORT2 => report2 = Some(value.to_string()),
                _ => {}
            }
        }
        Some(Self {
            report1: report1?,
            report2: report2?,
        })
    }

    pub fn to_url(&self) -> String {
        let query_string = form_urlencoded::Serializer::new(String::new())
            .append_pair(REPORT1, &self.report1)
            .append_pair(REPORT2, &self.report2)
            .finish();
        format!("{}?{}", COMPARE_PATH, query_string)
    }

    pub fn to_request(&self) -> ComparisonRequest {
        ComparisonRequest {
            report_id1: self.report1.clone(),
            report_id2: self.report2.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonState {
    Loading,
    Loaded(ComparisonResult),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ComparisonController {
    target: Option<ComparisonTarget>,
    state: ComparisonState,
    requested: bool,
    mounted: bool,
}

impl ComparisonController {
    /// Missing ids put the view straight into the error state.
    pub fn from_query_string(query_string: &str) -> Self {
        let target = ComparisonTarget::from_query_string(query_string);
        let state = match target {
            Some(_) => ComparisonState::Loading,
            None => ComparisonState::Failed(MISSING_IDS_MESSAGE.to_string()),
        };
        Self {
            target,
            state,
            requested: false,
            mounted: true,
        }
    }

    pub fn target(&self) -> Option<&ComparisonTarget> {
        self.target.as_ref()
    }

    pub fn state(&self) -> &ComparisonState {
        &self.state
    }

    /// The request to issue, at most once and only with both ids present.
    pub fn begin(&mut self) -> Option<ComparisonRequest> {
        if self.requested {
            return None;
        }
        let request = self.target.as_ref()?.to_request();
        self.requested = true;
        self.state = ComparisonState::Loading;
        Some(request)
    }

    pub fn complete<N: Notifier + ?Sized>(
        &mut self,
        result: Result<ComparisonResult, ApiError>,
        notifier: &N,
    ) -> bool {
        if !self.mounted || self.state != ComparisonState::Loading {
            debug!("Discarding comparison result");
            return false;
        }
        self.state = match result {
            Ok(comparison) => ComparisonState::Loaded(comparison),
            Err(e) => {
                handle_api_error(notifier, &e, COMPARE_FALLBACK_MESSAGE);
                ComparisonState::Failed(COMPARE_FAILED_MESSAGE.to_string())
            }
        };
        true
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }
}

/// Direction of a deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    pub fn from_deviation(deviation: f64) -> Self {
        if deviation > 0.0 {
            Trend::Up
        } else if deviation < 0.0 {
            Trend::Down
        } else {
            Trend::Neutral
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Neutral => "◆",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Trend::Up => "#2E7D32",
            Trend::Down => "#C62828",
            Trend::Neutral => "#1565C0",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            Trend::Up => "#E8F5E9",
            Trend::Down => "#FFEBEE",
            Trend::Neutral => "#E3F2FD",
        }
    }
}

/// Unsigned deviation with two decimals; the sign is shown by the [`Trend`].
pub fn format_magnitude(deviation: f64) -> String {
    format!("{:.2}", deviation.abs())
}

/// One line of the comparison table.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub metric: Metric,
    pub report1: f64,
    pub report2: f64,
    pub deviation: f64,
    pub trend: Trend,
    pub magnitude: String,
}

impl ComparisonResult {
    pub fn rows(&self) -> Vec<MetricRow> {
        Metric::ALL
            .into_iter()
            .map(|metric| {
                let deviation = self.deviation.metric(metric);
                MetricRow {
                    metric,
                    report1: self.report1.metric(metric),
                    report2: self.report2.metric(metric),
                    deviation,
                    trend: Trend::from_deviation(deviation),
                    magnitude: format_magnitude(deviation),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::testing::RecordingNotifier;
    use crate::report::{Deviation, WeatherReport};
    use chrono::{TimeZone, Utc};

    fn report(id: &str, temperature: f64, pressure: f64, humidity: f64, cloud_cover: f64) -> WeatherReport {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        WeatherReport {
            id: id.to_string(),
            timestamp: at,
            temperature,
            pressure,
            humidity,
            cloud_cover,
            created_at: at,
        }
    }

    fn comparison() -> ComparisonResult {
        ComparisonResult {
            report1: report("a", 29.3, 1012.0, 70.0, 30.0),
            report2: report("b", 30.0, 1009.0, 75.0, 40.0),
            deviation: Deviation {
                temperature: 0.7,
                pressure: -3.0,
                humidity: 5.0,
                cloud_cover: 10.0,
            },
        }
    }

    #[test]
    fn test_rows_trends_and_magnitudes() {
        let rows = comparison().rows();
        let trends: Vec<Trend> = rows.iter().map(|r| r.trend).collect();
        let magnitudes: Vec<&str> = rows.iter().map(|r| r.magnitude.as_str()).collect();
        assert_eq!(trends, vec![Trend::Up, Trend::Down, Trend::Up, Trend::Up]);
        assert_eq!(magnitudes, vec!["0.70", "3.00", "5.00", "10.00"]);
        assert_eq!(rows[1].metric, Metric::Pressure);
        assert_eq!(rows[1].report1, 1012.0);
    }

    #[test]
    fn test_zero_deviation_is_neutral() {
        assert_eq!(Trend::from_deviation(0.0), Trend::Neutral);
        assert_eq!(Trend::from_deviation(-0.0), Trend::Neutral);
        assert_eq!(format_magnitude(-0.0), "0.00");
        assert_eq!(format_magnitude(-2.5), "2.50");
    }

    #[test]
    fn test_missing_report2_fails_without_request() {
        let mut controller = ComparisonController::from_query_string("?report1=abc");
        assert_eq!(
            controller.state(),
            &ComparisonState::Failed(MISSING_IDS_MESSAGE.to_string())
        );
        assert_eq!(controller.begin(), None);

        let controller = ComparisonController::from_query_string("report1=abc&report2=");
        assert!(controller.target().is_none());
    }

    #[test]
    fn test_single_request_then_loaded() {
        let notifier = RecordingNotifier::default();
        let mut controller = ComparisonController::from_query_string("report1=a&report2=b");
        assert_eq!(controller.state(), &ComparisonState::Loading);

        let request = controller.begin().unwrap();
        assert_eq!(request.report_id1, "a");
        assert_eq!(request.report_id2, "b");
        assert_eq!(controller.begin(), None);

        assert!(controller.complete(Ok(comparison()), &notifier));
        assert_eq!(controller.state(), &ComparisonState::Loaded(comparison()));
        assert!(notifier.notices().is_empty());
    }

    #[test]
    fn test_failure_sets_error_and_notifies() {
        let notifier = RecordingNotifier::default();
        let mut controller = ComparisonController::from_query_string("report1=a&report2=b");
        controller.begin();
        controller.complete(Err(ApiError::Server("Report not found (ERR4001)".to_string())), &notifier);

        assert_eq!(
            controller.state(),
            &ComparisonState::Failed(COMPARE_FAILED_MESSAGE.to_string())
        );
        assert_eq!(notifier.log_contexts(), vec![COMPARE_FALLBACK_MESSAGE]);
        assert_eq!(notifier.notices().len(), 1);
    }

    #[test]
    fn test_result_after_unmount_is_dropped() {
        let notifier = RecordingNotifier::default();
        let mut controller = ComparisonController::from_query_string("report1=a&report2=b");
        controller.begin();
        controller.unmount();
        assert!(!controller.complete(Ok(comparison()), &notifier));
        assert_eq!(controller.state(), &ComparisonState::Loading);
    }

    #[test]
    fn test_target_url_round_trip_with_encoding() {
        let target = ComparisonTarget {
            report1: "id with space".to_string(),
            report2: "a&b".to_string(),
        };
        let url = target.to_url();
        assert_eq!(url, "/compare?report1=id+with+space&report2=a%26b");
        let query_string = url.split_once('?').map(|(_, q)| q).unwrap();
        assert_eq!(ComparisonTarget::from_query_string(query_string), Some(target));
    }
}
