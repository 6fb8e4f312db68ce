//! In-memory `ReportsApi` for command tests.

use chrono::{Duration, TimeZone, Utc};
use std::cell::RefCell;
use wr_api::ReportsApi;
use wr_core::error::ApiError;
use wr_core::query::{PaginatedReportsQuery, PaginatedReportsResult};
use wr_core::report::{
    ComparisonRequest, ComparisonResult, Deviation, GenerateReportRequest, WeatherReport,
};

/// Fixture report on 2024-03-01; the hour is derived from the id.
pub fn report(id: &str, temperature: f64, cloud_cover: f64) -> WeatherReport {
    let base = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let hours = id.bytes().map(i64::from).sum::<i64>() % 24;
    WeatherReport {
        id: id.to_string(),
        timestamp: base + Duration::hours(hours),
        temperature,
        pressure: 1013.0,
        humidity: 50.0,
        cloud_cover,
        created_at: base,
    }
}

pub struct MockApi {
    reports: Vec<WeatherReport>,
    generated: RefCell<Vec<GenerateReportRequest>>,
    queries: RefCell<Vec<PaginatedReportsQuery>>,
}

impl MockApi {
    pub fn new(reports: Vec<WeatherReport>) -> Self {
        Self {
            reports,
            generated: RefCell::new(Vec::new()),
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn generated(&self) -> Vec<GenerateReportRequest> {
        self.generated.borrow().clone()
    }

    pub fn queries(&self) -> Vec<PaginatedReportsQuery> {
        self.queries.borrow().clone()
    }

    fn find(&self, id: &str) -> Result<WeatherReport, ApiError> {
        self.reports
            .iter()
            .find(|report| report.id == id)
            .cloned()
            .ok_or_else(|| ApiError::Server("Report not found (ERR4004)".to_string()))
    }
}

impl ReportsApi for MockApi {
    async fn generate(&self, request: &GenerateReportRequest) -> Result<WeatherReport, ApiError> {
        self.generated.borrow_mut().push(request.clone());
        self.reports
            .first()
            .cloned()
            .ok_or_else(|| ApiError::Server("Failed to generate report".to_string()))
    }

    async fn list_all(&self) -> Result<Vec<WeatherReport>, ApiError> {
        Ok(self.reports.clone())
    }

    async fn list_paginated(
        &self,
        query: &PaginatedReportsQuery,
    ) -> Result<PaginatedReportsResult, ApiError> {
        self.queries.borrow_mut().push(query.clone());
        let offset = query.offset.unwrap_or(0) as usize;
        let limit = query.limit.unwrap_or(10) as usize;
        Ok(PaginatedReportsResult {
            reports: self.reports.iter().skip(offset).take(limit).cloned().collect(),
            total_count: self.reports.len() as u64,
        })
    }

    async fn get(&self, id: &str) -> Result<WeatherReport, ApiError> {
        self.find(id)
    }

    async fn compare(&self, request: &ComparisonRequest) -> Result<ComparisonResult, ApiError> {
        let report1 = self.find(&request.report_id1)?;
        let report2 = self.find(&request.report_id2)?;
        let deviation = Deviation {
            temperature: report2.temperature - report1.temperature,
            pressure: report2.pressure - report1.pressure,
            humidity: report2.humidity - report1.humidity,
            cloud_cover: report2.cloud_cover - report1.cloud_cover,
        };
        Ok(ComparisonResult {
            report1,
            report2,
            deviation,
        })
    }
}
