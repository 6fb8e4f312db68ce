//! Report endpoints over HTTP.

use log::{debug, warn};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::future::Future;
use wr_core::envelope;
use wr_core::error::ApiError;
use wr_core::query::{PaginatedReportsQuery, PaginatedReportsResult};
use wr_core::report::{ComparisonRequest, ComparisonResult, GenerateReportRequest, WeatherReport};

use crate::config::ApiConfig;

pub const GENERATE_FALLBACK: &str = "Failed to generate report";
pub const LIST_FALLBACK: &str = "Failed to fetch reports";
pub const PAGINATED_FALLBACK: &str = "Failed to fetch paginated reports";
pub const GET_FALLBACK: &str = "Failed to fetch report";
pub const COMPARE_FALLBACK: &str = "Failed to compare reports";

/// Operations offered by the reports backend.
///
/// Futures are not required to be `Send`: in the browser they run on the
/// single-threaded event loop.
pub trait ReportsApi {
    /// `POST /reports`
    fn generate(
        &self,
        request: &GenerateReportRequest,
    ) -> impl Future<Output = Result<WeatherReport, ApiError>>;

    /// `GET /reports`, every stored report.
    fn list_all(&self) -> impl Future<Output = Result<Vec<WeatherReport>, ApiError>>;

    /// `GET /reports/paginated`
    fn list_paginated(
        &self,
        query: &PaginatedReportsQuery,
    ) -> impl Future<Output = Result<PaginatedReportsResult, ApiError>>;

    /// `GET /reports/{id}`
    fn get(&self, id: &str) -> impl Future<Output = Result<WeatherReport, ApiError>>;

    /// `POST /reports/compare`
    fn compare(
        &self,
        request: &ComparisonRequest,
    ) -> impl Future<Output = Result<ComparisonResult, ApiError>>;
}

#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Use a preconfigured client (e.g. with a timeout on native targets).
    pub fn with_client(config: &ApiConfig, client: Client) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Base URL with `segments` appended, each percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::InvalidRequest(format!("{}: {}", self.base_url, e)))?;
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                ApiError::InvalidRequest(format!("{} cannot be used as a base URL", self.base_url))
            })?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }
}

/// Turn a sent request into the envelope's data.
async fn read_envelope<T: DeserializeOwned>(
    sent: Result<Response, reqwest::Error>,
    fallback: &str,
) -> Result<T, ApiError> {
    let response = sent.map_err(|e| {
        warn!("{}: request failed: {}", fallback, e);
        ApiError::Transport(e.to_string())
    })?;
    let status = response.status();
    let body = response.text().await.map_err(|e| {
        warn!("{}: failed to read response body: {}", fallback, e);
        ApiError::Transport(e.to_string())
    })?;
    debug!("{} -> {} ({} bytes)", response_label(fallback), status, body.len());
    envelope::decode(status.is_success(), &body, fallback)
}

fn response_label(fallback: &str) -> &str {
    fallback.trim_start_matches("Failed to ")
}

impl ReportsApi for HttpGateway {
    async fn generate(&self, request: &GenerateReportRequest) -> Result<WeatherReport, ApiError> {
        let url = self.endpoint(&["reports"])?;
        read_envelope(self.client.post(url).json(request).send().await, GENERATE_FALLBACK).await
    }

    async fn list_all(&self) -> Result<Vec<WeatherReport>, ApiError> {
        let url = self.endpoint(&["reports"])?;
        read_envelope(self.client.get(url).send().await, LIST_FALLBACK).await
    }

    async fn list_paginated(
        &self,
        query: &PaginatedReportsQuery,
    ) -> Result<PaginatedReportsResult, ApiError> {
        let url = self.endpoint(&["reports", "paginated"])?;
        let pairs = query.to_pairs();
        read_envelope(
            self.client.get(url).query(&pairs).send().await,
            PAGINATED_FALLBACK,
        )
        .await
    }

    async fn get(&self, id: &str) -> Result<WeatherReport, ApiError> {
        let url = self.endpoint(&["reports", id])?;
        read_envelope(self.client.get(url).send().await, GET_FALLBACK).await
    }

    async fn compare(&self, request: &ComparisonRequest) -> Result<ComparisonResult, ApiError> {
        let url = self.endpoint(&["reports", "compare"])?;
        read_envelope(self.client.post(url).json(request).send().await, COMPARE_FALLBACK).await
    }
}
