//! Single-report commands: generate, get and compare.

use crate::output::{write_comparison, write_report};
use anyhow::Context;
use chrono::{DateTime, Utc};
use log::info;
use std::io::Write;
use wr_api::ReportsApi;
use wr_core::comparison::{COMPARE_FAILED_MESSAGE, MISSING_IDS_MESSAGE};
use wr_core::generate::{GENERATED_MESSAGE, GENERATE_FAILED_MESSAGE};
use wr_core::report::{ComparisonRequest, GenerateReportRequest};

pub async fn run_generate<A: ReportsApi, W: Write>(
    api: &A,
    timestamp: Option<DateTime<Utc>>,
    out: &mut W,
) -> anyhow::Result<()> {
    let request = GenerateReportRequest { timestamp };
    let report = api
        .generate(&request)
        .await
        .context(GENERATE_FAILED_MESSAGE)?;
    info!("{}: {}", GENERATED_MESSAGE, report.id);
    write_report(out, &report)?;
    Ok(())
}

pub async fn run_get<A: ReportsApi, W: Write>(api: &A, id: &str, out: &mut W) -> anyhow::Result<()> {
    let report = api
        .get(id)
        .await
        .with_context(|| format!("Failed to fetch report {}", id))?;
    write_report(out, &report)?;
    Ok(())
}

pub async fn run_compare<A: ReportsApi, W: Write>(
    api: &A,
    id1: &str,
    id2: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    if id1.trim().is_empty() || id2.trim().is_empty() {
        anyhow::bail!(MISSING_IDS_MESSAGE);
    }
    let request = ComparisonRequest {
        report_id1: id1.to_string(),
        report_id2: id2.to_string(),
    };
    let result = api
        .compare(&request)
        .await
        .context(COMPARE_FAILED_MESSAGE)?;
    write_comparison(out, &result)?;
    Ok(())
}
