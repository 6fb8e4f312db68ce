//! The `list` command: paginated or full listing with optional CSV export.

use crate::output::write_table;
use anyhow::Context;
use chrono::{DateTime, Utc};
use log::info;
use std::io::Write;
use std::path::{Path, PathBuf};
use wr_api::gateway::LIST_FALLBACK;
use wr_api::ReportsApi;
use wr_core::error::FilterError;
use wr_core::history::{PageInfo, LOAD_FAILED_MESSAGE};
use wr_core::query::{PaginatedReportsQuery, SortKey, SortOrder, MAX_PAGE_SIZE};
use wr_core::report::WeatherReport;

pub struct ListOptions {
    pub all: bool,
    /// One-based
    pub page: u64,
    pub limit: u64,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
    pub csv: Option<PathBuf>,
}

impl ListOptions {
    /// Request for the selected page, after validating page and limit.
    pub fn to_query(&self) -> anyhow::Result<PaginatedReportsQuery> {
        if self.page == 0 {
            anyhow::bail!("Page numbers start at 1");
        }
        if !(1..=MAX_PAGE_SIZE).contains(&self.limit) {
            anyhow::bail!("Limit must be between 1 and {}", MAX_PAGE_SIZE);
        }
        if let (Some(from), Some(to)) = (self.from, self.to) {
            if from > to {
                return Err(FilterError::InvertedRange.into());
            }
        }
        let offset = (self.page - 1)
            .checked_mul(self.limit)
            .ok_or_else(|| anyhow::anyhow!("Page {} is out of range", self.page))?;
        Ok(PaginatedReportsQuery {
            limit: Some(self.limit),
            offset: (offset > 0).then_some(offset),
            from_time: self.from,
            to_time: self.to,
            sort_by: Some(self.sort_by),
            sort_order: Some(self.sort_order),
        })
    }
}

pub async fn run_list<A: ReportsApi, W: Write>(
    api: &A,
    options: &ListOptions,
    out: &mut W,
) -> anyhow::Result<()> {
    let reports = if options.all {
        let reports = api.list_all().await.context(LIST_FALLBACK)?;
        write_table(out, &reports)?;
        writeln!(out, "{} records", reports.len())?;
        reports
    } else {
        let query = options.to_query()?;
        let page = api
            .list_paginated(&query)
            .await
            .context(LOAD_FAILED_MESSAGE)?;
        let info = PageInfo::new(
            query.offset.unwrap_or(0),
            options.limit,
            page.total_count,
            page.reports.len() as u64,
        );
        write_table(out, &page.reports)?;
        writeln!(
            out,
            "{} (page {} of {})",
            info.range_text(),
            info.current_page,
            info.total_pages.max(1)
        )?;
        page.reports
    };

    if let Some(path) = &options.csv {
        write_csv(path, &reports)?;
        info!("Wrote {} reports to {}", reports.len(), path.display());
    }
    Ok(())
}

/// Write `reports` with a header row using the API's field names.
pub fn write_csv(path: &Path, reports: &[WeatherReport]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    for report in reports {
        writer.serialize(report)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{report, MockApi};
    use chrono::TimeZone;

    fn options() -> ListOptions {
        ListOptions {
            all: false,
            page: 1,
            limit: 10,
            from: None,
            to: None,
            sort_by: SortKey::Timestamp,
            sort_order: SortOrder::Desc,
            csv: None,
        }
    }

    fn fixtures(count: usize) -> Vec<WeatherReport> {
        (0..count)
            .map(|i| report(&format!("r-{:02}", i), i as f64, 10.0))
            .collect()
    }

    #[tokio::test]
    async fn test_second_page_query_and_summary() {
        let api = MockApi::new(fixtures(25));
        let mut buffer = Vec::new();
        let options = ListOptions {
            page: 2,
            sort_by: SortKey::Humidity,
            sort_order: SortOrder::Asc,
            ..options()
        };
        run_list(&api, &options, &mut buffer).await.unwrap();

        let queries = api.queries();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].offset, Some(10));
        assert_eq!(queries[0].limit, Some(10));
        assert_eq!(queries[0].sort_by, Some(SortKey::Humidity));
        assert_eq!(queries[0].sort_order, Some(SortOrder::Asc));

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("r-10"));
        assert!(!text.contains("r-09"));
        assert!(text.ends_with("11-20 of 25 records (page 2 of 3)\n"));
    }

    #[tokio::test]
    async fn test_empty_result() {
        let api = MockApi::new(vec![]);
        let mut buffer = Vec::new();
        run_list(&api, &options(), &mut buffer).await.unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.ends_with("0 of 0 records (page 1 of 1)\n"));
        assert_eq!(api.queries()[0].offset, None);
    }

    #[tokio::test]
    async fn test_all_writes_csv() {
        let api = MockApi::new(fixtures(3));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports.csv");
        let options = ListOptions {
            all: true,
            csv: Some(path.clone()),
            ..options()
        };
        let mut buffer = Vec::new();
        run_list(&api, &options, &mut buffer).await.unwrap();

        assert!(api.queries().is_empty());
        let csv = std::fs::read_to_string(&path).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("id,timestamp,temperature,pressure,humidity,cloudCover,createdAt")
        );
        assert_eq!(lines.count(), 3);
        assert!(String::from_utf8(buffer).unwrap().ends_with("3 records\n"));
    }

    #[test]
    fn test_invalid_options_are_rejected() {
        let zero_page = ListOptions { page: 0, ..options() };
        assert!(zero_page.to_query().is_err());

        let huge = ListOptions { limit: 500, ..options() };
        assert!(huge.to_query().is_err());

        let far = ListOptions { page: u64::MAX, limit: 100, ..options() };
        let err = far.to_query().unwrap_err();
        assert_eq!(err.to_string(), format!("Page {} is out of range", u64::MAX));

        let last = ListOptions { page: u64::MAX / 100 + 1, limit: 100, ..options() };
        assert_eq!(last.to_query().unwrap().offset, Some(u64::MAX / 100 * 100));

        let inverted = ListOptions {
            from: Some(Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap()),
            to: Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
            ..options()
        };
        let err = inverted.to_query().unwrap_err();
        assert_eq!(err.to_string(), "The From date must not be after the To date");
    }
}
