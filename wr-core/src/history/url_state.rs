//! The history view's query string, which is the single source of truth for
//! its filter, sort and page state.
//!
//! Parameters equal to their default are omitted, so the default view
//! serializes to an empty query string. Unparseable values read as defaults.

use crate::datetime::{format_input, local_to_utc, parse_input};
use crate::query::{PaginatedReportsQuery, SortKey, SortOrder, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use chrono::{NaiveDateTime, TimeZone};
use log::warn;
use url::form_urlencoded;

pub const HISTORY_PATH: &str = "/history";

const OFFSET: &str = "offset";
const LIMIT: &str = "limit";
const FROM_TIME: &str = "fromTime";
const TO_TIME: &str = "toTime";
const SORT_BY: &str = "sortBy";
const SORT_ORDER: &str = "sortOrder";

/// Inclusive wall-clock time range as entered in the filter form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRange {
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
}

impl TimeRange {
    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryQuery {
    pub offset: u64,
    pub limit: u64,
    pub range: TimeRange,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_SIZE,
            range: TimeRange::default(),
            sort_by: SortKey::default(),
            sort_order: SortOrder::default(),
        }
    }
}

impl HistoryQuery {
    /// Parse a query string, with or without the leading `?`.
    pub fn from_query_string(query_string: &str) -> Self {
        let raw = query_string.strip_prefix('?').unwrap_or(query_string);
        let mut query = Self::default();

        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                OFFSET => match value.parse::<u64>() {
                    Ok(offset) => query.offset = offset,
                    Err(_) => warn!("Ignoring invalid offset parameter: {}", value),
                },
                LIMIT => match value.parse::<u64>() {
                    Ok(limit) if (1..=MAX_PAGE_SIZE).contains(&limit) => query.limit = limit,
                    _ => warn!("Ignoring invalid limit parameter: {}", value),
                },
                FROM_TIME => query.range.from = parse_time_param(FROM_TIME, value),
                TO_TIME => query.range.to = parse_time_param(TO_TIME, value),
                SORT_BY => match SortKey::parse(value) {
                    Some(key) => query.sort_by = key,
                    None => warn!("Ignoring unknown sortBy parameter: {}", value),
                },
                SORT_ORDER => match SortOrder::parse(value) {
                    Some(order) => query.sort_order = order,
                    None => warn!("Ignoring unknown sortOrder parameter: {}", value),
                },
                _ => {}
            }
        }
        query
    }

    /// Canonical query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if self.offset > 0 {
            serializer.append_pair(OFFSET, &self.offset.to_string());
        }
        if self.limit != DEFAULT_PAGE_SIZE {
            serializer.append_pair(LIMIT, &self.limit.to_string());
        }
        if let Some(from) = &self.range.from {
            serializer.append_pair(FROM_TIME, &format_input(from));
        }
        if let Some(to) = &self.range.to {
            serializer.append_pair(TO_TIME, &format_input(to));
        }
        if self.sort_by != SortKey::default() {
            serializer.append_pair(SORT_BY, self.sort_by.as_str());
        }
        if self.sort_order != SortOrder::default() {
            serializer.append_pair(SORT_ORDER, self.sort_order.as_str());
        }
        serializer.finish()
    }

    /// `path` followed by the canonical query string, if any.
    pub fn to_url(&self, path: &str) -> String {
        let query_string = self.to_query_string();
        if query_string.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, query_string)
        }
    }

    /// One-based page number derived from the offset.
    pub fn current_page(&self) -> u64 {
        self.offset / self.limit.max(1) + 1
    }

    /// API request for this view, interpreting the time range in `tz`.
    pub fn to_request<Tz: TimeZone>(&self, tz: &Tz) -> PaginatedReportsQuery {
        PaginatedReportsQuery {
            limit: Some(self.limit),
            offset: (self.offset > 0).then_some(self.offset),
            from_time: self.range.from.as_ref().and_then(|t| local_to_utc(t, tz)),
            to_time: self.range.to.as_ref().and_then(|t| local_to_utc(t, tz)),
            sort_by: Some(self.sort_by),
            sort_order: Some(self.sort_order),
        }
    }
}

fn parse_time_param(name: &str, value: &str) -> Option<NaiveDateTime> {
    let parsed = parse_input(value);
    if parsed.is_none() {
        warn!("Ignoring invalid {} parameter: {}", name, value);
    }
    parsed
}
