//! History view controller.
//!
//! Every user action maps to a [`Transition`]: either a new query that the
//! page writes back to the URL (replacing the current entry) and then
//! fetches, a plain re-fetch of the current page, or nothing. Fetches are
//! split into `begin_fetch` / `complete_fetch` so the caller owns the async
//! part; each fetch carries a token and only the latest one is applied.

use super::filter::FilterForm;
use super::pagination::PageInfo;
use super::url_state::{HistoryQuery, HISTORY_PATH};
use crate::error::{ApiError, FilterError};
use crate::notify::{handle_api_error, Notifier};
use crate::query::{PaginatedReportsQuery, PaginatedReportsResult, SortKey};
use chrono::TimeZone;
use log::debug;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load weather reports";

/// What the page has to do after a user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Replace the current URL with this one, then fetch.
    Replace(String),
    /// Fetch the current page again without touching the URL.
    Refresh,
    Unchanged,
}

/// A fetch that has been started and awaits its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub token: u64,
    pub request: PaginatedReportsQuery,
}

#[derive(Debug, Clone)]
pub struct HistoryController {
    query: HistoryQuery,
    page: Option<PaginatedReportsResult>,
    loading: bool,
    latest_token: u64,
    mounted: bool,
}

impl HistoryController {
    /// Build the controller from the page's query string. The page starts in
    /// the loading state since the first fetch is issued on mount.
    pub fn from_query_string(query_string: &str) -> Self {
        Self {
            query: HistoryQuery::from_query_string(query_string),
            page: None,
            loading: true,
            latest_token: 0,
            mounted: true,
        }
    }

    pub fn query(&self) -> &HistoryQuery {
        &self.query
    }

    pub fn page(&self) -> Option<&PaginatedReportsResult> {
        self.page.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Form values reflecting the current URL.
    pub fn filter_form(&self) -> FilterForm {
        FilterForm::from_range(&self.query.range)
    }

    pub fn page_info(&self) -> Option<PageInfo> {
        self.page.as_ref().map(|page| {
            PageInfo::new(
                self.query.offset,
                self.query.limit,
                page.total_count,
                page.reports.len() as u64,
            )
        })
    }

    /// Start a fetch of the current page. Supersedes any fetch in flight.
    pub fn begin_fetch<Tz: TimeZone>(&mut self, tz: &Tz) -> FetchTicket {
        self.latest_token += 1;
        self.loading = true;
        FetchTicket {
            token: self.latest_token,
            request: self.query.to_request(tz),
        }
    }

    /// Apply the result of a fetch. Returns `false` when the result was
    /// discarded because a newer fetch started or the view was unmounted.
    pub fn complete_fetch<N: Notifier + ?Sized>(
        &mut self,
        token: u64,
        result: Result<PaginatedReportsResult, ApiError>,
        notifier: &N,
    ) -> bool {
        if !self.mounted {
            debug!("Discarding history fetch {} after unmount", token);
            return false;
        }
        if token != self.latest_token {
            debug!(
                "Discarding stale history fetch {} (latest is {})",
                token, self.latest_token
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                self.page = Some(page);
            }
            Err(e) => {
                self.page = None;
                handle_api_error(notifier, &e, LOAD_FAILED_MESSAGE);
            }
        }
        true
    }

    /// Apply the filter form, returning to the first page and keeping the sort.
    pub fn apply_filter(&mut self, form: &FilterForm) -> Result<Transition, FilterError> {
        let range = form.validate()?;
        Ok(self.navigate(HistoryQuery {
            offset: 0,
            range,
            ..self.query.clone()
        }))
    }

    /// Drop every query parameter, returning to the unfiltered first page.
    pub fn reset_filters(&mut self) -> Transition {
        self.navigate(HistoryQuery::default())
    }

    /// Header click: toggle the direction of the active column, or switch to
    /// another column sorted descending. Always returns to the first page.
    pub fn sort_by(&mut self, key: SortKey) -> Transition {
        let sort_order = if self.query.sort_by == key {
            self.query.sort_order.toggled()
        } else {
            Default::default()
        };
        self.navigate(HistoryQuery {
            offset: 0,
            sort_by: key,
            sort_order,
            ..self.query.clone()
        })
    }

    /// Advance one page unless the current page is the last known one.
    pub fn next_page(&mut self) -> Transition {
        match self.page_info() {
            Some(info) if info.has_next() && !self.loading => {
                let offset = self.query.offset + self.query.limit;
                self.navigate(HistoryQuery {
                    offset,
                    ..self.query.clone()
                })
            }
            _ => Transition::Unchanged,
        }
    }

    /// Go back one page; on the first page, refresh it instead.
    pub fn previous_page(&mut self) -> Transition {
        if self.query.offset == 0 {
            return Transition::Refresh;
        }
        let offset = self.query.offset.saturating_sub(self.query.limit);
        self.navigate(HistoryQuery {
            offset,
            ..self.query.clone()
        })
    }

    /// Jump to a one-based page number within the known page count.
    pub fn go_to_page(&mut self, page: u64) -> Transition {
        let Some(info) = self.page_info() else {
            return Transition::Unchanged;
        };
        if page == 0 || page > info.total_pages.max(1) || page == info.current_page {
            return Transition::Unchanged;
        }
        self.navigate(HistoryQuery {
            offset: info.offset_of(page),
            ..self.query.clone()
        })
    }

    /// Fetch the current query again, e.g. after a failed load. Ignored while
    /// a fetch is in flight.
    pub fn retry(&mut self) -> Transition {
        if self.loading {
            Transition::Unchanged
        } else {
            Transition::Refresh
        }
    }

    /// Stop accepting fetch results.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    fn navigate(&mut self, query: HistoryQuery) -> Transition {
        if query == self.query {
            return Transition::Unchanged;
        }
        self.query = query;
        Transition::Replace(self.query.to_url(HISTORY_PATH))
    }
}
