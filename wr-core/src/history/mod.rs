//! History view state: URL query, filter form, pagination and the controller
//! that ties them to page fetches.

mod controller;
mod filter;
mod pagination;
mod url_state;

pub use controller::{FetchTicket, HistoryController, Transition, LOAD_FAILED_MESSAGE};
pub use filter::FilterForm;
pub use pagination::{PageInfo, PageItem};
pub use url_state::{HistoryQuery, TimeRange, HISTORY_PATH};
