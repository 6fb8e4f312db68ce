//! Reusable Dioxus RSX components for the weather report pages.

mod error_display;
mod filter_panel;
mod loading_spinner;
mod page_header;
mod pagination;
mod report_card;
mod report_table;
mod sortable_header;
mod toaster;
mod trend_badge;

pub use error_display::ErrorDisplay;
pub use filter_panel::FilterPanel;
pub use loading_spinner::LoadingSpinner;
pub use page_header::PageHeader;
pub use pagination::Pagination;
pub use report_card::ReportCard;
pub use report_table::ReportTable;
pub use sortable_header::SortableHeader;
pub use toaster::Toaster;
pub use trend_badge::TrendBadge;
