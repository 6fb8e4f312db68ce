//! Table of reports with sortable headers and selection checkboxes.

use super::sortable_header::SortableHeader;
use crate::browser::format_local;
use dioxus::prelude::*;
use wr_core::query::{SortKey, SortOrder};
use wr_core::error::SelectionError;
use wr_core::report::WeatherReport;
use wr_core::selection::is_locked;

#[derive(Props, Clone, PartialEq)]
pub struct ReportTableProps {
    pub reports: Vec<WeatherReport>,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
    /// Ids of the selected reports
    pub selected: Vec<String>,
    pub on_sort: EventHandler<SortKey>,
    pub on_toggle: EventHandler<String>,
}

#[component]
pub fn ReportTable(props: ReportTableProps) -> Element {
    let on_sort = props.on_sort;
    let on_toggle = props.on_toggle;
    let sort_by = props.sort_by;
    let sort_order = props.sort_order;
    let limit_hint = SelectionError::LimitReached.to_string();

    let headers = SortKey::ALL.into_iter().map(move |column| {
        let name = column.as_str();
        rsx! {
            SortableHeader {
                key: "{name}",
                column,
                active: sort_by,
                order: sort_order,
                on_sort,
            }
        }
    });

    let rows = props.reports.iter().map(|report| {
        let id = report.id.clone();
        let checked = props.selected.contains(&report.id);
        let locked = is_locked(&props.selected, &report.id);
        let hint = if locked { limit_hint.clone() } else { String::new() };
        let observed = format_local(&report.timestamp);
        let temperature = format!("{:.1}", report.temperature);
        let pressure = format!("{:.1}", report.pressure);
        let humidity = format!("{:.1}", report.humidity);
        let cloud_cover = format!("{:.1}", report.cloud_cover);
        let icon = report.sky().icon();
        let background = if checked { "#E3F2FD" } else { "white" };
        rsx! {
            tr {
                key: "{id}",
                style: "background: {background}; border-bottom: 1px solid #EEEEEE;",
                td {
                    style: "padding: 8px;",
                    input {
                        r#type: "checkbox",
                        checked,
                        disabled: locked,
                        title: "{hint}",
                        onchange: move |_| on_toggle.call(id.clone()),
                    }
                }
                td { style: "padding: 8px;", "{observed}" }
                td { style: "padding: 8px;", "{temperature}" }
                td { style: "padding: 8px;", "{pressure}" }
                td { style: "padding: 8px;", "{humidity}" }
                td { style: "padding: 8px;", "{icon} {cloud_cover}" }
            }
        }
    });

    rsx! {
        table {
            style: "width: 100%; border-collapse: collapse; font-size: 14px;",
            thead {
                tr {
                    th {
                        style: "padding: 8px; text-align: left; border-bottom: 2px solid #BDBDBD;",
                        "Select"
                    }
                    {headers}
                }
            }
            tbody {
                {rows}
            }
        }
    }
}
