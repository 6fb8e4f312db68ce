//! Clickable table header cell for a sortable column.

use dioxus::prelude::*;
use wr_core::query::{SortKey, SortOrder};

#[derive(Props, Clone, PartialEq)]
pub struct SortableHeaderProps {
    pub column: SortKey,
    /// Column the table is currently sorted by
    pub active: SortKey,
    pub order: SortOrder,
    pub on_sort: EventHandler<SortKey>,
}

/// Header cell showing the column label and, when active, the sort arrow.
#[component]
pub fn SortableHeader(props: SortableHeaderProps) -> Element {
    let column = props.column;
    let on_sort = props.on_sort;
    let label = column.label();
    let arrow = if props.active == column {
        props.order.arrow()
    } else {
        ""
    };

    rsx! {
        th {
            style: "padding: 8px; text-align: left; cursor: pointer; user-select: none; border-bottom: 2px solid #BDBDBD;",
            onclick: move |_| on_sort.call(column),
            "{label} {arrow}"
        }
    }
}
