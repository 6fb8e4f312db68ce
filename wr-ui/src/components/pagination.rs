//! Previous/next controls, numbered page strip and record range.

use dioxus::prelude::*;
use wr_core::history::{PageInfo, PageItem};

#[derive(Props, Clone, PartialEq)]
pub struct PaginationProps {
    pub info: PageInfo,
    #[props(default = false)]
    pub loading: bool,
    pub on_previous: EventHandler<()>,
    pub on_next: EventHandler<()>,
    pub on_page: EventHandler<u64>,
}

#[component]
pub fn Pagination(props: PaginationProps) -> Element {
    let info = props.info;
    let on_previous = props.on_previous;
    let on_next = props.on_next;
    let on_page = props.on_page;
    let range_text = info.range_text();
    let next_disabled = props.loading || !info.has_next();

    let items = info.window().into_iter().enumerate().map(move |(index, item)| match item {
        PageItem::Page { number, current } => {
            let style = if current {
                "padding: 4px 10px; font-weight: bold; background: #1565C0; color: white; border: 1px solid #1565C0; border-radius: 4px;"
            } else {
                "padding: 4px 10px; background: white; border: 1px solid #BDBDBD; border-radius: 4px; cursor: pointer;"
            };
            rsx! {
                button {
                    key: "page-{number}",
                    style: "{style}",
                    disabled: current,
                    onclick: move |_| on_page.call(number),
                    "{number}"
                }
            }
        }
        PageItem::Gap => rsx! {
            span {
                key: "gap-{index}",
                style: "padding: 4px 6px; color: #666;",
                "..."
            }
        },
    });

    rsx! {
        div {
            style: "margin: 12px 0; display: flex; flex-wrap: wrap; gap: 8px; align-items: center; justify-content: space-between;",
            span {
                style: "font-size: 13px; color: #666;",
                "{range_text}"
            }
            div {
                style: "display: flex; gap: 4px; align-items: center;",
                button {
                    style: "padding: 4px 10px;",
                    onclick: move |_| on_previous.call(()),
                    "Previous"
                }
                {items}
                button {
                    style: "padding: 4px 10px;",
                    disabled: next_disabled,
                    onclick: move |_| on_next.call(()),
                    "Next"
                }
            }
        }
    }
}
