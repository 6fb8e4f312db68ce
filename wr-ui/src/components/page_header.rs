//! Page header with title and optional subtitle.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PageHeaderProps {
    pub title: String,
    #[props(default = String::new())]
    pub subtitle: String,
}

#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 12px;",
            h2 {
                style: "margin: 0 0 4px 0; font-size: 20px;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 13px; color: #666;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
