//! Error panel with an optional retry action.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Shows a Retry button when set
    #[props(default)]
    pub on_retry: Option<EventHandler<()>>,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let on_retry = props.on_retry;

    rsx! {
        div {
            role: "alert",
            style: "display: flex; gap: 12px; align-items: center; justify-content: space-between; padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            span { "{props.message}" }
            if let Some(on_retry) = on_retry {
                button {
                    style: "padding: 4px 12px;",
                    onclick: move |_| on_retry.call(()),
                    "Retry"
                }
            }
        }
    }
}
