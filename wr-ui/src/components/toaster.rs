//! Toast list rendered from `AppState`.

use crate::state::AppState;
use dioxus::prelude::*;
use wr_core::notify::NoticeKind;

fn toast_style(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "background: #E8F5E9; color: #2E7D32; border: 1px solid #A5D6A7;",
        NoticeKind::Warning => "background: #FFF8E1; color: #EF6C00; border: 1px solid #FFE082;",
        NoticeKind::Error => "background: #FFEBEE; color: #C62828; border: 1px solid #EF9A9A;",
    }
}

/// Fixed-position stack of dismissible toasts.
#[component]
pub fn Toaster() -> Element {
    let state = use_context::<AppState>();
    let toasts = (state.toasts)();

    let items = toasts.into_iter().map(move |toast| {
        let id = toast.id;
        let style = toast_style(toast.notice.kind);
        rsx! {
            div {
                key: "{id}",
                style: "display: flex; gap: 12px; align-items: center; justify-content: space-between; padding: 8px 12px; border-radius: 4px; box-shadow: 0 2px 4px rgba(0,0,0,0.15); {style}",
                span { "{toast.notice.message}" }
                button {
                    style: "background: none; border: none; cursor: pointer; font-size: 16px; color: inherit;",
                    onclick: move |_| state.dismiss_toast(id),
                    "×"
                }
            }
        }
    });

    rsx! {
        div {
            style: "position: fixed; top: 16px; right: 16px; display: flex; flex-direction: column; gap: 8px; z-index: 1000; max-width: 360px;",
            {items}
        }
    }
}
