//! Weather Report History
//!
//! Paginated, sortable and time-filtered list of stored reports. The query
//! string is the source of truth for the view: every filter, sort or page
//! change replaces the current URL and re-fetches, so reloading or sharing
//! the URL restores the same view.
//!
//! Two reports can be selected and compared; Compare opens the comparison
//! page with both ids in its query string.

use chrono::Local;
use dioxus::prelude::*;
use wr_api::{ApiConfig, HttpGateway, ReportsApi};
use wr_core::history::{FilterForm, HistoryController, Transition};
use wr_core::query::SortKey;
use wr_core::selection::{Selection, MAX_SELECTED};
use wr_ui::browser;
use wr_ui::components::{
    ErrorDisplay, FilterPanel, LoadingSpinner, PageHeader, Pagination, ReportTable, Toaster,
};
use wr_ui::state::AppState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("history-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let gateway = use_hook(|| HttpGateway::new(&ApiConfig::from_build_env()));

    let mut controller =
        use_signal(|| HistoryController::from_query_string(&browser::query_string()));
    // Bumped to request a fetch of whatever the controller's query is now.
    let mut revision = use_signal(|| 0u64);
    let mut form = use_signal(|| controller.peek().filter_form());
    let mut form_error = use_signal(|| None::<String>);
    let mut selection = use_signal(Selection::default);

    use_effect(move || {
        let revision = revision();
        let ticket = controller.write().begin_fetch(&Local);
        log::debug!("History fetch {} (revision {})", ticket.token, revision);
        let gateway = gateway.clone();
        spawn(async move {
            let result = gateway.list_paginated(&ticket.request).await;
            controller.write().complete_fetch(ticket.token, result, &state);
        });
    });

    use_drop(move || {
        if let Ok(mut controller) = controller.try_write() {
            controller.unmount();
        }
    });

    let mut follow = move |transition: Transition| match transition {
        Transition::Replace(url) => {
            browser::replace_url(&url);
            form.set(controller.peek().filter_form());
            revision.with_mut(|r| *r += 1);
        }
        Transition::Refresh => revision.with_mut(|r| *r += 1),
        Transition::Unchanged => {}
    };

    let on_apply = move |_: ()| {
        let result = controller.write().apply_filter(&form.peek());
        match result {
            Ok(transition) => {
                form_error.set(None);
                follow(transition);
            }
            Err(e) => form_error.set(Some(e.to_string())),
        }
    };

    let on_reset = move |_: ()| {
        form_error.set(None);
        let transition = controller.write().reset_filters();
        form.set(FilterForm::default());
        follow(transition);
    };

    let on_sort = move |key: SortKey| {
        let transition = controller.write().sort_by(key);
        follow(transition);
    };

    let on_previous = move |_: ()| {
        let transition = controller.write().previous_page();
        follow(transition);
    };

    let on_next = move |_: ()| {
        let transition = controller.write().next_page();
        follow(transition);
    };

    let on_page = move |page: u64| {
        let transition = controller.write().go_to_page(page);
        follow(transition);
    };

    let on_retry = move |_: ()| {
        let transition = controller.write().retry();
        follow(transition);
    };

    let on_toggle = move |id: String| {
        selection.write().toggle(&id, &state);
    };

    let on_compare = move |_: MouseEvent| {
        if let Some(target) = selection.peek().compare(&state) {
            browser::navigate(&target.to_url());
        }
    };

    let view = controller.read();
    let query = view.query().clone();
    let loading = view.is_loading();
    let info = view.page_info();
    let reports = view.page().map(|page| page.reports.clone());
    drop(view);

    let selected = selection.read().ids().to_vec();
    let selected_count = selected.len();
    let compare_ready = selection.read().is_complete();
    let table_style = if loading { "opacity: 0.6;" } else { "" };

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            Toaster {}

            PageHeader {
                title: "Weather Report History".to_string(),
                subtitle: "Select two reports to compare their measurements".to_string(),
            }

            FilterPanel {
                form: form(),
                error: form_error(),
                on_change: move |value: FilterForm| form.set(value),
                on_apply,
                on_reset,
            }

            div {
                style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
                span {
                    style: "font-size: 13px; color: #666;",
                    "Selected: {selected_count}/{MAX_SELECTED}"
                }
                button {
                    style: "padding: 4px 12px;",
                    disabled: !compare_ready,
                    onclick: on_compare,
                    "Compare Selected"
                }
                if selected_count > 0 {
                    button {
                        style: "padding: 4px 12px;",
                        onclick: move |_| selection.write().clear(),
                        "Clear Selection"
                    }
                }
            }

            {match reports {
                None if loading => rsx! { LoadingSpinner { message: "Loading weather reports...".to_string() } },
                None => rsx! {
                    ErrorDisplay {
                        message: "No weather reports could be loaded.".to_string(),
                        on_retry,
                    }
                },
                Some(reports) if reports.is_empty() => rsx! {
                    p {
                        style: "padding: 24px; text-align: center; color: #666;",
                        "No weather reports found."
                    }
                },
                Some(reports) => rsx! {
                    div {
                        style: "{table_style}",
                        ReportTable {
                            reports,
                            sort_by: query.sort_by,
                            sort_order: query.sort_order,
                            selected,
                            on_sort,
                            on_toggle,
                        }
                    }
                },
            }}

            if let Some(info) = info {
                Pagination {
                    info,
                    loading,
                    on_previous,
                    on_next,
                    on_page,
                }
            }
        }
    }
}
