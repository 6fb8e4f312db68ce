//! Weather Report Comparison
//!
//! Reads `report1` and `report2` from the query string, asks the API for
//! the comparison once, and shows both reports side by side with the signed
//! deviation of each metric (`report2 - report1`).

use dioxus::prelude::*;
use wr_api::{ApiConfig, HttpGateway, ReportsApi};
use wr_core::comparison::{ComparisonController, ComparisonState};
use wr_core::history::HISTORY_PATH;
use wr_core::report::ComparisonResult;
use wr_ui::browser;
use wr_ui::components::{ErrorDisplay, LoadingSpinner, PageHeader, ReportCard, Toaster, TrendBadge};
use wr_ui::state::AppState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("compare-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let gateway = use_hook(|| HttpGateway::new(&ApiConfig::from_build_env()));

    let mut controller =
        use_signal(|| ComparisonController::from_query_string(&browser::query_string()));

    use_effect(move || {
        let Some(request) = controller.write().begin() else {
            return;
        };
        log::info!("Comparing {} with {}", request.report_id1, request.report_id2);
        let gateway = gateway.clone();
        spawn(async move {
            let result = gateway.compare(&request).await;
            controller.write().complete(result, &state);
        });
    });

    use_drop(move || {
        if let Ok(mut controller) = controller.try_write() {
            controller.unmount();
        }
    });

    let view = controller.read().state().clone();

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            Toaster {}

            PageHeader {
                title: "Weather Report Comparison".to_string(),
                subtitle: "Deviations are shown as Report 2 minus Report 1".to_string(),
            }

            a {
                href: HISTORY_PATH,
                style: "display: inline-block; margin-bottom: 12px; font-size: 13px;",
                "← Back to history"
            }

            {match view {
                ComparisonState::Loading => rsx! { LoadingSpinner { message: "Comparing reports...".to_string() } },
                ComparisonState::Failed(message) => rsx! { ErrorDisplay { message } },
                ComparisonState::Loaded(result) => rsx! { ComparisonView { result } },
            }}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ComparisonViewProps {
    result: ComparisonResult,
}

/// Both report cards followed by the per-metric deviation table.
#[component]
fn ComparisonView(props: ComparisonViewProps) -> Element {
    let rows = props.result.rows().into_iter().map(|row| {
        let label = row.metric.label();
        let unit = row.metric.unit();
        let report1 = format!("{:.1}", row.report1);
        let report2 = format!("{:.1}", row.report2);
        rsx! {
            tr {
                key: "{label}",
                style: "border-bottom: 1px solid #EEEEEE;",
                td { style: "padding: 8px; font-weight: bold;", "{label}" }
                td { style: "padding: 8px;", "{report1}" }
                td { style: "padding: 8px;", "{report2}" }
                td {
                    style: "padding: 8px;",
                    TrendBadge { deviation: row.deviation, unit: unit.to_string() }
                }
            }
        }
    });

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 16px; margin-bottom: 16px;",
            ReportCard { report: props.result.report1.clone(), title: "Report 1".to_string() }
            ReportCard { report: props.result.report2.clone(), title: "Report 2".to_string() }
        }
        table {
            style: "width: 100%; border-collapse: collapse; font-size: 14px;",
            thead {
                tr {
                    th { style: "padding: 8px; text-align: left; border-bottom: 2px solid #BDBDBD;", "Metric" }
                    th { style: "padding: 8px; text-align: left; border-bottom: 2px solid #BDBDBD;", "Report 1" }
                    th { style: "padding: 8px; text-align: left; border-bottom: 2px solid #BDBDBD;", "Report 2" }
                    th { style: "padding: 8px; text-align: left; border-bottom: 2px solid #BDBDBD;", "Deviation" }
                }
            }
            tbody {
                {rows}
            }
        }
    }
}
