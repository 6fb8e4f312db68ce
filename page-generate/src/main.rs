//! Weather Report Generator
//!
//! Asks the API to generate a report for an optional instant (entered in
//! local time; empty means now) and shows the result as a card.

use chrono::Local;
use dioxus::prelude::*;
use wr_api::{ApiConfig, HttpGateway, ReportsApi};
use wr_core::generate::{GenerateForm, GENERATED_MESSAGE, GENERATE_FAILED_MESSAGE};
use wr_core::history::HISTORY_PATH;
use wr_core::notify::{handle_api_error, Notice, Notifier};
use wr_core::report::WeatherReport;
use wr_ui::components::{PageHeader, ReportCard, Toaster};
use wr_ui::state::AppState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("generate-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let gateway = use_hook(|| HttpGateway::new(&ApiConfig::from_build_env()));

    let mut form = use_signal(GenerateForm::default);
    let mut generating = use_signal(|| false);
    let mut report = use_signal(|| None::<WeatherReport>);

    let on_generate = move |_: MouseEvent| {
        if *generating.peek() {
            return;
        }
        let request = match form.peek().to_request(&Local) {
            Ok(request) => request,
            Err(e) => {
                state.notify(Notice::warning(e.to_string()));
                return;
            }
        };
        generating.set(true);
        let gateway = gateway.clone();
        spawn(async move {
            match gateway.generate(&request).await {
                Ok(generated) => {
                    log::info!("Generated report {}", generated.id);
                    state.notify(Notice::success(GENERATED_MESSAGE));
                    report.set(Some(generated));
                }
                Err(e) => handle_api_error(&state, &e, GENERATE_FAILED_MESSAGE),
            }
            generating.set(false);
        });
    };

    let busy = generating();
    let timestamp = form.read().timestamp.clone();
    let button_label = if busy { "Generating..." } else { "Generate Report" };

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            Toaster {}

            PageHeader {
                title: "Generate Weather Report".to_string(),
                subtitle: "Leave the time empty to use the current time".to_string(),
            }

            div {
                style: "margin: 8px 0; display: flex; flex-wrap: wrap; gap: 12px; align-items: center;",
                label {
                    style: "font-weight: bold;",
                    "Time: "
                    input {
                        r#type: "datetime-local",
                        value: "{timestamp}",
                        oninput: move |evt: Event<FormData>| form.set(GenerateForm { timestamp: evt.value() }),
                    }
                }
                button {
                    style: "padding: 4px 12px;",
                    disabled: busy,
                    onclick: on_generate,
                    "{button_label}"
                }
                a {
                    href: HISTORY_PATH,
                    style: "font-size: 13px;",
                    "View history"
                }
            }

            if let Some(generated) = report() {
                div {
                    style: "margin-top: 16px; max-width: 420px;",
                    ReportCard { report: generated, title: "Generated Report".to_string() }
                }
            }
        }
    }
}
