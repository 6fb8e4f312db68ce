//! Card showing a single report's measurements.

use crate::browser::format_local;
use dioxus::prelude::*;
use wr_core::report::{Metric, WeatherReport};

#[derive(Props, Clone, PartialEq)]
pub struct ReportCardProps {
    pub report: WeatherReport,
    #[props(default = "Weather Report".to_string())]
    pub title: String,
}

#[component]
pub fn ReportCard(props: ReportCardProps) -> Element {
    let report = &props.report;
    let sky = report.sky();
    let icon = sky.icon();
    let sky_label = sky.label();
    let observed = format_local(&report.timestamp);
    let id = report.id.clone();

    let rows = Metric::ALL.into_iter().map(|metric| {
        let label = metric.name();
        let value = format!("{:.1} {}", report.metric(metric), metric.unit());
        rsx! {
            div {
                key: "{label}",
                style: "display: flex; justify-content: space-between; padding: 4px 0; border-bottom: 1px solid #EEEEEE;",
                span { style: "color: #666;", "{label}" }
                span { style: "font-weight: bold;", "{value}" }
            }
        }
    });

    rsx! {
        div {
            style: "padding: 16px; border: 1px solid #E0E0E0; border-radius: 8px; background: white; min-width: 260px; flex: 1;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;",
                h3 { style: "margin: 0; font-size: 16px;", "{props.title}" }
                span {
                    style: "font-size: 24px;",
                    title: "{sky_label}",
                    "{icon}"
                }
            }
            p { style: "margin: 0 0 8px 0; font-size: 12px; color: #666;", "{observed} · {sky_label}" }
            {rows}
            p { style: "margin: 8px 0 0 0; font-size: 11px; color: #999;", "ID: {id}" }
        }
    }
}
