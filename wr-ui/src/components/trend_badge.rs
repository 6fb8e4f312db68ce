//! Colored deviation badge.

use dioxus::prelude::*;
use wr_core::comparison::{format_magnitude, Trend};

#[derive(Props, Clone, PartialEq)]
pub struct TrendBadgeProps {
    /// Signed `report2 - report1`
    pub deviation: f64,
    #[props(default = String::new())]
    pub unit: String,
}

/// Arrow and unsigned magnitude, colored by direction.
#[component]
pub fn TrendBadge(props: TrendBadgeProps) -> Element {
    let trend = Trend::from_deviation(props.deviation);
    let symbol = trend.symbol();
    let magnitude = format_magnitude(props.deviation);
    let style = format!(
        "display: inline-block; padding: 2px 8px; border-radius: 12px; font-weight: bold; color: {}; background: {};",
        trend.color(),
        trend.background()
    );

    rsx! {
        span {
            style: "{style}",
            "{symbol} {magnitude} {props.unit}"
        }
    }
}
