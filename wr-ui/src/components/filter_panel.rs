//! Time range filter with From/To `datetime-local` inputs.

use dioxus::prelude::*;
use wr_core::history::FilterForm;

#[derive(Props, Clone, PartialEq)]
pub struct FilterPanelProps {
    /// Current, not yet applied, form values
    pub form: FilterForm,
    /// Validation message from the last Apply
    #[props(default)]
    pub error: Option<String>,
    pub on_change: EventHandler<FilterForm>,
    pub on_apply: EventHandler<()>,
    pub on_reset: EventHandler<()>,
}

/// Controlled filter form. Nothing is applied until the user clicks Apply.
#[component]
pub fn FilterPanel(props: FilterPanelProps) -> Element {
    let from_time = props.form.from_time.clone();
    let to_time = props.form.to_time.clone();

    let form_for_from = props.form.clone();
    let on_change = props.on_change;
    let on_from_change = move |evt: Event<FormData>| {
        on_change.call(FilterForm {
            from_time: evt.value(),
            ..form_for_from.clone()
        });
    };

    let form_for_to = props.form.clone();
    let on_to_change = move |evt: Event<FormData>| {
        on_change.call(FilterForm {
            to_time: evt.value(),
            ..form_for_to.clone()
        });
    };

    let on_apply = props.on_apply;
    let on_reset = props.on_reset;

    rsx! {
        div {
            style: "margin: 8px 0; padding: 12px; background: #FAFAFA; border: 1px solid #E0E0E0; border-radius: 4px;",
            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: center;",
                label {
                    style: "font-weight: bold;",
                    "From: "
                    input {
                        r#type: "datetime-local",
                        value: "{from_time}",
                        oninput: on_from_change,
                    }
                }
                label {
                    style: "font-weight: bold;",
                    "To: "
                    input {
                        r#type: "datetime-local",
                        value: "{to_time}",
                        oninput: on_to_change,
                    }
                }
                button {
                    style: "padding: 4px 12px;",
                    onclick: move |_| on_apply.call(()),
                    "Apply Filters"
                }
                button {
                    style: "padding: 4px 12px;",
                    onclick: move |_| on_reset.call(()),
                    "Reset"
                }
            }
            if let Some(error) = props.error.clone() {
                p {
                    style: "margin: 8px 0 0 0; color: #C62828; font-size: 13px;",
                    "{error}"
                }
            }
        }
    }
}
