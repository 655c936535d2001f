use dioxus::prelude::*;
use realty_core::resource::InputKind;

/// One input row of the form.
#[derive(Clone, PartialEq)]
pub struct FormField {
    pub key: &'static str,
    pub label: &'static str,
    pub input: InputKind,
    pub value: String,
}

/// Create / edit form. Field values live in the panel; this only renders
/// them and reports edits.
#[component]
pub fn RecordForm(
    title: String,
    fields: Vec<FormField>,
    on_input: EventHandler<(&'static str, String)>,
    on_save: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        form {
            class: "rl-form",
            onsubmit: move |e| {
                e.prevent_default();
                on_save.call(());
            },

            h3 { class: "rl-form-title", "{title}" }

            for field in fields {
                label { class: "rl-form-row", key: "{field.key}",
                    span { class: "rl-form-label", "{field.label}" }
                    input {
                        class: "rl-input",
                        name: field.key,
                        r#type: match field.input {
                            InputKind::Text => "text",
                            InputKind::Number => "number",
                        },
                        step: "any",
                        value: "{field.value}",
                        oninput: move |e| on_input.call((field.key, e.value())),
                    }
                }
            }

            div { class: "rl-form-actions",
                button { class: "rl-btn rl-btn--primary", r#type: "submit", "Save" }
                button {
                    class: "rl-btn rl-btn--secondary",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
