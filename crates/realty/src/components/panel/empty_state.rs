use dioxus::prelude::*;

/// Shown when a collection has no records. Not an error.
#[component]
pub fn EmptyState(title: String, hint: String) -> Element {
    rsx! {
        section { class: "rl-empty-state",
            div { class: "rl-empty-card",
                h3 { class: "rl-empty-title", "{title}" }
                p { class: "rl-empty-text", "{hint}" }
            }
        }
    }
}
