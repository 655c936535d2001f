use dioxus::prelude::*;
use realty_core::resource::RecordId;

/// Display data for one record card.
#[derive(Clone, PartialEq)]
pub struct RecordCard {
    pub id: RecordId,
    pub title: String,
    /// (label, formatted value) lines below the id
    pub details: Vec<(String, String)>,
}

#[component]
pub fn RecordList(
    cards: Vec<RecordCard>,
    on_edit: EventHandler<RecordId>,
    on_delete: EventHandler<RecordId>,
) -> Element {
    rsx! {
        div { class: "rl-record-grid",
            for card in cards {
                RecordCardView {
                    key: "{card.id}",
                    card: card.clone(),
                    on_edit,
                    on_delete,
                }
            }
        }
    }
}

#[component]
fn RecordCardView(
    card: RecordCard,
    on_edit: EventHandler<RecordId>,
    on_delete: EventHandler<RecordId>,
) -> Element {
    let id = card.id;

    rsx! {
        article { class: "rl-card",
            h3 { class: "rl-card-title", "{card.title}" }
            p { class: "rl-card-line",
                span { class: "rl-card-label", "ID: " }
                "{id}"
            }
            for (label, value) in card.details {
                p { class: "rl-card-line",
                    span { class: "rl-card-label", "{label}: " }
                    "{value}"
                }
            }
            div { class: "rl-card-actions",
                button {
                    class: "rl-btn rl-btn--secondary",
                    onclick: move |_| on_edit.call(id),
                    "Edit"
                }
                button {
                    class: "rl-btn rl-btn--danger",
                    onclick: move |_| on_delete.call(id),
                    "Delete"
                }
            }
        }
    }
}
