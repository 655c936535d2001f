use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use realty_core::connectivity::ConnectionStatus;
use realty_core::resource::ResourceKind;

use crate::components::{use_connection_status, use_tabs};
use crate::utils::SignalExt;

/// Global app bar with title, resource tabs and the connectivity pill
#[component]
pub fn AppBar() -> Element {
    let mut tabs = use_tabs();
    let connection = use_connection_status();
    let current = tabs.read().current();

    let connection_pill = match connection.read().clone() {
        ConnectionStatus::Checking => rsx! {
            span { class: "rl-status-pill rl-status-pill--muted",
                span { class: "rl-status-dot rl-status-dot--muted" }
                "Checking…"
            }
        },
        ConnectionStatus::Connected { message } => rsx! {
            span { class: "rl-status-pill rl-status-pill--ok", title: "{message}",
                span { class: "rl-status-dot rl-status-dot--ok" }
                "🟢 Connected"
            }
        },
        ConnectionStatus::Disconnected { message } => rsx! {
            span { class: "rl-status-pill rl-status-pill--error", title: "{message}",
                span { class: "rl-status-dot rl-status-dot--error" }
                "🔴 Disconnected"
            }
        },
    };

    rsx! {
        header { class: "rl-appbar",
            div { class: "rl-appbar-left",
                div { class: "rl-logo",
                    span { class: "rl-logo-word", "Realty" }
                    span { class: "rl-logo-word rl-logo-word--accent", "Desk" }
                }
            }
            nav { class: "rl-appbar-center",
                {ResourceKind::ALL.into_iter().map(move |kind| {
                    let text = format!("{} {}", kind.icon(), kind.label());
                    rsx! {
                        button {
                            key: "{kind}",
                            class: if current == kind {
                                "rl-nav-link rl-nav-link--active"
                            } else {
                                "rl-nav-link"
                            },
                            onclick: move |_| {
                                let switch = tabs.apply(|t| t.select(kind));
                                debug!(
                                    "Tab {} -> {} (epoch {})",
                                    switch.previous, switch.current, switch.epoch
                                );
                            },
                            "{text}"
                        }
                    }
                })}
            }
            div { class: "rl-appbar-right",
                {connection_pill}
            }
        }
    }
}
