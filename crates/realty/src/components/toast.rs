use dioxus::prelude::*;

use crate::components::use_notifier;

/// The one visible notification, if any.
///
/// Dismissal timers are started by [`show_notice`](crate::components::show_notice);
/// this component only renders.
#[component]
pub fn Toast() -> Element {
    let notifier = use_notifier();
    let current = notifier.read().current().cloned();

    match current {
        Some(notification) => {
            let class = format!("rl-toast rl-toast--{}", notification.severity.as_str());
            rsx! {
                div { class: "{class}", role: "status", "{notification.message}" }
            }
        }
        None => rsx! {},
    }
}
