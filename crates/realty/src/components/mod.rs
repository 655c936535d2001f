//! UI components for the Realty Desk application.
//!
//! - `app_shell`: AppBar with resource tabs and the connectivity pill
//! - `panel`: one panel per resource (list, empty state, form)
//! - `toast`: the single transient notification
//! - `confirm_dialog`: modal yes/no prompt used before deletes
//!
//! # Context Providers
//!
//! [`App`] provides the shared state every component reaches through the
//! `use_*` helpers below:
//!
//! ```ignore
//! let api = use_api();
//! let mut tabs = use_tabs();
//! tabs.mutate(|t| { t.select(ResourceKind::Properties); });
//! ```

mod app_shell;
mod confirm_dialog;
mod panel;
mod toast;

pub use app_shell::AppBar;
pub use confirm_dialog::{ConfirmDialog, ConfirmRequest};
pub use panel::{AgencyPanel, PropertyPanel, RealtorPanel};
pub use toast::Toast;

use crate::platform;
use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;
use once_cell::sync::Lazy;
use realty_core::api::{ApiClient, HttpTransport};
use realty_core::config::{resolve_base_url, NOTIFICATION_DISMISS};
use realty_core::connectivity::{self, ConnectionStatus};
use realty_core::notify::{self, Notice, Notifier, NotifierSlot};
use realty_core::resource::ResourceKind;
use realty_core::tabs::TabController;

/// Client used by every panel.
pub type Api = ApiClient<HttpTransport>;

/// Base URL baked in at build time (`REALTY_API_URL`), else the default.
static API_BASE_URL: Lazy<String> = Lazy::new(|| resolve_base_url(option_env!("REALTY_API_URL")));

pub fn use_api() -> Api {
    use_context::<Api>()
}

pub fn use_notifier() -> Signal<Notifier> {
    use_context::<Signal<Notifier>>()
}

pub fn use_tabs() -> Signal<TabController> {
    use_context::<Signal<TabController>>()
}

pub fn use_connection_status() -> Signal<ConnectionStatus> {
    use_context::<Signal<ConnectionStatus>>()
}

/// Pending delete confirmation, if any.
pub fn use_confirm() -> Signal<Option<ConfirmRequest>> {
    use_context::<Signal<Option<ConfirmRequest>>>()
}

/// [`NotifierSlot`] over the shared notifier signal. Writes only when a
/// transition changed something, so a stale dismissal does not re-render.
#[derive(Clone, Copy)]
struct NotifierSignal(Signal<Notifier>);

impl NotifierSlot for NotifierSignal {
    fn update<T>(&mut self, f: impl FnOnce(&mut Notifier) -> T) -> T {
        let mut notifier = self.0.peek().clone();
        let result = f(&mut notifier);
        if *self.0.peek() != notifier {
            self.0.set(notifier);
        }
        result
    }
}

/// Shows `notice` and schedules its dismissal.
///
/// The timer only hides the notification it was started for; a newer one
/// keeps its full display time.
pub fn show_notice(notifier: Signal<Notifier>, notice: Notice) {
    debug!("Notify [{}]: {}", notice.severity.as_str(), notice.message);
    let delay = platform::sleep(NOTIFICATION_DISMISS);
    spawn(notify::flash(NotifierSignal(notifier), notice, delay));
}

#[component]
pub fn App() -> Element {
    let api = use_context_provider(|| {
        info!("Using API at {}", API_BASE_URL.as_str());
        ApiClient::new(HttpTransport::new(API_BASE_URL.as_str()))
    });

    let notifier = use_signal(Notifier::default);
    use_context_provider(|| notifier);

    let confirm = use_signal(|| None::<ConfirmRequest>);
    use_context_provider(|| confirm);

    let tabs = use_signal(TabController::default);
    use_context_provider(|| tabs);

    let mut connection = use_signal(ConnectionStatus::default);
    use_context_provider(|| connection);

    // One reachability check at startup, no polling
    use_effect(move || {
        let api = api.clone();
        spawn(async move {
            let status = connectivity::check(&api).await;
            connection.set(status);
        });
    });

    let current = tabs.read().current();

    rsx! {
        div { class: "rl-app",
            AppBar {}

            main { class: "rl-main",
                // Panels stay mounted so each keeps its own state across tab switches
                div { hidden: current != ResourceKind::Agencies, AgencyPanel {} }
                div { hidden: current != ResourceKind::Realtors, RealtorPanel {} }
                div { hidden: current != ResourceKind::Properties, PropertyPanel {} }
            }

            Toast {}
            ConfirmDialog {}
        }
    }
}
