//! Resource panels.
//!
//! One generic panel body is instantiated for each resource type. It keeps a
//! [`Panel`] in a signal and runs the async operations from
//! [`realty_core::workflow`] against it through [`SignalHost`].

mod empty_state;
mod record_form;
mod record_list;

use async_trait::async_trait;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use realty_core::notify::{Notice, Notifier};
use realty_core::panel::{self as panel_text, ListState, Panel};
use realty_core::resource::{
    Agency, FieldSpec, Property, Realtor, RecordId, Resource, ResourceForm,
};
use realty_core::workflow::{self, PanelHost};

use crate::components::{show_notice, use_api, use_confirm, use_notifier, use_tabs, ConfirmRequest};
use crate::utils::SignalExt;

use empty_state::EmptyState;
use record_form::{FormField, RecordForm};
use record_list::{RecordCard, RecordList};

#[component]
pub fn AgencyPanel() -> Element {
    resource_panel::<Agency>()
}

#[component]
pub fn RealtorPanel() -> Element {
    resource_panel::<Realtor>()
}

#[component]
pub fn PropertyPanel() -> Element {
    resource_panel::<Property>()
}

/// [`PanelHost`] backed by Dioxus signals.
struct SignalHost<R: Resource> {
    panel: Signal<Panel<R>>,
    notifier: Signal<Notifier>,
    confirm: Signal<Option<ConfirmRequest>>,
}

impl<R: Resource> Clone for SignalHost<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for SignalHost<R> {}

#[async_trait(?Send)]
impl<R: Resource> PanelHost for SignalHost<R> {
    type Item = R;

    fn with_panel<T>(&mut self, f: impl FnOnce(&mut Panel<R>) -> T) -> T {
        self.panel.apply(f)
    }

    fn notify(&mut self, notice: Notice) {
        show_notice(self.notifier, notice);
    }

    async fn confirm(&mut self, prompt: String) -> bool {
        let (request, answer) = ConfirmRequest::new(prompt);
        // A still-pending older request is dropped, which declines it
        self.confirm.set(Some(request));
        answer.await.unwrap_or(false)
    }
}

fn resource_panel<R: Resource>() -> Element {
    let api = use_api();
    let tabs = use_tabs();
    let panel = use_signal(Panel::<R>::new);
    let host = SignalHost {
        panel,
        notifier: use_notifier(),
        confirm: use_confirm(),
    };
    let kind = R::KIND;
    let heading = format!("{} {}", kind.icon(), kind.label());
    let add_label = format!("Add New {}", kind.noun());

    // Reload on every selection of this tab, including the initial one
    let load_api = api.clone();
    use_effect(move || {
        let tabs = tabs.read();
        if tabs.is_active(kind) {
            debug!("Loading {} (tab epoch {})", kind, tabs.epoch());
            let api = load_api.clone();
            let mut host = host;
            spawn(async move {
                workflow::load(&api, &mut host).await;
            });
        }
    });

    let state = panel.read().clone();

    let on_add = move |_| {
        let mut host = host;
        workflow::open_create(&mut host);
    };

    let edit_api = api.clone();
    let on_edit = move |id: RecordId| {
        let api = edit_api.clone();
        let mut host = host;
        spawn(async move {
            workflow::open_edit(&api, &mut host, id).await;
        });
    };

    let delete_api = api.clone();
    let on_delete = move |id: RecordId| {
        let api = delete_api.clone();
        let mut host = host;
        spawn(async move {
            workflow::delete(&api, &mut host, id).await;
        });
    };

    let save_api = api.clone();
    let on_save = move |_| {
        let api = save_api.clone();
        let mut host = host;
        spawn(async move {
            workflow::save(&api, &mut host).await;
        });
    };

    let on_cancel = move |_| {
        let mut host = host;
        workflow::cancel(&mut host);
    };

    let mut panel_for_input = panel;
    let on_input = move |(key, value): (&'static str, String)| {
        panel_for_input.mutate(|p| p.set_field(key, value));
    };

    let form = state.form().map(|form| {
        let fields: Vec<FormField> = <R::Form as ResourceForm>::FIELDS
            .iter()
            .map(|spec: &FieldSpec| FormField {
                key: spec.key,
                label: spec.label,
                input: spec.input,
                value: form.fields.value(spec.key).to_string(),
            })
            .collect();
        (panel_text::form_title(kind, form.mode), fields)
    });

    let body = match state.list() {
        ListState::Idle | ListState::Loading => {
            let loading = panel_text::loading_message(kind);
            rsx! {
                p { class: "rl-loading", "{loading}" }
            }
        }
        ListState::Empty => rsx! {
            EmptyState {
                title: panel_text::empty_title(kind),
                hint: panel_text::empty_hint(kind),
            }
        },
        ListState::Failed(message) => rsx! {
            p { class: "rl-error", "{message}" }
        },
        ListState::Loaded(records) => {
            let cards: Vec<RecordCard> = records
                .iter()
                .map(|record| RecordCard {
                    id: record.id(),
                    title: record.title(),
                    details: record
                        .card_details()
                        .into_iter()
                        .map(|(label, value)| (label.to_string(), value))
                        .collect(),
                })
                .collect();
            rsx! {
                RecordList {
                    cards,
                    on_edit,
                    on_delete,
                }
            }
        }
    };

    rsx! {
        section { class: "rl-panel",
            div { class: "rl-panel-header",
                h2 { class: "rl-panel-title", "{heading}" }
                button {
                    class: "rl-btn rl-btn--primary",
                    onclick: on_add,
                    "{add_label}"
                }
            }

            if let Some((title, fields)) = form {
                RecordForm {
                    title,
                    fields,
                    on_input,
                    on_save,
                    on_cancel,
                }
            }

            {body}
        }
    }
}
