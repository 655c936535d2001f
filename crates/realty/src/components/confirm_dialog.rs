//! Modal yes/no prompt.
//!
//! A panel that needs confirmation stores a [`ConfirmRequest`] in the shared
//! signal and awaits the receiving half of its channel. The dialog renders
//! whatever request is pending and answers it exactly once.

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use futures_channel::oneshot;

use crate::components::use_confirm;

/// A question waiting for the user.
pub struct ConfirmRequest {
    pub prompt: String,
    responder: oneshot::Sender<bool>,
}

impl ConfirmRequest {
    /// Creates a request and the receiver that resolves with the answer.
    ///
    /// The receiver yields `Err(Canceled)` if the request is dropped
    /// unanswered, e.g. when a newer request replaces it.
    pub fn new(prompt: impl Into<String>) -> (Self, oneshot::Receiver<bool>) {
        let (responder, answer) = oneshot::channel();
        (
            Self {
                prompt: prompt.into(),
                responder,
            },
            answer,
        )
    }

    fn answer(self, confirmed: bool) {
        // Receiver gone means the asking task no longer cares
        let _ = self.responder.send(confirmed);
    }
}

#[component]
pub fn ConfirmDialog() -> Element {
    let mut pending = use_confirm();
    let prompt = pending.read().as_ref().map(|request| request.prompt.clone());

    let mut respond = move |confirmed: bool| {
        if let Some(request) = pending.write().take() {
            debug!("Confirm '{}' -> {}", request.prompt, confirmed);
            request.answer(confirmed);
        }
    };

    let Some(prompt) = prompt else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "rl-modal-backdrop",
            onclick: move |_| respond(false),

            div {
                class: "rl-modal",
                role: "alertdialog",
                onclick: move |e| e.stop_propagation(),

                div { class: "rl-modal-header",
                    h2 { class: "rl-modal-title", "Please confirm" }
                }
                div { class: "rl-modal-content",
                    p { class: "rl-modal-text", "{prompt}" }
                    div { class: "rl-modal-buttons",
                        button {
                            class: "rl-btn rl-btn--secondary",
                            onclick: move |_| respond(false),
                            "Cancel"
                        }
                        button {
                            class: "rl-btn rl-btn--danger",
                            onclick: move |_| respond(true),
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}
