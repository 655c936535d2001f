//! Async panel operations.
//!
//! Each function issues at most the requests its operation needs and feeds
//! the results back into the host's [`Panel`]. The host decides where the
//! panel lives (a Dioxus signal, a `RefCell` in tests) and how notices and
//! confirmations reach the user.
//!
//! The panel is never borrowed across an `.await`: every step takes the
//! panel, applies one synchronous transition, and releases it.

use crate::api::{ApiClient, Transport};
use crate::notify::Notice;
use crate::panel::{delete_prompt, FormMode, Panel};
use crate::resource::{RecordId, Resource};
use async_trait::async_trait;
use tracing::{debug, info};

/// Owner of a [`Panel`] plus the user-facing side effects it triggers.
#[async_trait(?Send)]
pub trait PanelHost {
    type Item: Resource;

    /// Runs `f` against the panel state.
    fn with_panel<T>(&mut self, f: impl FnOnce(&mut Panel<Self::Item>) -> T) -> T;

    fn notify(&mut self, notice: Notice);

    /// Asks the user a yes/no question. `false` means declined.
    async fn confirm(&mut self, prompt: String) -> bool;
}

/// (Re)loads the list. A load started later always wins over this one.
pub async fn load<T, H>(client: &ApiClient<T>, host: &mut H)
where
    T: Transport,
    H: PanelHost,
{
    let ticket = host.with_panel(|panel| panel.begin_load());
    let result = client.list::<H::Item>().await;
    if let Some(notice) = host.with_panel(|panel| panel.complete_load(ticket, result)) {
        host.notify(notice);
    }
}

pub fn open_create<H: PanelHost>(host: &mut H) {
    host.with_panel(|panel| panel.open_create());
}

/// Fetches record `id` and opens the form in update mode for it.
pub async fn open_edit<T, H>(client: &ApiClient<T>, host: &mut H, id: RecordId)
where
    T: Transport,
    H: PanelHost,
{
    let result = client.get::<H::Item>(id).await;
    if let Some(notice) = host.with_panel(|panel| panel.complete_edit_fetch(result)) {
        host.notify(notice);
    }
}

pub fn cancel<H: PanelHost>(host: &mut H) {
    host.with_panel(|panel| panel.close_form());
}

/// Submits the open form: POST in create mode, PUT in update mode.
///
/// Invalid input is reported without any request. On success the form
/// closes and the list reloads.
pub async fn save<T, H>(client: &ApiClient<T>, host: &mut H)
where
    T: Transport,
    H: PanelHost,
{
    let request = match host.with_panel(|panel| panel.prepare_save()) {
        Ok(request) => request,
        Err(notice) => {
            debug!("Save blocked: {}", notice.message);
            host.notify(notice);
            return;
        }
    };

    let result = match request.mode {
        FormMode::Create => client.create::<H::Item>(&request.draft).await,
        FormMode::Update(id) => client.update::<H::Item>(id, &request.draft).await,
    };

    let outcome = host.with_panel(|panel| panel.complete_save(request.mode, result));
    host.notify(outcome.notice);
    if outcome.reload {
        load(client, host).await;
    }
}

/// Deletes record `id` after the user confirms. Declining sends nothing.
pub async fn delete<T, H>(client: &ApiClient<T>, host: &mut H, id: RecordId)
where
    T: Transport,
    H: PanelHost,
{
    let kind = <H::Item as Resource>::KIND;
    if !host.confirm(delete_prompt(kind)).await {
        info!("Delete of {} {} cancelled", kind.singular(), id);
        return;
    }

    let result = client.delete::<H::Item>(id).await;
    let outcome = host.with_panel(|panel| panel.complete_delete(result));
    host.notify(outcome.notice);
    if outcome.reload {
        load(client, host).await;
    }
}
