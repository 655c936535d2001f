//! Per-resource panel state.
//!
//! A [`Panel`] owns everything one resource view shows: the list (or its
//! loading / empty / error state) and the optional create/edit form. All
//! methods are synchronous; the async side lives in
//! [`workflow`](crate::workflow), which calls into a panel before and after
//! each request.
//!
//! # Invariants
//!
//! - The form mode ([`FormMode::Create`] or [`FormMode::Update`]) is fixed
//!   when the form is opened and decides which request Save issues.
//! - Only the most recently issued list load may write the list; results
//!   for superseded [`LoadTicket`]s are dropped.
//! - A failed save leaves the form open with its fields untouched.

use crate::api::MutationAck;
use crate::error::ApiError;
use crate::notify::Notice;
use crate::resource::{RecordId, Resource, ResourceForm, ResourceKind};
use tracing::debug;

/// What the list area shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState<R> {
    /// Nothing requested yet
    Idle,
    Loading,
    /// At least one record
    Loaded(Vec<R>),
    /// The server returned an empty collection
    Empty,
    /// Inline error text
    Failed(String),
}

/// Whether Save creates a new record or replaces an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(RecordId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState<F> {
    pub mode: FormMode,
    pub fields: F,
}

/// Identifies one list load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Everything needed to issue a save request.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest<D> {
    pub mode: FormMode,
    pub draft: D,
}

/// How a finished mutation should be reported.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationOutcome {
    pub notice: Notice,
    /// Reload the list (only after a confirmed success).
    pub reload: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel<R: Resource> {
    list: ListState<R>,
    form: Option<FormState<R::Form>>,
    issued: u64,
}

impl<R: Resource> Default for Panel<R> {
    fn default() -> Self {
        Self {
            list: ListState::Idle,
            form: None,
            issued: 0,
        }
    }
}

impl<R: Resource> Panel<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &ListState<R> {
        &self.list
    }

    pub fn form(&self) -> Option<&FormState<R::Form>> {
        self.form.as_ref()
    }

    pub fn is_form_open(&self) -> bool {
        self.form.is_some()
    }

    // ------------------------------------------------------------------
    // List
    // ------------------------------------------------------------------

    /// Marks the list as loading and issues a new ticket, superseding any
    /// load still in flight.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;
        self.list = ListState::Loading;
        LoadTicket(self.issued)
    }

    /// Applies a list result. Returns a notice when the load failed.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<R>, ApiError>,
    ) -> Option<Notice> {
        if ticket.0 != self.issued {
            debug!(
                "Discarding stale {} load ({} < {})",
                R::KIND,
                ticket.0,
                self.issued
            );
            return None;
        }

        match result {
            Ok(records) if records.is_empty() => {
                self.list = ListState::Empty;
                None
            }
            Ok(records) => {
                self.list = ListState::Loaded(records);
                None
            }
            Err(err) => {
                self.list = ListState::Failed(list_error_text(R::KIND, &err));
                Some(Notice::error(format!("Failed to load {}", R::KIND.plural())))
            }
        }
    }

    // ------------------------------------------------------------------
    // Form
    // ------------------------------------------------------------------

    /// Opens an empty form in create mode, discarding any edit in progress.
    pub fn open_create(&mut self) {
        self.form = Some(FormState {
            mode: FormMode::Create,
            fields: R::Form::default(),
        });
    }

    /// Opens the form for a fetched record, or reports why it could not be
    /// fetched. On failure the form is left as it was.
    pub fn complete_edit_fetch(&mut self, result: Result<R, ApiError>) -> Option<Notice> {
        match result {
            Ok(record) => {
                self.form = Some(FormState {
                    mode: FormMode::Update(record.id()),
                    fields: record.to_form(),
                });
                None
            }
            Err(err) => Some(Notice::error(failure_message(
                R::KIND,
                &err,
                &format!("Failed to load {}", R::KIND.singular()),
                "loading",
            ))),
        }
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    /// Updates one field of the open form. No-op when no form is open.
    pub fn set_field(&mut self, key: &str, value: String) {
        if let Some(form) = &mut self.form {
            form.fields.set_value(key, value);
        }
    }

    /// Builds the request for the open form.
    pub fn prepare_save(&self) -> Result<SaveRequest<R::Draft>, Notice> {
        let form = self
            .form
            .as_ref()
            .ok_or_else(|| Notice::error(format!("No {} form is open", R::KIND.singular())))?;

        let draft = form
            .fields
            .to_draft()
            .map_err(|e| Notice::error(e.to_string()))?;

        Ok(SaveRequest {
            mode: form.mode,
            draft,
        })
    }

    /// Applies a save result. Success closes the submitted form and asks for
    /// a reload; failure keeps the form and its input.
    ///
    /// A form opened for another record (or for a new one) while the request
    /// was in flight stays open.
    pub fn complete_save(
        &mut self,
        mode: FormMode,
        result: Result<MutationAck, ApiError>,
    ) -> MutationOutcome {
        match result {
            Ok(_) => {
                if self.form.as_ref().map(|form| form.mode) == Some(mode) {
                    self.form = None;
                }
                let verb = match mode {
                    FormMode::Create => "created",
                    FormMode::Update(_) => "updated",
                };
                MutationOutcome {
                    notice: Notice::success(format!("{} {} successfully", R::KIND.noun(), verb)),
                    reload: true,
                }
            }
            Err(err) => MutationOutcome {
                notice: Notice::error(failure_message(R::KIND, &err, "Operation failed", "saving")),
                reload: false,
            },
        }
    }

    /// Reports a delete result. Deleting does not touch the form.
    pub fn complete_delete(&self, result: Result<MutationAck, ApiError>) -> MutationOutcome {
        match result {
            Ok(_) => MutationOutcome {
                notice: Notice::success(format!("{} deleted successfully", R::KIND.noun())),
                reload: true,
            },
            Err(err) => MutationOutcome {
                notice: Notice::error(failure_message(
                    R::KIND,
                    &err,
                    &format!("Failed to delete {}", R::KIND.singular()),
                    "deleting",
                )),
                reload: false,
            },
        }
    }
}

// ----------------------------------------------------------------------
// Presentation text
// ----------------------------------------------------------------------

pub fn form_title(kind: ResourceKind, mode: FormMode) -> String {
    match mode {
        FormMode::Create => format!("Create New {}", kind.noun()),
        FormMode::Update(_) => format!("Edit {}", kind.noun()),
    }
}

pub fn loading_message(kind: ResourceKind) -> String {
    format!("Loading {}...", kind.plural())
}

pub fn empty_title(kind: ResourceKind) -> String {
    format!("No {} found", kind.plural())
}

pub fn empty_hint(kind: ResourceKind) -> String {
    format!(
        "Click \"Add New {}\" to create your first {}",
        kind.noun(),
        kind.singular()
    )
}

pub fn delete_prompt(kind: ResourceKind) -> String {
    format!("Are you sure you want to delete this {}?", kind.singular())
}

/// User-facing text for a failed operation: the server's own message when
/// it sent one, `fallback` for bare status/rejection failures, and the
/// underlying cause for transport and decoding failures.
pub fn failure_message(kind: ResourceKind, err: &ApiError, fallback: &str, verb: &str) -> String {
    if let Some(message) = err.server_message() {
        return message.to_string();
    }
    match err {
        ApiError::Transport(_) | ApiError::Decode(_) => {
            format!("Error {} {}: {}", verb, kind.singular(), err)
        }
        ApiError::Status { .. } | ApiError::Rejected { .. } => fallback.to_string(),
    }
}

fn list_error_text(kind: ResourceKind, err: &ApiError) -> String {
    if let Some(message) = err.server_message() {
        return message.to_string();
    }
    match err {
        ApiError::Status { status, .. } => format!("Failed to load {} ({})", kind.plural(), status),
        other => other.to_string(),
    }
}
