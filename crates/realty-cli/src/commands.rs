//! Command implementations.
//!
//! Each command maps to one panel operation and reports failures with the
//! same wording the app uses.

use crate::output::{self, Format};
use crate::{Action, FieldArgs};
use anyhow::{anyhow, bail, Context, Result};
use realty_core::api::{ApiClient, HttpTransport, Transport};
use realty_core::connectivity;
use realty_core::error::ApiError;
use realty_core::panel::{delete_prompt, failure_message};
use realty_core::resource::{Resource, ResourceForm, ResourceKind};
use std::io::{self, BufRead, Write};
use tracing::info;

/// `realty status`: fails when the server cannot be reached.
pub async fn status(client: &ApiClient<HttpTransport>, format: Format) -> Result<String> {
    let status = connectivity::check(client).await;
    let text = output::format_status(&status, client.transport().base_url(), format);
    if status.is_connected() {
        Ok(text)
    } else {
        Err(anyhow!(text))
    }
}

/// Runs one resource action and returns the text to print.
pub async fn run<R: Resource, T: Transport>(
    client: &ApiClient<T>,
    action: Action,
    format: Format,
) -> Result<String> {
    let kind = R::KIND;
    match action {
        Action::List => {
            let records = client
                .list::<R>()
                .await
                .with_context(|| format!("Failed to load {}", kind.plural()))?;
            info!("Loaded {} {}", records.len(), kind.plural());
            Ok(match format {
                Format::Json => output::format_json(&records),
                Format::Human => output::format_list_human(&records),
            })
        }

        Action::Get { id } => {
            let record = client.get::<R>(id).await.map_err(|e| {
                ui_error(
                    kind,
                    e,
                    &format!("Failed to load {}", kind.singular()),
                    "loading",
                )
            })?;
            Ok(match format {
                Format::Json => output::format_json(&record),
                Format::Human => output::format_record_human(&record),
            })
        }

        Action::Create { fields } => {
            let mut form = R::Form::default();
            apply_fields::<R>(&mut form, &fields)?;
            let draft = form.to_draft()?;

            let ack = client
                .create::<R>(&draft)
                .await
                .map_err(|e| ui_error(kind, e, "Operation failed", "saving"))?;
            Ok(output::format_ack(
                &ack,
                format!("{} created successfully", kind.noun()),
                format,
            ))
        }

        Action::Update { id, fields } => {
            // Start from the stored record so omitted flags keep their value
            let current = client.get::<R>(id).await.map_err(|e| {
                ui_error(
                    kind,
                    e,
                    &format!("Failed to load {}", kind.singular()),
                    "loading",
                )
            })?;
            let mut form = current.to_form();
            apply_fields::<R>(&mut form, &fields)?;
            let draft = form.to_draft()?;

            let ack = client
                .update::<R>(id, &draft)
                .await
                .map_err(|e| ui_error(kind, e, "Operation failed", "saving"))?;
            Ok(output::format_ack(
                &ack,
                format!("{} updated successfully", kind.noun()),
                format,
            ))
        }

        Action::Delete { id, yes } => {
            if !yes && !confirm(&delete_prompt(kind))? {
                info!("Delete of {} {} cancelled", kind.singular(), id);
                return Ok(String::new());
            }

            let ack = client.delete::<R>(id).await.map_err(|e| {
                ui_error(
                    kind,
                    e,
                    &format!("Failed to delete {}", kind.singular()),
                    "deleting",
                )
            })?;
            Ok(output::format_ack(
                &ack,
                format!("{} deleted successfully", kind.noun()),
                format,
            ))
        }
    }
}

/// Same text the app would show for this failure.
fn ui_error(kind: ResourceKind, err: ApiError, fallback: &str, verb: &str) -> anyhow::Error {
    anyhow!(failure_message(kind, &err, fallback, verb))
}

/// Copies the given flags into `form`, rejecting flags the resource lacks.
pub fn apply_fields<R: Resource>(form: &mut R::Form, fields: &FieldArgs) -> Result<()> {
    let given = [
        ("name", &fields.name),
        ("address", &fields.address),
        ("city", &fields.city),
        ("price", &fields.price),
    ];
    let known = <R::Form as ResourceForm>::FIELDS;

    for (key, value) in given {
        let Some(value) = value else { continue };
        if !known.iter().any(|spec| spec.key == key) {
            bail!("--{} does not apply to {}", key, R::KIND.plural());
        }
        form.set_value(key, value.clone());
    }
    Ok(())
}

/// Asks `prompt [y/N]` on stdin. Anything but y/yes declines.
fn confirm(prompt: &str) -> Result<bool> {
    let stdin = io::stdin();
    confirm_with(prompt, &mut stdin.lock(), &mut io::stderr())
}

fn confirm_with(prompt: &str, input: &mut impl BufRead, out: &mut impl Write) -> Result<bool> {
    write!(out, "{} [y/N] ", prompt)?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
