//! Output formatting for command results.
//!
//! Supports both human-readable terminal output and JSON for scripting.

use realty_core::api::MutationAck;
use realty_core::connectivity::ConnectionStatus;
use realty_core::resource::{RecordId, Resource};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Human,
    Json,
}

/// JSON shape of a successful create, update or delete.
#[derive(Serialize)]
pub struct JsonAck {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub message: String,
}

/// JSON shape of `realty status`.
#[derive(Serialize)]
pub struct JsonStatus<'a> {
    pub connected: bool,
    pub message: &'a str,
    pub api_url: &'a str,
}

/// Serializes any value as pretty JSON.
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// One line per record: `id | field | field`.
pub fn format_list_human<R: Resource>(records: &[R]) -> String {
    if records.is_empty() {
        return "(empty)".to_string();
    }

    records
        .iter()
        .map(|record| {
            let mut parts = vec![record.id().to_string()];
            parts.extend(record.fields().into_iter().map(|(_, value)| value));
            parts.join(" | ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `Label: value` lines for a single record.
pub fn format_record_human<R: Resource>(record: &R) -> String {
    let mut output = format!("ID: {}", record.id());
    for (label, value) in record.fields() {
        output.push_str(&format!("\n{}: {}", label, value));
    }
    output
}

/// `message` is the locally built success text; the server's own message is
/// preferred when it sent one.
pub fn format_ack(ack: &MutationAck, message: String, format: Format) -> String {
    let message = ack.message.clone().unwrap_or(message);
    match format {
        Format::Json => format_json(&JsonAck {
            success: true,
            id: ack.id,
            message,
        }),
        Format::Human => match ack.id {
            Some(id) => format!("{} (id {})", message, id),
            None => message,
        },
    }
}

pub fn format_status(status: &ConnectionStatus, api_url: &str, format: Format) -> String {
    match format {
        Format::Json => format_json(&JsonStatus {
            connected: status.is_connected(),
            message: status.message(),
            api_url,
        }),
        Format::Human => {
            let indicator = if status.is_connected() {
                "🟢 Connected"
            } else {
                "🔴 Disconnected"
            };
            format!("{} - {} ({})", indicator, status.message(), api_url)
        }
    }
}
