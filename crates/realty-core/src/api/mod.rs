//! REST client for the resource collections.
//!
//! [`ApiClient`] speaks the backend's conventions (collection paths, the
//! `{success, error}` envelope on mutations) on top of a [`Transport`] that
//! only moves bytes. The production transport is [`HttpTransport`] (reqwest,
//! which uses `fetch()` on WASM); tests plug in an in-memory server.
//!
//! # Examples
//!
//! ```ignore
//! use realty_core::api::{ApiClient, HttpTransport};
//! use realty_core::resource::Agency;
//!
//! let client = ApiClient::new(HttpTransport::new("http://localhost:7070/api"));
//! let agencies = client.list::<Agency>().await?;
//! ```

mod http;

pub use http::HttpTransport;

use crate::error::ApiError;
use crate::resource::{RecordId, Resource, ResourceKind};
use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;
use tracing::warn;

/// HTTP verbs used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

/// A request relative to the API base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below the base URL, always starting with `/`.
    pub path: String,
    /// JSON body, sent with `Content-Type: application/json`.
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Status and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Moves a request to the server and brings back whatever it answered.
///
/// Implementations must only fail with [`ApiError::Transport`] when no HTTP
/// answer was received; every answer, whatever its status, is returned as a
/// [`RawResponse`].
///
/// Futures are `?Send` because browser `fetch()` futures are not `Send`.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError>;
}

/// Acknowledgement of a successful create, update or delete.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MutationAck {
    /// Id of the affected record, when the server reports one.
    pub id: Option<RecordId>,
    pub message: Option<String>,
}

/// Body shape of mutation answers and of most error answers.
#[derive(Debug, Default, Deserialize)]
struct Envelope {
    success: Option<bool>,
    error: Option<String>,
    message: Option<String>,
    id: Option<RecordId>,
}

/// Typed client for the three resource collections.
#[derive(Clone)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches a whole collection.
    #[tracing::instrument(skip(self), fields(resource = %R::KIND))]
    pub async fn list<R: Resource>(&self) -> Result<Vec<R>, ApiError> {
        let request = ApiRequest::new(Method::Get, collection_path(R::KIND));
        let response = self.transport.send(request).await?;
        decode_record(response)
    }

    /// Fetches one record by id.
    #[tracing::instrument(skip(self), fields(resource = %R::KIND))]
    pub async fn get<R: Resource>(&self, id: RecordId) -> Result<R, ApiError> {
        let request = ApiRequest::new(Method::Get, record_path(R::KIND, id));
        let response = self.transport.send(request).await?;
        decode_record(response)
    }

    #[tracing::instrument(skip(self, draft), fields(resource = %R::KIND))]
    pub async fn create<R: Resource>(&self, draft: &R::Draft) -> Result<MutationAck, ApiError> {
        let body = serde_json::to_value(draft)?;
        let request = ApiRequest::new(Method::Post, collection_path(R::KIND)).with_body(body);
        let response = self.transport.send(request).await?;
        decode_mutation(response)
    }

    /// Replaces the record `id` with `draft`.
    #[tracing::instrument(skip(self, draft), fields(resource = %R::KIND))]
    pub async fn update<R: Resource>(
        &self,
        id: RecordId,
        draft: &R::Draft,
    ) -> Result<MutationAck, ApiError> {
        let body = serde_json::to_value(draft)?;
        let request = ApiRequest::new(Method::Put, record_path(R::KIND, id)).with_body(body);
        let response = self.transport.send(request).await?;
        decode_mutation(response)
    }

    #[tracing::instrument(skip(self), fields(resource = %R::KIND))]
    pub async fn delete<R: Resource>(&self, id: RecordId) -> Result<MutationAck, ApiError> {
        let request = ApiRequest::new(Method::Delete, record_path(R::KIND, id));
        let response = self.transport.send(request).await?;
        decode_mutation(response)
    }

    /// Reads a known-good collection and only checks the status.
    #[tracing::instrument(skip(self))]
    pub async fn ping(&self) -> Result<(), ApiError> {
        let request = ApiRequest::new(Method::Get, collection_path(ResourceKind::Agencies));
        let response = self.transport.send(request).await?;
        if response.is_success() {
            Ok(())
        } else {
            Err(status_error(&response))
        }
    }
}

pub fn collection_path(kind: ResourceKind) -> String {
    format!("/{}", kind.path())
}

pub fn record_path(kind: ResourceKind, id: RecordId) -> String {
    format!("/{}/{}", kind.path(), id)
}

fn status_error(response: &RawResponse) -> ApiError {
    let message = serde_json::from_str::<Envelope>(&response.body)
        .ok()
        .and_then(|envelope| envelope.error);
    ApiError::Status {
        status: response.status,
        message,
    }
}

fn decode_record<D: serde::de::DeserializeOwned>(response: RawResponse) -> Result<D, ApiError> {
    if !response.is_success() {
        let err = status_error(&response);
        warn!("request failed: {}", err);
        return Err(err);
    }
    serde_json::from_str(&response.body).map_err(ApiError::from)
}

/// A mutation only succeeds on a 2xx status *and* `success: true`.
fn decode_mutation(response: RawResponse) -> Result<MutationAck, ApiError> {
    if !response.is_success() {
        let err = status_error(&response);
        warn!("mutation failed: {}", err);
        return Err(err);
    }

    let envelope: Envelope = serde_json::from_str(&response.body)?;
    if envelope.success != Some(true) {
        warn!("mutation rejected: {:?}", envelope.error);
        return Err(ApiError::Rejected {
            message: envelope.error,
        });
    }

    Ok(MutationAck {
        id: envelope.id,
        message: envelope.message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{Agency, AgencyDraft, Property};
    use std::cell::RefCell;

    /// Answers every request with the same canned response.
    struct Canned {
        response: Result<RawResponse, ApiError>,
        seen: RefCell<Vec<ApiRequest>>,
    }

    impl Canned {
        fn new(status: u16, body: &str) -> Self {
            Self {
                response: Ok(RawResponse::new(status, body)),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn failing(err: ApiError) -> Self {
            Self {
                response: Err(err),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl Transport for Canned {
        async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
            self.seen.borrow_mut().push(request);
            self.response.clone()
        }
    }

    fn draft() -> AgencyDraft {
        AgencyDraft {
            name: "Acme Realty".into(),
            address: "1 Main St".into(),
        }
    }

    #[tokio::test]
    async fn test_list_decodes_records() {
        let client = ApiClient::new(Canned::new(200, r#"[{"id":1,"name":"Skyline","address":"2 Bay Rd"}]"#));

        let agencies = client.list::<Agency>().await.unwrap();

        assert_eq!(agencies.len(), 1);
        assert_eq!(agencies[0].name, "Skyline");
        assert_eq!(client.transport().seen.borrow()[0], ApiRequest::new(Method::Get, "/agencies"));
    }

    #[tokio::test]
    async fn test_get_not_found_carries_server_text() {
        let client = ApiClient::new(Canned::new(404, r#"{"success":false,"error":"Property not found."}"#));

        let err = client.get::<Property>(42).await.unwrap_err();

        assert_eq!(err.server_message(), Some("Property not found."));
        assert_eq!(client.transport().seen.borrow()[0].path, "/properties/42");
    }

    #[tokio::test]
    async fn test_status_error_with_plain_text_body() {
        let client = ApiClient::new(Canned::new(500, "Internal Server Error"));

        let err = client.list::<Agency>().await.unwrap_err();

        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                message: None
            }
        );
    }

    #[tokio::test]
    async fn test_create_posts_draft_and_reads_ack() {
        let client = ApiClient::new(Canned::new(201, r#"{"success":true,"id":7,"message":"Agency created"}"#));

        let ack = client.create::<Agency>(&draft()).await.unwrap();

        assert_eq!(ack.id, Some(7));
        let seen = client.transport().seen.borrow();
        assert_eq!(seen[0].method, Method::Post);
        assert_eq!(seen[0].path, "/agencies");
        assert_eq!(
            seen[0].body,
            Some(serde_json::json!({"name": "Acme Realty", "address": "1 Main St"}))
        );
    }

    #[tokio::test]
    async fn test_ok_status_without_success_flag_is_rejected() {
        let client = ApiClient::new(Canned::new(200, r#"{"message":"done"}"#));

        let err = client.update::<Agency>(3, &draft()).await.unwrap_err();

        assert_eq!(err, ApiError::Rejected { message: None });
        assert_eq!(client.transport().seen.borrow()[0].path, "/agencies/3");
    }

    #[tokio::test]
    async fn test_success_false_surfaces_error() {
        let client = ApiClient::new(Canned::new(200, r#"{"success":false,"error":"Name is required."}"#));

        let err = client.delete::<Agency>(3).await.unwrap_err();

        assert_eq!(err.server_message(), Some("Name is required."));
    }

    #[tokio::test]
    async fn test_mutation_with_undecodable_body() {
        let client = ApiClient::new(Canned::new(200, "<html>"));

        let err = client.delete::<Agency>(1).await.unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_ping_maps_status_and_transport() {
        let ok = ApiClient::new(Canned::new(200, "[]"));
        assert!(ok.ping().await.is_ok());

        let down = ApiClient::new(Canned::new(503, ""));
        assert!(matches!(
            down.ping().await,
            Err(ApiError::Status { status: 503, .. })
        ));

        let unreachable = ApiClient::new(Canned::failing(ApiError::Transport("refused".into())));
        assert!(unreachable.ping().await.unwrap_err().is_transport());
    }
}
