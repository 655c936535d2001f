//! Shared fixtures for integration tests.
//!
//! [`FakeServer`] is an in-memory stand-in for the REST backend that answers
//! the way the real server does (bare arrays for lists, `{success, error}`
//! envelopes for mutations and errors) and records every request it sees.
//! [`TestHost`] is a cloneable [`PanelHost`] whose state lives behind `Rc`, so
//! several operations can run against one panel concurrently.

#![allow(dead_code)]

use async_trait::async_trait;
use realty_core::api::{ApiClient, ApiRequest, Method, RawResponse, Transport};
use realty_core::error::ApiError;
use realty_core::notify::Notice;
use realty_core::panel::Panel;
use realty_core::resource::{RecordId, Resource, ResourceKind};
use realty_core::workflow::PanelHost;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;
use std::time::Duration;

// ============================================================================
// Fake server
// ============================================================================

#[derive(Default)]
struct State {
    collections: HashMap<ResourceKind, BTreeMap<RecordId, Value>>,
    next_id: RecordId,
    log: Vec<ApiRequest>,
    overrides: HashMap<(Method, String), Result<RawResponse, ApiError>>,
    latencies: VecDeque<Duration>,
}

#[derive(Default)]
pub struct FakeServer {
    state: RefCell<State>,
}

impl FakeServer {
    pub fn new() -> Self {
        let server = Self::default();
        server.state.borrow_mut().next_id = 1;
        server
    }

    /// Client over a fresh, empty server.
    pub fn client() -> ApiClient<FakeServer> {
        ApiClient::new(Self::new())
    }

    /// Inserts records as if they had been created earlier.
    pub fn seed<R: Resource>(&self, records: &[R]) {
        let mut state = self.state.borrow_mut();
        for record in records {
            let value = serde_json::to_value(record).expect("record serializes");
            state
                .collections
                .entry(R::KIND)
                .or_default()
                .insert(record.id(), value);
            state.next_id = state.next_id.max(record.id() + 1);
        }
    }

    /// Id the next create will receive.
    pub fn set_next_id(&self, id: RecordId) {
        self.state.borrow_mut().next_id = id;
    }

    /// Answers every `method path` request with `response` from now on.
    pub fn respond_with(&self, method: Method, path: &str, response: Result<RawResponse, ApiError>) {
        self.state
            .borrow_mut()
            .overrides
            .insert((method, path.to_string()), response);
    }

    /// Delays the next requests, one entry per request, in order.
    pub fn queue_latency(&self, delays: &[Duration]) {
        self.state.borrow_mut().latencies.extend(delays.iter().copied());
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.borrow().log.clone()
    }

    pub fn requests_with(&self, method: Method) -> Vec<ApiRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.method == method)
            .collect()
    }

    pub fn clear_log(&self) {
        self.state.borrow_mut().log.clear();
    }

    pub fn count(&self, kind: ResourceKind) -> usize {
        self.state
            .borrow()
            .collections
            .get(&kind)
            .map_or(0, BTreeMap::len)
    }

    pub fn record(&self, kind: ResourceKind, id: RecordId) -> Option<Value> {
        self.state
            .borrow()
            .collections
            .get(&kind)
            .and_then(|records| records.get(&id).cloned())
    }

    fn handle(&self, request: &ApiRequest) -> RawResponse {
        let mut segments = request.path.trim_start_matches('/').splitn(2, '/');
        let kind = match segments.next().and_then(|s| s.parse::<ResourceKind>().ok()) {
            Some(kind) => kind,
            None => return error(404, "Not found."),
        };
        let id = match segments.next() {
            None => None,
            Some(raw) => match raw.parse::<RecordId>() {
                Ok(id) => Some(id),
                Err(_) => return error(400, &format!("Invalid {} ID.", kind.singular())),
            },
        };

        let mut state = self.state.borrow_mut();
        let not_found = error(404, &format!("{} not found.", kind.noun()));

        match (request.method, id) {
            (Method::Get, None) => {
                let records: Vec<Value> = state
                    .collections
                    .get(&kind)
                    .map(|records| records.values().cloned().collect())
                    .unwrap_or_default();
                RawResponse::new(200, Value::Array(records).to_string())
            }
            (Method::Get, Some(id)) => match state.collections.get(&kind).and_then(|r| r.get(&id)) {
                Some(record) => RawResponse::new(200, record.to_string()),
                None => not_found,
            },
            (Method::Post, None) => {
                let id = state.next_id;
                state.next_id += 1;
                let record = with_id(request.body.clone(), id);
                state.collections.entry(kind).or_default().insert(id, record);
                RawResponse::new(
                    201,
                    json!({
                        "success": true,
                        "id": id,
                        "message": format!("{} created successfully", kind.noun()),
                    })
                    .to_string(),
                )
            }
            (Method::Put, Some(id)) => {
                let records = state.collections.entry(kind).or_default();
                if !records.contains_key(&id) {
                    return not_found;
                }
                records.insert(id, with_id(request.body.clone(), id));
                success(&format!("{} updated successfully", kind.noun()))
            }
            (Method::Delete, Some(id)) => {
                let removed = state
                    .collections
                    .get_mut(&kind)
                    .and_then(|records| records.remove(&id));
                match removed {
                    Some(_) => success(&format!("{} deleted successfully", kind.noun())),
                    None => not_found,
                }
            }
            _ => error(405, "Method not allowed."),
        }
    }
}

#[async_trait(?Send)]
impl Transport for FakeServer {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let latency = {
            let mut state = self.state.borrow_mut();
            state.log.push(request.clone());
            state.latencies.pop_front()
        };

        if let Some(delay) = latency {
            tokio::time::sleep(delay).await;
        }

        // Overrides are looked up when the response is produced, not when
        // the request arrives.
        let forced = self
            .state
            .borrow()
            .overrides
            .get(&(request.method, request.path.clone()))
            .cloned();
        match forced {
            Some(response) => response,
            None => Ok(self.handle(&request)),
        }
    }
}

fn with_id(body: Option<Value>, id: RecordId) -> Value {
    let mut record = body.unwrap_or_else(|| json!({}));
    if let Value::Object(fields) = &mut record {
        fields.insert("id".to_string(), json!(id));
    }
    record
}

fn success(message: &str) -> RawResponse {
    RawResponse::new(200, json!({"success": true, "message": message}).to_string())
}

pub fn error(status: u16, message: &str) -> RawResponse {
    RawResponse::new(status, json!({"success": false, "error": message}).to_string())
}

// ============================================================================
// Panel host
// ============================================================================

pub struct TestHost<R: Resource> {
    pub panel: Rc<RefCell<Panel<R>>>,
    pub notices: Rc<RefCell<Vec<Notice>>>,
    pub prompts: Rc<RefCell<Vec<String>>>,
    pub answer: bool,
}

impl<R: Resource> Clone for TestHost<R> {
    fn clone(&self) -> Self {
        Self {
            panel: Rc::clone(&self.panel),
            notices: Rc::clone(&self.notices),
            prompts: Rc::clone(&self.prompts),
            answer: self.answer,
        }
    }
}

impl<R: Resource> TestHost<R> {
    /// Host whose confirmations are all accepted.
    pub fn new() -> Self {
        Self {
            panel: Rc::new(RefCell::new(Panel::new())),
            notices: Rc::new(RefCell::new(Vec::new())),
            prompts: Rc::new(RefCell::new(Vec::new())),
            answer: true,
        }
    }

    pub fn declining() -> Self {
        Self {
            answer: false,
            ..Self::new()
        }
    }

    pub fn snapshot(&self) -> Panel<R> {
        self.panel.borrow().clone()
    }

    pub fn last_notice(&self) -> Option<Notice> {
        self.notices.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl<R: Resource> PanelHost for TestHost<R> {
    type Item = R;

    fn with_panel<T>(&mut self, f: impl FnOnce(&mut Panel<R>) -> T) -> T {
        f(&mut self.panel.borrow_mut())
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }

    async fn confirm(&mut self, prompt: String) -> bool {
        self.prompts.borrow_mut().push(prompt);
        self.answer
    }
}
