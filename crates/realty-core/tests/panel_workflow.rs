//! End-to-end panel workflows against an in-memory server.
//!
//! These tests drive the async operations in `realty_core::workflow` the way
//! the app does and check both the panel state and the exact requests sent.

mod support;

use realty_core::api::{Method, RawResponse};
use realty_core::error::ApiError;
use realty_core::notify::{Notice, Severity};
use realty_core::panel::{FormMode, ListState};
use realty_core::resource::{Agency, Property, Realtor, Resource, ResourceKind};
use realty_core::workflow;
use serde_json::json;
use std::time::Duration;
use support::{error, FakeServer, TestHost};

fn acme() -> Agency {
    Agency {
        id: 3,
        name: "Acme Realty".into(),
        address: "1 Main St".into(),
    }
}

fn fill<R: Resource>(host: &TestHost<R>, values: &[(&str, &str)]) {
    let mut panel = host.panel.borrow_mut();
    for (key, value) in values {
        panel.set_field(key, value.to_string());
    }
}

// ============================================================================
// Listing
// ============================================================================

async fn assert_empty_state<R: Resource>() {
    let client = FakeServer::client();
    let mut host = TestHost::<R>::new();

    workflow::load(&client, &mut host).await;

    assert_eq!(host.snapshot().list(), &ListState::Empty);
    assert!(host.notices.borrow().is_empty());
}

#[tokio::test]
async fn test_empty_collection_shows_empty_state() {
    assert_empty_state::<Agency>().await;
    assert_empty_state::<Realtor>().await;
    assert_empty_state::<Property>().await;
}

#[tokio::test]
async fn test_list_failure_sets_error_and_notifies() {
    let client = FakeServer::client();
    client.transport().respond_with(
        Method::Get,
        "/realtors",
        Ok(RawResponse::new(500, "Internal Server Error")),
    );
    let mut host = TestHost::<Realtor>::new();

    workflow::load(&client, &mut host).await;

    assert!(matches!(host.snapshot().list(), ListState::Failed(_)));
    assert_eq!(host.last_notice(), Some(Notice::error("Failed to load realtors")));
}

#[tokio::test(start_paused = true)]
async fn test_older_load_cannot_overwrite_newer_one() {
    let client = FakeServer::client();
    let server = client.transport();
    server.seed(&[acme()]);
    server.queue_latency(&[Duration::from_millis(300), Duration::from_millis(10)]);

    let host = TestHost::<Agency>::new();
    let (mut first, mut second) = (host.clone(), host.clone());

    tokio::join!(
        workflow::load(&client, &mut first),
        workflow::load(&client, &mut second),
        async {
            // After the second load landed, before the first one answers
            tokio::time::sleep(Duration::from_millis(100)).await;
            server.respond_with(
                Method::Get,
                "/agencies",
                Err(ApiError::Transport("connection reset".into())),
            );
        },
    );

    assert_eq!(host.snapshot().list(), &ListState::Loaded(vec![acme()]));
    assert!(host.notices.borrow().is_empty());
}

// ============================================================================
// Create and update
// ============================================================================

#[tokio::test]
async fn test_create_agency_posts_once_then_reloads() {
    let client = FakeServer::client();
    client.transport().set_next_id(7);
    let mut host = TestHost::<Agency>::new();

    workflow::open_create(&mut host);
    fill(&host, &[("name", "Acme Realty"), ("address", "1 Main St")]);
    workflow::save(&client, &mut host).await;

    let posts = client.transport().requests_with(Method::Post);
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].path, "/agencies");
    assert_eq!(
        posts[0].body,
        Some(json!({"name": "Acme Realty", "address": "1 Main St"}))
    );

    let panel = host.snapshot();
    assert!(!panel.is_form_open());
    assert_eq!(
        panel.list(),
        &ListState::Loaded(vec![Agency {
            id: 7,
            name: "Acme Realty".into(),
            address: "1 Main St".into(),
        }])
    );
    assert_eq!(
        host.last_notice(),
        Some(Notice::success("Agency created successfully"))
    );
}

#[tokio::test]
async fn test_update_mode_puts_to_record_id() {
    let client = FakeServer::client();
    client.transport().seed(&[acme()]);
    let mut host = TestHost::<Agency>::new();

    workflow::open_edit(&client, &mut host, 3).await;
    assert_eq!(host.snapshot().form().unwrap().mode, FormMode::Update(3));
    assert_eq!(host.snapshot().form().unwrap().fields.name, "Acme Realty");

    client.transport().clear_log();
    fill(&host, &[("name", "Acme Realty Group")]);
    workflow::save(&client, &mut host).await;

    let server = client.transport();
    assert!(server.requests_with(Method::Post).is_empty());
    let puts = server.requests_with(Method::Put);
    assert_eq!(puts.len(), 1);
    assert_eq!(puts[0].path, "/agencies/3");
    assert_eq!(
        server.record(ResourceKind::Agencies, 3),
        Some(json!({"id": 3, "name": "Acme Realty Group", "address": "1 Main St"}))
    );
    assert_eq!(
        host.last_notice(),
        Some(Notice::success("Agency updated successfully"))
    );
}

#[tokio::test(start_paused = true)]
async fn test_form_opened_during_save_survives_its_success() {
    let client = FakeServer::client();
    let server = client.transport();
    server.seed(&[acme()]);
    let host = TestHost::<Agency>::new();
    let (mut saver, mut user) = (host.clone(), host.clone());

    workflow::open_edit(&client, &mut saver, 3).await;
    fill(&host, &[("name", "Acme Realty Group")]);
    server.queue_latency(&[Duration::from_millis(200)]);

    tokio::join!(workflow::save(&client, &mut saver), async {
        // Add New clicked while the PUT is still pending
        tokio::time::sleep(Duration::from_millis(50)).await;
        workflow::open_create(&mut user);
        fill(&host, &[("name", "Harbor Homes")]);
    });

    let panel = host.snapshot();
    let form = panel.form().unwrap();
    assert_eq!(form.mode, FormMode::Create);
    assert_eq!(form.fields.name, "Harbor Homes");
    assert_eq!(server.requests_with(Method::Put).len(), 1);
    assert_eq!(
        host.last_notice(),
        Some(Notice::success("Agency updated successfully"))
    );
}

#[tokio::test]
async fn test_missing_property_does_not_open_form() {
    let client = FakeServer::client();
    let mut host = TestHost::<Property>::new();

    workflow::open_edit(&client, &mut host, 42).await;

    assert!(!host.snapshot().is_form_open());
    assert_eq!(host.last_notice(), Some(Notice::error("Property not found.")));
    assert_eq!(client.transport().requests()[0].path, "/properties/42");
}

#[tokio::test]
async fn test_failed_save_keeps_form_and_skips_reload() {
    let client = FakeServer::client();
    client
        .transport()
        .respond_with(Method::Post, "/realtors", Ok(error(500, "Database error")));
    let mut host = TestHost::<Realtor>::new();

    workflow::open_create(&mut host);
    fill(&host, &[("name", "Jane Doe")]);
    workflow::save(&client, &mut host).await;

    let panel = host.snapshot();
    let form = panel.form().unwrap();
    assert_eq!(form.mode, FormMode::Create);
    assert_eq!(form.fields.name, "Jane Doe");
    assert_eq!(host.last_notice(), Some(Notice::error("Database error")));
    assert!(client.transport().requests_with(Method::Get).is_empty());
}

#[tokio::test]
async fn test_rejection_without_message_uses_fallback() {
    let client = FakeServer::client();
    client.transport().respond_with(
        Method::Post,
        "/agencies",
        Ok(RawResponse::new(200, r#"{"success":false}"#)),
    );
    let mut host = TestHost::<Agency>::new();

    workflow::open_create(&mut host);
    workflow::save(&client, &mut host).await;

    assert!(host.snapshot().is_form_open());
    assert_eq!(host.last_notice(), Some(Notice::error("Operation failed")));
}

#[tokio::test]
async fn test_unreachable_server_on_save() {
    let client = FakeServer::client();
    client.transport().respond_with(
        Method::Post,
        "/agencies",
        Err(ApiError::Transport("connection refused".into())),
    );
    let mut host = TestHost::<Agency>::new();

    workflow::open_create(&mut host);
    workflow::save(&client, &mut host).await;

    assert_eq!(
        host.last_notice(),
        Some(Notice::error(
            "Error saving agency: network error: connection refused"
        ))
    );
}

#[tokio::test]
async fn test_invalid_price_sends_nothing() {
    let client = FakeServer::client();
    let mut host = TestHost::<Property>::new();

    workflow::open_create(&mut host);
    fill(&host, &[("city", "Dubai"), ("price", "twelve")]);
    workflow::save(&client, &mut host).await;

    assert!(client.transport().requests().is_empty());
    assert!(host.snapshot().is_form_open());
    assert_eq!(host.last_notice(), Some(Notice::error("Price must be a number")));
}

#[tokio::test]
async fn test_non_positive_price_is_left_to_server() {
    let client = FakeServer::client();
    let mut host = TestHost::<Property>::new();

    workflow::open_create(&mut host);
    fill(&host, &[("city", "Dubai"), ("price", "-5")]);
    workflow::save(&client, &mut host).await;

    let posts = client.transport().requests_with(Method::Post);
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].body, Some(json!({"city": "Dubai", "price": -5.0})));
}

#[tokio::test]
async fn test_cancel_discards_form_without_requests() {
    let client = FakeServer::client();
    client.transport().seed(&[acme()]);
    let mut host = TestHost::<Agency>::new();

    workflow::open_edit(&client, &mut host, 3).await;
    client.transport().clear_log();
    workflow::cancel(&mut host);

    assert!(!host.snapshot().is_form_open());
    assert!(client.transport().requests().is_empty());
}

// ============================================================================
// Delete
// ============================================================================

async fn assert_create_then_delete_restores_size<R: Resource>(values: &[(&str, &str)]) {
    let client = FakeServer::client();
    let server = client.transport();
    server.set_next_id(100);
    let mut host = TestHost::<R>::new();

    workflow::load(&client, &mut host).await;
    let before = server.count(R::KIND);

    workflow::open_create(&mut host);
    fill(&host, values);
    workflow::save(&client, &mut host).await;
    assert_eq!(server.count(R::KIND), before + 1);

    workflow::delete(&client, &mut host, 100).await;

    assert_eq!(server.count(R::KIND), before);
    assert_eq!(host.snapshot().list(), &ListState::Empty);
    assert_eq!(
        host.last_notice(),
        Some(Notice::success(format!(
            "{} deleted successfully",
            R::KIND.noun()
        )))
    );
}

#[tokio::test]
async fn test_create_then_delete_restores_collection_size() {
    assert_create_then_delete_restores_size::<Agency>(&[("name", "Acme"), ("address", "1 Main St")])
        .await;
    assert_create_then_delete_restores_size::<Realtor>(&[("name", "Jane Doe")]).await;
    assert_create_then_delete_restores_size::<Property>(&[("city", "Austin"), ("price", "350000")])
        .await;
}

#[tokio::test]
async fn test_declined_delete_sends_nothing() {
    let client = FakeServer::client();
    client.transport().seed(&[acme()]);
    let mut host = TestHost::<Agency>::declining();

    workflow::delete(&client, &mut host, 3).await;

    assert!(client.transport().requests().is_empty());
    assert_eq!(client.transport().count(ResourceKind::Agencies), 1);
    assert!(host.notices.borrow().is_empty());
    assert_eq!(
        host.prompts.borrow().as_slice(),
        ["Are you sure you want to delete this agency?".to_string()]
    );
}

#[tokio::test]
async fn test_failed_delete_reports_and_skips_reload() {
    let client = FakeServer::client();
    let mut host = TestHost::<Realtor>::new();

    workflow::delete(&client, &mut host, 9).await;

    let notice = host.last_notice().unwrap();
    assert_eq!(notice.severity, Severity::Error);
    assert_eq!(notice.message, "Realtor not found.");
    assert!(client.transport().requests_with(Method::Get).is_empty());
}

#[tokio::test]
async fn test_delete_keeps_open_form() {
    let client = FakeServer::client();
    client.transport().seed(&[acme()]);
    let mut host = TestHost::<Agency>::new();

    workflow::open_create(&mut host);
    fill(&host, &[("name", "Draft in progress")]);
    workflow::delete(&client, &mut host, 3).await;

    assert_eq!(host.snapshot().form().unwrap().fields.name, "Draft in progress");
}
