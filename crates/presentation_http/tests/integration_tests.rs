//! Integration tests for HTTP handlers
#![allow(clippy::expect_used)]

use std::sync::Arc;

use application::{
    CalendarFeedService, FeedSettings,
    ports::{
        CredentialUnsealer, FavoriteDescriptor, PortalClient, PortalError, RawScheduleEntry,
        SessionToken, UnsealError,
    },
};
use async_trait::async_trait;
use axum_test::TestServer;
use domain::{CivilTimezone, DateRange, PortalCredentials};
use presentation_http::{routes::create_router, state::AppState};

/// Unsealer that accepts exactly one magic blob
struct StubUnsealer;

impl CredentialUnsealer for StubUnsealer {
    fn unseal(&self, ciphertext_b64: &str) -> Result<PortalCredentials, UnsealError> {
        if ciphertext_b64 == "sealed-ok" {
            Ok(PortalCredentials::new("alice", "hunter2"))
        } else {
            Err(UnsealError::Decrypt)
        }
    }
}

/// Portal stub with scriptable auth and fetch outcomes
struct StubPortal {
    reject_auth: bool,
    fetch_result: Result<Vec<RawScheduleEntry>, u16>,
}

#[async_trait]
impl PortalClient for StubPortal {
    async fn authenticate(
        &self,
        _credentials: &PortalCredentials,
    ) -> Result<SessionToken, PortalError> {
        if self.reject_auth {
            return Err(PortalError::Auth);
        }
        Ok(SessionToken::new("token-1"))
    }

    async fn fetch_schedule(
        &self,
        _token: &SessionToken,
        _window: &DateRange,
    ) -> Result<Vec<RawScheduleEntry>, PortalError> {
        match &self.fetch_result {
            Ok(entries) => Ok(entries.clone()),
            Err(status) => Err(PortalError::Upstream { status: *status }),
        }
    }
}

fn teaching_slot() -> RawScheduleEntry {
    RawScheduleEntry {
        id: Some(42),
        starts_at: "2025-02-28T13:30:00.000".to_string(),
        ends_at: "2025-02-28T17:45:00.000".to_string(),
        favorite: Some(FavoriteDescriptor {
            location: "B204".to_string(),
            summary_suffix: "Droit".to_string(),
            description: "LANNEL".to_string(),
            summary_prefix: "Cours ".to_string(),
        }),
        is_break: false,
        is_empty: false,
    }
}

fn test_server(portal: StubPortal) -> TestServer {
    let settings = FeedSettings {
        calendar_name: "Campus".to_string(),
        timezone: CivilTimezone::new("Europe/Paris").expect("valid zone"),
        window_start_ms: "1740744000000".to_string(),
        window_end_ms: "1741348800000".to_string(),
    };
    let feed_service =
        CalendarFeedService::new(Arc::new(StubUnsealer), Arc::new(portal), settings);
    let state = AppState::new(Arc::new(feed_service), "campus-calendar.ics");
    TestServer::new(create_router(state)).expect("Failed to create test server")
}

fn happy_server() -> TestServer {
    test_server(StubPortal {
        reject_auth: false,
        fetch_result: Ok(vec![teaching_slot()]),
    })
}

#[tokio::test]
async fn health_returns_ok() {
    let server = happy_server();
    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn calendar_feed_returns_ics_document() {
    let server = happy_server();
    let response = server.get("/calendar.ics").add_query_param("creds", "sealed-ok").await;

    response.assert_status_ok();

    let content_type = response.header("content-type");
    assert!(
        content_type.to_str().expect("ascii header").starts_with("text/calendar"),
        "unexpected content type: {content_type:?}"
    );

    let disposition = response.header("content-disposition");
    assert!(
        disposition
            .to_str()
            .expect("ascii header")
            .contains("campus-calendar.ics")
    );

    let body = response.text();
    assert!(body.starts_with("BEGIN:VCALENDAR"));
    assert!(body.contains("UID:42"));
    assert!(body.contains("DTSTART:20250228T123000Z"));
    assert!(body.contains("SUMMARY:Cours Droit"));
}

#[tokio::test]
async fn undecryptable_blob_is_a_bad_request() {
    let server = happy_server();
    let response = server.get("/calendar.ics").add_query_param("creds", "garbage").await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "bad_request");
    // The response must not reveal which unsealing stage failed
    assert_eq!(body["error"], "Invalid credentials payload");
}

#[tokio::test]
async fn missing_creds_parameter_is_a_bad_request() {
    let server = happy_server();
    let response = server.get("/calendar.ics").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn rejected_login_is_unauthorized() {
    let server = test_server(StubPortal {
        reject_auth: true,
        fetch_result: Ok(vec![]),
    });
    let response = server.get("/calendar.ics").add_query_param("creds", "sealed-ok").await;

    response.assert_status_unauthorized();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "unauthorized");
}

#[tokio::test]
async fn upstream_failure_is_a_bad_gateway() {
    let server = test_server(StubPortal {
        reject_auth: false,
        fetch_result: Err(500),
    });
    let response = server.get("/calendar.ics").add_query_param("creds", "sealed-ok").await;

    response.assert_status(axum::http::StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "upstream_failure");
}

#[tokio::test]
async fn validate_answers_no_content_on_success() {
    let server = happy_server();
    let response = server.get("/validate").add_query_param("creds", "sealed-ok").await;

    response.assert_status(axum::http::StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn validate_propagates_auth_rejection() {
    let server = test_server(StubPortal {
        reject_auth: true,
        fetch_result: Ok(vec![]),
    });
    let response = server.get("/validate").add_query_param("creds", "sealed-ok").await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn validate_rejects_undecryptable_blob() {
    let server = happy_server();
    let response = server.get("/validate").add_query_param("creds", "garbage").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn empty_schedule_still_renders_a_calendar() {
    let server = test_server(StubPortal {
        reject_auth: false,
        fetch_result: Ok(vec![]),
    });
    let response = server.get("/calendar.ics").add_query_param("creds", "sealed-ok").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.starts_with("BEGIN:VCALENDAR"));
    assert!(body.trim_end().ends_with("END:VCALENDAR"));
    assert!(!body.contains("BEGIN:VEVENT"));
}
