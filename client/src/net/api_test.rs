use super::*;
use crate::state::session::{Role, User};

fn session(token: &str) -> Session {
    Session { token: token.to_owned(), user: User { email: "a@x.edu".to_owned(), role: Role::Admin } }
}

// =============================================================
// Login response handling
// =============================================================

#[test]
fn admin_login_builds_admin_session() {
    let session = parse_login_response(200, r#"{"token":"t1","role":"admin"}"#, "a@x.edu").unwrap();
    assert_eq!(
        session,
        Session { token: "t1".to_owned(), user: User { email: "a@x.edu".to_owned(), role: Role::Admin } }
    );
}

#[test]
fn faculty_login_builds_faculty_session() {
    let session = parse_login_response(200, r#"{"token":"t1","role":"faculty"}"#, "f@x.edu").unwrap();
    assert_eq!(session.role(), Role::Faculty);
    assert_eq!(session.user.email, "f@x.edu");
}

#[test]
fn missing_role_is_invalid_response() {
    assert_eq!(parse_login_response(200, r#"{"token":"t1"}"#, "a@x.edu"), Err(LoginError::InvalidResponse));
}

#[test]
fn missing_or_empty_token_is_invalid_response() {
    assert_eq!(parse_login_response(200, r#"{"role":"admin"}"#, "a@x.edu"), Err(LoginError::InvalidResponse));
    assert_eq!(
        parse_login_response(200, r#"{"token":"","role":"admin"}"#, "a@x.edu"),
        Err(LoginError::InvalidResponse)
    );
}

#[test]
fn unknown_role_is_invalid_response() {
    assert_eq!(
        parse_login_response(200, r#"{"token":"t1","role":"superuser"}"#, "a@x.edu"),
        Err(LoginError::InvalidResponse)
    );
}

#[test]
fn non_json_success_body_is_invalid_response() {
    assert_eq!(parse_login_response(200, "<html>", "a@x.edu"), Err(LoginError::InvalidResponse));
}

#[test]
fn rejection_uses_server_error_text_verbatim() {
    let err = parse_login_response(401, r#"{"error":"Invalid email or password"}"#, "a@x.edu").unwrap_err();
    assert_eq!(err, LoginError::AuthRejected("Invalid email or password".to_owned()));
    assert_eq!(err.to_string(), "Invalid email or password");
}

#[test]
fn rejection_without_error_text_uses_generic_message() {
    let err = parse_login_response(500, "", "a@x.edu").unwrap_err();
    assert_eq!(err.to_string(), GENERIC_ERROR_MESSAGE);
}

#[test]
fn network_error_message_is_distinct() {
    assert_eq!(LoginError::NetworkError.to_string(), NETWORK_ERROR_MESSAGE);
    assert_ne!(LoginError::NetworkError.to_string(), GENERIC_ERROR_MESSAGE);
}

// =============================================================
// ApiClient request building
// =============================================================

#[test]
fn client_with_session_attaches_bearer_token() {
    let client = ApiClient::new(ApiConfig::default(), Some(&session("abc")));
    assert_eq!(client.authorization().as_deref(), Some("Bearer abc"));
}

#[test]
fn client_without_session_sends_no_authorization() {
    let client = ApiClient::new(ApiConfig::default(), None);
    assert_eq!(client.authorization(), None);
}

#[test]
fn client_url_uses_configured_base() {
    let client = ApiClient::new(ApiConfig::new("https://api.example.test/"), None);
    assert_eq!(client.url(EVENTS_ENDPOINT), "https://api.example.test/events");
    assert_eq!(client.url(&event_assignments_endpoint("e1")), "https://api.example.test/events/e1/assignments");
}

#[test]
fn endpoint_paths_format_ids() {
    assert_eq!(event_endpoint("e7"), "/events/e7");
    assert_eq!(event_assignments_endpoint("e7"), "/events/e7/assignments");
    assert_eq!(DELETE_ASSIGNMENT_ENDPOINT, "/delete-role-assignment");
}

// =============================================================
// Response decoding
// =============================================================

#[test]
fn decode_body_parses_success_json() {
    let ids: Vec<u32> = decode_body(200, "[1,2]").unwrap();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn decode_body_treats_empty_success_as_null() {
    let value: serde_json::Value = decode_body(201, "").unwrap();
    assert!(value.is_null());
}

#[test]
fn decode_body_reports_status_with_server_message() {
    let err = decode_body::<serde_json::Value>(400, r#"{"error":"Email already in use"}"#).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 400, message: "Email already in use".to_owned() });
    assert_eq!(err.user_message(), "Email already in use");
}

#[test]
fn decode_body_reports_malformed_success_body() {
    let err = decode_body::<Vec<u32>>(200, "{").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
}

#[test]
fn or_empty_degrades_failures_to_empty_list() {
    let failed: Result<Vec<u32>, ApiError> = Err(ApiError::Network("offline".to_owned()));
    assert!(or_empty(failed, "events").is_empty());
    assert_eq!(or_empty(Ok(vec![1, 2]), "events"), vec![1, 2]);
}

#[test]
fn network_failures_map_to_network_message() {
    assert_eq!(ApiError::Network("x".to_owned()).user_message(), NETWORK_ERROR_MESSAGE);
    assert_eq!(ApiError::Unavailable.user_message(), NETWORK_ERROR_MESSAGE);
}
