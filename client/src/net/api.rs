//! REST API helpers for communicating with the console backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only called from the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every request goes through `ApiClient`, built per call from the current
//! session. Attaching the bearer token happens in exactly one place,
//! `ApiClient::authorization`.
//!
//! ERROR HANDLING
//! ==============
//! The login exchange reports `LoginError`, whose `Display` is the message
//! shown on the form. View data fetches report `ApiError`; list views
//! collapse failures to an empty list through `or_empty`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    AssignmentRequest, ErrorBody, Event, EventRole, Faculty, FacultyEvent, LoginRequest, LoginResponse, NewEvent,
    NewFaculty, RemoveAssignmentRequest, SignupRequest,
};
use crate::config::ApiConfig;
use crate::state::auth::AuthContext;
use crate::state::session::{Role, Session, User};

pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again later.";
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

pub const LOGIN_ENDPOINT: &str = "/login";
pub const SIGNUP_ENDPOINT: &str = "/signup";
pub const EVENTS_ENDPOINT: &str = "/events";
pub const CURRENT_EVENTS_ENDPOINT: &str = "/events/current";
pub const PAST_EVENTS_ENDPOINT: &str = "/events/history";
pub const FACULTY_ENDPOINT: &str = "/faculty";
pub const ROLES_ENDPOINT: &str = "/roles";
pub const EVENT_HISTORY_ENDPOINT: &str = "/admin/event-history";
pub const DELETE_ASSIGNMENT_ENDPOINT: &str = "/delete-role-assignment";

fn event_endpoint(event_id: &str) -> String {
    format!("/events/{event_id}")
}

fn event_assignments_endpoint(event_id: &str) -> String {
    format!("/events/{event_id}/assignments")
}

// =============================================================================
// ERRORS
// =============================================================================

/// Failure of the credential exchange.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// Transport succeeded but the payload lacked a usable token or role.
    #[error("Invalid login response: missing token or role")]
    InvalidResponse,
    /// Server refused the credentials; carries its message verbatim.
    #[error("{0}")]
    AuthRejected(String),
    #[error("Network error. Please try again later.")]
    NetworkError,
}

/// Failure of a view-layer REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Text suitable for an inline form message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            Self::Network(_) | Self::Unavailable => NETWORK_ERROR_MESSAGE.to_owned(),
            Self::Decode(_) => GENERIC_ERROR_MESSAGE.to_owned(),
        }
    }
}

/// Server-supplied `error` text, or the generic message when absent.
fn rejection_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_owned())
}

/// Decode a response body, treating any non-2xx status as a rejection.
fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status { status, message: rejection_message(body) });
    }
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Log a failed list fetch and fall back to an empty list.
pub fn or_empty<T>(result: Result<Vec<T>, ApiError>, what: &str) -> Vec<T> {
    result.unwrap_or_else(|e| {
        log::error!("failed to fetch {what}: {e}");
        Vec::new()
    })
}

// =============================================================================
// CLIENT
// =============================================================================

/// Request builder bound to a backend and, optionally, a session token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    config: ApiConfig,
    token: Option<String>,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: ApiConfig, session: Option<&Session>) -> Self {
        Self { config, token: session.map(|s| s.token.clone()) }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    /// `Authorization` header value, present only with a session.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {token}"))
    }

    #[cfg(feature = "hydrate")]
    fn authorize(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match self.authorization() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    #[cfg(feature = "hydrate")]
    async fn read(resp: gloo_net::http::Response) -> Result<(u16, String), ApiError> {
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok((status, body))
    }

    /// `GET` returning the raw status and body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network` when the request cannot complete.
    pub async fn get_raw(&self, path: &str) -> Result<(u16, String), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .authorize(gloo_net::http::Request::get(&self.url(path)))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            Self::read(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    async fn send_json<B: Serialize>(
        &self,
        builder: gloo_net::http::RequestBuilder,
        body: &B,
    ) -> Result<(u16, String), ApiError> {
        let resp = self
            .authorize(builder)
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read(resp).await
    }

    /// JSON `POST` returning the raw status and body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network` when the request cannot complete.
    pub async fn post_raw<B: Serialize>(&self, path: &str, body: &B) -> Result<(u16, String), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.send_json(gloo_net::http::Request::post(&self.url(path)), body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }

    /// `DELETE` with a JSON body, returning the raw status and body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network` when the request cannot complete.
    pub async fn delete_raw<B: Serialize>(&self, path: &str, body: &B) -> Result<(u16, String), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.send_json(gloo_net::http::Request::delete(&self.url(path)), body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }

    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure, non-2xx status, or a body
    /// that does not decode as `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let (status, body) = self.get_raw(path).await?;
        decode_body(status, &body)
    }

    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure, non-2xx status, or a body
    /// that does not decode as `T`.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let (status, text) = self.post_raw(path, body).await?;
        decode_body(status, &text)
    }

    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure, non-2xx status, or a body
    /// that does not decode as `T`.
    pub async fn delete_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let (status, text) = self.delete_raw(path, body).await?;
        decode_body(status, &text)
    }
}

/// Context-bound factory for `ApiClient`s.
///
/// Grab it in a component body; each `client()` call reads the session as it
/// is at that moment, so a token never outlives a logout.
#[derive(Clone, Debug)]
pub struct ApiHandle {
    config: ApiConfig,
    auth: AuthContext,
}

impl ApiHandle {
    #[must_use]
    pub fn new(config: ApiConfig, auth: AuthContext) -> Self {
        Self { config, auth }
    }

    #[must_use]
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.config.clone(), self.auth.session_untracked().as_ref())
    }
}

/// `ApiHandle` over the `ApiConfig` and `AuthContext` provided by `App`.
///
/// # Panics
///
/// Panics when called outside the `App` tree.
pub fn use_api() -> ApiHandle {
    ApiHandle::new(leptos::prelude::expect_context::<ApiConfig>(), crate::state::auth::use_auth())
}

// =============================================================================
// AUTH
// =============================================================================

/// Turn a `POST /login` response into a session for `email`.
fn parse_login_response(status: u16, body: &str, email: &str) -> Result<Session, LoginError> {
    if status != 200 {
        return Err(LoginError::AuthRejected(rejection_message(body)));
    }
    let resp: LoginResponse = serde_json::from_str(body).map_err(|_| LoginError::InvalidResponse)?;
    let token = resp.token.filter(|t| !t.is_empty()).ok_or(LoginError::InvalidResponse)?;
    let role = resp
        .role
        .as_deref()
        .ok_or(LoginError::InvalidResponse)?
        .parse::<Role>()
        .map_err(|_| LoginError::InvalidResponse)?;
    Ok(Session { token, user: User { email: email.to_owned(), role } })
}

/// Exchange credentials for a session via `POST /login`.
///
/// # Errors
///
/// See `LoginError`. The caller's session is never touched here.
pub async fn login(config: &ApiConfig, email: &str, password: &str) -> Result<Session, LoginError> {
    let client = ApiClient::new(config.clone(), None);
    match client.post_raw(LOGIN_ENDPOINT, &LoginRequest { email, password }).await {
        Ok((status, body)) => parse_login_response(status, &body, email),
        Err(e) => {
            log::warn!("login request failed: {e}");
            Err(LoginError::NetworkError)
        }
    }
}

/// Register an account via `POST /signup`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure or a non-2xx status.
pub async fn signup(config: &ApiConfig, request: &SignupRequest) -> Result<(), ApiError> {
    let client = ApiClient::new(config.clone(), None);
    client.post_json::<_, serde_json::Value>(SIGNUP_ENDPOINT, request).await.map(|_| ())
}

// =============================================================================
// EVENTS / FACULTY / ROLES
// =============================================================================

pub async fn fetch_events(client: &ApiClient) -> Result<Vec<Event>, ApiError> {
    client.get_json(EVENTS_ENDPOINT).await
}

pub async fn fetch_event(client: &ApiClient, event_id: &str) -> Result<Event, ApiError> {
    client.get_json(&event_endpoint(event_id)).await
}

pub async fn create_event(client: &ApiClient, event: &NewEvent) -> Result<(), ApiError> {
    client.post_json::<_, serde_json::Value>(EVENTS_ENDPOINT, event).await.map(|_| ())
}

pub async fn fetch_event_history(client: &ApiClient) -> Result<Vec<Event>, ApiError> {
    client.get_json(EVENT_HISTORY_ENDPOINT).await
}

pub async fn fetch_faculty(client: &ApiClient) -> Result<Vec<Faculty>, ApiError> {
    client.get_json(FACULTY_ENDPOINT).await
}

pub async fn create_faculty(client: &ApiClient, faculty: &NewFaculty) -> Result<(), ApiError> {
    client.post_json::<_, serde_json::Value>(FACULTY_ENDPOINT, faculty).await.map(|_| ())
}

pub async fn fetch_roles(client: &ApiClient) -> Result<Vec<EventRole>, ApiError> {
    client.get_json(ROLES_ENDPOINT).await
}

pub async fn assign_role(client: &ApiClient, event_id: &str, request: &AssignmentRequest) -> Result<(), ApiError> {
    client
        .post_json::<_, serde_json::Value>(&event_assignments_endpoint(event_id), request)
        .await
        .map(|_| ())
}

pub async fn remove_assignment(client: &ApiClient, request: &RemoveAssignmentRequest) -> Result<(), ApiError> {
    client
        .delete_json::<_, serde_json::Value>(DELETE_ASSIGNMENT_ENDPOINT, request)
        .await
        .map(|_| ())
}

/// Current and past events for the faculty dashboard, fetched together.
///
/// # Errors
///
/// Fails if either request fails.
pub async fn fetch_faculty_events(client: &ApiClient) -> Result<(Vec<FacultyEvent>, Vec<FacultyEvent>), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let (current, past) = futures::join!(
            client.get_json::<Vec<FacultyEvent>>(CURRENT_EVENTS_ENDPOINT),
            client.get_json::<Vec<FacultyEvent>>(PAST_EVENTS_ENDPOINT),
        );
        Ok((current?, past?))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = client;
        Err(ApiError::Unavailable)
    }
}
