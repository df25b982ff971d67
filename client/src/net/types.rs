//! Wire DTOs for the console backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON. Identifiers are kept as strings
//! because route params are strings and assignment matching compares them
//! directly; numeric ids from older backends are accepted and stringified.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// `POST /login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `POST /login` success body. Both fields are validated by the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Error body carried by non-success responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// `POST /signup` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// An event as listed by `/events` and `/admin/event-history`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(deserialize_with = "deserialize_id")]
    pub event_id: String,
    pub event_name: String,
    #[serde(default)]
    pub event_description: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    /// Single-day date used by history entries.
    #[serde(default)]
    pub event_date: Option<String>,
}

/// `POST /events` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NewEvent {
    pub event_name: String,
    pub event_description: String,
    pub start_date: String,
    pub end_date: String,
}

/// A role that can be staffed at an event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRole {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
}

/// One faculty member's role at one event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub id: Option<String>,
    #[serde(deserialize_with = "deserialize_id")]
    pub event_id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub role_id: String,
    #[serde(default)]
    pub points: i64,
}

/// A faculty member with their assignments across events.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub assignments: Vec<Assignment>,
}

/// `POST /events/{id}/assignments` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AssignmentRequest {
    pub faculty_id: String,
    pub role_id: String,
    pub points: i64,
}

/// `DELETE /delete-role-assignment` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RemoveAssignmentRequest {
    pub assignment_id: String,
    /// Also take the role's points back from the faculty member.
    pub deduct_points: bool,
}

/// `POST /faculty` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NewFaculty {
    pub name: String,
    pub email: String,
    #[serde(rename = "departmentname")]
    pub department: String,
}

/// Event as shown on the faculty dashboard (`/events/current`, `/events/history`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyEvent {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: Option<String>,
}

fn id_from_value<E: serde::de::Error>(value: serde_json::Value) -> Result<String, E> {
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(E::custom(format!("expected string or number id, got {other}"))),
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    id_from_value(serde_json::Value::deserialize(deserializer)?)
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value) => id_from_value(value).map(Some),
    }
}

fn deserialize_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
