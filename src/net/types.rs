//! Wire DTOs for the auth and resource services.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON. Where the deployed backend and the
//! generic resource vocabulary disagree (`total_colleges` vs
//! `total_resources`), serde aliases accept both.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Placeholder display name when neither the profile nor the cache has one.
pub const FALLBACK_USERNAME: &str = "User";

/// Credentials posted to the token-issuance endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct RefreshRequest<'a> {
    pub refresh: &'a str,
}

/// Token pair returned by a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tokens {
    pub access: String,
    pub refresh: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RefreshedToken {
    pub access: String,
}

/// The authenticated user's profile, kept opaque.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile(pub serde_json::Value);

impl Profile {
    /// Minimal profile synthesized when the profile endpoint is unreachable.
    pub fn fallback(cached_name: Option<&str>) -> Self {
        Self(serde_json::json!({ "username": cached_name.unwrap_or(FALLBACK_USERNAME) }))
    }

    pub fn username(&self) -> Option<&str> {
        self.0.get("username").and_then(serde_json::Value::as_str)
    }
}

/// One page of a paginated listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    #[serde(rename = "results")]
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// `{count: 0, next: null, previous: null, results: []}`
    pub fn empty() -> Self {
        Self { count: 0, next: None, previous: None, items: Vec::new() }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// A college as listed by the resource service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub acceptance_rate: Option<f64>,
    #[serde(default)]
    pub cost_of_attendance: Option<f64>,
    #[serde(default)]
    pub external_id: Option<String>,
}

/// Aggregate counts over the whole collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceStats {
    #[serde(rename = "total_resources", alias = "total_colleges")]
    pub total: u64,
    #[serde(rename = "groups_represented", alias = "states_represented")]
    pub distinct_groups: u64,
}
