//! Reactive auth summary for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` context so views re-render on login and
//! logout. The token store stays the source of truth; this is a projection of
//! it that the credential flows refresh after each change.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::session::Session;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
    pub display_name: Option<String>,
}

impl AuthState {
    pub fn from_session(session: &Session) -> Self {
        Self { authenticated: session.is_authenticated(), display_name: session.display_name.clone() }
    }

    pub fn signed_in(display_name: Option<&str>) -> Self {
        Self { authenticated: true, display_name: display_name.map(str::to_owned) }
    }

    /// Label for the nav bar; empty when signed out.
    pub fn label(&self) -> &str {
        match (&self.display_name, self.authenticated) {
            (Some(name), true) => name.as_str(),
            (None, true) => crate::net::types::FALLBACK_USERNAME,
            (_, false) => "",
        }
    }
}
