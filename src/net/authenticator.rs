//! Request authenticator applied to every outgoing call.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both service clients send through [`Authenticated`]. The access token is
//! read from the [`TokenStore`] at dispatch time, never captured earlier, so
//! a token refreshed mid-session is picked up by the very next request
//! without rebuilding either client.

#[cfg(test)]
#[path = "authenticator_test.rs"]
mod authenticator_test;

use super::transport::{AUTHORIZATION, HttpRequest, HttpResponse, Transport, TransportError};
use crate::state::session::TokenStore;

/// Label placed before the token in the `Authorization` header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CredentialScheme {
    /// `Authorization: JWT <token>`
    Jwt,
    /// `Authorization: Bearer <token>`
    Bearer,
}

impl CredentialScheme {
    pub fn label(self) -> &'static str {
        match self {
            Self::Jwt => "JWT",
            Self::Bearer => "Bearer",
        }
    }

    pub fn header_value(self, token: &str) -> String {
        format!("{} {token}", self.label())
    }
}

/// Transport decorator injecting the session credential.
#[derive(Clone, Debug)]
pub struct Authenticated<T> {
    inner: T,
    store: TokenStore,
    scheme: CredentialScheme,
}

impl<T> Authenticated<T> {
    /// Wrap `inner`, presenting tokens under the `JWT` label.
    pub fn new(inner: T, store: TokenStore) -> Self {
        Self { inner, store, scheme: CredentialScheme::Jwt }
    }

    #[must_use]
    pub fn with_scheme(mut self, scheme: CredentialScheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn store(&self) -> &TokenStore {
        &self.store
    }

    /// Attach the current access token unless the request already carries
    /// explicit authorization. Without a token the request is left as is.
    pub fn authorize(&self, request: &mut HttpRequest) {
        if request.header_value(AUTHORIZATION).is_some() {
            return;
        }
        if let Some(token) = self.store.access_token() {
            request.set_header(AUTHORIZATION, self.scheme.header_value(&token));
        }
    }
}

#[async_trait::async_trait(?Send)]
impl<T: Transport> Transport for Authenticated<T> {
    async fn send(&self, mut request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.authorize(&mut request);
        self.inner.send(request).await
    }
}
