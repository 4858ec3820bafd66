//! Credential client for the token-issuing auth service.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only writer of the [`TokenStore`]: login stores a token pair, refresh
//! replaces the access token, a successful profile lookup caches the display
//! name, and logout clears everything and notifies [`SessionEvents`].
//!
//! ERROR HANDLING
//! ==============
//! Login and refresh fail loudly. A refresh failure additionally clears the
//! whole session before the error is returned: a rejected refresh means the
//! session is gone, not that the call should be retried. Profile lookup never
//! fails; it walks an ordered list of credential schemes and falls back to a
//! minimal profile built from the cached display name.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use serde::de::DeserializeOwned;

use super::authenticator::{Authenticated, CredentialScheme};
use super::transport::{AUTHORIZATION, HttpRequest, Transport, TransportError};
use super::types::{LoginRequest, Profile, RefreshRequest, RefreshedToken, Tokens};
use crate::config::ApiConfig;
use crate::state::events::{SessionEnded, SessionEvents};
use crate::state::session::TokenStore;

/// Profile lookup order: bearer label first, then the JWT label.
pub const DEFAULT_PROFILE_SCHEMES: [CredentialScheme; 2] = [CredentialScheme::Bearer, CredentialScheme::Jwt];

/// Errors produced by login and refresh.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Refresh was requested but the session holds no refresh token.
    #[error("no refresh token found")]
    NoRefreshToken,

    /// The request never produced a response.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The auth service answered with a non-success status.
    #[error("auth request rejected: status {status}")]
    Rejected { status: u16, body: String },

    /// The auth service response body could not be deserialized.
    #[error("auth response parse failed: {0}")]
    Decode(String),
}

#[derive(Clone, Debug)]
pub struct CredentialClient<T> {
    transport: Authenticated<T>,
    events: SessionEvents,
    config: ApiConfig,
    profile_schemes: Vec<CredentialScheme>,
}

impl<T: Transport> CredentialClient<T> {
    pub fn new(transport: T, store: TokenStore, events: SessionEvents, config: ApiConfig) -> Self {
        Self {
            transport: Authenticated::new(transport, store),
            events,
            config,
            profile_schemes: DEFAULT_PROFILE_SCHEMES.to_vec(),
        }
    }

    /// Override the credential schemes tried, in order, by [`Self::profile`].
    #[must_use]
    pub fn with_profile_schemes(mut self, schemes: Vec<CredentialScheme>) -> Self {
        self.profile_schemes = schemes;
        self
    }

    pub fn store(&self) -> &TokenStore {
        self.transport.store()
    }

    pub fn events(&self) -> &SessionEvents {
        &self.events
    }

    pub fn profile_schemes(&self) -> &[CredentialScheme] {
        &self.profile_schemes
    }

    /// Exchange credentials for a token pair and persist it.
    ///
    /// # Errors
    ///
    /// Returns the transport, rejection, or decode error unchanged. The store
    /// is left untouched on failure.
    pub async fn login(&self, username: &str, password: &str) -> Result<Tokens, AuthError> {
        let request = HttpRequest::post(self.config.login_url()).json(&LoginRequest { username, password })?;
        let tokens: Tokens = self.exchange(request).await?;
        self.store().set_tokens(&tokens.access, &tokens.refresh);
        log::info!("login succeeded for {username}");
        Ok(tokens)
    }

    /// Mint a new access token from the stored refresh token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NoRefreshToken`] without any network call when no
    /// refresh token is stored. Every failure clears the whole session first.
    pub async fn refresh(&self) -> Result<String, AuthError> {
        let result = match self.store().get().refresh_token {
            Some(refresh) => self.request_refresh(&refresh).await,
            None => Err(AuthError::NoRefreshToken),
        };
        match result {
            Ok(access) => {
                self.store().set_access_token(&access);
                Ok(access)
            }
            Err(err) => {
                log::warn!("token refresh failed, clearing session: {err}");
                self.store().clear();
                Err(err)
            }
        }
    }

    async fn request_refresh(&self, refresh: &str) -> Result<String, AuthError> {
        let request = HttpRequest::post(self.config.refresh_url()).json(&RefreshRequest { refresh })?;
        let body: RefreshedToken = self.exchange(request).await?;
        Ok(body.access)
    }

    /// Fetch the authenticated user's profile. Never fails.
    ///
    /// Each configured scheme is tried once, in order; the first success wins.
    /// With no access token, or when every attempt fails, a profile holding
    /// the cached display name (or a generic placeholder) is returned.
    pub async fn profile(&self) -> Profile {
        if let Some(token) = self.store().access_token() {
            for scheme in &self.profile_schemes {
                let request =
                    HttpRequest::get(self.config.profile_url()).header(AUTHORIZATION, scheme.header_value(&token));
                match self.exchange::<Profile>(request).await {
                    Ok(profile) => {
                        if let Some(name) = profile.username() {
                            self.store().set_display_name(name);
                        }
                        return profile;
                    }
                    Err(err) => log::warn!("profile lookup with {} scheme failed: {err}", scheme.label()),
                }
            }
        }
        Profile::fallback(self.store().get().display_name.as_deref())
    }

    /// Clear the session and notify subscribers.
    pub fn logout(&self) {
        self.store().clear();
        self.events.emit(&SessionEnded::logout());
        log::info!("session ended by logout");
    }

    async fn exchange<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, AuthError> {
        let resp = self.transport.send(request).await?;
        if !resp.ok() {
            return Err(AuthError::Rejected { status: resp.status, body: resp.body });
        }
        serde_json::from_str(&resp.body).map_err(|e| AuthError::Decode(e.to_string()))
    }
}
