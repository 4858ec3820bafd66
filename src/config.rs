//! API endpoint configuration resolved once at startup.
//!
//! DESIGN
//! ======
//! The backend lives on the same host as the page, on a fixed service port.
//! When the page is served from a loopback host the fixed local development
//! origin is used instead, so the client also works when opened from another
//! machine on the network. A build-time `PORTAL_API_ORIGIN` overrides both.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::IpAddr;

pub const SERVICE_PORT: u16 = 8000;
pub const DEV_ORIGIN: &str = "http://localhost:8000";
pub const AUTH_PREFIX: &str = "/auth";
pub const API_PREFIX: &str = "/api";
pub const DEFAULT_COLLECTION: &str = "colleges";

const ORIGIN_OVERRIDE: Option<&str> = option_env!("PORTAL_API_ORIGIN");

/// Base URLs for the auth and resource services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Prefix for token and profile endpoints, e.g. `http://host:8000/auth`.
    pub auth_base: String,
    /// Prefix for resource endpoints, e.g. `http://host:8000/api`.
    pub api_base: String,
    /// Resource collection segment under `api_base`.
    pub collection: String,
}

impl ApiConfig {
    /// Build config rooted at an explicit origin (`scheme://host:port`).
    pub fn with_origin(origin: &str) -> Self {
        let origin = origin.trim_end_matches('/');
        Self {
            auth_base: format!("{origin}{AUTH_PREFIX}"),
            api_base: format!("{origin}{API_PREFIX}"),
            collection: DEFAULT_COLLECTION.to_owned(),
        }
    }

    /// Build config for a page served from `host`.
    pub fn from_origin_host(host: &str) -> Self {
        Self::with_origin(&origin_for_host(host))
    }

    /// Resolve config from the running page's own location.
    ///
    /// Outside the browser there is no location; the development origin is used.
    pub fn from_window() -> Self {
        if let Some(origin) = ORIGIN_OVERRIDE {
            return Self::with_origin(origin);
        }
        #[cfg(feature = "csr")]
        {
            let host = web_sys::window()
                .and_then(|w| w.location().hostname().ok())
                .unwrap_or_default();
            Self::from_origin_host(&host)
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::with_origin(DEV_ORIGIN)
        }
    }

    #[must_use]
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    pub fn login_url(&self) -> String {
        format!("{}/jwt/create/", self.auth_base)
    }

    pub fn refresh_url(&self) -> String {
        format!("{}/jwt/refresh/", self.auth_base)
    }

    pub fn profile_url(&self) -> String {
        format!("{}/users/me/", self.auth_base)
    }

    pub fn resources_url(&self) -> String {
        format!("{}/{}/", self.api_base, self.collection)
    }

    pub fn stats_url(&self) -> String {
        format!("{}/{}/stats/", self.api_base, self.collection)
    }
}

/// True for `localhost` and any loopback IP literal (bracketed IPv6 included).
pub fn is_loopback_host(host: &str) -> bool {
    let bare = host.trim_start_matches('[').trim_end_matches(']');
    bare.eq_ignore_ascii_case("localhost") || bare.parse::<IpAddr>().is_ok_and(|ip| ip.is_loopback())
}

/// Backend origin for a page served from `host`.
pub fn origin_for_host(host: &str) -> String {
    if host.is_empty() || is_loopback_host(host) {
        DEV_ORIGIN.to_owned()
    } else {
        format!("http://{host}:{SERVICE_PORT}")
    }
}
