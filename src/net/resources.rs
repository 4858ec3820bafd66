//! Resource client for the paginated college listing.
//!
//! ERROR HANDLING
//! ==============
//! [`ResourceClient::list_resources`] and [`ResourceClient::resource_stats`]
//! swallow every failure and return the zero value, so at that layer "no
//! colleges" and "request failed" look the same. Callers that need to tell
//! them apart use [`ResourceClient::fetch_page`] / [`ResourceClient::fetch_stats`].

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use serde::de::DeserializeOwned;

use super::authenticator::Authenticated;
use super::transport::{HttpRequest, Transport, TransportError};
use super::types::{Page, Resource, ResourceStats};
use crate::config::ApiConfig;
use crate::state::session::TokenStore;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 25;
pub const DEFAULT_ORDERING: &str = "name";

/// Errors from the explicit (non-collapsing) resource calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResourceError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Non-success status, including authorization and not-found.
    #[error("resource request rejected: status {status}")]
    Rejected { status: u16 },

    #[error("resource response parse failed: {0}")]
    Decode(String),
}

/// Page selection for a listing call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    /// Sort key such as `name` or `-acceptance_rate`; omitted when `None` or empty.
    pub ordering: Option<String>,
    pub page_size: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self { page: DEFAULT_PAGE, ordering: Some(DEFAULT_ORDERING.to_owned()), page_size: DEFAULT_PAGE_SIZE }
    }
}

impl ListQuery {
    pub fn page(page: u32) -> Self {
        Self { page, ..Self::default() }
    }

    #[must_use]
    pub fn ordered_by(mut self, ordering: Option<&str>) -> Self {
        self.ordering = ordering.map(str::to_owned);
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }
}

#[derive(Clone, Debug)]
pub struct ResourceClient<T> {
    transport: Authenticated<T>,
    config: ApiConfig,
}

impl<T: Transport> ResourceClient<T> {
    /// The store is only read, through the request authenticator.
    pub fn new(transport: T, store: TokenStore, config: ApiConfig) -> Self {
        Self { transport: Authenticated::new(transport, store), config }
    }

    /// One page of colleges, or the empty page on any failure.
    pub async fn list_resources(&self, query: &ListQuery) -> Page<Resource> {
        self.fetch_page(query).await.unwrap_or_else(|err| {
            log::warn!("error fetching {}: {err}", self.config.collection);
            Page::empty()
        })
    }

    /// Collection totals, or zeros on any failure.
    pub async fn resource_stats(&self) -> ResourceStats {
        self.fetch_stats().await.unwrap_or_else(|err| {
            log::warn!("error fetching {} stats: {err}", self.config.collection);
            ResourceStats::default()
        })
    }

    /// # Errors
    ///
    /// Returns a [`ResourceError`] on transport failure, non-success status,
    /// or an undecodable body.
    pub async fn fetch_page(&self, query: &ListQuery) -> Result<Page<Resource>, ResourceError> {
        let mut request = HttpRequest::get(self.config.resources_url())
            .query_param("page", query.page)
            .query_param("page_size", query.page_size);
        if let Some(ordering) = query.ordering.as_deref().filter(|o| !o.is_empty()) {
            request = request.query_param("ordering", ordering);
        }
        log::debug!("fetching {} with {:?}", request.url, request.query);
        self.fetch(request).await
    }

    /// # Errors
    ///
    /// Same conditions as [`Self::fetch_page`].
    pub async fn fetch_stats(&self) -> Result<ResourceStats, ResourceError> {
        self.fetch(HttpRequest::get(self.config.stats_url())).await
    }

    async fn fetch<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, ResourceError> {
        let resp = self.transport.send(request).await?;
        if !resp.ok() {
            return Err(ResourceError::Rejected { status: resp.status });
        }
        serde_json::from_str(&resp.body).map_err(|e| ResourceError::Decode(e.to_string()))
    }
}
