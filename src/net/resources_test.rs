use super::*;
use crate::config::DEV_ORIGIN;
use crate::net::credentials::CredentialClient;
use crate::net::mock_transport::MockTransport;
use crate::net::transport::{AUTHORIZATION, HttpResponse};
use crate::state::events::SessionEvents;
use serde_json::json;
use std::sync::Arc;

fn client(mock: MockTransport, store: &TokenStore) -> (ResourceClient<Arc<MockTransport>>, Arc<MockTransport>) {
    let mock = Arc::new(mock);
    let client = ResourceClient::new(mock.clone(), store.clone(), ApiConfig::with_origin(DEV_ORIGIN));
    (client, mock)
}

fn one_college_page() -> serde_json::Value {
    json!({
        "count": 1,
        "next": null,
        "previous": null,
        "results": [{ "id": 1, "name": "Alpha College", "state": "OH" }]
    })
}

fn query_of(mock: &MockTransport, index: usize) -> Vec<(String, String)> {
    mock.requests()[index].query.clone()
}

fn pair(k: &str, v: &str) -> (String, String) {
    (k.to_owned(), v.to_owned())
}

#[test]
fn default_query_matches_listing_defaults() {
    let query = ListQuery::default();
    assert_eq!(query.page, 1);
    assert_eq!(query.page_size, 25);
    assert_eq!(query.ordering.as_deref(), Some("name"));
}

#[tokio::test]
async fn list_resources_returns_payload_unchanged() {
    let store = TokenStore::in_memory();
    store.set_tokens("A", "R");
    let (client, mock) = client(MockTransport::new().respond(200, one_college_page()), &store);

    let page = client.list_resources(&ListQuery::default()).await;
    assert_eq!(page.count, 1);
    assert_eq!(page.items[0].name, "Alpha College");

    let sent = &mock.requests()[0];
    assert_eq!(sent.url, "http://localhost:8000/api/colleges/");
    assert_eq!(sent.header_value(AUTHORIZATION), Some("JWT A"));
    assert_eq!(
        query_of(&mock, 0),
        vec![pair("page", "1"), pair("page_size", "25"), pair("ordering", "name")]
    );
}

#[tokio::test]
async fn empty_ordering_is_omitted() {
    let store = TokenStore::in_memory();
    let (client, mock) = client(MockTransport::new().fail().fail(), &store);
    client.list_resources(&ListQuery::page(3).ordered_by(None)).await;
    client.list_resources(&ListQuery::page(3).ordered_by(Some("")).with_page_size(50)).await;
    assert_eq!(query_of(&mock, 0), vec![pair("page", "3"), pair("page_size", "25")]);
    assert_eq!(query_of(&mock, 1), vec![pair("page", "3"), pair("page_size", "50")]);
}

#[tokio::test]
async fn list_resources_network_failure_is_empty_page() {
    let store = TokenStore::in_memory();
    let (client, _) = client(MockTransport::new().fail(), &store);
    let page = client.list_resources(&ListQuery::default()).await;
    assert_eq!(page, Page::empty());
    assert_eq!(page.count, 0);
    assert!(page.next.is_none() && page.previous.is_none() && page.items.is_empty());
}

#[tokio::test]
async fn list_resources_unauthorized_or_malformed_is_empty_page() {
    let store = TokenStore::in_memory();
    let (client, _) =
        client(MockTransport::new().respond(401, json!({})).respond_raw(200, "<html>oops</html>"), &store);
    assert_eq!(client.list_resources(&ListQuery::default()).await, Page::empty());
    assert_eq!(client.list_resources(&ListQuery::default()).await, Page::empty());
}

#[tokio::test]
async fn fetch_page_exposes_the_failure() {
    let store = TokenStore::in_memory();
    let (client, _) = client(MockTransport::new().respond(404, json!({})).fail(), &store);
    assert_eq!(
        client.fetch_page(&ListQuery::default()).await.unwrap_err(),
        ResourceError::Rejected { status: 404 }
    );
    assert!(matches!(
        client.fetch_page(&ListQuery::default()).await.unwrap_err(),
        ResourceError::Transport(_)
    ));
}

#[tokio::test]
async fn resource_stats_decodes_and_defaults() {
    let store = TokenStore::in_memory();
    let (client, mock) = client(
        MockTransport::new()
            .respond(200, json!({ "total_colleges": 40, "states_represented": 9 }))
            .fail(),
        &store,
    );
    assert_eq!(client.resource_stats().await, ResourceStats { total: 40, distinct_groups: 9 });
    assert_eq!(client.resource_stats().await, ResourceStats { total: 0, distinct_groups: 0 });
    assert_eq!(mock.requests()[0].url, "http://localhost:8000/api/colleges/stats/");
}

#[tokio::test]
async fn refresh_between_listings_is_seen_by_the_second_call() {
    let store = TokenStore::in_memory();
    store.set_tokens("A", "R");
    let mock = Arc::new(MockTransport::new());
    let events = SessionEvents::new();
    let config = ApiConfig::with_origin(DEV_ORIGIN);
    let resources = ResourceClient::new(mock.clone(), store.clone(), config.clone());
    let credentials = CredentialClient::new(mock.clone(), store.clone(), events, config);

    mock.push(Ok(HttpResponse { status: 200, body: one_college_page().to_string() }));
    resources.list_resources(&ListQuery::default()).await;

    mock.push(Ok(HttpResponse { status: 200, body: json!({ "access": "B" }).to_string() }));
    credentials.refresh().await.unwrap();

    mock.push(Ok(HttpResponse { status: 200, body: one_college_page().to_string() }));
    resources.list_resources(&ListQuery::default()).await;

    let sent = mock.requests();
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[0].header_value(AUTHORIZATION), Some("JWT A"));
    assert_eq!(sent[2].header_value(AUTHORIZATION), Some("JWT B"));
}
