use super::*;
use crate::config::{ApiConfig, DEV_ORIGIN};
use crate::net::mock_transport::MockTransport;
use crate::net::transport::AUTHORIZATION;
use crate::state::session::TokenStore;
use serde_json::json;

fn services(mock: &Arc<MockTransport>) -> PortalServices<Arc<MockTransport>> {
    PortalServices::new(mock.clone(), TokenStore::in_memory(), ApiConfig::with_origin(DEV_ORIGIN))
}

fn college(city: Option<&str>, state: Option<&str>) -> Resource {
    Resource {
        id: 1,
        name: "Alpha College".to_owned(),
        state: state.map(str::to_owned),
        city: city.map(str::to_owned),
        website: None,
        description: None,
        acceptance_rate: None,
        cost_of_attendance: None,
        external_id: None,
    }
}

#[test]
fn total_pages_rounds_up_and_never_drops_below_one() {
    assert_eq!(total_pages(0, 25), 1);
    assert_eq!(total_pages(25, 25), 1);
    assert_eq!(total_pages(26, 25), 2);
    assert_eq!(total_pages(10, 0), 10);
}

#[test]
fn location_label_joins_available_parts() {
    assert_eq!(location_label(&college(Some("Columbus"), Some("OH"))), "Columbus, OH");
    assert_eq!(location_label(&college(None, Some("OH"))), "OH");
    assert_eq!(location_label(&college(None, None)), "");
}

#[test]
fn percent_label_formats_rate() {
    assert_eq!(percent_label(Some(0.4)), "40%");
    assert_eq!(percent_label(None), "n/a");
}

#[test]
fn default_ordering_is_offered_first() {
    assert_eq!(ORDERINGS[0].0, DEFAULT_ORDERING);
}

// =============================================================
// Guarded loading
// =============================================================

#[tokio::test]
async fn signed_out_visit_sends_no_requests() {
    let mock = Arc::new(MockTransport::new());
    let services = services(&mock);

    assert!(load_stats(&services).await.is_none());
    assert!(load_listing(&services, &ListQuery::default()).await.is_none());
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn signed_in_visit_fetches_with_credentials() {
    let mock = Arc::new(
        MockTransport::new()
            .respond(200, json!({ "total_colleges": 3, "states_represented": 2 }))
            .respond(200, json!({ "count": 1, "next": null, "previous": null, "results": [{ "id": 7, "name": "Alpha" }] })),
    );
    let services = services(&mock);
    services.store.set_tokens("A", "R");

    assert_eq!(load_stats(&services).await.map(|s| s.total), Some(3));
    let page = load_listing(&services, &ListQuery::default()).await.unwrap();
    assert_eq!(page.items[0].name, "Alpha");
    assert_eq!(mock.request_count(), 2);
    assert!(mock.requests().iter().all(|r| r.header_value(AUTHORIZATION) == Some("JWT A")));
}

#[tokio::test]
async fn logout_mid_session_stops_further_fetches() {
    let mock = Arc::new(
        MockTransport::new().respond(200, json!({ "count": 0, "next": null, "previous": null, "results": [] })),
    );
    let services = services(&mock);
    services.store.set_tokens("A", "R");
    assert!(load_listing(&services, &ListQuery::page(1)).await.is_some());

    services.credentials.logout();
    assert!(load_listing(&services, &ListQuery::page(2)).await.is_none());
    assert_eq!(mock.request_count(), 1);
}

// =============================================================
// RequestGeneration
// =============================================================

#[test]
fn only_the_latest_request_is_current() {
    let generation = RequestGeneration::default();
    let first = generation.begin();
    let second = generation.begin();
    assert!(!generation.is_current(first));
    assert!(generation.is_current(second));
}

#[test]
fn clones_share_the_generation() {
    let generation = RequestGeneration::default();
    let ticket = generation.begin();
    let in_flight = generation.clone();
    generation.begin();
    assert!(!in_flight.is_current(ticket));
}
