//! Protected college listing with paging and sort order.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProtectedRoute` keeps unauthenticated users out, and every fetch here
//! checks the guard again before it leaves. The listing uses the collapsing
//! client call, so an empty table may also mean the request failed.

#[cfg(test)]
#[path = "colleges_test.rs"]
mod colleges_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;

use crate::app::{BrowserServices, PortalServices};
use crate::guard::COLLEGES_PATH;
use crate::net::resources::{DEFAULT_ORDERING, DEFAULT_PAGE_SIZE, ListQuery};
use crate::net::transport::Transport;
use crate::net::types::{Page, Resource, ResourceStats};
use crate::util::route_guard::redirect_for;

/// Sort keys offered in the ordering picker, as `(ordering, label)`.
const ORDERINGS: [(&str, &str); 4] = [
    ("name", "Name (A-Z)"),
    ("-name", "Name (Z-A)"),
    ("acceptance_rate", "Acceptance rate"),
    ("cost_of_attendance", "Cost of attendance"),
];

/// Number of pages needed for `count` items; at least one.
fn total_pages(count: u64, page_size: u32) -> u64 {
    let size = u64::from(page_size.max(1));
    count.div_ceil(size).max(1)
}

fn location_label(college: &Resource) -> String {
    match (college.city.as_deref(), college.state.as_deref()) {
        (Some(city), Some(state)) => format!("{city}, {state}"),
        (Some(place), None) | (None, Some(place)) => place.to_owned(),
        (None, None) => String::new(),
    }
}

fn percent_label(rate: Option<f64>) -> String {
    rate.map_or_else(|| "n/a".to_owned(), |r| format!("{:.0}%", r * 100.0))
}

/// Tags listing requests so only the newest response is applied.
#[derive(Clone, Debug, Default)]
struct RequestGeneration(Arc<AtomicU64>);

impl RequestGeneration {
    /// Start a request, superseding every earlier one.
    fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.0.load(Ordering::SeqCst) == ticket
    }
}

fn signed_out<T>(services: &PortalServices<T>) -> bool {
    match redirect_for(&services.routes, &services.store, COLLEGES_PATH) {
        Some(target) => {
            log::debug!("colleges: guard redirects to {target}, fetch skipped");
            true
        }
        None => false,
    }
}

/// One listing page, or `None` without any request when the guard would
/// turn the visitor away.
async fn load_listing<T: Transport>(services: &PortalServices<T>, query: &ListQuery) -> Option<Page<Resource>> {
    if signed_out(services) {
        return None;
    }
    Some(services.resources.list_resources(query).await)
}

/// Collection totals, under the same guard as [`load_listing`].
async fn load_stats<T: Transport>(services: &PortalServices<T>) -> Option<ResourceStats> {
    if signed_out(services) {
        return None;
    }
    Some(services.resources.resource_stats().await)
}

#[component]
pub fn CollegesPage() -> impl IntoView {
    let services = expect_context::<BrowserServices>();

    let page_no = RwSignal::new(1_u32);
    let ordering = RwSignal::new(DEFAULT_ORDERING.to_owned());
    let listing = RwSignal::new(Page::<Resource>::empty());
    let stats = RwSignal::new(ResourceStats::default());
    let loading = RwSignal::new(false);
    let generation = RequestGeneration::default();

    {
        let services = services.clone();
        leptos::task::spawn_local(async move {
            if let Some(totals) = load_stats(&services).await {
                stats.set(totals);
            }
        });
    }

    Effect::new(move || {
        let query = ListQuery::page(page_no.get()).ordered_by(Some(&ordering.get()));
        let services = services.clone();
        let generation = generation.clone();
        let ticket = generation.begin();
        loading.set(true);
        leptos::task::spawn_local(async move {
            let page = load_listing(&services, &query).await;
            if !generation.is_current(ticket) {
                log::debug!("colleges: dropped superseded page {}", query.page);
                return;
            }
            if let Some(page) = page {
                listing.set(page);
            }
            loading.set(false);
        });
    });

    let pages = move || total_pages(listing.get().count, DEFAULT_PAGE_SIZE);

    view! {
        <div class="colleges-page">
            <h1>"Colleges"</h1>
            <p class="colleges-page__stats">
                {move || {
                    let s = stats.get();
                    format!("{} colleges across {} states", s.total, s.distinct_groups)
                }}
            </p>
            <select
                class="colleges-page__ordering"
                on:change=move |ev| {
                    ordering.set(event_target_value(&ev));
                    page_no.set(1);
                }
            >
                {ORDERINGS
                    .iter()
                    .map(|(key, label)| {
                        let key = *key;
                        view! {
                            <option value=key selected=move || ordering.get() == key>
                                {*label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <Show when=move || loading.get()>
                <p class="colleges-page__loading">"Loading..."</p>
            </Show>
            <Show
                when=move || !listing.get().items.is_empty()
                fallback=|| view! { <p class="colleges-page__empty">"No colleges found."</p> }
            >
                <table class="colleges-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Location"</th>
                            <th>"Acceptance"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            listing
                                .get()
                                .items
                                .into_iter()
                                .map(|college| {
                                    let location = location_label(&college);
                                    let acceptance = percent_label(college.acceptance_rate);
                                    view! {
                                        <tr>
                                            <td>{college.name}</td>
                                            <td>{location}</td>
                                            <td>{acceptance}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
            <div class="colleges-page__pager">
                <button
                    disabled=move || listing.get().previous.is_none()
                    on:click=move |_| page_no.update(|p| *p = p.saturating_sub(1).max(1))
                >
                    "Previous"
                </button>
                <span>{move || format!("Page {} of {}", page_no.get(), pages())}</span>
                <button
                    disabled=move || listing.get().next.is_none()
                    on:click=move |_| page_no.update(|p| *p += 1)
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
