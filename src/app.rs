//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, ProtectedRoute, Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::config::ApiConfig;
use crate::guard::{COLLEGES_PATH, HOME_PATH, RouteTable};
use crate::net::credentials::CredentialClient;
use crate::net::resources::ResourceClient;
use crate::net::transport::{BrowserTransport, Transport};
use crate::pages::{colleges::CollegesPage, diagnostics::TestPage, home::HomePage, login::LoginPage};
use crate::state::auth::AuthState;
use crate::state::events::SessionEvents;
use crate::state::session::TokenStore;
use crate::util::route_guard::{install_route_guard, route_condition};

/// Everything that talks to the backend, sharing one token store.
#[derive(Clone, Debug)]
pub struct PortalServices<T> {
    pub config: ApiConfig,
    pub store: TokenStore,
    pub events: SessionEvents,
    pub credentials: CredentialClient<T>,
    pub resources: ResourceClient<T>,
    pub routes: RouteTable,
}

/// Services as wired in the browser.
pub type BrowserServices = PortalServices<BrowserTransport>;

impl<T: Transport + Clone> PortalServices<T> {
    pub fn new(transport: T, store: TokenStore, config: ApiConfig) -> Self {
        let events = SessionEvents::new();
        Self {
            credentials: CredentialClient::new(transport.clone(), store.clone(), events.clone(), config.clone()),
            resources: ResourceClient::new(transport, store.clone(), config.clone()),
            config,
            store,
            events,
            routes: RouteTable::default(),
        }
    }
}

impl BrowserServices {
    /// `localStorage`-backed session and base URLs resolved from the page origin.
    pub fn browser() -> Self {
        Self::new(BrowserTransport, TokenStore::browser(), ApiConfig::from_window())
    }
}

/// Root application component.
///
/// Provides the services and auth contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let services = BrowserServices::browser();
    log::info!("API base: {}", services.config.api_base);

    let auth = RwSignal::new(AuthState::from_session(&services.store.get()));
    services.events.subscribe(move |_| auth.set(AuthState::default()));
    let colleges_allowed = route_condition(services.routes.clone(), services.store.clone(), auth, COLLEGES_PATH);

    provide_context(services);
    provide_context(auth);

    view! {
        <Title text="Campus Portal"/>

        <Router>
            <NavigationGuard/>
            <NavBar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <ProtectedRoute
                        path=StaticSegment("colleges")
                        condition=colleges_allowed
                        redirect_path=|| HOME_PATH
                        view=CollegesPage
                    />
                    <Route path=StaticSegment("test") view=TestPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Installs the location-driven half of the route guard; must sit inside
/// `<Router>`.
#[component]
fn NavigationGuard() -> impl IntoView {
    let services = expect_context::<BrowserServices>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    install_route_guard(services.routes.clone(), services.store.clone(), auth, location.pathname, use_navigate());
}

#[component]
fn NavBar() -> impl IntoView {
    let services = expect_context::<BrowserServices>();
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <nav class="nav-bar">
            <A href="/">"Home"</A>
            <Show
                when=move || auth.get().authenticated
                fallback=|| view! { <A href="/login">"Sign in"</A> }
            >
                <A href="/colleges">"Colleges"</A>
                <span class="nav-bar__user">{move || auth.get().label().to_owned()}</span>
                <button class="nav-bar__logout" on:click={
                    let services = services.clone();
                    move |_| services.credentials.logout()
                }>
                    "Sign out"
                </button>
            </Show>
        </nav>
    }
}
