//! Route guard hook for `leptos_router`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes are declared with `ProtectedRoute`, whose `condition` is
//! built by [`route_condition`]; the router checks it before the view is
//! created, so a protected page never renders for a signed-out visitor.
//!
//! The remaining rules (signed-in users leaving `/login`, logout while on a
//! protected page) run as an effect keyed on the current pathname and the
//! reactive [`AuthState`]. It re-reads the session and, when the
//! [`RouteTable`] says so, replaces the entry with the redirect target.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::guard::{NavigationDecision, RouteTable};
use crate::state::auth::AuthState;
use crate::state::session::TokenStore;

/// Redirect target for a navigation to `path`, if any.
pub fn redirect_for(routes: &RouteTable, store: &TokenStore, path: &str) -> Option<&'static str> {
    match routes.decide(path, store.is_authenticated()) {
        NavigationDecision::Allow => None,
        NavigationDecision::Redirect(target) => Some(target),
    }
}

/// `condition` for a `ProtectedRoute` mounted at `path`.
///
/// Tracks `auth` so a login or logout re-evaluates it; the answer itself comes
/// from the token store.
pub fn route_condition(
    routes: RouteTable,
    store: TokenStore,
    auth: RwSignal<AuthState>,
    path: &'static str,
) -> impl Fn() -> Option<bool> + Send + Sync + Clone + 'static {
    move || {
        auth.track();
        Some(redirect_for(&routes, &store, path).is_none())
    }
}

/// Evaluate the guard on every change of `pathname` or `auth`.
///
/// The decision itself always reads the token store, not the signal.
pub fn install_route_guard<F>(
    routes: RouteTable,
    store: TokenStore,
    auth: RwSignal<AuthState>,
    pathname: Memo<String>,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        auth.track();
        let path = pathname.get();
        if let Some(target) = redirect_for(&routes, &store, &path) {
            log::debug!("route guard: {path} -> {target}");
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
