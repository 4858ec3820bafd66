//! Navigation guard: decides whether a navigation may proceed.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routing calls [`RouteTable::decide`] for every navigation target (see
//! `util::route_guard`). The decision depends only on the target route's
//! `requires_auth` flag and whether the session holds an access token. It has
//! no side effects and never touches the session.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const COLLEGES_PATH: &str = "/colleges";
pub const TEST_PATH: &str = "/test";

/// A navigation target declared at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub name: &'static str,
    pub path: &'static str,
    pub requires_auth: bool,
}

impl RouteDescriptor {
    pub const fn public(name: &'static str, path: &'static str) -> Self {
        Self { name, path, requires_auth: false }
    }

    pub const fn protected(name: &'static str, path: &'static str) -> Self {
        Self { name, path, requires_auth: true }
    }

    /// Exact match, or `path` is a parent segment of `target`.
    fn covers(&self, target: &str) -> bool {
        if self.path == target {
            return true;
        }
        self.path != HOME_PATH
            && target
                .strip_prefix(self.path)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    Allow,
    Redirect(&'static str),
}

/// Immutable route table plus the landing routes used for redirects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
    public_landing: &'static str,
    login: &'static str,
    protected_landing: &'static str,
}

impl Default for RouteTable {
    /// `home`, `login`, `colleges` (protected) and `test`.
    fn default() -> Self {
        Self::new(vec![
            RouteDescriptor::public("home", HOME_PATH),
            RouteDescriptor::public("login", LOGIN_PATH),
            RouteDescriptor::protected("colleges", COLLEGES_PATH),
            RouteDescriptor::public("test", TEST_PATH),
        ])
    }
}

impl RouteTable {
    pub fn new(routes: Vec<RouteDescriptor>) -> Self {
        Self { routes, public_landing: HOME_PATH, login: LOGIN_PATH, protected_landing: COLLEGES_PATH }
    }

    #[must_use]
    pub fn with_landings(
        mut self,
        public_landing: &'static str,
        login: &'static str,
        protected_landing: &'static str,
    ) -> Self {
        self.public_landing = public_landing;
        self.login = login;
        self.protected_landing = protected_landing;
        self
    }

    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    #[cfg(test)]
    pub(crate) fn find(&self, name: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// True if any route matching `path` (itself or a parent) requires auth.
    pub fn requires_auth(&self, path: &str) -> bool {
        let target = normalize(path);
        self.routes
            .iter()
            .any(|r| r.requires_auth && r.covers(target))
    }

    /// Evaluate the guard for a navigation to `path`.
    ///
    /// 1. protected target while unauthenticated: public landing
    /// 2. login target while authenticated: protected landing
    /// 3. anything else proceeds
    pub fn decide(&self, path: &str, authenticated: bool) -> NavigationDecision {
        if self.requires_auth(path) && !authenticated {
            NavigationDecision::Redirect(self.public_landing)
        } else if normalize(path) == self.login && authenticated {
            NavigationDecision::Redirect(self.protected_landing)
        } else {
            NavigationDecision::Allow
        }
    }
}

/// Drop query, fragment and trailing slashes; empty becomes `/`.
fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { HOME_PATH } else { trimmed }
}
