use super::*;

#[test]
fn protected_route_unauthenticated_redirects_home() {
    let table = RouteTable::default();
    for path in ["/colleges", "/colleges/", "/colleges?page=2", "/colleges/42"] {
        assert_eq!(table.decide(path, false), NavigationDecision::Redirect(HOME_PATH), "path {path}");
    }
}

#[test]
fn every_protected_route_redirects_when_unauthenticated() {
    let table = RouteTable::new(vec![
        RouteDescriptor::public("home", HOME_PATH),
        RouteDescriptor::protected("colleges", "/colleges"),
        RouteDescriptor::protected("reports", "/reports"),
        RouteDescriptor::protected("login", LOGIN_PATH),
    ]);
    for route in table.routes().iter().filter(|r| r.requires_auth) {
        assert_eq!(table.decide(route.path, false), NavigationDecision::Redirect(HOME_PATH));
    }
}

#[test]
fn protected_route_authenticated_is_allowed() {
    assert_eq!(RouteTable::default().decide("/colleges", true), NavigationDecision::Allow);
}

#[test]
fn login_while_authenticated_redirects_to_protected_landing() {
    let table = RouteTable::default();
    assert_eq!(table.decide("/login", true), NavigationDecision::Redirect(COLLEGES_PATH));
    assert_eq!(table.decide("/login/", true), NavigationDecision::Redirect(COLLEGES_PATH));
}

#[test]
fn login_while_unauthenticated_is_allowed() {
    assert_eq!(RouteTable::default().decide("/login", false), NavigationDecision::Allow);
}

#[test]
fn public_and_unknown_routes_are_allowed() {
    let table = RouteTable::default();
    for authenticated in [false, true] {
        for path in ["/", "", "/test", "/nowhere", "/collegesx"] {
            assert_eq!(table.decide(path, authenticated), NavigationDecision::Allow, "path {path}");
        }
    }
}

#[test]
fn protected_rule_wins_over_login_rule() {
    let table = RouteTable::new(vec![RouteDescriptor::protected("login", LOGIN_PATH)]);
    assert_eq!(table.decide(LOGIN_PATH, false), NavigationDecision::Redirect(HOME_PATH));
}

#[test]
fn custom_landings_are_used() {
    let table = RouteTable::default().with_landings("/welcome", "/signin", "/dashboard");
    assert_eq!(table.decide("/colleges", false), NavigationDecision::Redirect("/welcome"));
    assert_eq!(table.decide("/signin", true), NavigationDecision::Redirect("/dashboard"));
    assert_eq!(table.decide("/login", true), NavigationDecision::Allow);
}

#[test]
fn find_looks_up_by_name() {
    let table = RouteTable::default();
    assert_eq!(table.find("colleges").map(|r| r.requires_auth), Some(true));
    assert_eq!(table.find("home").map(|r| r.path), Some(HOME_PATH));
    assert!(table.find("missing").is_none());
}
