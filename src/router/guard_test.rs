use std::cell::{Cell, RefCell};

use super::*;
use crate::router::table::{NOT_FOUND, PUBLIC_PATHS, ROUTES, RouteDescriptor, ViewId, resolve};

const ADMIN_PAGE: RouteDescriptor = RouteDescriptor {
    path: "/admin",
    view: ViewId::Home,
    title: Some("Admin"),
    role: Some("admin"),
    redirect: None,
};

fn admin_route() -> Route<'static> {
    Route {
        path: "/admin",
        descriptor: &ADMIN_PAGE,
        redirected_from: None,
    }
}

fn guard() -> (SessionContext, NavigationGuard) {
    let session = SessionContext::in_memory();
    let guard = NavigationGuard::new(session.clone()).with_title_sink(|_| {});
    (session, guard)
}

/// Run `before_each` and return every argument `next` was called with.
fn run(guard: &NavigationGuard, to: &Route<'_>) -> Vec<Option<&'static str>> {
    let calls = RefCell::new(Vec::new());
    guard.before_each(to, None, |target| calls.borrow_mut().push(target));
    calls.into_inner()
}

// =============================================================
// Authentication
// =============================================================

#[test]
fn public_paths_proceed_without_credential() {
    let (_, guard) = guard();
    for path in PUBLIC_PATHS {
        let route = resolve(path);
        assert_eq!(guard.decide(&route.as_route()), Navigation::Proceed, "{path}");
    }
}

#[test]
fn public_paths_proceed_with_credential() {
    let (session, guard) = guard();
    session.sign_in("tok", None, None);
    for path in PUBLIC_PATHS {
        let route = resolve(path);
        assert_eq!(guard.decide(&route.as_route()), Navigation::Proceed, "{path}");
    }
}

#[test]
fn protected_paths_redirect_to_login_without_credential() {
    let (_, guard) = guard();
    for path in ["/", "/home", "/aboutme", "/403", "/does-not-exist"] {
        let route = resolve(path);
        assert_eq!(run(&guard, &route.as_route()), vec![Some("/login")], "{path}");
    }
}

#[test]
fn protected_paths_proceed_with_credential() {
    let (session, guard) = guard();
    session.sign_in("tok", None, None);
    for descriptor in ROUTES.iter().chain([&NOT_FOUND]) {
        let route = Route {
            path: descriptor.path,
            descriptor,
            redirected_from: None,
        };
        assert_eq!(guard.decide(&route), Navigation::Proceed, "{}", descriptor.path);
    }
}

#[test]
fn expired_session_loses_access() {
    let (session, guard) = guard();
    session.sign_in("tok", None, Some("{}"));
    session.clear_expired();
    let route = resolve("/aboutme");
    assert_eq!(guard.decide(&route.as_route()), Navigation::Redirect("/login"));
}

// =============================================================
// Roles
// =============================================================

#[test]
fn role_mismatch_redirects_to_forbidden_even_when_logged_in() {
    let (session, guard) = guard();
    session.sign_in("tok", Some("editor"), None);
    assert_eq!(run(&guard, &admin_route()), vec![Some("/403")]);
}

#[test]
fn missing_role_is_guest_and_is_forbidden() {
    let (session, guard) = guard();
    session.sign_in("tok", None, None);
    assert_eq!(guard.decide(&admin_route()), Navigation::Redirect("/403"));
}

#[test]
fn role_comparison_ignores_case() {
    let (session, guard) = guard();
    session.sign_in("tok", Some("Admin"), None);
    assert_eq!(guard.decide(&admin_route()), Navigation::Proceed);

    session.sign_in("tok", Some("ADMIN"), None);
    assert_eq!(guard.decide(&admin_route()), Navigation::Proceed);
}

#[test]
fn missing_credential_wins_over_role_check() {
    let (session, guard) = guard();
    session.sign_in("tok", Some("admin"), None);
    session.clear_expired();
    assert_eq!(guard.decide(&admin_route()), Navigation::Redirect("/login"));
}

#[test]
fn guest_requirement_matches_default_role() {
    const GUEST_PAGE: RouteDescriptor = RouteDescriptor {
        path: "/lobby",
        view: ViewId::Home,
        title: None,
        role: Some("Guest"),
        redirect: None,
    };
    let (session, guard) = guard();
    session.sign_in("tok", None, None);
    let route = Route {
        path: "/lobby",
        descriptor: &GUEST_PAGE,
        redirected_from: None,
    };
    assert_eq!(guard.decide(&route), Navigation::Proceed);
}

// =============================================================
// Continuation contract
// =============================================================

#[test]
fn next_is_called_exactly_once_per_invocation() {
    let (session, guard) = guard();
    let cases: [(Option<&str>, Route<'static>); 3] = [
        (None, admin_route()),
        (Some("guest"), admin_route()),
        (Some("admin"), admin_route()),
    ];
    for (role, route) in cases {
        session.sign_out();
        if role.is_some() {
            session.sign_in("tok", role, None);
        }
        let count = Cell::new(0);
        guard.before_each(&route, None, |_| count.set(count.get() + 1));
        assert_eq!(count.get(), 1, "role {role:?}");
    }
}

#[test]
fn proceed_calls_next_without_target() {
    let (_, guard) = guard();
    let route = resolve("/login");
    assert_eq!(run(&guard, &route.as_route()), vec![None]);
}

#[test]
fn before_each_receives_from_route() {
    let (session, guard) = guard();
    session.sign_in("tok", None, None);
    let from = resolve("/home");
    let to = resolve("/aboutme");
    let calls = Cell::new(0);
    guard.before_each(&to.as_route(), Some(&from.as_route()), |target| {
        assert_eq!(target, None);
        calls.set(calls.get() + 1);
    });
    assert_eq!(calls.get(), 1);
}

// =============================================================
// Title
// =============================================================

#[test]
fn title_is_applied_even_when_redirecting() {
    let titles = Rc::new(RefCell::new(Vec::new()));
    let sink = titles.clone();
    let guard = NavigationGuard::new(SessionContext::in_memory())
        .with_title_sink(move |title| sink.borrow_mut().push(title.to_owned()));

    let route = resolve("/aboutme");
    assert_eq!(run(&guard, &route.as_route()), vec![Some("/login")]);
    assert_eq!(*titles.borrow(), vec!["About Me".to_owned()]);
}

#[test]
fn untitled_route_leaves_title_alone() {
    let titles = Rc::new(RefCell::new(Vec::new()));
    let sink = titles.clone();
    let guard = NavigationGuard::new(SessionContext::in_memory())
        .with_title_sink(move |title| sink.borrow_mut().push(title.to_owned()));

    let route = resolve("/missing");
    run(&guard, &route.as_route());
    assert!(titles.borrow().is_empty());
}
