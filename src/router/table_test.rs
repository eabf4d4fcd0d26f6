use super::*;

// =============================================================
// normalize_path
// =============================================================

#[test]
fn normalize_strips_query_fragment_and_trailing_slash() {
    assert_eq!(normalize_path("/login/?next=/home#top"), "/login");
    assert_eq!(normalize_path("/aboutme#bio"), "/aboutme");
}

#[test]
fn normalize_keeps_root_and_adds_leading_slash() {
    assert_eq!(normalize_path(""), "/");
    assert_eq!(normalize_path("///"), "/");
    assert_eq!(normalize_path("home"), "/home");
}

// =============================================================
// resolve
// =============================================================

#[test]
fn root_redirects_to_home() {
    let route = resolve("/");
    assert_eq!(route.path, "/home");
    assert_eq!(route.descriptor.view, ViewId::Home);
    assert_eq!(route.redirected_from.as_deref(), Some("/"));
}

#[test]
fn declared_paths_resolve_to_their_views() {
    let cases = [
        ("/home", ViewId::Home),
        ("/login", ViewId::Login),
        ("/register", ViewId::Register),
        ("/aboutme", ViewId::AboutMe),
        ("/403", ViewId::Forbidden),
    ];
    for (path, view) in cases {
        let route = resolve(path);
        assert_eq!(route.descriptor.view, view, "{path}");
        assert_eq!(route.path, path);
        assert_eq!(route.redirected_from, None);
    }
}

#[test]
fn unmatched_path_resolves_to_not_found_and_keeps_path() {
    let route = resolve("/no/such/page?x=1");
    assert_eq!(route.descriptor.view, ViewId::NotFound);
    assert_eq!(route.path, "/no/such/page");
}

#[test]
fn matching_is_case_sensitive() {
    assert_eq!(resolve("/Login").descriptor.view, ViewId::NotFound);
}

#[test]
fn titles_follow_the_table() {
    assert_eq!(resolve("/home").descriptor.title, Some("Home"));
    assert_eq!(resolve("/aboutme").descriptor.title, Some("About Me"));
    assert_eq!(resolve("/missing").descriptor.title, None);
}

#[test]
fn declared_routes_carry_no_role_requirement() {
    assert!(ROUTES.iter().all(|route| route.role.is_none()));
    assert!(NOT_FOUND.role.is_none());
}

#[test]
fn redirect_targets_exist_in_table() {
    for route in ROUTES {
        if let Some(target) = route.redirect {
            assert!(find(target).is_some(), "dangling redirect {target}");
        }
    }
}

// =============================================================
// is_public
// =============================================================

#[test]
fn login_and_register_are_public() {
    assert!(is_public("/login"));
    assert!(is_public("/register/"));
}

#[test]
fn everything_else_requires_auth() {
    for path in ["/", "/home", "/aboutme", "/403", "/unknown"] {
        assert!(!is_public(path), "{path}");
    }
}
