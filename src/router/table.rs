//! Static route table and path resolution.
//!
//! DESIGN
//! ======
//! The table is a fixed list of [`RouteDescriptor`] records consumed by the
//! navigation guard and the routed view. Nothing mutates it at runtime; paths
//! that match no record resolve to the not-found descriptor, which still
//! requires authentication.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

/// Login page path; unauthenticated navigation is sent here.
pub const LOGIN_PATH: &str = "/login";
/// Registration page path.
pub const REGISTER_PATH: &str = "/register";
/// Forbidden page path; role mismatches are sent here.
pub const FORBIDDEN_PATH: &str = "/403";

/// Paths reachable without a session credential.
pub const PUBLIC_PATHS: &[&str] = &[LOGIN_PATH, REGISTER_PATH];

/// View rendered for a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewId {
    Home,
    Login,
    Register,
    AboutMe,
    Forbidden,
    NotFound,
}

/// One entry in the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub view: ViewId,
    /// Page title applied on navigation.
    pub title: Option<&'static str>,
    /// Role the stored user role must match (case-insensitively).
    pub role: Option<&'static str>,
    /// Navigating here lands on this path instead.
    pub redirect: Option<&'static str>,
}

impl RouteDescriptor {
    const fn page(path: &'static str, view: ViewId, title: &'static str) -> Self {
        Self {
            path,
            view,
            title: Some(title),
            role: None,
            redirect: None,
        }
    }
}

pub static ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor {
        path: "/",
        view: ViewId::Home,
        title: None,
        role: None,
        redirect: Some("/home"),
    },
    RouteDescriptor::page("/home", ViewId::Home, "Home"),
    RouteDescriptor::page(LOGIN_PATH, ViewId::Login, "Login"),
    RouteDescriptor::page("/aboutme", ViewId::AboutMe, "About Me"),
    RouteDescriptor::page(REGISTER_PATH, ViewId::Register, "Register"),
    RouteDescriptor::page(FORBIDDEN_PATH, ViewId::Forbidden, "Forbidden"),
];

/// Catch-all for unmatched paths.
pub static NOT_FOUND: RouteDescriptor = RouteDescriptor {
    path: "/*any",
    view: ViewId::NotFound,
    title: None,
    role: None,
    redirect: None,
};

/// A navigation target resolved against a route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route<'a> {
    /// Normalized path actually landed on (after any redirect).
    pub path: &'a str,
    pub descriptor: &'a RouteDescriptor,
    /// Normalized path originally requested, when a redirect was followed.
    pub redirected_from: Option<&'a str>,
}

/// Owned form of [`Route`] for callers that outlive the request string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub path: String,
    pub descriptor: &'static RouteDescriptor,
    pub redirected_from: Option<String>,
}

impl ResolvedRoute {
    pub fn as_route(&self) -> Route<'_> {
        Route {
            path: &self.path,
            descriptor: self.descriptor,
            redirected_from: self.redirected_from.as_deref(),
        }
    }
}

/// Strip query string and fragment, ensure a leading slash, and drop a
/// trailing slash (except on the root).
pub fn normalize_path(raw: &str) -> String {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let path = raw[..end].trim();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}

/// Exact-match lookup of an already normalized path.
pub fn find(path: &str) -> Option<&'static RouteDescriptor> {
    ROUTES.iter().find(|route| route.path == path)
}

/// Resolve a requested location to the descriptor that will handle it,
/// following at most one declared redirect.
pub fn resolve(raw: &str) -> ResolvedRoute {
    let requested = normalize_path(raw);
    let Some(descriptor) = find(&requested) else {
        return ResolvedRoute {
            path: requested,
            descriptor: &NOT_FOUND,
            redirected_from: None,
        };
    };
    match descriptor.redirect {
        Some(target) => ResolvedRoute {
            path: target.to_owned(),
            descriptor: find(target).unwrap_or(&NOT_FOUND),
            redirected_from: Some(requested),
        },
        None => ResolvedRoute {
            path: requested,
            descriptor,
            redirected_from: None,
        },
    }
}

/// Whether `path` is in the public allow-list.
pub fn is_public(path: &str) -> bool {
    let path = normalize_path(path);
    PUBLIC_PATHS.contains(&path.as_str())
}
