//! Navigation guard run before every route transition.
//!
//! SYSTEM CONTEXT
//! ==============
//! The routed view asks the guard before mounting anything, so a view whose
//! access check fails is never rendered. This is a UX guard only; the API
//! still enforces access on every request.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::fmt;
use std::rc::Rc;

use super::table::{FORBIDDEN_PATH, LOGIN_PATH, Route, is_public};
use crate::state::session::SessionContext;

/// Outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(&'static str),
}

impl Navigation {
    /// Redirect target, or `None` to proceed.
    pub fn target(self) -> Option<&'static str> {
        match self {
            Self::Proceed => None,
            Self::Redirect(path) => Some(path),
        }
    }
}

/// Authentication and role check for route transitions.
#[derive(Clone)]
pub struct NavigationGuard {
    session: SessionContext,
    set_title: Rc<dyn Fn(&str)>,
}

impl fmt::Debug for NavigationGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationGuard")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl NavigationGuard {
    /// Guard that writes page titles to `document.title`.
    pub fn new(session: SessionContext) -> Self {
        Self {
            session,
            set_title: Rc::new(crate::util::document::set_title),
        }
    }

    /// Replace where page titles are written.
    #[must_use]
    pub fn with_title_sink(mut self, sink: impl Fn(&str) + 'static) -> Self {
        self.set_title = Rc::new(sink);
        self
    }

    /// Access decision for `to`, without side effects.
    pub fn decide(&self, to: &Route<'_>) -> Navigation {
        let auth_required = !is_public(to.path);
        if auth_required && !self.session.is_logged_in() {
            return Navigation::Redirect(LOGIN_PATH);
        }

        if let Some(required) = to.descriptor.role {
            let role = self.session.role();
            if role.to_lowercase() != required.to_lowercase() {
                return Navigation::Redirect(FORBIDDEN_PATH);
            }
        }

        Navigation::Proceed
    }

    /// Apply the target's title, then call `next` exactly once: with `None`
    /// to proceed or with the redirect target.
    pub fn before_each<F>(&self, to: &Route<'_>, from: Option<&Route<'_>>, next: F)
    where
        F: FnOnce(Option<&'static str>),
    {
        if let Some(title) = to.descriptor.title {
            (self.set_title)(title);
        }

        let decision = self.decide(to);
        let from_path = from.map_or("<start>", |route| route.path);
        match decision {
            Navigation::Proceed => log::debug!("guard: {from_path} -> {} allowed", to.path),
            Navigation::Redirect(target) => {
                log::debug!("guard: {from_path} -> {} redirected to {target}", to.path);
            }
        }
        next(decision.target());
    }
}
