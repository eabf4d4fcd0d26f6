//! Guarded outlet rendering the page for the current location.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every location, matched or not, renders through [`RoutedView`]. It resolves
//! the path against the static route table and asks the navigation guard
//! before building any page, so a page whose access check fails never runs.

#[cfg(test)]
#[path = "routed_view_test.rs"]
mod routed_view_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::pages::{
    about_me::AboutMePage, home::HomePage, login::LoginPage, register::RegisterPage,
    status::{ForbiddenPage, NotFoundPage},
};
use crate::router::{NavigationGuard, ResolvedRoute, ViewId, resolve};

/// Where the router must go instead of rendering `to`, if anywhere.
///
/// Runs the guard (which also applies the page title). A proceed decision on a
/// route reached through a declared redirect still moves the browser to the
/// redirect target.
pub fn redirect_for(
    guard: &NavigationGuard,
    to: &ResolvedRoute,
    from: Option<&ResolvedRoute>,
) -> Option<String> {
    let from_route = from.map(ResolvedRoute::as_route);
    let mut target = None;
    guard.before_each(&to.as_route(), from_route.as_ref(), |redirect| {
        target = redirect.map(str::to_owned);
    });
    target.or_else(|| to.redirected_from.as_ref().map(|_| to.path.clone()))
}

/// Page component for a view identifier.
fn page_for(view: ViewId) -> AnyView {
    match view {
        ViewId::Home => view! { <HomePage/> }.into_any(),
        ViewId::Login => view! { <LoginPage/> }.into_any(),
        ViewId::Register => view! { <RegisterPage/> }.into_any(),
        ViewId::AboutMe => view! { <AboutMePage/> }.into_any(),
        ViewId::Forbidden => view! { <ForbiddenPage/> }.into_any(),
        ViewId::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}

#[component]
pub fn RoutedView() -> impl IntoView {
    let guard = expect_context::<StoredValue<NavigationGuard, LocalStorage>>();
    let location = use_location();
    let previous = StoredValue::new(None::<ResolvedRoute>);

    move || {
        let resolved = resolve(&location.pathname.get());
        let from = previous.get_value();
        let redirect = guard.with_value(|g| redirect_for(g, &resolved, from.as_ref()));
        previous.set_value(Some(resolved.clone()));

        match redirect {
            Some(path) => view! { <Redirect path=path/> }.into_any(),
            None => page_for(resolved.descriptor.view),
        }
    }
}
