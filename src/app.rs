//! Root application component with routing and context providers.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::{
    NavigateOptions, StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::routed_view::RoutedView;
use crate::config::AppConfig;
use crate::net::{ApiClient, AuthInterceptor, SessionExpiryInterceptor};
use crate::router::NavigationGuard;
use crate::state::session::SessionContext;
use crate::util::scheduler::Scheduler;

/// Context handle for values that are not `Send` (they share `Rc` state).
pub type Local<T> = StoredValue<T, LocalStorage>;

/// Session context provided by [`App`].
pub fn use_session() -> Local<SessionContext> {
    expect_context::<Local<SessionContext>>()
}

/// API client provided by [`App`].
pub fn use_api() -> Local<ApiClient> {
    expect_context::<Local<ApiClient>>()
}

#[cfg(feature = "csr")]
fn session_context() -> SessionContext {
    SessionContext::browser()
}

#[cfg(not(feature = "csr"))]
fn session_context() -> SessionContext {
    SessionContext::in_memory()
}

#[cfg(feature = "csr")]
fn scheduler() -> Rc<dyn Scheduler> {
    Rc::new(crate::util::scheduler::TimeoutScheduler)
}

#[cfg(not(feature = "csr"))]
fn scheduler() -> Rc<dyn Scheduler> {
    Rc::new(crate::util::scheduler::ManualScheduler::new())
}

/// Root application component.
///
/// Provides the session, guard, and config contexts and sets up client-side
/// routing.
#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    let session = session_context();
    let guard = NavigationGuard::new(session.clone());

    provide_context(Local::new_local(session));
    provide_context(Local::new_local(guard));
    provide_context(Local::new_local(config));

    view! {
        <Router>
            <Shell/>
        </Router>
    }
}

/// Router-scoped shell: builds the API client (its logout redirect needs the
/// router's navigate) and mounts the guarded routes.
#[component]
fn Shell() -> impl IntoView {
    let session = use_session().get_value();
    let config = expect_context::<Local<AppConfig>>().get_value();
    let navigate = use_navigate();

    let expiry = SessionExpiryInterceptor::new(session.clone(), scheduler(), move |path| {
        navigate(path, NavigateOptions::default());
    })
    .with_delay(config.logout_delay_ms);
    let api = ApiClient::new(config, AuthInterceptor::new(session), expiry);
    provide_context(Local::new_local(api));

    view! {
        <Routes fallback=|| view! { <RoutedView/> }>
            <Route path=StaticSegment("") view=RoutedView/>
            <Route path=WildcardSegment("any") view=RoutedView/>
        </Routes>
    }
}
