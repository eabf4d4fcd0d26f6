//! Home page with the current role and a sign-out action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_session;
use crate::router::table::LOGIN_PATH;
use crate::state::session::SessionContext;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let role = session.with_value(SessionContext::role);

    let on_sign_out = move |_| {
        session.with_value(SessionContext::sign_out);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="home-page">
            <h1>"Home"</h1>
            <p class="home-page__role">"Signed in as " {role}</p>
            <button class="btn" on:click=on_sign_out>"Sign out"</button>
        </div>
    }
}
