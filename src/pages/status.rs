//! Error status pages: forbidden and not found.

use leptos::prelude::*;

#[component]
pub fn ForbiddenPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <h1>"403"</h1>
            <p>"You do not have access to this page."</p>
            <a href="/home">"Back to home"</a>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <h1>"404"</h1>
            <p>"Page not found."</p>
            <a href="/home">"Back to home"</a>
        </div>
    }
}
