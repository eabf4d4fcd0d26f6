//! Login page.

use leptos::prelude::*;

use crate::router::table::REGISTER_PATH;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <h1>"Sign in"</h1>
            <a href=REGISTER_PATH class="login-page__register">"Create an account"</a>
        </div>
    }
}
