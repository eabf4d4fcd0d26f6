//! Registration page.

use leptos::prelude::*;

use crate::router::table::LOGIN_PATH;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="register-page">
            <h1>"Register"</h1>
            <a href=LOGIN_PATH>"Already have an account? Sign in"</a>
        </div>
    }
}
