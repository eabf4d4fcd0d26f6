//! "About me" page showing the cached user profile, if any.

use leptos::prelude::*;

use crate::app::use_session;
use crate::state::session::SessionContext;

#[component]
pub fn AboutMePage() -> impl IntoView {
    let session = use_session();
    let profile = session
        .with_value(SessionContext::user_info)
        .unwrap_or_else(|| "No profile cached.".to_owned());

    view! {
        <div class="about-page">
            <h1>"About Me"</h1>
            <pre class="about-page__profile">{profile}</pre>
        </div>
    }
}
