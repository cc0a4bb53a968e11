//! User Warning Component
//!
//! Static view shown instead of the app when no owner id is configured.

use leptos::prelude::*;

#[component]
pub fn UserWarning() -> impl IntoView {
    view! {
        <section class="section">
            <p class="box is-size-3">
                "Please set "
                <b>"USER_ID"</b>
                " in " <code>"src/api.rs"</code>
                ". All requests to the API are scoped to that user."
            </p>
        </section>
    }
}
