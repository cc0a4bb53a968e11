//! Error Notification Component
//!
//! Banner for the active error classification. Auto-dismisses after a
//! fixed duration; setting a new error restarts the timer and a manual
//! dismiss cancels it. Both are handled by comparing the error epoch a
//! pending timer captured against the current one.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::use_todo_actions;
use crate::store::{use_app_store, AppStateStoreFields};

/// How long the banner stays up before dismissing itself
const AUTO_DISMISS_MS: u32 = 3000;

#[component]
pub fn ErrorNotification() -> impl IntoView {
    let store = use_app_store();
    let actions = use_todo_actions();

    Effect::new(move |_| {
        // track the epoch: every set/clear schedules a fresh check
        let epoch = store.error_epoch().get();
        if store.error().read().is_none() {
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            // stale timers (replaced or dismissed error) fall through
            if store.error_epoch().get_untracked() == epoch {
                actions.dismiss_error();
            }
        });
    });

    view! {
        <div class=move || {
            if store.error().read().is_some() {
                "notification is-danger is-light has-text-weight-normal"
            } else {
                "notification is-danger is-light has-text-weight-normal hidden"
            }
        }>
            <button
                type="button"
                class="delete"
                on:click=move |_| actions.dismiss_error()
            />
            {move || store.error().get().map(|error| error.message())}
        </div>
    }
}
