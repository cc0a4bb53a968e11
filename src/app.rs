//! Todo Sync App
//!
//! Root component: owns the store and the actions handle, reads the
//! initial filter from the URL fragment, and kicks off the initial load.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions::TodoActions;
use crate::api;
use crate::components::{ErrorNotification, Footer, Header, TodoList, UserWarning};
use crate::models::Filter;
use crate::store::{AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    // Startup guard: without an owner id the core never mounts
    if api::USER_ID == 0 {
        return view! { <UserWarning /> }.into_any();
    }

    let store: AppStore = Store::new(AppState::default());
    let actions = TodoActions::new(store);
    provide_context(store);
    provide_context(actions);

    // Deep-linked filter from the fragment, e.g. #/active
    let hash = web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default();
    store.filter().set(Filter::from_hash(&hash));

    // Load the collection on mount
    Effect::new(move |_| {
        spawn_local(async move {
            actions.load().await;
        });
    });

    let has_todos = move || !store.todos().read().is_empty();

    view! {
        <div class="todoapp">
            <h1 class="todoapp__title">"todos"</h1>

            <div class="todoapp__content">
                <Header />

                <Show when=has_todos>
                    <TodoList />
                    <Footer />
                </Show>
            </div>

            <ErrorNotification />
        </div>
    }
    .into_any()
}
