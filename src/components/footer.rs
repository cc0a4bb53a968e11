//! Footer Component
//!
//! Items-left counter, filter links, and the clear-completed button. The
//! links are plain anchors whose href is the URL fragment, so selecting a
//! filter also deep-links it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::use_todo_actions;
use crate::models::Filter;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Footer() -> impl IntoView {
    let store = use_app_store();
    let actions = use_todo_actions();

    let items_left = move || {
        store
            .todos()
            .read()
            .iter()
            .filter(|todo| !todo.completed)
            .count()
    };
    let nothing_completed = move || store.todos().read().iter().all(|todo| !todo.completed);

    view! {
        <footer class="todoapp__footer">
            <span class="todo-count">{move || format!("{} items left", items_left())}</span>

            <nav class="filter">
                {Filter::ALL
                    .iter()
                    .map(|&filter| {
                        let is_selected = move || store.filter().get() == filter;
                        view! {
                            <a
                                href=filter.hash()
                                class=move || {
                                    if is_selected() { "filter__link selected" } else { "filter__link" }
                                }
                                on:click=move |_| store.filter().set(filter)
                            >
                                {filter.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>

            <button
                type="button"
                class="todoapp__clear-completed"
                prop:disabled=nothing_completed
                on:click=move |_| {
                    spawn_local(async move {
                        actions.clear_completed().await;
                    });
                }
            >
                "Clear completed"
            </button>
        </footer>
    }
}
