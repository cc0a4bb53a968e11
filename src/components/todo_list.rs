//! Todo List Component
//!
//! Renders the filtered todos plus the draft row, if any. Filtering
//! produces a view over the collection, never a mutation of it.

use leptos::prelude::*;

use crate::components::{TempTodo, TodoItem};
use crate::filter::filter_todos;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    let visible_todos = move || {
        let filter = store.filter().get();
        filter_todos(&store.todos().read(), filter)
    };

    view! {
        <section class="todoapp__main">
            <For
                each=visible_todos
                // key on every rendered field so remote-confirmed updates
                // rebuild the row
                key=|todo| (todo.id, todo.title.clone(), todo.completed)
                children=move |todo| {
                    view! { <TodoItem todo=todo /> }
                }
            />

            {move || {
                store
                    .temp_todo()
                    .get()
                    .map(|todo| view! { <TempTodo todo=todo /> })
            }}
        </section>
    }
}
