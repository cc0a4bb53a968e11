//! Temp Todo Component
//!
//! The optimistic draft row shown while a create request is outstanding.
//! Always renders its loader overlay active; the checkbox is inert.

use leptos::prelude::*;

use crate::models::Todo;

#[component]
pub fn TempTodo(todo: Todo) -> impl IntoView {
    let completed = todo.completed;
    let title = todo.title;

    view! {
        <div class=if completed { "todo completed" } else { "todo" }>
            <label class="todo__status-label">
                <input
                    type="checkbox"
                    class="todo__status"
                    checked=completed
                    disabled=true
                />
            </label>

            <span class="todo__title">{title}</span>

            <div class="modal overlay is-active">
                <div class="modal-background has-background-white-ter" />
                <div class="loader" />
            </div>
        </div>
    }
}
