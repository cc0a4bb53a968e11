//! Header Component
//!
//! Toggle-all button plus the new-todo form. The form validates the title
//! (trim, non-empty) before handing it to the reconciliation core; on a
//! failed create the text stays in the field and focus returns to it.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::actions::use_todo_actions;
use crate::models::ErrorMessage;
use crate::store::{use_app_store, AppStateStoreFields};

/// Trimmed title ready for a create, or None if only whitespace was entered
pub fn new_todo_title(entered: &str) -> Option<String> {
    let trimmed = entered.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let store = use_app_store();
    let actions = use_todo_actions();

    let (title, set_title) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let input_ref = NodeRef::<html::Input>::new();

    // Focus the input on mount and whenever a submission settles
    Effect::new(move |_| {
        if !submitting.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let has_todos = move || !store.todos().read().is_empty();
    let all_completed = move || {
        let todos = store.todos().read();
        !todos.is_empty() && todos.iter().all(|todo| todo.completed)
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(trimmed) = new_todo_title(&title.get()) else {
            actions.show_error(ErrorMessage::TitleNotEmpty);
            return;
        };
        set_submitting.set(true);
        spawn_local(async move {
            // keep the text on failure so the user can retry
            if actions.create(trimmed).await.is_ok() {
                set_title.set(String::new());
            }
            set_submitting.set(false);
            if let Some(input) = input_ref.get_untracked() {
                let _ = input.focus();
            }
        });
    };

    view! {
        <header class="todoapp__header">
            <Show when=has_todos>
                <button
                    type="button"
                    class=move || {
                        if all_completed() {
                            "todoapp__toggle-all active"
                        } else {
                            "todoapp__toggle-all"
                        }
                    }
                    on:click=move |_| {
                        spawn_local(async move {
                            actions.toggle_all().await;
                        });
                    }
                />
            </Show>

            <form on:submit=on_submit>
                <input
                    type="text"
                    class="todoapp__new-todo"
                    placeholder="What needs to be done?"
                    node_ref=input_ref
                    prop:value=move || title.get()
                    prop:disabled=move || submitting.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_title.set(input.value());
                    }
                />
            </form>
        </header>
    }
}
