//! Todo Item Component
//!
//! A single row: status checkbox, title (double-click to edit), delete
//! button, and a loader overlay while the row's id is in flight.
//!
//! Edit state machine: Viewing -> (double-click) -> Editing; Enter or blur
//! commits, Escape reverts. Committing the unchanged title just exits edit
//! mode; committing an empty title deletes the todo; a failed rename keeps
//! the editor open and refocuses it.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::actions::use_todo_actions;
use crate::models::Todo;
use crate::store::{use_app_store, AppStateStoreFields};

/// What committing an edited title should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Trimmed text equals the current title: exit edit mode, no remote call
    Keep,
    /// Trimmed text is empty: delete the todo instead of updating it
    Delete,
    /// Rename to the trimmed text
    Rename(String),
}

pub fn edit_outcome(current_title: &str, entered: &str) -> EditOutcome {
    let trimmed = entered.trim();
    if trimmed == current_title {
        EditOutcome::Keep
    } else if trimmed.is_empty() {
        EditOutcome::Delete
    } else {
        EditOutcome::Rename(trimmed.to_string())
    }
}

#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let store = use_app_store();
    let actions = use_todo_actions();

    let id = todo.id;
    let completed = todo.completed;
    let title = todo.title;

    let (editing, set_editing) = signal(false);
    let (draft_title, set_draft_title) = signal(title.clone());
    let edit_ref = NodeRef::<html::Input>::new();

    let is_loading = move || store.in_flight().read().contains(&id);

    // Focus the edit field whenever edit mode opens
    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = edit_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let commit = {
        let title = title.clone();
        move || match edit_outcome(&title, &draft_title.get_untracked()) {
            EditOutcome::Keep => set_editing.set(false),
            EditOutcome::Delete => {
                spawn_local(async move {
                    actions.delete(id).await;
                });
            }
            EditOutcome::Rename(new_title) => {
                spawn_local(async move {
                    match actions.update_title(id, new_title).await {
                        Ok(()) => set_editing.set(false),
                        Err(_) => {
                            // stay in edit mode so the user can retry
                            if let Some(input) = edit_ref.get_untracked() {
                                let _ = input.focus();
                            }
                        }
                    }
                });
            }
        }
    };
    let commit_on_blur = commit.clone();
    let commit_on_key = commit;

    let revert_title = title.clone();
    let display_title = title.clone();

    view! {
        <div class=move || if completed { "todo completed" } else { "todo" }>
            <label class="todo__status-label">
                <input
                    type="checkbox"
                    class="todo__status"
                    checked=completed
                    on:change=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        let checked = input.checked();
                        spawn_local(async move {
                            actions.toggle(id, checked).await;
                        });
                    }
                />
            </label>

            <Show
                when=move || editing.get()
                fallback=move || {
                    let title = display_title.clone();
                    view! {
                        <span
                            class="todo__title"
                            on:dblclick=move |_| set_editing.set(true)
                        >
                            {title}
                        </span>
                        <button
                            type="button"
                            class="todo__remove"
                            on:click=move |_| {
                                spawn_local(async move {
                                    actions.delete(id).await;
                                });
                            }
                        >
                            "×"
                        </button>
                    }
                }
            >
                <input
                    type="text"
                    class="todo__title-field"
                    placeholder="Empty todo will be deleted"
                    node_ref=edit_ref
                    prop:value=move || draft_title.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_draft_title.set(input.value());
                    }
                    on:blur={
                        let commit = commit_on_blur.clone();
                        move |_| commit()
                    }
                    on:keyup={
                        let commit = commit_on_key.clone();
                        let revert = revert_title.clone();
                        move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                            "Enter" => commit(),
                            "Escape" => {
                                set_draft_title.set(revert.clone());
                                set_editing.set(false);
                            }
                            _ => {}
                        }
                    }
                />
            </Show>

            <div class=move || {
                if is_loading() {
                    "modal overlay is-active"
                } else {
                    "modal overlay"
                }
            }>
                <div class="modal-background has-background-white-ter" />
                <div class="loader" />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_title_is_a_no_op() {
        assert_eq!(edit_outcome("buy milk", "buy milk"), EditOutcome::Keep);
        assert_eq!(edit_outcome("buy milk", "  buy milk  "), EditOutcome::Keep);
    }

    #[test]
    fn empty_title_turns_into_delete() {
        assert_eq!(edit_outcome("buy milk", ""), EditOutcome::Delete);
        assert_eq!(edit_outcome("buy milk", "   "), EditOutcome::Delete);
    }

    #[test]
    fn changed_title_is_renamed_trimmed() {
        assert_eq!(
            edit_outcome("buy milk", "  buy bread "),
            EditOutcome::Rename("buy bread".to_string())
        );
    }
}
