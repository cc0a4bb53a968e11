//! Reconciliation Drivers
//!
//! [`TodoActions`] issues the remote calls and folds each settled result
//! back into the store. Provided via context so any component can invoke
//! an operation; completions interleave freely and are applied in the
//! order they resolve.
//!
//! Propagation policy: `create` and `update_title` return the failure to
//! the caller (the input affordances react to it); delete/toggle variants
//! only record shared error state.

use futures::future::join_all;
use leptos::prelude::*;

use crate::api::{self, ApiError, TodoPayload};
use crate::models::{ErrorMessage, Todo};
use crate::store::AppStore;

#[derive(Clone, Copy)]
pub struct TodoActions {
    store: AppStore,
}

impl TodoActions {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    /// Fetch the whole collection once at session start. No retry.
    pub async fn load(self) {
        match api::get_todos().await {
            Ok(todos) => {
                web_sys::console::log_1(&format!("[APP] Loaded {} todos", todos.len()).into());
                self.store.write().loaded(todos);
            }
            Err(err) => {
                web_sys::console::log_1(&format!("[APP] Load failed: {}", err).into());
                self.store.write().load_failed();
            }
        }
    }

    /// Create a todo with an already-trimmed, non-empty title.
    ///
    /// Shows the optimistic draft row until the request settles; the draft
    /// is dropped on either outcome. Failure is re-signaled so the input
    /// can keep its text.
    pub async fn create(self, title: String) -> Result<(), ApiError> {
        let payload = TodoPayload {
            user_id: api::USER_ID,
            title: title.clone(),
            completed: false,
        };
        self.store.write().begin_create(Todo {
            id: 0,
            user_id: api::USER_ID,
            title,
            completed: false,
        });

        match api::add_todo(&payload).await {
            Ok(todo) => {
                self.store.write().created(todo);
                Ok(())
            }
            Err(err) => {
                self.store.write().create_failed();
                Err(err)
            }
        }
    }

    pub async fn delete(self, id: u64) {
        self.store.write().begin_mutation(id);
        match api::delete_todo(id).await {
            Ok(()) => self.store.write().deleted(id),
            Err(_) => self.store.write().delete_failed(),
        }
    }

    /// Delete every completed todo; each deletion settles independently.
    pub async fn clear_completed(self) {
        let ids = self.store.read_untracked().completed_ids();
        join_all(ids.into_iter().map(|id| self.delete(id))).await;
    }

    /// Flip one todo's status. The remote update replaces all mutable
    /// fields, so the payload is rebuilt from present local state.
    pub async fn toggle(self, id: u64, completed: bool) {
        self.store.write().begin_mutation(id);

        let payload = self.store.read_untracked().find(id).map(|todo| TodoPayload {
            user_id: todo.user_id,
            title: todo.title.clone(),
            completed,
        });
        let Some(payload) = payload else {
            // deleted out from under us while the toggle was being issued
            self.store.write().settle_mutation(id);
            return;
        };

        match api::update_todo(id, &payload).await {
            Ok(todo) => self.store.write().updated(todo),
            Err(_) => self.store.write().update_failed(),
        }
        self.store.write().settle_mutation(id);
    }

    /// If every todo is completed, set all active; otherwise complete all.
    /// After the per-item updates settle, the target status is forced onto
    /// local state regardless of individual outcomes.
    pub async fn toggle_all(self) {
        let (target, pending) = {
            let state = self.store.read_untracked();
            let target = state.toggle_all_target();
            let pending: Vec<u64> = state
                .todos
                .iter()
                .filter(|todo| todo.completed != target)
                .map(|todo| todo.id)
                .collect();
            (target, pending)
        };

        join_all(pending.into_iter().map(|id| self.toggle(id, target))).await;
        self.store.write().force_completed(target);
    }

    /// Rename a todo to an already-trimmed, non-empty title. Failure is
    /// re-signaled so the edit field can stay open and regain focus.
    pub async fn update_title(self, id: u64, new_title: String) -> Result<(), ApiError> {
        self.store.write().begin_mutation(id);

        let payload = self.store.read_untracked().find(id).map(|todo| TodoPayload {
            user_id: todo.user_id,
            title: new_title.clone(),
            completed: todo.completed,
        });
        let Some(payload) = payload else {
            self.store.write().settle_mutation(id);
            return Ok(());
        };

        let result = match api::update_todo(id, &payload).await {
            Ok(todo) => {
                self.store.write().updated(todo);
                Ok(())
            }
            Err(err) => {
                self.store.write().update_failed();
                Err(err)
            }
        };
        self.store.write().settle_mutation(id);
        result
    }

    /// Raise a validation error without touching the remote store
    pub fn show_error(self, error: ErrorMessage) {
        self.store.write().set_error(error);
    }

    pub fn dismiss_error(self) {
        self.store.write().clear_error();
    }
}

/// Get the actions handle from context
pub fn use_todo_actions() -> TodoActions {
    expect_context::<TodoActions>()
}
