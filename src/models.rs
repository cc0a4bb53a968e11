//! Frontend Models
//!
//! Data structures matching the remote collection API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Todo data structure (matches the remote record)
///
/// `id == 0` is reserved for the optimistic draft shown while a create
/// request is outstanding; a persisted todo always has a server-assigned
/// positive id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub completed: bool,
}

/// Status filter over the todo list.
///
/// UI-only state, reflected in the URL fragment for deep-linking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: &'static [Filter] = &[Filter::All, Filter::Active, Filter::Completed];

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// URL fragment for this filter
    pub fn hash(self) -> &'static str {
        match self {
            Filter::All => "#/",
            Filter::Active => "#/active",
            Filter::Completed => "#/completed",
        }
    }

    /// Parse a `location.hash` value; anything unrecognized falls back to All
    pub fn from_hash(hash: &str) -> Filter {
        match hash {
            "#/active" => Filter::Active,
            "#/completed" => Filter::Completed,
            _ => Filter::All,
        }
    }
}

/// Closed set of user-facing error classifications.
///
/// At most one is active at a time; the banner shows its message until it
/// auto-dismisses or is dismissed manually.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMessage {
    UnableToLoad,
    TitleNotEmpty,
    UnableToAdd,
    UnableToDelete,
    UnableToUpdate,
}

impl ErrorMessage {
    pub fn message(self) -> &'static str {
        match self {
            ErrorMessage::UnableToLoad => "Unable to load todos",
            ErrorMessage::TitleNotEmpty => "Title should not be empty",
            ErrorMessage::UnableToAdd => "Unable to add a todo",
            ErrorMessage::UnableToDelete => "Unable to delete a todo",
            ErrorMessage::UnableToUpdate => "Unable to update a todo",
        }
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
