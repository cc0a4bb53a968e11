//! Filter Predicate
//!
//! Pure view over the todo list; never mutates or reorders the source.

use crate::models::{Filter, Todo};

/// Subsequence of `todos` matching `filter`, in original order
pub fn filter_todos(todos: &[Todo], filter: Filter) -> Vec<Todo> {
    todos
        .iter()
        .filter(|todo| match filter {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u64, completed: bool) -> Todo {
        Todo {
            id,
            user_id: 1,
            title: format!("todo {}", id),
            completed,
        }
    }

    #[test]
    fn all_passes_everything_unchanged() {
        let todos = vec![make_todo(1, false), make_todo(2, true), make_todo(3, false)];
        assert_eq!(filter_todos(&todos, Filter::All), todos);
    }

    #[test]
    fn active_keeps_only_uncompleted() {
        let todos = vec![make_todo(1, false), make_todo(2, true), make_todo(3, false)];
        let ids: Vec<u64> = filter_todos(&todos, Filter::Active)
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn completed_keeps_only_completed() {
        let todos = vec![make_todo(1, false), make_todo(2, true), make_todo(3, true)];
        let ids: Vec<u64> = filter_todos(&todos, Filter::Completed)
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn every_filter_preserves_relative_order() {
        let todos: Vec<Todo> = (1..=6).map(|id| make_todo(id, id % 2 == 0)).collect();
        for filter in Filter::ALL {
            let ids: Vec<u64> = filter_todos(&todos, *filter).iter().map(|t| t.id).collect();
            let mut sorted = ids.clone();
            sorted.sort_unstable();
            assert_eq!(ids, sorted, "filter {:?} reordered the list", filter);
        }
    }

    #[test]
    fn empty_list_filters_to_empty() {
        for filter in Filter::ALL {
            assert!(filter_todos(&[], *filter).is_empty());
        }
    }
}
