//! List Statistics
//!
//! Counters derived from the current snapshot.

use crate::models::{TodoItem, TodoStats};

/// Count total, completed and active todos.
/// No snapshot yet means all zero.
pub fn derive_stats(snapshot: Option<&[TodoItem]>) -> TodoStats {
    let Some(items) = snapshot else {
        return TodoStats::default();
    };
    let total = items.len();
    let completed = items.iter().filter(|t| t.completed).count();
    TodoStats {
        total,
        completed,
        active: total - completed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Principal, TodoId};

    fn make_todo(id: u64, text: &str, completed: bool) -> TodoItem {
        TodoItem {
            id: TodoId(id),
            owner: Principal("2vxsx-fae".to_string()),
            text: text.to_string(),
            completed,
        }
    }

    #[test]
    fn test_no_snapshot_is_zero() {
        assert_eq!(derive_stats(None), TodoStats { total: 0, completed: 0, active: 0 });
    }

    #[test]
    fn test_mixed_snapshot() {
        let items = vec![make_todo(1, "a", false), make_todo(2, "b", true)];
        assert_eq!(
            derive_stats(Some(&items)),
            TodoStats { total: 2, completed: 1, active: 1 }
        );
    }

    #[test]
    fn test_active_plus_completed_is_total() {
        let snapshots: Vec<Vec<TodoItem>> = vec![
            vec![],
            vec![make_todo(1, "a", true)],
            (0..7).map(|i| make_todo(i, "x", i % 3 == 0)).collect(),
        ];
        for items in &snapshots {
            let stats = derive_stats(Some(items));
            assert_eq!(stats.active + stats.completed, stats.total);
            assert_eq!(stats.total, items.len());
        }
    }
}
