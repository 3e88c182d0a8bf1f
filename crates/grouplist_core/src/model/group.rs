//! Task group domain model.
//!
//! # Responsibility
//! - Define the canonical record persisted under the `taskGroups` key.
//! - Provide constructors for creation and hydration paths.
//!
//! # Invariants
//! - `id` is stable, never reassigned, never reused for another group.
//! - `tasks` is carried for schema compatibility; no core operation reads
//!   or writes its elements.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task group.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Serializes as a string, matching the persisted record shape.
pub type GroupId = Uuid;

/// Default label assigned to freshly created groups.
pub const DEFAULT_GROUP_NAME: &str = "New Task Group";

/// A single sub-item inside a task group.
///
/// Present so the `tasks` sequence round-trips losslessly; no in-scope
/// operation ever populates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    /// Stable item ID in the same scheme as group ids.
    pub id: GroupId,
    /// Display label.
    pub label: String,
}

/// Canonical persisted record: a named container of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskGroup {
    /// Stable global ID, unique within the list for the process lifetime.
    pub id: GroupId,
    /// Mutable label; may legitimately be empty, no uniqueness constraint.
    pub name: String,
    /// Sub-task sequence. Older persisted blobs may omit it entirely.
    #[serde(default)]
    pub tasks: Vec<TaskItem>,
}

impl TaskGroup {
    /// Creates a group with a generated stable ID and empty task list.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates a group with a caller-provided stable ID.
    ///
    /// Used by hydration and import paths where identity already exists.
    pub fn with_id(id: GroupId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            tasks: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{TaskGroup, DEFAULT_GROUP_NAME};
    use uuid::Uuid;

    #[test]
    fn new_assigns_distinct_ids() {
        let a = TaskGroup::new(DEFAULT_GROUP_NAME);
        let b = TaskGroup::new(DEFAULT_GROUP_NAME);
        assert_ne!(a.id, b.id);
        assert!(a.tasks.is_empty());
    }

    #[test]
    fn with_id_keeps_provided_identity() {
        let id = Uuid::new_v4();
        let group = TaskGroup::with_id(id, "Groceries");
        assert_eq!(group.id, id);
        assert_eq!(group.name, "Groceries");
    }

    #[test]
    fn decode_tolerates_missing_tasks_field() {
        let group: TaskGroup =
            serde_json::from_str(r#"{"id":"00000000-0000-4000-8000-000000000001","name":""}"#)
                .expect("legacy record without tasks should parse");
        assert!(group.tasks.is_empty());
        assert!(group.name.is_empty());
    }
}
