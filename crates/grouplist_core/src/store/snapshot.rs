//! Persisted snapshot codec.
//!
//! # Responsibility
//! - Encode/decode the full group list as the UTF-8 JSON blob stored under
//!   the `taskGroups` namespace key.
//!
//! # Invariants
//! - Encoding then decoding yields a list equal to the original (same ids,
//!   names, order), including the empty list and empty-string names.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::group::TaskGroup;

/// The single namespace key used in the key-value store.
pub const STORAGE_KEY: &str = "taskGroups";

/// Snapshot encode/decode failure.
#[derive(Debug)]
pub struct SnapshotError(serde_json::Error);

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "snapshot codec failure: {}", self.0)
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self(value)
    }
}

/// Serializes the full group list to its stored form.
pub fn encode_groups(groups: &[TaskGroup]) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(groups)?)
}

/// Parses a stored blob back into a group list.
pub fn decode_groups(blob: &str) -> Result<Vec<TaskGroup>, SnapshotError> {
    Ok(serde_json::from_str(blob)?)
}

#[cfg(test)]
mod tests {
    use super::{decode_groups, encode_groups};
    use crate::model::group::TaskGroup;

    #[test]
    fn empty_list_roundtrips() {
        let blob = encode_groups(&[]).expect("encode empty");
        assert_eq!(blob, "[]");
        assert!(decode_groups(&blob).expect("decode empty").is_empty());
    }

    #[test]
    fn groups_with_empty_names_roundtrip() {
        let groups = vec![TaskGroup::new(""), TaskGroup::new("Groceries")];
        let blob = encode_groups(&groups).expect("encode");
        let parsed = decode_groups(&blob).expect("decode");
        assert_eq!(parsed, groups);
    }

    #[test]
    fn malformed_blob_is_rejected() {
        assert!(decode_groups("not json").is_err());
        assert!(decode_groups(r#"{"id":"x"}"#).is_err());
    }

    #[test]
    fn records_without_tasks_field_still_parse() {
        let blob = r#"[{"id":"00000000-0000-4000-8000-000000000001","name":"legacy"}]"#;
        let parsed = decode_groups(blob).expect("decode legacy blob");
        assert_eq!(parsed.len(), 1);
        assert!(parsed[0].tasks.is_empty());
    }
}
