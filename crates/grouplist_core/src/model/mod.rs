//! Domain model for the task-group list.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one persisted record shape shared by all UI variants.
//!
//! # Invariants
//! - Every group is identified by a stable `GroupId`.
//! - Removal is a hard delete; there are no tombstones in this model.

pub mod group;
