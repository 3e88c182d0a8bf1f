//! Group store and its persistence lifecycle.
//!
//! # Responsibility
//! - Own the authoritative in-memory group list and its mutation entry points.
//! - Serialize persistence writes so the stored value is always the latest
//!   committed snapshot.
//!
//! # Invariants
//! - Group ids are pairwise distinct at all times.
//! - The stored value converges to the last committed in-memory state
//!   (last-writer-wins, enforced by the snapshot writer).

pub mod group_store;
pub mod snapshot;
mod writer;

pub use group_store::GroupStore;
pub use snapshot::{decode_groups, encode_groups, SnapshotError, STORAGE_KEY};
