//! Authoritative group store.
//!
//! # Responsibility
//! - Hold the in-memory group list and expose its only mutation entry points.
//! - Hydrate once from the persistence gateway at construction.
//! - Commit every mutation to storage through the snapshot writer.
//!
//! # Invariants
//! - `create`/`rename`/`remove` never return an error to the caller; all
//!   persistence failure is logged at the gateway boundary.
//! - Mutations are immediately visible to subsequent reads; the matching
//!   storage write happens asynchronously with last-writer-wins ordering.

use log::{error, info, warn};

use crate::gateway::PersistenceGateway;
use crate::model::group::{GroupId, TaskGroup, DEFAULT_GROUP_NAME};
use crate::store::snapshot::{decode_groups, encode_groups, STORAGE_KEY};
use crate::store::writer::SnapshotWriter;

/// Owner of the authoritative task-group list.
///
/// Constructed once at process start and passed by reference to consumers;
/// the UI layer is a pure function of `groups()`.
pub struct GroupStore {
    groups: Vec<TaskGroup>,
    writer: SnapshotWriter,
}

impl GroupStore {
    /// Builds a store by hydrating from the gateway, then hands the gateway
    /// to the background snapshot writer.
    ///
    /// Hydration failure is never fatal: a missing, unreadable, or malformed
    /// stored value leaves the store empty and is only logged.
    pub fn hydrate(gateway: Box<dyn PersistenceGateway>) -> Self {
        let groups = match gateway.get(STORAGE_KEY) {
            Ok(Some(blob)) => match decode_groups(&blob) {
                Ok(groups) => {
                    info!(
                        "event=hydrate module=store status=ok count={}",
                        groups.len()
                    );
                    groups
                }
                Err(err) => {
                    warn!(
                        "event=hydrate module=store status=error error_code=hydration_decode_failed error={err}"
                    );
                    Vec::new()
                }
            },
            Ok(None) => {
                info!("event=hydrate module=store status=ok count=0 stored=absent");
                Vec::new()
            }
            Err(err) => {
                warn!(
                    "event=hydrate module=store status=error error_code=hydration_read_failed error={err}"
                );
                Vec::new()
            }
        };

        Self {
            groups,
            writer: SnapshotWriter::spawn(gateway),
        }
    }

    /// Appends a new group with a fresh unique id and the default name.
    ///
    /// Always succeeds; returns the assigned id.
    pub fn create(&mut self) -> GroupId {
        let group = TaskGroup::new(DEFAULT_GROUP_NAME);
        let id = group.id;
        self.groups.push(group);
        self.commit();
        id
    }

    /// Replaces the name of the group matching `id`.
    ///
    /// Silent no-op when no group matches; absent ids are not an error.
    pub fn rename(&mut self, id: GroupId, new_name: impl Into<String>) {
        let Some(group) = self.groups.iter_mut().find(|group| group.id == id) else {
            return;
        };
        group.name = new_name.into();
        self.commit();
    }

    /// Removes the group matching `id`, preserving the relative order of the
    /// remainder. Silent no-op when no group matches.
    pub fn remove(&mut self, id: GroupId) {
        let before = self.groups.len();
        self.groups.retain(|group| group.id != id);
        if self.groups.len() == before {
            return;
        }
        self.commit();
    }

    /// Read view; insertion order = display order = pagination order.
    pub fn groups(&self) -> &[TaskGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Blocks until every committed snapshot has reached the gateway.
    ///
    /// Used by tests and host-app suspend hooks; regular mutations never wait.
    pub fn flush(&self) {
        self.writer.flush();
    }

    fn commit(&self) {
        match encode_groups(&self.groups) {
            Ok(snapshot) => self.writer.submit(snapshot),
            // Encoding a plain record Vec cannot fail in practice; log and
            // keep the in-memory list authoritative if it ever does.
            Err(err) => error!(
                "event=snapshot_encode module=store status=error error_code=snapshot_encode_failed error={err}"
            ),
        }
    }
}
