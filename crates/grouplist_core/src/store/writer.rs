//! Background snapshot writer.
//!
//! # Responsibility
//! - Serialize persistence writes behind a single latest-snapshot slot.
//! - Guarantee last-writer-wins: a submitted snapshot replaces any
//!   not-yet-written predecessor, so rapid successive mutations can never
//!   leave a stale or torn value in storage.
//!
//! # Invariants
//! - At most one write is in flight at any time.
//! - Write failures are logged and never retried or surfaced.
//! - Drop drains the final pending snapshot before joining the thread.

use log::{debug, error};
use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::thread::JoinHandle;

use crate::gateway::PersistenceGateway;
use crate::store::snapshot::STORAGE_KEY;

pub(crate) struct SnapshotWriter {
    slot: Arc<Slot>,
    handle: Option<JoinHandle<()>>,
}

#[derive(Default)]
struct Slot {
    state: Mutex<SlotState>,
    changed: Condvar,
}

#[derive(Default)]
struct SlotState {
    pending: Option<String>,
    writing: bool,
    shutdown: bool,
}

impl Slot {
    fn lock(&self) -> MutexGuard<'_, SlotState> {
        // A poisoned slot only means a previous holder panicked mid-update;
        // the state itself stays usable.
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SnapshotWriter {
    /// Takes ownership of the gateway and starts the writer thread.
    pub(crate) fn spawn(gateway: Box<dyn PersistenceGateway>) -> Self {
        let slot = Arc::new(Slot::default());
        let thread_slot = Arc::clone(&slot);
        let handle = std::thread::spawn(move || write_loop(thread_slot, gateway));
        Self {
            slot,
            handle: Some(handle),
        }
    }

    /// Replaces the pending snapshot with `snapshot` and wakes the writer.
    ///
    /// Returns immediately; callers never wait for the write to complete.
    pub(crate) fn submit(&self, snapshot: String) {
        let mut state = self.slot.lock();
        state.pending = Some(snapshot);
        self.slot.changed.notify_all();
    }

    /// Blocks until no snapshot is pending and no write is in flight.
    pub(crate) fn flush(&self) {
        let mut state = self.slot.lock();
        while state.pending.is_some() || state.writing {
            state = self
                .slot
                .changed
                .wait(state)
                .unwrap_or_else(|poisoned| poisoned.into_inner());
        }
    }
}

impl Drop for SnapshotWriter {
    fn drop(&mut self) {
        {
            let mut state = self.slot.lock();
            state.shutdown = true;
            self.slot.changed.notify_all();
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                error!("event=writer_shutdown module=store status=error error_code=writer_panicked");
            }
        }
    }
}

fn write_loop(slot: Arc<Slot>, gateway: Box<dyn PersistenceGateway>) {
    loop {
        let snapshot = {
            let mut state = slot.lock();
            loop {
                if let Some(snapshot) = state.pending.take() {
                    state.writing = true;
                    break snapshot;
                }
                if state.shutdown {
                    return;
                }
                state = slot
                    .changed
                    .wait(state)
                    .unwrap_or_else(|poisoned| poisoned.into_inner());
            }
        };

        match gateway.set(STORAGE_KEY, &snapshot) {
            Ok(()) => debug!(
                "event=snapshot_write module=store status=ok bytes={}",
                snapshot.len()
            ),
            Err(err) => error!(
                "event=snapshot_write module=store status=error error_code=persistence_write_failed error={err}"
            ),
        }

        let mut state = slot.lock();
        state.writing = false;
        slot.changed.notify_all();
    }
}
