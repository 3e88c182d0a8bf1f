//! Core domain logic for the grouplist task-group app.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod store;
pub mod view;

pub use gateway::{GatewayError, GatewayResult, PersistenceGateway, SqliteKvGateway};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::group::{GroupId, TaskGroup, TaskItem, DEFAULT_GROUP_NAME};
pub use store::{decode_groups, encode_groups, GroupStore, SnapshotError, STORAGE_KEY};
pub use view::{Pager, UiState};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
