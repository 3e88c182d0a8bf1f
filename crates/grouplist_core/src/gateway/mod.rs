//! Persistence gateway contracts and SQLite implementation.
//!
//! # Responsibility
//! - Define the asynchronous-in-spirit key-value boundary the store talks to.
//! - Isolate SQLite details from store orchestration.
//!
//! # Invariants
//! - Gateway failures never propagate past the store's persistence boundary;
//!   the store logs them and keeps its in-memory list authoritative.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::db::DbError;

mod kv_gateway;

pub use kv_gateway::SqliteKvGateway;

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Error raised by a persistence gateway read or write.
#[derive(Debug)]
pub enum GatewayError {
    Db(DbError),
    Io(std::io::Error),
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for GatewayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<DbError> for GatewayError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for GatewayError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<std::io::Error> for GatewayError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Opaque key-value storage used for durability across restarts.
///
/// `Send` is required because the snapshot writer moves the gateway onto its
/// background thread after hydration.
pub trait PersistenceGateway: Send {
    /// Reads the stored value for `key`, `None` when nothing was ever written.
    fn get(&self, key: &str) -> GatewayResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> GatewayResult<()>;
}
