//! SQLite-backed key-value gateway.
//!
//! Device key-value storage on mobile platforms is itself a small SQLite
//! table, so this implementation doubles as the production storage and the
//! faithful stand-in for it in tests.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use super::{GatewayResult, PersistenceGateway};
use crate::db::{open_db, open_db_in_memory};

/// Key-value gateway over the `kv_store` table.
pub struct SqliteKvGateway {
    conn: Connection,
}

impl SqliteKvGateway {
    /// Wraps an already-bootstrapped connection.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Opens (and migrates) the storage file at `path`.
    pub fn open(path: impl AsRef<Path>) -> GatewayResult<Self> {
        Ok(Self::new(open_db(path)?))
    }

    /// Opens an ephemeral in-memory storage namespace.
    pub fn open_in_memory() -> GatewayResult<Self> {
        Ok(Self::new(open_db_in_memory()?))
    }
}

impl PersistenceGateway for SqliteKvGateway {
    fn get(&self, key: &str) -> GatewayResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> GatewayResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SqliteKvGateway;
    use crate::gateway::PersistenceGateway;

    #[test]
    fn get_returns_none_for_unwritten_key() {
        let gateway = SqliteKvGateway::open_in_memory().expect("open in-memory gateway");
        assert_eq!(gateway.get("taskGroups").expect("get"), None);
    }

    #[test]
    fn set_then_get_roundtrips_value() {
        let gateway = SqliteKvGateway::open_in_memory().expect("open in-memory gateway");
        gateway.set("taskGroups", "[]").expect("first write");
        gateway.set("taskGroups", "[{}]").expect("overwrite");
        assert_eq!(
            gateway.get("taskGroups").expect("get").as_deref(),
            Some("[{}]")
        );
    }

    #[test]
    fn keys_are_independent() {
        let gateway = SqliteKvGateway::open_in_memory().expect("open in-memory gateway");
        gateway.set("taskGroups", "[]").expect("write");
        assert_eq!(gateway.get("otherKey").expect("get"), None);
    }
}
