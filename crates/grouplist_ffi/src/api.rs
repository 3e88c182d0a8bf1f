//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Hold the process-global `GroupStore` instance and keep error semantics
//!   simple for the UI layer.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Store mutations follow the core contract: absent ids are silent no-ops,
//!   persistence failure is never surfaced as a UI error.

use grouplist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    GroupId, GroupStore, Pager, SqliteKvGateway,
};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use uuid::Uuid;

const PAGE_SIZE_DEFAULT: u32 = 5;
const PAGE_SIZE_MAX: u32 = 50;
const STORE_DB_FILE_NAME: &str = "grouplist.sqlite3";

static STORE_DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static STORE: OnceLock<Result<Mutex<GroupStore>, String>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One task group in list-view shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupView {
    /// Stable group ID in string form.
    pub id: String,
    /// Current display name; may be empty.
    pub name: String,
}

/// Paged read view over the group list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPageResponse {
    /// Groups visible on the applied page, in display order.
    pub items: Vec<GroupView>,
    /// Applied 1-indexed page (requested page clamped into range).
    pub page: u32,
    /// Total number of pages for the applied page size.
    pub page_count: u32,
    /// Total number of groups in the store.
    pub total: u32,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Generic action response envelope for group mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupActionResponse {
    /// Whether the operation was accepted.
    pub ok: bool,
    /// Target or created group ID.
    pub group_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl GroupActionResponse {
    fn success(message: impl Into<String>, group_id: String) -> Self {
        Self {
            ok: true,
            group_id: Some(group_id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            group_id: None,
            message: message.into(),
        }
    }
}

/// Returns one page of the group list.
///
/// # FFI contract
/// - Sync call; hydrates the store on first use.
/// - `page` is 1-indexed and clamped into the valid range; `page_size` is
///   normalized to `1..=50` with 5 as the default for 0.
/// - Never panics; storage failure yields an empty page with a message.
#[flutter_rust_bridge::frb(sync)]
pub fn groups_page(page: u32, page_size: u32) -> GroupPageResponse {
    let size = normalize_page_size(page_size);
    let result = with_store(|store| {
        let total = store.len();
        let mut pager = Pager::new(size as usize);
        let applied = page.max(1).min(pager.page_count(total) as u32);
        while (pager.page() as u32) < applied && pager.next(total) {}

        let items = pager
            .slice(store.groups())
            .iter()
            .map(|group| GroupView {
                id: group.id.to_string(),
                name: group.name.clone(),
            })
            .collect::<Vec<_>>();

        GroupPageResponse {
            items,
            page: pager.page() as u32,
            page_count: pager.page_count(total) as u32,
            total: total as u32,
            message: format!("{total} group(s)."),
        }
    });

    result.unwrap_or_else(|err| GroupPageResponse {
        items: Vec::new(),
        page: 1,
        page_count: 1,
        total: 0,
        message: format!("groups_page failed: {err}"),
    })
}

/// Creates a new task group with the default name.
///
/// # FFI contract
/// - Sync call; always succeeds once the store is available.
/// - Never panics; returns the created group ID on success.
#[flutter_rust_bridge::frb(sync)]
pub fn group_create() -> GroupActionResponse {
    match with_store(|store| store.create()) {
        Ok(id) => GroupActionResponse::success("Group created.", id.to_string()),
        Err(err) => GroupActionResponse::failure(format!("group_create failed: {err}")),
    }
}

/// Renames the group matching `id`.
///
/// # FFI contract
/// - Sync call. A well-formed but absent id is accepted as a silent no-op;
///   a malformed id string is a failure envelope.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn group_rename(id: String, new_name: String) -> GroupActionResponse {
    let group_id = match parse_group_id(&id) {
        Ok(group_id) => group_id,
        Err(message) => return GroupActionResponse::failure(message),
    };
    match with_store(|store| store.rename(group_id, new_name.clone())) {
        Ok(()) => GroupActionResponse::success("Group renamed.", id),
        Err(err) => GroupActionResponse::failure(format!("group_rename failed: {err}")),
    }
}

/// Removes the group matching `id`.
///
/// # FFI contract
/// - Sync call. A well-formed but absent id is accepted as a silent no-op;
///   a malformed id string is a failure envelope.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn group_remove(id: String) -> GroupActionResponse {
    let group_id = match parse_group_id(&id) {
        Ok(group_id) => group_id,
        Err(message) => return GroupActionResponse::failure(message),
    };
    match with_store(|store| store.remove(group_id)) {
        Ok(()) => GroupActionResponse::success("Group removed.", id),
        Err(err) => GroupActionResponse::failure(format!("group_remove failed: {err}")),
    }
}

/// Blocks until every committed snapshot has reached storage.
///
/// # FFI contract
/// - Sync call, intended for host-app suspend/background hooks.
/// - Never panics; a no-op when the store never became available.
#[flutter_rust_bridge::frb(sync)]
pub fn groups_flush() {
    let _ = with_store(|store| store.flush());
}

fn normalize_page_size(page_size: u32) -> u32 {
    match page_size {
        0 => PAGE_SIZE_DEFAULT,
        value if value > PAGE_SIZE_MAX => PAGE_SIZE_MAX,
        value => value,
    }
}

fn parse_group_id(id: &str) -> Result<GroupId, String> {
    Uuid::parse_str(id.trim()).map_err(|_| format!("invalid group id `{id}`"))
}

fn resolve_store_db_path() -> PathBuf {
    STORE_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("GROUPLIST_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(STORE_DB_FILE_NAME)
        })
        .clone()
}

fn with_store<T>(f: impl FnOnce(&mut GroupStore) -> T) -> Result<T, String> {
    let slot = STORE.get_or_init(|| {
        let gateway = SqliteKvGateway::open(resolve_store_db_path())
            .map_err(|err| format!("storage open failed: {err}"))?;
        Ok(Mutex::new(GroupStore::hydrate(Box::new(gateway))))
    });

    match slot {
        Ok(store) => {
            let mut guard = store
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            Ok(f(&mut guard))
        }
        Err(err) => Err(err.clone()),
    }
}
