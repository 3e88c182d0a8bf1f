use grouplist_core::{GroupStore, PersistenceGateway, SqliteKvGateway, STORAGE_KEY};
use std::path::Path;

fn open_store(path: &Path) -> GroupStore {
    let gateway = SqliteKvGateway::open(path).expect("open storage file");
    GroupStore::hydrate(Box::new(gateway))
}

#[test]
fn end_to_end_create_rename_restart_reproduces_the_list() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("grouplist.db");

    let id = {
        let mut store = open_store(&path);
        assert!(store.is_empty(), "fresh storage should hydrate empty");

        let id = store.create();
        store.rename(id, "Groceries");
        assert_eq!(store.groups()[0].name, "Groceries");

        store.flush();
        id
    };

    let restarted = open_store(&path);
    assert_eq!(restarted.len(), 1);
    assert_eq!(restarted.groups()[0].id, id);
    assert_eq!(restarted.groups()[0].name, "Groceries");
    assert!(restarted.groups()[0].tasks.is_empty());
}

#[test]
fn restart_preserves_insertion_order() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("grouplist.db");

    let ids = {
        let mut store = open_store(&path);
        let ids: Vec<_> = (0..5).map(|_| store.create()).collect();
        store.flush();
        ids
    };

    let restarted = open_store(&path);
    let reloaded: Vec<_> = restarted.groups().iter().map(|group| group.id).collect();
    assert_eq!(reloaded, ids);
}

#[test]
fn stored_blob_is_a_json_array_under_the_namespace_key() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("grouplist.db");

    {
        let mut store = open_store(&path);
        store.create();
        store.flush();
    }

    let gateway = SqliteKvGateway::open(&path).expect("reopen storage file");
    let blob = gateway
        .get(STORAGE_KEY)
        .expect("read stored value")
        .expect("value should exist after flush");

    let records: serde_json::Value = serde_json::from_str(&blob).expect("blob should be JSON");
    let records = records.as_array().expect("blob should be a JSON array");
    assert_eq!(records.len(), 1);
    assert!(records[0]["id"].is_string());
    assert!(records[0]["name"].is_string());
    assert!(records[0]["tasks"].as_array().expect("tasks array").is_empty());
}

#[test]
fn hydrating_twice_from_the_same_file_is_stable() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("grouplist.db");

    {
        let mut store = open_store(&path);
        let id = store.create();
        store.rename(id, "");
        store.flush();
    }

    let first = open_store(&path);
    let second = open_store(&path);
    assert_eq!(first.groups(), second.groups());
    assert_eq!(first.groups()[0].name, "");
}
