use crate::session::{FileSessionStore, SessionStore, StorageError, StorageKey};

use std::fs;

use googletest::prelude::*;
use tempfile::TempDir;

fn store_in(temp: &TempDir) -> FileSessionStore {
    FileSessionStore::new(temp.path().join("session.json"))
}

#[tokio::test]
async fn given_no_file_when_get_then_none() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    assert_that!(store.get(StorageKey::Token).await.unwrap(), none());
}

#[tokio::test]
async fn given_value_set_when_reopened_then_persisted() {
    let temp = TempDir::new().unwrap();
    store_in(&temp)
        .set(StorageKey::Token, "abc123")
        .await
        .unwrap();

    let reopened = store_in(&temp);

    assert_that!(
        reopened.get(StorageKey::Token).await.unwrap(),
        some(eq("abc123"))
    );
}

#[tokio::test]
async fn given_set_when_written_then_keys_use_storage_names() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    store.set(StorageKey::CsrfToken, "csrf").await.unwrap();

    let contents = fs::read_to_string(store.path()).unwrap();

    assert_that!(contents, contains_substring("\"csrf_token\""));
}

#[tokio::test]
async fn given_nested_path_when_set_then_parent_created() {
    let temp = TempDir::new().unwrap();
    let store = FileSessionStore::new(temp.path().join("state").join("session.json"));

    store.set(StorageKey::Token, "abc123").await.unwrap();

    assert_that!(store.path().exists(), eq(true));
}

#[tokio::test]
async fn given_set_when_written_then_no_temp_file_left() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    store.set(StorageKey::Token, "abc123").await.unwrap();

    let entries: Vec<String> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_that!(entries, elements_are![eq("session.json")]);
}

#[tokio::test]
async fn given_one_key_removed_when_get_then_others_remain() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    store.set(StorageKey::Token, "abc123").await.unwrap();
    store.set(StorageKey::CsrfToken, "csrf").await.unwrap();

    store.remove(StorageKey::CsrfToken).await.unwrap();

    assert_that!(store.get(StorageKey::CsrfToken).await.unwrap(), none());
    assert_that!(
        store.get(StorageKey::Token).await.unwrap(),
        some(eq("abc123"))
    );
}

#[tokio::test]
async fn given_blank_file_when_get_then_none() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    fs::write(store.path(), "  \n").unwrap();

    assert_that!(store.get(StorageKey::Token).await.unwrap(), none());
}

#[tokio::test]
async fn given_corrupted_file_when_get_then_corrupted_error() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    fs::write(store.path(), "{not json").unwrap();

    let result = store.get(StorageKey::Token).await;

    assert!(matches!(result, Err(StorageError::Corrupted { .. })));
}

#[tokio::test]
async fn given_corrupted_file_when_set_then_backed_up_and_replaced() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    fs::write(store.path(), "{not json").unwrap();

    store.set(StorageKey::Token, "fresh").await.unwrap();

    assert_that!(
        store.get(StorageKey::Token).await.unwrap(),
        some(eq("fresh"))
    );
    let backups = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_name()
                .to_string_lossy()
                .starts_with("session.json.corrupted.")
        })
        .count();
    assert_that!(backups, eq(1));
}

#[tokio::test]
async fn given_concurrent_sets_when_joined_then_every_key_persisted() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    let (token, user, csrf) = tokio::join!(
        store.set(StorageKey::Token, "abc123"),
        store.set(StorageKey::User, "{}"),
        store.set(StorageKey::CsrfToken, "csrf"),
    );
    token.unwrap();
    user.unwrap();
    csrf.unwrap();

    let reopened = store_in(&temp);
    assert_that!(reopened.get(StorageKey::Token).await.unwrap(), some(eq("abc123")));
    assert_that!(reopened.get(StorageKey::User).await.unwrap(), some(eq("{}")));
    assert_that!(reopened.get(StorageKey::CsrfToken).await.unwrap(), some(eq("csrf")));
}

#[tokio::test]
async fn given_no_file_when_backup_corrupted_then_nothing_moved() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    assert_that!(store.backup_corrupted().await.unwrap(), none());
}
