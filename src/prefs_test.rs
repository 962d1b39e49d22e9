use super::*;

#[test]
fn missing_key_reads_none() {
    let store = MemoryStore::new();
    assert_eq!(store.get("theme"), None);
}

#[test]
fn set_then_get_returns_value() {
    let mut store = MemoryStore::new();
    store.set("theme", "dark").expect("memory store never fails");
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn set_overwrites_previous_value() {
    let mut store = MemoryStore::new();
    store.set("theme", "dark").expect("write");
    store.set("theme", "light").expect("write");
    assert_eq!(store.get("theme").as_deref(), Some("light"));
}

#[test]
fn store_error_messages_name_the_key() {
    let err = StoreError::WriteFailed { key: "theme".to_owned(), reason: "QuotaExceededError".to_owned() };
    assert_eq!(err.to_string(), "failed to write preference theme: QuotaExceededError");
}
