use proptest::prelude::*;

use crate::storage::{MemoryStorage, MockStorageBackend, STORAGE_KEY};
use crate::store::{clamp_rating, PromptStore};

fn memory_store() -> PromptStore {
    PromptStore::open(Box::new(MemoryStorage::new()))
}

// ========================================
// Load / normalize tests
// ========================================

#[test]
fn test_load_missing_key_is_empty() {
    let store = memory_store();
    assert!(store.is_empty());
}

#[test]
fn test_load_malformed_json_is_empty() {
    let storage = MemoryStorage::with_entry(STORAGE_KEY, "{not json");
    let store = PromptStore::open(Box::new(storage));
    assert!(store.is_empty());
}

#[test]
fn test_load_non_array_payload_is_empty() {
    let storage = MemoryStorage::with_entry(STORAGE_KEY, r#"{"id":"a"}"#);
    let store = PromptStore::open(Box::new(storage));
    assert!(store.is_empty());
}

#[test]
fn test_load_coerces_non_numeric_rating_to_zero() {
    let storage = MemoryStorage::with_entry(
        STORAGE_KEY,
        r#"[{"id":"a","title":"T","content":"C","createdAt":1,"rating":"oops"}]"#,
    );
    let store = PromptStore::open(Box::new(storage));
    assert_eq!(store.len(), 1);
    let p = &store.prompts()[0];
    assert_eq!(p.id, "a");
    assert_eq!(p.title, "T");
    assert_eq!(p.content, "C");
    assert_eq!(p.created_at, 1);
    assert_eq!(p.rating, 0);
}

#[test]
fn test_load_coerces_out_of_range_rating_to_zero() {
    let storage = MemoryStorage::with_entry(
        STORAGE_KEY,
        r#"[{"id":"a","title":"T","content":"C","createdAt":1,"rating":9},
            {"id":"b","title":"U","content":"D","createdAt":2,"rating":-1},
            {"id":"c","title":"V","content":"E","createdAt":3,"rating":4}]"#,
    );
    let store = PromptStore::open(Box::new(storage));
    let ratings: Vec<u8> = store.prompts().iter().map(|p| p.rating).collect();
    assert_eq!(ratings, vec![0, 0, 4]);
}

#[test]
fn test_load_defaults_missing_rating_to_zero() {
    let storage = MemoryStorage::with_entry(
        STORAGE_KEY,
        r#"[{"id":"a","title":"T","content":"C","createdAt":1}]"#,
    );
    let store = PromptStore::open(Box::new(storage));
    assert_eq!(store.prompts()[0].rating, 0);
}

#[test]
fn test_load_drops_structurally_invalid_records() {
    let storage = MemoryStorage::with_entry(
        STORAGE_KEY,
        r#"[{"id":"a","title":"T","content":"C","createdAt":1,"rating":2},
            {"title":"no id","content":"x"},
            42,
            {"id":"b","title":7,"content":"x"}]"#,
    );
    let store = PromptStore::open(Box::new(storage));
    assert_eq!(store.len(), 1);
    assert_eq!(store.prompts()[0].id, "a");
}

// ========================================
// Mutation tests
// ========================================

#[test]
fn test_add_trims_and_stamps() {
    let mut store = memory_store();
    let before = chrono::Utc::now().timestamp_millis();
    let prompt = store.add("  Title  ", "\n  Content  \n");
    assert_eq!(prompt.title, "Title");
    assert_eq!(prompt.content, "Content");
    assert_eq!(prompt.rating, 0);
    assert!(prompt.created_at >= before);
    assert_eq!(store.get(&prompt.id), Some(&prompt));
}

#[test]
fn test_delete_removes_record() {
    let mut store = memory_store();
    let a = store.add("A", "a");
    let b = store.add("B", "b");
    assert!(store.delete(&a.id));
    assert_eq!(store.len(), 1);
    assert_eq!(store.prompts()[0].id, b.id);
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let mut store = memory_store();
    store.add("A", "a");
    let snapshot = store.prompts().to_vec();
    assert!(!store.delete("no-such-id"));
    assert_eq!(store.prompts(), snapshot.as_slice());
}

#[test]
fn test_set_rating_unknown_id_is_noop() {
    let mut store = memory_store();
    store.add("A", "a");
    assert_eq!(store.set_rating("no-such-id", 3), None);
    assert_eq!(store.prompts()[0].rating, 0);
}

#[test]
fn test_set_rating_toggles_off_on_same_value() {
    let mut store = memory_store();
    let p = store.add("A", "a");
    assert_eq!(store.set_rating(&p.id, 4), Some(4));
    assert_eq!(store.set_rating(&p.id, 4), Some(0));
}

#[test]
fn test_set_rating_coerces_invalid_to_zero() {
    let mut store = memory_store();
    let p = store.add("A", "a");
    store.set_rating(&p.id, 3);
    assert_eq!(store.set_rating(&p.id, 99), Some(0));
}

#[test]
fn test_clamp_rating() {
    assert_eq!(clamp_rating(0), 0);
    assert_eq!(clamp_rating(5), 5);
    assert_eq!(clamp_rating(6), 0);
    assert_eq!(clamp_rating(-1), 0);
}

// ========================================
// Persistence behavior (mock backend)
// ========================================

#[test]
fn test_delete_unknown_id_does_not_write() {
    let mut mock = MockStorageBackend::new();
    mock.expect_get()
        .returning(|_| Ok(Some(
            r#"[{"id":"a","title":"T","content":"C","createdAt":1,"rating":2}]"#.to_string(),
        )));
    mock.expect_set().times(0);

    let mut store = PromptStore::open(Box::new(mock));
    assert!(!store.delete("no-such-id"));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_mutations_write_through() {
    let mut mock = MockStorageBackend::new();
    mock.expect_get().returning(|_| Ok(None));
    // add + set_rating + delete = three writes
    mock.expect_set().times(3).returning(|_, _| Ok(()));

    let mut store = PromptStore::open(Box::new(mock));
    let p = store.add("A", "a");
    store.set_rating(&p.id, 2);
    store.delete(&p.id);
}

#[test]
fn test_write_failure_is_swallowed() {
    let mut mock = MockStorageBackend::new();
    mock.expect_get().returning(|_| Ok(None));
    mock.expect_set()
        .returning(|_, _| Err(crate::errors::ShelfError::StorageError("quota exceeded".to_string())));

    let mut store = PromptStore::open(Box::new(mock));
    let p = store.add("A", "a");
    // In-memory state stays authoritative for the session
    assert_eq!(store.get(&p.id), Some(&p));
    assert_eq!(store.set_rating(&p.id, 5), Some(5));
}

#[test]
fn test_read_failure_loads_empty() {
    let mut mock = MockStorageBackend::new();
    mock.expect_get()
        .returning(|_| Err(crate::errors::ShelfError::StorageError("unavailable".to_string())));
    let store = PromptStore::open(Box::new(mock));
    assert!(store.is_empty());
}

// ========================================
// Properties
// ========================================

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    DeleteNth(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-z]{1,8}".prop_map(Op::Add),
        (0usize..8).prop_map(Op::DeleteNth),
    ]
}

proptest! {
    #[test]
    fn prop_ids_stay_unique(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let mut store = memory_store();
        for op in ops {
            match op {
                Op::Add(title) => {
                    store.add(&title, "content");
                },
                Op::DeleteNth(n) => {
                    if let Some(id) = store.prompts().get(n).map(|p| p.id.clone()) {
                        store.delete(&id);
                    }
                },
            }
        }
        let mut ids: Vec<&str> = store.prompts().iter().map(|p| p.id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);
    }

    #[test]
    fn prop_toggle_law(prior in 0i64..=5, value in 0i64..=5) {
        let mut store = memory_store();
        let p = store.add("T", "c");
        store.set_rating(&p.id, prior);
        prop_assert_eq!(store.get(&p.id).map(|p| i64::from(p.rating)), Some(prior));

        let first = store.set_rating(&p.id, value);
        if value == prior {
            // selecting the current rating clears it
            prop_assert_eq!(first, Some(0));
        } else {
            prop_assert_eq!(first, Some(value as u8));
            // the same value again toggles back off
            let second = store.set_rating(&p.id, value);
            prop_assert_eq!(second, Some(0));
        }
    }

    #[test]
    fn prop_save_load_round_trip(
        entries in proptest::collection::vec(("[a-zA-Z ]{1,12}", "[a-zA-Z ]{1,24}", 0i64..=5), 0..12)
    ) {
        let storage = MemoryStorage::new();
        let mut store = PromptStore::open(Box::new(storage.clone()));
        for (title, content, rating) in &entries {
            let p = store.add(title, content);
            store.set_rating(&p.id, *rating);
        }
        let original = store.prompts().to_vec();

        let reloaded = PromptStore::open(Box::new(storage));
        prop_assert_eq!(reloaded.prompts(), original.as_slice());
        for p in reloaded.prompts() {
            prop_assert!(p.rating <= 5);
        }
    }
}
