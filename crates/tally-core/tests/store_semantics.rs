//! Store lifecycle and concurrency tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::thread;

use tally_core::{CounterStore, InMemoryCounterStore, TallyError};

#[test]
fn delete_then_reuse_name_restarts_at_zero() {
    let store = InMemoryCounterStore::new();
    store.create("reuse").unwrap();
    for _ in 0..3 {
        store.increment("reuse").unwrap();
    }
    assert_eq!(store.get("reuse"), Some(3));

    assert!(store.remove("reuse"));
    assert_eq!(store.get("reuse"), None);

    assert_eq!(store.create("reuse").unwrap(), 0);
    assert_eq!(store.get("reuse"), Some(0));
}

#[test]
fn k_increments_add_k() {
    let store = InMemoryCounterStore::new();
    store.create("k").unwrap();
    let mut last = 0;
    for _ in 0..25 {
        last = store.increment("k").unwrap();
    }
    assert_eq!(last, 25);
    assert_eq!(store.get("k"), Some(25));
}

#[test]
fn concurrent_increments_lose_nothing() {
    const THREADS: u64 = 8;
    const PER_THREAD: u64 = 1_000;

    let store: Arc<dyn CounterStore> = Arc::new(InMemoryCounterStore::new());
    store.create("hot").unwrap();

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..PER_THREAD {
                    store.increment("hot").unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(store.get("hot"), Some(THREADS * PER_THREAD));
}

#[test]
fn concurrent_create_has_exactly_one_winner() {
    let store = Arc::new(InMemoryCounterStore::new());

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.create("race"))
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let wins = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(wins, 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| *e == TallyError::Conflict("race".into())));
    assert_eq!(store.len(), 1);
}
