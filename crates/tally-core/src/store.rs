//! Counter store abstraction and the default in-memory backend.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::error::{Result, TallyError};

/// Typed `name -> value` mapping behind which counters live.
///
/// `create` and `increment` are the primitives handlers must use: each one
/// observes and writes a name's slot under exclusive access, so concurrent
/// callers never lose an update. `exists`/`get`/`set` are plain accessors.
pub trait CounterStore: Send + Sync {
    fn exists(&self, name: &str) -> bool;
    fn get(&self, name: &str) -> Option<u64>;
    fn set(&self, name: &str, value: u64);
    /// Returns whether the name was present.
    fn remove(&self, name: &str) -> bool;

    /// Insert `name` at 0. Fails with `Conflict` if it is already registered.
    fn create(&self, name: &str) -> Result<u64>;

    /// Add 1 to an existing counter and return the new value.
    fn increment(&self, name: &str) -> Result<u64>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-local store: sharded map, one lock per shard.
#[derive(Default)]
pub struct InMemoryCounterStore {
    counters: DashMap<String, u64>,
}

impl InMemoryCounterStore {
    pub fn new() -> Self {
        Self {
            counters: DashMap::new(),
        }
    }
}

impl CounterStore for InMemoryCounterStore {
    fn exists(&self, name: &str) -> bool {
        self.counters.contains_key(name)
    }

    fn get(&self, name: &str) -> Option<u64> {
        self.counters.get(name).map(|v| *v.value())
    }

    fn set(&self, name: &str, value: u64) {
        self.counters.insert(name.to_string(), value);
    }

    fn remove(&self, name: &str) -> bool {
        self.counters.remove(name).is_some()
    }

    fn create(&self, name: &str) -> Result<u64> {
        match self.counters.entry(name.to_string()) {
            Entry::Occupied(_) => Err(TallyError::Conflict(name.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(0);
                Ok(0)
            }
        }
    }

    fn increment(&self, name: &str) -> Result<u64> {
        // The shard write lock is held until `slot` drops.
        let mut slot = self
            .counters
            .get_mut(name)
            .ok_or_else(|| TallyError::NotFound(name.to_string()))?;

        let next = slot
            .checked_add(1)
            .ok_or_else(|| TallyError::Overflow(name.to_string()))?;
        *slot = next;
        tracing::trace!(counter = %name, value = next, "incremented");
        Ok(next)
    }

    fn len(&self) -> usize {
        self.counters.len()
    }
}
