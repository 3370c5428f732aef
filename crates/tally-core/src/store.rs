//! In-memory counter store.
//!
//! Backed by a sharded `DashMap`, so every operation runs under the lock of the
//! shard owning the name. Check-then-act sequences (create, increment) go
//! through a single `entry`/`get_mut` guard and are atomic per name; different
//! names hashing to different shards never contend.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::counter::Counter;
use crate::error::{Result, TallyError};

/// Process-lifetime mapping `name -> value`.
///
/// Absence of a key means the counter does not exist. There is no removal.
#[derive(Debug, Default)]
pub struct CounterStore {
    counters: DashMap<String, u64>,
}

impl CounterStore {
    pub fn new() -> Self {
        Self {
            counters: DashMap::new(),
        }
    }

    /// Create `name` at zero. Fails with `Conflict` if it already exists; the
    /// stored value is left untouched in that case.
    pub fn create(&self, name: &str) -> Result<Counter> {
        match self.counters.entry(name.to_string()) {
            Entry::Occupied(_) => Err(TallyError::Conflict(name.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(0);
                tracing::debug!(counter = %name, "counter created");
                Ok(Counter::new(name, 0))
            }
        }
    }

    /// Current value of `name`. No side effects.
    pub fn get(&self, name: &str) -> Result<Counter> {
        self.counters
            .get(name)
            .map(|v| Counter::new(name, *v.value()))
            .ok_or_else(|| TallyError::NotFound(name.to_string()))
    }

    /// Add one to `name` and return the post-increment value.
    /// Never creates: a missing name is `NotFound`.
    pub fn increment(&self, name: &str) -> Result<Counter> {
        let mut slot = self
            .counters
            .get_mut(name)
            .ok_or_else(|| TallyError::NotFound(name.to_string()))?;

        let next = slot
            .value()
            .checked_add(1)
            .ok_or_else(|| TallyError::Internal(format!("counter overflow: {name}")))?;
        *slot.value_mut() = next;
        drop(slot);

        tracing::debug!(counter = %name, value = next, "counter incremented");
        Ok(Counter::new(name, next))
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}
