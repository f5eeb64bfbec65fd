//! Bounded memoization of parsed values
//!
//! The cache is keyed structurally by (value type, raw text) and holds only
//! concrete values; NA is a classification decision and is never cached.
//! When an insertion finds the cache over capacity, the entire cache is
//! discarded first. This is deliberately crude: it bounds memory without
//! per-entry bookkeeping, at the cost of repeated parse work after a clear.

use crate::value::{Value, ValueType};
use std::collections::HashMap;
use tracing::debug;

/// Per-conversion parse memo, full-clear-on-overflow
///
/// Private to one conversion invocation; never shared, never synchronized.
#[derive(Debug)]
pub(crate) struct ParseCache {
    entries: HashMap<ValueType, HashMap<String, Value>>,
    len: usize,
    capacity: usize,
    clears: usize,
}

impl ParseCache {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            len: 0,
            capacity,
            clears: 0,
        }
    }

    /// Look up a previously parsed value; no side effects
    pub(crate) fn lookup(&self, value_type: ValueType, text: &str) -> Option<&Value> {
        self.entries.get(&value_type).and_then(|memo| memo.get(text))
    }

    /// Insert a parsed value, clearing the whole cache first if the entry
    /// count already exceeds the configured capacity
    pub(crate) fn insert(&mut self, value_type: ValueType, text: &str, value: Value) {
        if self.len > self.capacity {
            debug!(
                "parse cache over capacity ({} > {}), clearing",
                self.len, self.capacity
            );
            self.entries.clear();
            self.len = 0;
            self.clears += 1;
        }
        let memo = self.entries.entry(value_type).or_default();
        if memo.insert(text.to_string(), value).is_none() {
            self.len += 1;
        }
    }

    /// Current number of cached entries across all value types
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Number of full clears performed so far
    pub(crate) fn clears(&self) -> usize {
        self.clears
    }
}
