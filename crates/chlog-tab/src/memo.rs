//! Single-slot memoization.

/// Caches the value computed for the most recent key.
///
/// A lookup with the same key as the previous one returns the stored value;
/// any other key replaces the slot. There is no eviction policy beyond that
/// and no interior mutability: callers hold `&mut Memo`.
#[derive(Debug)]
pub struct Memo<V> {
    slot: Option<(String, V)>,
    hits: u64,
    misses: u64,
}

impl<V> Default for Memo<V> {
    fn default() -> Self {
        Self {
            slot: None,
            hits: 0,
            misses: 0,
        }
    }
}

impl<V> Memo<V> {
    /// Create an empty memo.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the value for `key`, computing it with `compute` on a miss.
    pub fn get_or_insert_with(&mut self, key: &str, compute: impl FnOnce(&str) -> V) -> &V {
        let stale = self.slot.as_ref().is_none_or(|(cached, _)| cached != key);
        if stale {
            self.misses += 1;
            self.slot = None;
            tracing::debug!(key_len = key.len(), "Memo miss");
        } else {
            self.hits += 1;
            tracing::trace!(key_len = key.len(), "Memo hit");
        }

        let (_, value) = self
            .slot
            .get_or_insert_with(|| (key.to_owned(), compute(key)));
        value
    }

    /// Whether the slot currently holds the value for `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.slot.as_ref().is_some_and(|(cached, _)| cached == key)
    }

    /// Number of lookups answered from the slot.
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that had to compute.
    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_key_computes_once() {
        let mut memo = Memo::new();
        let mut calls = 0;

        let first = *memo.get_or_insert_with("a", |k| {
            calls += 1;
            k.len()
        });
        let second = *memo.get_or_insert_with("a", |_| {
            calls += 1;
            99
        });

        assert_eq!(first, 1);
        assert_eq!(second, 1);
        assert_eq!(calls, 1);
        assert_eq!(memo.hits(), 1);
        assert_eq!(memo.misses(), 1);
    }

    #[test]
    fn test_new_key_replaces_slot() {
        let mut memo = Memo::new();
        memo.get_or_insert_with("a", |_| 1);
        let value = *memo.get_or_insert_with("b", |_| 2);

        assert_eq!(value, 2);
        assert!(memo.contains("b"));
        assert!(!memo.contains("a"));
    }

    #[test]
    fn test_returning_to_old_key_recomputes() {
        let mut memo = Memo::new();
        memo.get_or_insert_with("a", |_| 1);
        memo.get_or_insert_with("b", |_| 2);
        memo.get_or_insert_with("a", |_| 3);

        assert_eq!(memo.misses(), 3);
        assert_eq!(memo.hits(), 0);
    }

    #[test]
    fn test_empty_key() {
        let mut memo: Memo<u8> = Memo::default();
        assert!(!memo.contains(""));
        memo.get_or_insert_with("", |_| 0);
        assert!(memo.contains(""));
    }
}
