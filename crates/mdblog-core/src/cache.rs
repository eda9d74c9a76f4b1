//! Namespaced in-memory caches with TTL-based expiry.
//!
//! Every cache layer in the crate (raw directory listings and file text in
//! [`crate::Storage`], resolved posts and slug aliases in [`crate::ContentResolver`],
//! outlines in [`crate::TocBuilder`]) is a [`TtlCache`]. Caches are plain values owned
//! by the component that uses them, so two resolvers never share state and tests get a
//! fresh cache per fixture.
//!
//! ## Expiry
//!
//! An entry created at `t` is stale once `now - t > ttl`. Stale entries are dropped the
//! next time they are read; [`TtlCache::purge_expired`] sweeps the whole map. Time comes
//! from an injected [`Clock`].
//!
//! ## Concurrency
//!
//! The map sits behind an `RwLock`. Concurrent misses on the same key both compute the
//! value and the last `set` wins; values are recomputations of the same input, so the
//! race is harmless. A poisoned lock is recovered rather than propagated.

use crate::clock::Clock;
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;
use tracing::debug;

/// Default time-to-live for every cache namespace (one hour).
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

/// Cached value plus its creation timestamp.
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    created_at: DateTime<Utc>,
}

/// Counters describing how a cache has been used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from a fresh entry.
    pub hits: u64,
    /// Lookups that found nothing or only a stale entry.
    pub misses: u64,
    /// Values written with `set` (including populate-on-miss).
    pub inserts: u64,
    /// Entries dropped because they outlived the TTL.
    pub evictions: u64,
}

#[derive(Debug, Default)]
struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
    inserts: AtomicU64,
    evictions: AtomicU64,
}

/// String-keyed cache whose entries expire after a fixed TTL.
#[derive(Debug)]
pub struct TtlCache<V> {
    namespace: &'static str,
    ttl: TimeDelta,
    clock: Arc<dyn Clock>,
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
    counters: Counters,
}

impl<V: Clone> TtlCache<V> {
    /// Create an empty cache.
    ///
    /// `namespace` only labels log events; keys are not prefixed with it.
    pub fn new(namespace: &'static str, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            namespace,
            ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
            clock,
            entries: RwLock::new(HashMap::new()),
            counters: Counters::default(),
        }
    }

    /// Namespace label given at construction.
    pub const fn namespace(&self) -> &'static str {
        self.namespace
    }

    /// Configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl.to_std().unwrap_or(Duration::MAX)
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, CacheEntry<V>>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, CacheEntry<V>>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_stale(&self, entry: &CacheEntry<V>, now: DateTime<Utc>) -> bool {
        now - entry.created_at > self.ttl
    }

    /// Look up a fresh value, dropping the entry if it has expired.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = self.clock.now();
        {
            let entries = self.read();
            match entries.get(key) {
                Some(entry) if !self.is_stale(entry, now) => {
                    self.counters.hits.fetch_add(1, Ordering::Relaxed);
                    debug!(namespace = self.namespace, key, "cache hit");
                    return Some(entry.value.clone());
                },
                Some(_) => {},
                None => {
                    self.counters.misses.fetch_add(1, Ordering::Relaxed);
                    return None;
                },
            }
        }

        // Expired: re-check under the write lock, another writer may have refreshed it.
        let mut entries = self.write();
        if let Some(entry) = entries.get(key) {
            if !self.is_stale(entry, now) {
                self.counters.hits.fetch_add(1, Ordering::Relaxed);
                return Some(entry.value.clone());
            }
            entries.remove(key);
            self.counters.evictions.fetch_add(1, Ordering::Relaxed);
            debug!(namespace = self.namespace, key, "cache entry expired");
        }
        self.counters.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Whether a fresh value exists for `key`.
    pub fn has(&self, key: &str) -> bool {
        let now = self.clock.now();
        let stale = match self.read().get(key) {
            Some(entry) => self.is_stale(entry, now),
            None => return false,
        };
        if stale {
            let mut entries = self.write();
            if entries.get(key).is_some_and(|e| self.is_stale(e, now)) {
                entries.remove(key);
                self.counters.evictions.fetch_add(1, Ordering::Relaxed);
            }
            return false;
        }
        true
    }

    /// Store `value`, stamping it with the current time.
    pub fn set(&self, key: impl Into<String>, value: V) {
        let entry = CacheEntry {
            value,
            created_at: self.clock.now(),
        };
        self.write().insert(key.into(), entry);
        self.counters.inserts.fetch_add(1, Ordering::Relaxed);
    }

    /// Remove a single entry, returning its value if present (fresh or not).
    pub fn remove(&self, key: &str) -> Option<V> {
        self.write().remove(key).map(|entry| entry.value)
    }

    /// Return the cached value or compute, store and return it.
    pub fn get_or_insert_with(&self, key: &str, f: impl FnOnce() -> V) -> V {
        if let Some(value) = self.get(key) {
            return value;
        }
        let value = f();
        self.set(key, value.clone());
        value
    }

    /// Like [`get_or_insert_with`](Self::get_or_insert_with), but failures are not cached.
    pub fn try_get_or_insert_with<E>(
        &self,
        key: &str,
        f: impl FnOnce() -> Result<V, E>,
    ) -> Result<V, E> {
        if let Some(value) = self.get(key) {
            return Ok(value);
        }
        let value = f()?;
        self.set(key, value.clone());
        Ok(value)
    }

    /// Drop every entry.
    pub fn clear(&self) {
        let mut entries = self.write();
        let dropped = entries.len();
        entries.clear();
        debug!(namespace = self.namespace, dropped, "cache cleared");
    }

    /// Drop every expired entry and return how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let mut entries = self.write();
        let before = entries.len();
        entries.retain(|_, entry| now - entry.created_at <= self.ttl);
        let removed = before - entries.len();
        self.counters
            .evictions
            .fetch_add(removed as u64, Ordering::Relaxed);
        removed
    }

    /// Number of stored entries, fresh or stale.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the cache holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Snapshot of the usage counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.counters.hits.load(Ordering::Relaxed),
            misses: self.counters.misses.load(Ordering::Relaxed),
            inserts: self.counters.inserts.load(Ordering::Relaxed),
            evictions: self.counters.evictions.load(Ordering::Relaxed),
        }
    }
}
