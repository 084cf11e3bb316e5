//! Generic time-expiring cache.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// A single cache slot: the value plus its insertion and expiry instants.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The cached value.
    pub value: V,
    /// When the value was inserted.
    pub inserted_at: Instant,
    /// When the value stops being observable.
    pub expires_at: Instant,
}

impl<V> CacheEntry<V> {
    fn new(value: V, ttl: Duration) -> Self {
        let inserted_at = Instant::now();
        Self {
            value,
            inserted_at,
            expires_at: inserted_at + ttl,
        }
    }

    /// Returns true once the entry has outlived its TTL.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// A concurrent map whose entries expire a fixed TTL after insertion.
///
/// Expired entries behave as absent: `get` never returns one, reclaiming it
/// lazily on observation; [`TtlCache::sweep`] reclaims the rest. Each `put`
/// carries a fresh TTL and fully replaces the previous entry (last writer
/// wins). One instance is specialized per value shape, so a hit is
/// statically guaranteed to be well-typed.
pub struct TtlCache<K, V> {
    entries: RwLock<HashMap<K, CacheEntry<V>>>,
    ttl: Duration,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates an empty cache whose entries live for `ttl` after insertion.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Returns the configured time-to-live.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Looks up an unexpired value.
    ///
    /// An entry observed past its expiry is removed and reported absent.
    pub fn get(&self, key: &K) -> Option<V> {
        let now = Instant::now();
        {
            let entries = self.entries.read();
            match entries.get(key) {
                Some(entry) if !entry.is_expired(now) => {
                    trace!("cache hit");
                    return Some(entry.value.clone());
                }
                Some(_) => {}
                None => return None,
            }
        }

        // Observed an expired entry: reclaim it, unless a concurrent put
        // refreshed the slot between the read and write locks.
        let mut entries = self.entries.write();
        if let Some(entry) = entries.get(key) {
            if entry.is_expired(now) {
                entries.remove(key);
            } else {
                return Some(entry.value.clone());
            }
        }
        None
    }

    /// Inserts a value with a fresh TTL, replacing any previous entry.
    pub fn put(&self, key: K, value: V) {
        let entry = CacheEntry::new(value, self.ttl);
        self.entries.write().insert(key, entry);
    }

    /// Removes every expired entry; returns how many were reclaimed.
    pub fn sweep(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        before - entries.len()
    }

    /// Number of entries currently stored, expired ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if no entries are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Spawns a background task that sweeps expired entries on an interval.
    ///
    /// Each sweep takes the write lock once for the retain pass; observable
    /// cache semantics do not depend on the sweeper running.
    pub fn spawn_sweeper(cache: &Arc<Self>, period: Duration) -> tokio::task::JoinHandle<()> {
        let cache = Arc::clone(cache);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let removed = cache.sweep();
                if removed > 0 {
                    debug!("Cache sweep reclaimed {} expired entries", removed);
                }
            }
        })
    }
}
