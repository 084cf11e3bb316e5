//! Caching infrastructure for the resolution core.
//!
//! Two typed cache instances sit between the handlers and the store: one for
//! single-banner lookups, one for token authentication. Both expire entries
//! on a fixed TTL; neither has an explicit invalidation API.

mod ttl_cache;

pub use ttl_cache::{CacheEntry, TtlCache};

use bannerd_core::{Banner, FeatureId, TagId, User};
use std::time::Duration;

/// Default TTL for banner lookup snapshots (5 minutes).
pub const DEFAULT_BANNER_TTL: Duration = Duration::from_secs(300);

/// Default TTL for resolved token identities (1 hour).
pub const DEFAULT_AUTH_TTL: Duration = Duration::from_secs(3600);

/// Ordered `(tag, feature)` pair identifying a single-banner lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BannerKey {
    pub tag_id: TagId,
    pub feature_id: FeatureId,
}

impl BannerKey {
    /// Creates a lookup key.
    #[must_use]
    pub const fn new(tag_id: TagId, feature_id: FeatureId) -> Self {
        Self { tag_id, feature_id }
    }
}

/// A resolved lookup outcome. `None` records that the store had no match,
/// so a repeat lookup within the TTL is served without a store query.
pub type BannerSnapshot = Option<Banner>;

/// Cache of single-banner lookups keyed by `(tag, feature)`.
pub type BannerCache = TtlCache<BannerKey, BannerSnapshot>;

/// Cache of resolved identities keyed by raw token. Only successful
/// resolutions are ever inserted.
pub type AuthCache = TtlCache<String, User>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_order_matters() {
        // (1, 2) and (2, 1) are distinct lookups.
        assert_ne!(BannerKey::new(1, 2), BannerKey::new(2, 1));
        assert_eq!(BannerKey::new(1, 2), BannerKey::new(1, 2));
    }

    #[test]
    fn test_banner_cache_stores_misses() {
        let cache = BannerCache::new(DEFAULT_BANNER_TTL);
        let key = BannerKey::new(1, 5);

        assert_eq!(cache.get(&key), None, "no entry yet");
        cache.put(key, None);
        assert_eq!(cache.get(&key), Some(None), "recorded store miss");
    }
}
