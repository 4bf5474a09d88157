#![forbid(unsafe_code)]

//! LRU cache for pixel-width measurements.
//!
//! Fitting re-measures candidate strings on every paint pass, and host
//! font metrics are not free. This cache fronts any [`MeasureWidth`] with
//! an LRU keyed by a 64-bit FxHash of the string, so repeated rows cost a
//! hash lookup instead of a metrics call.
//!
//! Keys are hashes, not strings; with a 64-bit FxHash the collision
//! probability is negligible for table-sized working sets.
//!
//! # Example
//! ```
//! use fcmd_text::{MeasureCache, MonospaceMeasure};
//!
//! let mut cache = MeasureCache::new(1024);
//! let measure = MonospaceMeasure::new(8);
//!
//! assert_eq!(cache.get_or_measure("src", &measure), 24);
//! assert_eq!(cache.get_or_measure("src", &measure), 24);
//! assert_eq!(cache.stats().hits, 1);
//! ```

use crate::measure::MeasureWidth;
use lru::LruCache;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

/// Default cache capacity.
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// Cache performance counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Current number of entries.
    pub size: usize,
    /// Maximum capacity.
    pub capacity: usize,
}

impl CacheStats {
    /// Hit rate in `[0, 1]`.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache over a width measurer.
///
/// Not thread-safe; the paint pass that owns it is single-threaded.
#[derive(Debug)]
pub struct MeasureCache {
    cache: LruCache<u64, u32>,
    hits: u64,
    misses: u64,
}

impl MeasureCache {
    /// Create a cache with the given capacity (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("capacity must be > 0");
        Self {
            cache: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Create a cache with the default capacity.
    #[must_use]
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }

    /// Return the cached width or measure and cache it.
    pub fn get_or_measure<M: MeasureWidth + ?Sized>(&mut self, text: &str, measure: &M) -> u32 {
        let key = hash_text(text);
        if let Some(&width) = self.cache.get(&key) {
            self.hits += 1;
            return width;
        }
        self.misses += 1;
        let width = measure.measure(text);
        self.cache.put(key, width);
        width
    }

    /// Look at a cached width without updating LRU order.
    #[must_use]
    pub fn peek(&self, text: &str) -> Option<u32> {
        self.cache.peek(&hash_text(text)).copied()
    }

    /// Whether a measurement for `text` is cached.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.cache.contains(&hash_text(text))
    }

    /// Drop all entries. Call on theme/font change: cached widths are only
    /// valid for the metrics they were measured with.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Reset the hit/miss counters.
    pub fn reset_stats(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }

    /// Current counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.cache.len(),
            capacity: self.cache.cap().get(),
        }
    }

    /// Current number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for MeasureCache {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

#[inline]
fn hash_text(text: &str) -> u64 {
    let mut hasher = FxHasher::default();
    text.hash(&mut hasher);
    hasher.finish()
}
