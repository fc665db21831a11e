//! Cache Statistics Module
//!
//! Tracks engine counters: hits, misses, evictions, rejections and lazy
//! expiry purges.

// == Cache Stats ==
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheStats {
    /// Gets that returned a live entry
    pub hits: u64,
    /// Gets that found nothing live (absent or expired)
    pub misses: u64,
    /// Entries removed by OLDEST_FIRST / NEWEST_FIRST to admit a new key
    pub evictions: u64,
    /// Puts refused because the store was full
    pub rejections: u64,
    /// Expired entries physically removed on access
    pub expired: u64,
    /// Current number of entries in the store, expired-but-unswept included
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no gets have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_rejection(&mut self) {
        self.rejections += 1;
    }

    pub fn record_expired(&mut self) {
        self.expired += 1;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats, CacheStats::default());
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.75);
    }

    #[test]
    fn test_counters() {
        let mut stats = CacheStats::new();
        stats.record_eviction();
        stats.record_rejection();
        stats.record_rejection();
        stats.record_expired();
        stats.set_total_entries(42);

        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.rejections, 2);
        assert_eq!(stats.expired, 1);
        assert_eq!(stats.total_entries, 42);
    }
}
