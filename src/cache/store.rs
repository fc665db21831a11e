//! Cache Store Module
//!
//! Main cache engine state: the key map, lazy TTL expiry, capacity-bounded
//! admission and eviction-on-overflow.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, Clock, EvictionPolicy, SystemClock, Ttl};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Key/value storage with TTL expiry and a configurable eviction policy.
///
/// The store is single-threaded; `CacheEngine` wraps it in a lock for
/// shared use.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// Default TTL in seconds for puts without an explicit TTL
    default_ttl: i64,
    /// What to do when a new key arrives at a full store
    policy: EvictionPolicy,
    /// Time source
    clock: Arc<dyn Clock>,
    /// Next insertion sequence number
    next_seq: u64,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore reading time from the system clock.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of entries the store can hold
    /// * `default_ttl` - Default TTL in seconds for puts without explicit TTL
    /// * `policy` - Eviction policy applied when the store is full
    pub fn new(max_entries: usize, default_ttl: i64, policy: EvictionPolicy) -> Self {
        Self::with_clock(max_entries, default_ttl, policy, Arc::new(SystemClock))
    }

    /// Creates a new CacheStore with an explicit time source.
    pub fn with_clock(
        max_entries: usize,
        default_ttl: i64,
        policy: EvictionPolicy,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            max_entries,
            default_ttl,
            policy,
            clock,
            next_seq: 0,
        }
    }

    // == Put ==
    /// Stores `data` under `key`.
    ///
    /// Overwriting an existing key always succeeds and resets its creation
    /// time. A new key arriving at a full store goes through the eviction
    /// policy, and is refused with `CacheError::CacheFull` when the policy
    /// is `Reject` or no entry could be evicted.
    pub fn put(&mut self, key: String, data: String, ttl: Ttl) -> Result<()> {
        if key.is_empty() {
            return Err(CacheError::InvalidRequest(
                "Key cannot be empty".to_string(),
            ));
        }

        let now = self.clock.now();
        let expires_at = ttl.expires_at(now, self.default_ttl);
        debug!(
            "put: ttl {:?}, expiration for '{}' set to {:?} (now {})",
            ttl, key, expires_at, now
        );

        if !self.has_key(&key) && self.entries.len() >= self.max_entries {
            self.make_room(&key)?;
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries
            .insert(key, CacheEntry::new(data, now, expires_at, seq));
        self.stats.set_total_entries(self.entries.len());

        Ok(())
    }

    // == Get ==
    /// Retrieves the payload stored under `key`.
    ///
    /// An expired entry is removed on the way out and reported as
    /// `CacheError::Expired`.
    pub fn get(&mut self, key: &str) -> Result<String> {
        debug!("get: checking for '{}'", key);
        let now = self.clock.now();

        let expired = match self.entries.get(key) {
            Some(entry) if !entry.is_expired(now) => {
                let data = entry.data.clone();
                self.stats.record_hit();
                return Ok(data);
            }
            Some(_) => true,
            None => false,
        };

        self.stats.record_miss();
        if expired {
            self.purge(key);
            Err(CacheError::Expired(key.to_string()))
        } else {
            debug!("get: key '{}' does not exist", key);
            Err(CacheError::NotFound(key.to_string()))
        }
    }

    // == Delete ==
    /// Removes a live entry.
    ///
    /// Deleting an expired entry fails with `CacheError::Expired`, though the
    /// entry is purged all the same.
    pub fn delete(&mut self, key: &str) -> Result<()> {
        if !self.has_key(key) {
            debug!("delete: key '{}' does not exist", key);
            return Err(CacheError::NotFound(key.to_string()));
        }

        if self.is_expired(key) {
            debug!("delete: key '{}' was expired and removed, can't delete", key);
            return Err(CacheError::Expired(key.to_string()));
        }

        self.entries.remove(key);
        self.stats.set_total_entries(self.entries.len());
        debug!("delete: key '{}' was deleted", key);
        Ok(())
    }

    // == Has Key ==
    /// Pure existence check; expiry is not considered.
    pub fn has_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Is Expired ==
    /// Returns true when `key` holds an expired entry, purging it.
    ///
    /// Absent keys are not expired.
    pub fn is_expired(&mut self, key: &str) -> bool {
        let now = self.clock.now();
        let expired = self
            .entries
            .get(key)
            .is_some_and(|entry| entry.is_expired(now));

        if expired {
            self.purge(key);
        }
        expired
    }

    /// Raw access to a stored entry, expired or not, without side effects.
    pub fn entry(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    // == Stats ==
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Number of physically stored entries, expired-but-unswept included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Admission ==
    /// Frees one slot for `incoming` according to the policy.
    fn make_room(&mut self, incoming: &str) -> Result<()> {
        let victim = match self.policy {
            EvictionPolicy::Reject => {
                debug!("put: store full, rejecting '{}'", incoming);
                None
            }
            EvictionPolicy::OldestFirst => self.oldest_key(),
            EvictionPolicy::NewestFirst => self.newest_key(),
        };

        let evicted = victim.is_some_and(|victim| {
            debug!(
                "put: {} evicting '{}' to admit '{}'",
                self.policy, victim, incoming
            );
            self.entries.remove(&victim).is_some()
        });

        if evicted {
            self.stats.record_eviction();
            Ok(())
        } else {
            self.stats.record_rejection();
            Err(CacheError::CacheFull(incoming.to_string()))
        }
    }

    /// Key with the smallest creation time; earliest insertion wins ties.
    fn oldest_key(&self) -> Option<String> {
        self.entries
            .iter()
            .min_by_key(|(_, entry)| (entry.created, entry.seq))
            .map(|(key, _)| key.clone())
    }

    /// Key with the largest creation time; latest insertion wins ties.
    fn newest_key(&self) -> Option<String> {
        self.entries
            .iter()
            .max_by_key(|(_, entry)| (entry.created, entry.seq))
            .map(|(key, _)| key.clone())
    }

    fn purge(&mut self, key: &str) {
        debug!("found expired object at '{}', deleting", key);
        if self.entries.remove(key).is_some() {
            self.stats.record_expired();
            self.stats.set_total_entries(self.entries.len());
        }
    }
}
