//! Cache Entry Module
//!
//! Defines the structure for individual stored objects and the TTL request
//! that decides when they expire.

// == TTL ==
/// TTL requested by a put.
///
/// `Default` means the caller said nothing and the store's default TTL
/// applies. `Seconds(0)` is the explicit "never expires" request; any other
/// value is added to the current time, so a negative value produces an entry
/// that is already expired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ttl {
    #[default]
    Default,
    Seconds(i64),
}

impl Ttl {
    /// Resolves the absolute expiry for an entry created at `now`.
    ///
    /// Returns `None` for entries that never expire.
    pub fn expires_at(self, now: i64, default_ttl: i64) -> Option<i64> {
        match self {
            Ttl::Default => Some(now.saturating_add(default_ttl)),
            Ttl::Seconds(0) => None,
            Ttl::Seconds(secs) => Some(now.saturating_add(secs)),
        }
    }
}

impl From<Option<i64>> for Ttl {
    fn from(ttl: Option<i64>) -> Self {
        ttl.map_or(Ttl::Default, Ttl::Seconds)
    }
}

// == Cache Entry ==
/// One stored object with its timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// Opaque payload, stored verbatim
    pub data: String,
    /// Creation timestamp (Unix seconds)
    pub created: i64,
    /// Expiration timestamp (Unix seconds), None = never expires
    pub expires_at: Option<i64>,
    /// Insertion sequence number, breaks ties between equal `created` values
    pub seq: u64,
}

impl CacheEntry {
    // == Constructor ==
    pub fn new(data: String, created: i64, expires_at: Option<i64>, seq: u64) -> Self {
        Self {
            data,
            created,
            expires_at,
            seq,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at time `now`.
    ///
    /// An entry is expired once `now >= expires_at`.
    pub fn is_expired(&self, now: i64) -> bool {
        match self.expires_at {
            Some(expires) => now >= expires,
            None => false,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn test_default_ttl_uses_store_default() {
        assert_eq!(Ttl::Default.expires_at(NOW, 3600), Some(NOW + 3600));
    }

    #[test]
    fn test_zero_ttl_never_expires() {
        assert_eq!(Ttl::Seconds(0).expires_at(NOW, 3600), None);
    }

    #[test]
    fn test_explicit_ttl() {
        assert_eq!(Ttl::Seconds(60).expires_at(NOW, 3600), Some(NOW + 60));
    }

    #[test]
    fn test_negative_ttl_is_in_the_past() {
        let expires = Ttl::Seconds(-5).expires_at(NOW, 3600).unwrap();
        assert!(expires < NOW);
    }

    #[test]
    fn test_huge_ttl_saturates() {
        assert_eq!(Ttl::Seconds(i64::MAX).expires_at(NOW, 3600), Some(i64::MAX));
    }

    #[test]
    fn test_ttl_from_option() {
        assert_eq!(Ttl::from(None), Ttl::Default);
        assert_eq!(Ttl::from(Some(0)), Ttl::Seconds(0));
        assert_eq!(Ttl::from(Some(-3)), Ttl::Seconds(-3));
    }

    #[test]
    fn test_entry_expiration_boundary() {
        let entry = CacheEntry::new("{}".to_string(), NOW, Some(NOW + 10), 0);

        assert!(!entry.is_expired(NOW));
        assert!(!entry.is_expired(NOW + 9));
        assert!(entry.is_expired(NOW + 10), "expired exactly at expires_at");
        assert!(entry.is_expired(NOW + 11));
    }

    #[test]
    fn test_entry_without_expiry_never_expires() {
        let entry = CacheEntry::new("{}".to_string(), NOW, None, 0);
        assert!(!entry.is_expired(i64::MAX));
    }
}
