//! Eviction Policy Module
//!
//! Decides what happens when a new key arrives at a full store.

use std::fmt;
use std::str::FromStr;

// == Eviction Policy ==
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvictionPolicy {
    /// Refuse the new key
    #[default]
    Reject,
    /// Evict the entry with the smallest creation time
    OldestFirst,
    /// Evict the entry with the largest creation time
    NewestFirst,
}

impl EvictionPolicy {
    /// The identifier used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            EvictionPolicy::Reject => "REJECT",
            EvictionPolicy::OldestFirst => "OLDEST_FIRST",
            EvictionPolicy::NewestFirst => "NEWEST_FIRST",
        }
    }
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvictionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "REJECT" => Ok(EvictionPolicy::Reject),
            "OLDEST_FIRST" => Ok(EvictionPolicy::OldestFirst),
            "NEWEST_FIRST" => Ok(EvictionPolicy::NewestFirst),
            other => Err(format!("unknown eviction policy '{}'", other)),
        }
    }
}
