//! Product identifiers.
//!
//! Permanent ids are assigned by the remote catalog service. The client only
//! ever mints temporary ids for speculative entries, through [`TempIdClock`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};

/// A product identifier as used on the wire (a plain integer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Create an id from its integer value.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the integer value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Source of temporary ids for speculative products.
///
/// Ids are derived from the wall clock in milliseconds and never repeat for
/// one clock: two calls within the same millisecond still yield distinct,
/// increasing values. A collision with a server-assigned id is possible in
/// principle and is not guarded against.
#[derive(Debug, Default)]
pub struct TempIdClock {
    last: AtomicI64,
}

impl TempIdClock {
    /// Create a new clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next temporary id.
    pub fn next_id(&self) -> ProductId {
        let now = chrono::Utc::now().timestamp_millis();
        let mut last = self.last.load(Ordering::SeqCst);
        loop {
            let candidate = now.max(last + 1);
            match self
                .last
                .compare_exchange(last, candidate, Ordering::SeqCst, Ordering::SeqCst)
            {
                Ok(_) => return ProductId(candidate),
                Err(actual) => last = actual,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = ProductId::new(42);
        assert_eq!(format!("{}", id), "42");
    }

    #[test]
    fn test_id_from_str() {
        let id: ProductId = " 17 ".parse().unwrap();
        assert_eq!(id, ProductId::new(17));
        assert!("abc".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_id_serializes_as_integer() {
        let json = serde_json::to_string(&ProductId::new(7)).unwrap();
        assert_eq!(json, "7");
        let id: ProductId = serde_json::from_str("195").unwrap();
        assert_eq!(id.get(), 195);
    }

    #[test]
    fn test_temp_ids_strictly_increase() {
        let clock = TempIdClock::new();
        let ids: Vec<ProductId> = (0..100).map(|_| clock.next_id()).collect();
        for pair in ids.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_temp_ids_follow_wall_clock() {
        let before = chrono::Utc::now().timestamp_millis();
        let id = TempIdClock::new().next_id();
        assert!(id.get() >= before);
    }
}
