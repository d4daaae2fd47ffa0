//! Hash collections used across the Fabric crates.
//!
//! Re-exports of the `ahash` map and set; lookups here are keyed by short
//! strings (component names, reference keys) where AHash beats SipHash.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_ahash() {
        let mut map = HashMap::new();
        map.insert("View", 1);
        assert_eq!(map.get("View"), Some(&1));
    }

    #[test]
    fn test_hashset_ahash() {
        let mut set = HashSet::new();
        set.insert("scroll");
        assert!(set.contains("scroll"));
        assert!(!set.insert("scroll"));
    }
}
