//! Inbound Ports (Driving Ports)
//!
//! The narrow capability surface of a membership filter. It deliberately
//! has no removal or iteration methods; see
//! [`BloomCollection`](crate::adapters::BloomCollection) for a
//! collection-shaped wrapper that rejects those at the boundary.

use crate::domain::BloomFilter;

/// Probabilistic set membership over strings (Driving Port)
///
/// Implementations must never report a false negative: after `add(key)`,
/// `contains(key)` is true until `clear()`.
pub trait MembershipFilter {
    /// Insert a key; always returns `true`
    fn add(&mut self, key: &str) -> bool;

    /// Test whether a key might have been inserted
    fn contains(&self, key: &str) -> bool;

    /// Discard all inserted keys
    fn clear(&mut self);

    /// Insert every key, in iteration order
    fn add_all<I, S>(&mut self, keys: I) -> bool
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for key in keys {
            self.add(key.as_ref());
        }
        true
    }

    /// True iff `contains` holds for every key; stops at the first miss
    fn contains_all<I, S>(&self, keys: I) -> bool
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys.into_iter().all(|key| self.contains(key.as_ref()))
    }
}

impl MembershipFilter for BloomFilter {
    fn add(&mut self, key: &str) -> bool {
        BloomFilter::add(self, key)
    }

    fn contains(&self, key: &str) -> bool {
        BloomFilter::contains(self, key)
    }

    fn clear(&mut self) {
        BloomFilter::clear(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load<F: MembershipFilter>(filter: &mut F, keys: &[&str]) {
        filter.add_all(keys);
    }

    #[test]
    fn test_generic_caller_sees_no_false_negatives() {
        let mut filter = BloomFilter::new(100, 0.01).unwrap();
        let keys = ["heron", "egret", "ibis"];

        load(&mut filter, &keys);

        assert!(MembershipFilter::contains_all(&filter, keys));
        assert_eq!(filter.inserted_count(), 3);
    }

    #[test]
    fn test_trait_object_usable() {
        let mut filter = BloomFilter::new(100, 0.01).unwrap();
        let dynamic: &mut dyn MembershipFilter = &mut filter;

        dynamic.add("stork");
        assert!(dynamic.contains("stork"));

        dynamic.clear();
        assert!(!dynamic.contains("stork"));
    }
}
