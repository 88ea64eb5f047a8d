//! Collection-shaped adapter around [`BloomFilter`]
//!
//! For callers that expect a general collection surface. Operations a Bloom
//! filter cannot support by construction (removal, retention, iteration,
//! export) return [`FilterError::UnsupportedOperation`] and never touch the
//! wrapped filter.

use std::any::Any;

use crate::domain::BloomFilter;
use crate::error::FilterError;
use crate::ports::MembershipFilter;

/// A [`BloomFilter`] with a collection-style API
#[derive(Clone, Debug)]
pub struct BloomCollection {
    filter: BloomFilter,
}

impl BloomCollection {
    /// Build a new, empty filter wrapped in the adapter
    pub fn new(capacity: usize, target_error_probability: f64) -> Result<Self, FilterError> {
        Ok(Self::from_filter(BloomFilter::new(
            capacity,
            target_error_probability,
        )?))
    }

    /// Wrap an existing filter
    pub fn from_filter(filter: BloomFilter) -> Self {
        Self { filter }
    }

    /// Borrow the wrapped filter
    pub fn as_filter(&self) -> &BloomFilter {
        &self.filter
    }

    /// Unwrap the adapter
    pub fn into_inner(self) -> BloomFilter {
        self.filter
    }

    /// Number of `add` calls, duplicates included
    pub fn len(&self) -> usize {
        self.filter.inserted_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Membership test for a value of unknown type
    ///
    /// Only `String` and `&str` can match; any other type returns `false`.
    pub fn contains_value(&self, value: &dyn Any) -> bool {
        if let Some(s) = value.downcast_ref::<String>() {
            self.filter.contains(s)
        } else if let Some(s) = value.downcast_ref::<&str>() {
            self.filter.contains(s)
        } else {
            false
        }
    }

    pub fn remove(&mut self, _key: &str) -> Result<bool, FilterError> {
        Err(FilterError::UnsupportedOperation {
            operation: "remove element",
        })
    }

    pub fn remove_all<I, S>(&mut self, _keys: I) -> Result<bool, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Err(FilterError::UnsupportedOperation {
            operation: "remove elements",
        })
    }

    pub fn retain_all<I, S>(&mut self, _keys: I) -> Result<bool, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Err(FilterError::UnsupportedOperation {
            operation: "retain elements",
        })
    }

    pub fn iter(&self) -> Result<std::iter::Empty<&str>, FilterError> {
        Err(FilterError::UnsupportedOperation {
            operation: "iterate over elements",
        })
    }

    pub fn to_vec(&self) -> Result<Vec<String>, FilterError> {
        Err(FilterError::UnsupportedOperation {
            operation: "return array",
        })
    }
}

impl MembershipFilter for BloomCollection {
    fn add(&mut self, key: &str) -> bool {
        self.filter.add(key)
    }

    fn contains(&self, key: &str) -> bool {
        self.filter.contains(key)
    }

    fn clear(&mut self) {
        self.filter.clear()
    }
}

impl From<BloomFilter> for BloomCollection {
    fn from(filter: BloomFilter) -> Self {
        Self::from_filter(filter)
    }
}

impl<S: AsRef<str>> Extend<S> for BloomCollection {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.filter.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> BloomCollection {
        let mut collection = BloomCollection::new(100, 0.01).unwrap();
        collection.add_all(["lynx", "puma", "serval"]);
        collection
    }

    #[test]
    fn test_len_tracks_adds() {
        let mut collection = BloomCollection::new(100, 0.01).unwrap();
        assert!(collection.is_empty());

        collection.add("lynx");
        collection.add("lynx");

        assert_eq!(collection.len(), 2);
        assert!(!collection.is_empty());
    }

    #[test]
    fn test_contains_value_text_types() {
        let collection = populated();

        assert!(collection.contains_value(&String::from("puma")));
        assert!(collection.contains_value(&"serval"));
    }

    #[test]
    fn test_contains_value_non_text_is_false() {
        let collection = populated();

        assert!(!collection.contains_value(&42u32));
        assert!(!collection.contains_value(&3.5f64));
        assert!(!collection.contains_value(&vec!["lynx"]));
    }

    #[test]
    fn test_unsupported_operations_fail_without_mutation() {
        let mut collection = populated();
        let bits_before = collection.as_filter().bits_set();

        let results = [
            collection.remove("lynx").unwrap_err(),
            collection.remove_all(["lynx"]).unwrap_err(),
            collection.retain_all(["puma"]).unwrap_err(),
            collection.iter().unwrap_err(),
            collection.to_vec().unwrap_err(),
        ];

        for err in &results {
            assert!(err.is_unsupported(), "Expected unsupported, got {:?}", err);
        }
        assert_eq!(collection.len(), 3);
        assert_eq!(collection.as_filter().bits_set(), bits_before);
        assert!(collection.contains_all(["lynx", "puma", "serval"]));
    }

    #[test]
    fn test_clear_through_adapter() {
        let mut collection = populated();

        collection.clear();

        assert!(collection.is_empty());
        assert!(!collection.contains("lynx"));
    }

    #[test]
    fn test_into_inner_keeps_state() {
        let filter = populated().into_inner();

        assert_eq!(filter.inserted_count(), 3);
        assert!(filter.contains("puma"));
    }
}
