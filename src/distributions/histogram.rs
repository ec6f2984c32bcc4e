use crate::core::weights::WeightedMap;
use serde::Serialize;
use std::ops::{Deref, DerefMut};

/// Map from values to integer frequencies.
///
/// Counts are never clamped: [`subtract`](Histogram::subtract) may leave a
/// key with a negative frequency.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Histogram<K: Ord> {
    counts: WeightedMap<K, i64>,
}

impl<K: Ord> Default for Histogram<K> {
    fn default() -> Self {
        Self {
            counts: WeightedMap::default(),
        }
    }
}

impl<K: Ord + Clone> Histogram<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts each occurrence of every value.
    pub fn from_values<I: IntoIterator<Item = K>>(values: I) -> Self {
        let mut hist = Self::new();
        for v in values {
            hist.increment(v, 1);
        }
        hist
    }

    pub fn with_name<N: Into<String>>(self, name: N) -> Self {
        Self {
            counts: self.counts.with_name(name),
        }
    }

    /// Frequency of `x`, zero when never counted.
    #[inline]
    pub fn frequency(&self, x: &K) -> i64 {
        self.counts.get(x, 0)
    }

    /// True iff every key counted here appears at least as often in `other`.
    pub fn is_subset(&self, other: &Histogram<K>) -> bool {
        self.counts
            .iter()
            .all(|(k, count)| count <= other.frequency(k))
    }

    /// Decrements each of this histogram's counts by `other`'s count for the
    /// same key. Keys only present in `other` are not introduced.
    pub fn subtract(&mut self, other: &Histogram<K>) {
        self.counts.rescale_with(|k, count| count - other.frequency(k));
    }

    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl<K: Ord> Deref for Histogram<K> {
    type Target = WeightedMap<K, i64>;

    fn deref(&self) -> &Self::Target {
        &self.counts
    }
}

impl<K: Ord> DerefMut for Histogram<K> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.counts
    }
}

impl<K: Ord + Clone> FromIterator<K> for Histogram<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multiset_count(xs: &[char], k: char) -> i64 {
        xs.iter().filter(|&&x| x == k).count() as i64
    }

    #[test]
    fn frequency_defaults_to_zero() {
        let h = Histogram::from_values("aab".chars());
        assert_eq!(h.frequency(&'a'), 2);
        assert_eq!(h.frequency(&'b'), 1);
        assert_eq!(h.frequency(&'z'), 0);
    }

    #[test]
    fn subset_matches_multiset_containment() {
        let a_vals = ['a', 'a', 'b'];
        let b_vals = ['a', 'a', 'a', 'b', 'c'];
        let a = Histogram::from_values(a_vals);
        let b = Histogram::from_values(b_vals);

        let expected = a_vals
            .iter()
            .all(|&k| multiset_count(&a_vals, k) <= multiset_count(&b_vals, k));
        assert_eq!(a.is_subset(&b), expected);
        assert!(a.is_subset(&b));
        assert!(!b.is_subset(&a));
    }

    #[test]
    fn keys_only_in_other_do_not_affect_subset() {
        let a = Histogram::from_values([1, 2]);
        let b = Histogram::from_values([1, 2, 3, 3, 3]);
        assert!(a.is_subset(&b));
    }

    #[test]
    fn subtract_is_keywise_and_may_go_negative() {
        let a_vals = ['a', 'b', 'b', 'd'];
        let b_vals = ['a', 'a', 'a', 'b', 'c'];
        let mut a = Histogram::from_values(a_vals);
        let b = Histogram::from_values(b_vals);
        a.subtract(&b);

        for k in ['a', 'b', 'd'] {
            assert_eq!(
                a.frequency(&k),
                multiset_count(&a_vals, k) - multiset_count(&b_vals, k),
                "key {k}"
            );
        }
        assert_eq!(a.frequency(&'a'), -2);
        assert!(!a.has(&'c'));
    }

    #[test]
    fn shares_weighted_map_bookkeeping() {
        let mut h: Histogram<&str> = Histogram::new().with_name("words");
        h.increment("x", 3);
        h.set("y", 4);
        assert_eq!(h.total().unwrap(), 7);
        assert_eq!(h.max().unwrap(), 4);
        assert_eq!(h.name(), Some("words"));

        let mut c = h.copy();
        c.increment("x", 1);
        assert_eq!(h.frequency(&"x"), 3);
        assert_eq!(c.name(), Some("words"));
    }

    #[test]
    fn serializes_as_plain_counts() {
        let h = Histogram::from_values([2, 1, 2]);
        let h = h.with_name("rolls");
        assert_eq!(serde_json::to_string(&h).unwrap(), r#"{"1":1,"2":2}"#);
        assert_eq!(h.to_json().unwrap().to_string(), r#"{"1":1,"2":2}"#);
    }
}
