use crate::core::error::DistributionError;
use crate::core::weights::Weight;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Mutable mapping from value to numeric weight.
///
/// Pure bookkeeping: no probability semantics. Entries are kept in a
/// `BTreeMap`, so every enumeration (`keys`, `values`, `iter`) walks keys in
/// ascending order. Higher layers rely on that order for tie-breaking and
/// sampling.
///
/// Absent keys read as the caller-supplied default (or zero, for the
/// arithmetic helpers). `Clone` is a deep copy: the name and every entry
/// are duplicated and the two maps share nothing afterwards.
///
/// Serializes as the plain key to weight object; the name is not part of it.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedMap<K: Ord, W> {
    entries: BTreeMap<K, W>,
    name: Option<String>,
}

impl<K: Ord + Serialize, W: Serialize> Serialize for WeightedMap<K, W> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<K: Ord, W> Default for WeightedMap<K, W> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            name: None,
        }
    }
}

impl<K: Ord + Clone, W: Weight> WeightedMap<K, W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from a borrowed mapping. The entries are copied, never aliased.
    pub fn from_mapping(mapping: &BTreeMap<K, W>) -> Self {
        Self {
            entries: mapping.clone(),
            name: None,
        }
    }

    pub fn with_name<N: Into<String>>(mut self, name: N) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name<N: Into<String>>(&mut self, name: N) {
        self.name = Some(name.into());
    }

    #[inline]
    pub fn has(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Stored weight for `key`, or `default` when the key is absent.
    #[inline]
    pub fn get(&self, key: &K, default: W) -> W {
        self.entries.get(key).copied().unwrap_or(default)
    }

    #[inline]
    pub fn set(&mut self, key: K, weight: W) {
        self.entries.insert(key, weight);
    }

    /// Deletes `key`; returns whether it was present.
    pub fn remove(&mut self, key: &K) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.keys()
    }

    /// Weights, in the same order as [`keys`](Self::keys).
    pub fn values(&self) -> impl Iterator<Item = W> + '_ {
        self.entries.values().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, W)> + '_ {
        self.entries.iter().map(|(k, w)| (k, *w))
    }

    /// Owned `(key, weight)` pairs in ascending key order.
    pub fn items(&self) -> Vec<(K, W)> {
        self.entries
            .iter()
            .map(|(k, w)| (k.clone(), *w))
            .collect()
    }

    /// Sum of all weights. Fails on an empty map.
    pub fn total(&self) -> Result<W, DistributionError> {
        let mut values = self.values();
        let first = values.next().ok_or(DistributionError::EmptyReduction)?;
        Ok(values.fold(first, |acc, w| acc + w))
    }

    /// Largest weight. Fails on an empty map.
    pub fn max(&self) -> Result<W, DistributionError> {
        let mut values = self.values();
        let first = values.next().ok_or(DistributionError::EmptyReduction)?;
        Ok(values.fold(first, |best, w| if w > best { w } else { best }))
    }

    /// `set(key, get(key, 0) + delta)`.
    pub fn increment(&mut self, key: K, delta: W) {
        match self.entries.entry(key) {
            Entry::Occupied(mut e) => {
                let w = *e.get();
                e.insert(w + delta);
            }
            Entry::Vacant(e) => {
                e.insert(W::zero() + delta);
            }
        }
    }

    /// `set(key, get(key, 0) * factor)`.
    pub fn multiply(&mut self, key: K, factor: W) {
        let w = self.get(&key, W::zero());
        self.entries.insert(key, w * factor);
    }

    /// Replaces every weight with `f(key, weight)`, walking keys in ascending order.
    pub fn rescale_with<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, W) -> W,
    {
        for (k, w) in self.entries.iter_mut() {
            *w = f(k, *w);
        }
    }

    /// Independent deep copy, name included.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Order-stable snapshot of the current key to weight state.
    pub fn to_plain_mapping(&self) -> BTreeMap<K, W> {
        self.entries.clone()
    }
}

impl<K: Ord + Clone + Serialize, W: Weight + Serialize> WeightedMap<K, W> {
    /// Plain JSON object of the entries, keys in ascending order.
    pub fn to_json(&self) -> Result<Value, DistributionError> {
        Ok(serde_json::to_value(&self.entries)?)
    }
}

impl<K: Ord, W> FromIterator<(K, W)> for WeightedMap<K, W> {
    fn from_iter<I: IntoIterator<Item = (K, W)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
            name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_keys_read_as_default() {
        let m: WeightedMap<&str, i64> = WeightedMap::new();
        assert!(!m.has(&"a"));
        assert_eq!(m.get(&"a", 0), 0);
        assert_eq!(m.get(&"a", 7), 7);
    }

    #[test]
    fn set_overwrites_and_remove_reports_presence() {
        let mut m = WeightedMap::new();
        m.set("a", 1.0);
        m.set("a", 2.5);
        assert_eq!(m.get(&"a", 0.0), 2.5);
        assert_eq!(m.len(), 1);

        assert!(m.remove(&"a"));
        assert!(!m.remove(&"a"));
        assert!(m.is_empty());
    }

    #[test]
    fn keys_and_values_follow_ascending_key_order() {
        let mut m = WeightedMap::new();
        m.set(3, 30);
        m.set(1, 10);
        m.set(2, 20);
        assert_eq!(m.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(m.values().collect::<Vec<_>>(), vec![10, 20, 30]);
        assert_eq!(m.items(), vec![(1, 10), (2, 20), (3, 30)]);
    }

    #[test]
    fn total_and_max_fail_on_empty_map() {
        let m: WeightedMap<i32, f64> = WeightedMap::new();
        assert!(matches!(m.total(), Err(DistributionError::EmptyReduction)));
        assert!(matches!(m.max(), Err(DistributionError::EmptyReduction)));
    }

    #[test]
    fn total_and_max_reduce_values() {
        let m: WeightedMap<i32, i64> = [(1, 4), (2, -1), (3, 9)].into_iter().collect();
        assert_eq!(m.total().unwrap(), 12);
        assert_eq!(m.max().unwrap(), 9);
    }

    #[test]
    fn increment_and_multiply_treat_missing_as_zero() {
        let mut m: WeightedMap<char, i64> = WeightedMap::new();
        m.increment('x', 1);
        m.increment('x', 1);
        m.increment('y', -3);
        assert_eq!(m.get(&'x', 0), 2);
        assert_eq!(m.get(&'y', 0), -3);

        m.multiply('x', 5);
        m.multiply('z', 5);
        assert_eq!(m.get(&'x', 0), 10);
        assert!(m.has(&'z'));
        assert_eq!(m.get(&'z', 99), 0);
    }

    #[test]
    fn copy_is_isolated_and_keeps_name() {
        let mut a: WeightedMap<i32, f64> = WeightedMap::new().with_name("prior");
        a.set(1, 0.5);
        let mut b = a.copy();
        b.set(1, 0.9);
        b.set(2, 0.1);

        assert_eq!(a.get(&1, 0.0), 0.5);
        assert!(!a.has(&2));
        assert_eq!(b.name(), Some("prior"));
    }

    #[test]
    fn from_mapping_does_not_alias_source() {
        let mut src = BTreeMap::new();
        src.insert("k", 1i64);
        let mut m = WeightedMap::from_mapping(&src);
        m.increment("k", 1);
        assert_eq!(src["k"], 1);
        assert_eq!(m.get(&"k", 0), 2);
    }

    #[test]
    fn rescale_with_visits_every_entry() {
        let mut m: WeightedMap<i32, f64> = [(1, 1.0), (2, 2.0)].into_iter().collect();
        m.rescale_with(|k, w| w * (*k as f64));
        assert_eq!(m.to_plain_mapping(), BTreeMap::from([(1, 1.0), (2, 4.0)]));
    }

    #[test]
    fn to_json_is_plain_object() {
        let m: WeightedMap<i32, i64> = [(2, 5), (1, 3)].into_iter().collect();
        let json = m.to_json().unwrap();
        assert_eq!(json.to_string(), r#"{"1":3,"2":5}"#);
    }

    #[test]
    fn serialize_matches_to_json_and_drops_name() {
        let m: WeightedMap<i32, i64> = [(2, 5), (1, 3)].into_iter().collect();
        let m = m.with_name("counts");
        let text = serde_json::to_string(&m).unwrap();
        assert_eq!(text, r#"{"1":3,"2":5}"#);
        assert_eq!(text, m.to_json().unwrap().to_string());
    }
}
