//! Ordered frequency tables.
//!
//! A [`Tally`] counts occurrences of string keys and remembers the order in
//! which each key was first seen. Reports render tables in that order, and
//! the JSON form is a plain object with keys in the same order.

use std::collections::HashMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Frequency table keyed by string, in first-occurrence order.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl Tally {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `key`.
    pub fn add(&mut self, key: &str) {
        self.add_n(key, 1);
    }

    /// Add `n` occurrences of `key`.
    pub fn add_n(&mut self, key: &str, n: usize) {
        if let Some(&slot) = self.index.get(key) {
            self.entries[slot].1 += n;
        } else {
            self.index.insert(key.to_string(), self.entries.len());
            self.entries.push((key.to_string(), n));
        }
    }

    /// Count for `key`, or 0 if it was never seen.
    pub fn get(&self, key: &str) -> usize {
        self.index.get(key).map_or(0, |&slot| self.entries[slot].1)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Iterate `(key, count)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(key, count)| (key.as_str(), *count))
    }

    /// Keep only entries whose count satisfies `keep`, preserving order.
    pub fn filter(&self, keep: impl Fn(usize) -> bool) -> Self {
        self.iter()
            .filter(|(_, count)| keep(*count))
            .collect()
    }
}

impl<'a> FromIterator<(&'a str, usize)> for Tally {
    fn from_iter<I: IntoIterator<Item = (&'a str, usize)>>(iter: I) -> Self {
        let mut tally = Self::new();
        for (key, count) in iter {
            tally.add_n(key, count);
        }
        tally
    }
}

impl<'a> FromIterator<&'a str> for Tally {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(|key| (key, 1)).collect()
    }
}

/// Tables are equal when they hold the same counts, regardless of order.
impl PartialEq for Tally {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(key, count)| other.get(key) == count)
    }
}

impl Eq for Tally {}

impl Serialize for Tally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, count) in self.iter() {
            map.serialize_entry(key, &count)?;
        }
        map.end()
    }
}

/// Reads a JSON-style map; a key that appears twice is an error.
impl<'de> Deserialize<'de> for Tally {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TallyVisitor;

        impl<'de> Visitor<'de> for TallyVisitor {
            type Value = Tally;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of strings to counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Tally, A::Error> {
                let mut tally = Tally::new();
                while let Some((key, count)) = access.next_entry::<String, usize>()? {
                    if tally.index.contains_key(&key) {
                        return Err(de::Error::custom(format!("duplicate key `{key}`")));
                    }
                    tally.add_n(&key, count);
                }
                Ok(tally)
            }
        }

        deserializer.deserialize_map(TallyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_occurrence_order() {
        let tally: Tally = ["b", "a", "b", "c", "a", "b"].into_iter().collect();
        let order: Vec<_> = tally.iter().collect();
        assert_eq!(order, vec![("b", 3), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn missing_key_counts_zero() {
        let tally: Tally = ["x"].into_iter().collect();
        assert_eq!(tally.get("x"), 1);
        assert_eq!(tally.get("y"), 0);
    }

    #[test]
    fn filter_preserves_order() {
        let tally: Tally = ["z", "y", "z", "x", "y"].into_iter().collect();
        let repeated = tally.filter(|count| count > 1);
        let keys: Vec<_> = repeated.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z", "y"]);
        assert_eq!(repeated.total(), 4);
    }

    #[test]
    fn equality_ignores_order() {
        let a: Tally = ["a", "b", "b"].into_iter().collect();
        let b: Tally = ["b", "a", "b"].into_iter().collect();
        let c: Tally = ["a", "b"].into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn json_object_in_order() {
        let tally: Tally = ["é", "a", "é"].into_iter().collect();
        let json = serde_json::to_string(&tally).unwrap();
        assert_eq!(json, r#"{"é":2,"a":1}"#);

        let back: Tally = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tally);
        assert_eq!(back.iter().next(), Some(("é", 2)));
    }

    #[test]
    fn json_duplicate_keys_rejected() {
        let err = serde_json::from_str::<Tally>(r#"{"a":1,"b":2,"a":3}"#).unwrap_err();
        assert!(err.to_string().contains("duplicate key `a`"));
    }
}
