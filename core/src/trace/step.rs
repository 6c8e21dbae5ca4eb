//! Step snapshots and their annotation bags
//!
//! A step is one point in a recorded algorithm execution: a description,
//! the indices to emphasize, named pointer positions and free-form
//! annotations. Pointer and annotation maps keep authoring order so that
//! views can show "the first N" entries the way the trace author wrote them.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt::{self, Display};
use std::marker::PhantomData;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Primitive annotation value attached to a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Annotation {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl Annotation {
    /// Numeric view of the value; text that parses as a number also counts
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Annotation::Number(n) => Some(*n),
            Annotation::Text(s) => s.trim().parse::<f64>().ok(),
            Annotation::Flag(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Annotation::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Truthiness as authored traces expect it: `0`, `NaN`, `""` and `false`
    /// are all "absent" for display purposes
    pub fn is_truthy(&self) -> bool {
        match self {
            Annotation::Flag(b) => *b,
            Annotation::Number(n) => *n != 0.0 && !n.is_nan(),
            Annotation::Text(s) => !s.is_empty(),
        }
    }
}

impl Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Annotation::Flag(b) => write!(f, "{}", b),
            Annotation::Number(n) => write_number(f, *n),
            Annotation::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Annotation {
    fn from(value: f64) -> Self {
        Annotation::Number(value)
    }
}

impl From<i64> for Annotation {
    fn from(value: i64) -> Self {
        Annotation::Number(value as f64)
    }
}

impl From<&str> for Annotation {
    fn from(value: &str) -> Self {
        Annotation::Text(value.to_owned())
    }
}

impl From<bool> for Annotation {
    fn from(value: bool) -> Self {
        Annotation::Flag(value)
    }
}

/// Writes integral numbers without a fractional part (`7`, not `7.0`)
pub(crate) fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{}", n)
    }
}

/// Insertion-ordered string-keyed map
///
/// Step bags are small (a handful of keys), so a vector with linear lookup
/// beats hashing and keeps the authored order for free.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Inserts or replaces, keeping the original position of replaced keys
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct OrderedMapVisitor<V> {
    marker: PhantomData<V>,
}

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
    type Value = OrderedMap<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with string keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = OrderedMap::new();
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            map.insert(key, value);
        }
        Ok(map)
    }

    // Generators occasionally emit `null` for an empty bag
    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(OrderedMap::new())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(OrderedMapVisitor { marker: PhantomData })
    }
}

/// Annotation bag keyed by visualization-specific names
pub type Annotations = OrderedMap<Annotation>;

/// Pointer role to (signed) data index
pub type PointerPositions = OrderedMap<i64>;

/// One snapshot in an execution trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Human-readable narration of this step
    pub description: String,

    /// Indices into the active dataset to emphasize
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlight: Vec<i64>,

    /// Named logical cursors for this step
    #[serde(default, skip_serializing_if = "OrderedMap::is_empty")]
    pub pointer_positions: PointerPositions,

    /// Display annotations (badges, labels)
    #[serde(default, skip_serializing_if = "OrderedMap::is_empty")]
    pub extra_info: Annotations,
}

impl Step {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            highlight: Vec::new(),
            pointer_positions: PointerPositions::new(),
            extra_info: Annotations::new(),
        }
    }

    pub fn with_highlight(mut self, indices: impl IntoIterator<Item = i64>) -> Self {
        self.highlight = indices.into_iter().collect();
        self
    }

    pub fn with_pointer(mut self, role: &str, index: i64) -> Self {
        self.pointer_positions.insert(role, index);
        self
    }

    pub fn with_info(mut self, key: &str, value: impl Into<Annotation>) -> Self {
        self.extra_info.insert(key, value.into());
        self
    }

    /// Membership test against the highlight set
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlight.iter().any(|&h| h >= 0 && h as usize == index)
    }

    /// Raw pointer value for a role, as authored (may be negative)
    pub fn pointer(&self, role: &str) -> Option<i64> {
        self.pointer_positions.get(role).copied()
    }

    /// Pointer resolved against a dataset of `len` elements; out-of-range
    /// positions read as "role not active"
    pub fn pointer_within(&self, role: &str, len: usize) -> Option<usize> {
        self.pointer(role)
            .filter(|&p| p >= 0 && (p as usize) < len)
            .map(|p| p as usize)
    }

    /// True if `role` points exactly at `index`
    pub fn points_at(&self, role: &str, index: usize) -> bool {
        self.pointer(role) == Some(index as i64)
    }

    pub fn info(&self, key: &str) -> Option<&Annotation> {
        self.extra_info.get(key)
    }

    pub fn info_number(&self, key: &str) -> Option<f64> {
        self.info(key).and_then(Annotation::as_number)
    }

    /// Annotation only if it would display as present
    pub fn info_truthy(&self, key: &str) -> Option<&Annotation> {
        self.info(key).filter(|a| a.is_truthy())
    }
}
