//! Object member store.
//!
//! [`Map`] is a thin wrapper around the map type backing JSON objects. By default
//! it is a [`BTreeMap`](std::collections::BTreeMap), so members iterate and
//! serialize in lexicographic key order no matter how they were inserted.
//!
//! With the `preserve_order` feature enabled the backing store becomes an
//! [`IndexMap`](indexmap::IndexMap) and members keep their insertion order.
//!
//! ## Examples
//!
//! ```rust
//! use jsontree::{Map, Value};
//!
//! let mut map = Map::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_string().ok()), Some("Alice"));
//! ```

use crate::Value;

#[cfg(not(feature = "preserve_order"))]
use std::collections::btree_map as imp;
#[cfg(not(feature = "preserve_order"))]
type MapImpl = std::collections::BTreeMap<String, Value>;

#[cfg(feature = "preserve_order")]
use indexmap::map as imp;
#[cfg(feature = "preserve_order")]
type MapImpl = indexmap::IndexMap<String, Value>;

/// Iterator over `(&String, &Value)` pairs.
pub type Iter<'a> = imp::Iter<'a, String, Value>;
/// Iterator over `(&String, &mut Value)` pairs.
pub type IterMut<'a> = imp::IterMut<'a, String, Value>;
/// Iterator over the keys.
pub type Keys<'a> = imp::Keys<'a, String, Value>;
/// Iterator over the values.
pub type Values<'a> = imp::Values<'a, String, Value>;
/// Owning iterator over `(String, Value)` pairs.
pub type IntoIter = imp::IntoIter<String, Value>;

/// A map of string keys to JSON values with unique keys.
///
/// Inserting an existing key replaces its value; the key keeps its place in
/// the iteration order.
///
/// # Examples
///
/// ```rust
/// use jsontree::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("b".to_string(), Value::from(2));
/// map.insert("a".to_string(), Value::from(1));
///
/// # #[cfg(not(feature = "preserve_order"))]
/// # {
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["a", "b"]);
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Map(MapImpl);

impl Map {
    /// Creates an empty `Map`.
    #[must_use]
    pub fn new() -> Self {
        Map(MapImpl::new())
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsontree::{Map, Value};
    ///
    /// let mut map = Map::new();
    /// assert!(map.insert("key".to_string(), Value::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Returns the value for `key`, inserting `Null` first if it is absent.
    pub fn get_or_insert_null(&mut self, key: &str) -> &mut Value {
        self.0.entry(key.to_string()).or_insert(Value::Null)
    }

    /// Returns `true` if the map contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes `key` from the map, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        #[cfg(not(feature = "preserve_order"))]
        {
            self.0.remove(key)
        }
        #[cfg(feature = "preserve_order")]
        {
            self.0.shift_remove(key)
        }
    }

    /// Returns the number of members in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Removes every member.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns an iterator over the keys of the map.
    pub fn keys(&self) -> Keys<'_> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map.
    pub fn values(&self) -> Values<'_> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map.
    pub fn iter(&self) -> Iter<'_> {
        self.0.iter()
    }

    /// Returns a mutable iterator over the key-value pairs of the map.
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        self.0.iter_mut()
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Map(MapImpl::from_iter(iter))
    }
}

impl Extend<(String, Value)> for Map {
    fn extend<T: IntoIterator<Item = (String, Value)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}
