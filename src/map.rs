//! The bidirectional map built from two cross linked trees.
//!
//! # Examples
//!
//! ```
//! use bidimap::BidiMap;
//!
//! let mut map = BidiMap::new();
//!
//! assert!(map.put("one", 1));
//! assert!(map.put("two", 2));
//!
//! // Both directions are a tree search away.
//! assert_eq!(map.get_value(&"one"), Some(&1));
//! assert_eq!(map.get_key(&2), Some(&"two"));
//!
//! // A duplicate key or a duplicate value is rejected outright.
//! assert!(!map.put("one", 3));
//! assert!(!map.put("three", 2));
//! assert_eq!(map.len(), 2);
//!
//! // Removing a pair erases it from both directions.
//! assert_eq!(map.remove(&"one"), Some(1));
//! assert_eq!(map.get_key(&1), None);
//! ```

use std::cmp;
use std::fmt;
use std::fmt::Write;
use std::iter::FromIterator;

use crate::tree::{InOrderIds, Tree};

/// An ordered map that can be searched by key or by value in `O(height)`.
///
/// Every pair is stored twice: its key in a tree ordered by key comparison and
/// its value in a tree ordered by value comparison, with the two nodes cross
/// linked. A reverse lookup is therefore a plain tree search instead of the
/// `O(n)` scan an ordinary map would need. The price is that values must be
/// unique too, which is what makes the map bijective.
///
/// Neither tree rebalances itself, so `O(log n)` holds on average but an
/// adversarial (sorted) insertion order degrades both trees to chains and
/// searches to `O(n)`.
///
/// Cloning a map clones both arenas; the cross links are indices, so they
/// stay valid in the copy without fixups.
#[derive(Clone)]
pub struct BidiMap<K, V> {
    keys: Tree<K>,
    values: Tree<V>,
    len: usize,
}

impl<K, V> Default for BidiMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for BidiMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> BidiMap<K, V> {
    /// Generates a new, empty `BidiMap`.
    pub fn new() -> Self {
        Self {
            keys: Tree::new(),
            values: Tree::new(),
            len: 0,
        }
    }

    /// Adds the key/value association to the map.
    ///
    /// Returns `true` if the pair was inserted. If the key or the value is
    /// already present — even paired with a different partner — the map is
    /// left untouched and `false` is returned. Membership is checked in both
    /// trees before either is modified, so a rejected `put` has no side
    /// effects at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidimap::BidiMap;
    ///
    /// let mut map = BidiMap::new();
    ///
    /// assert!(map.put(1, "one"));
    /// assert!(!map.put(1, "uno"));   // duplicate key
    /// assert!(!map.put(2, "one"));   // duplicate value
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn put(&mut self, key: K, value: V) -> bool
    where
        K: cmp::Ord,
        V: cmp::Ord,
    {
        if self.keys.find(&key).is_some() || self.values.find(&value).is_some() {
            return false;
        }
        // Each tree hands out its next slot up front so the two nodes can
        // name each other before they exist.
        let key_id = self.keys.vacant_id();
        let value_id = self.values.vacant_id();
        self.keys.insert(key, value_id);
        self.values.insert(value, key_id);
        self.len += 1;
        true
    }

    /// Looks up the value associated with `key` by searching the key tree and
    /// following the cross link.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidimap::BidiMap;
    ///
    /// let mut map = BidiMap::new();
    /// map.put(1, "one");
    ///
    /// assert_eq!(map.get_value(&1), Some(&"one"));
    /// assert_eq!(map.get_value(&42), None);
    /// ```
    pub fn get_value(&self, key: &K) -> Option<&V>
    where
        K: cmp::Ord,
    {
        let id = self.keys.find(key)?;
        Some(self.values.data(self.keys.link(id)))
    }

    /// Looks up the key associated with `value` by searching the value tree
    /// and following the cross link. An ordinary ordered map would pay `O(n)`
    /// for this.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidimap::BidiMap;
    ///
    /// let mut map = BidiMap::new();
    /// map.put(1, "one");
    ///
    /// assert_eq!(map.get_key(&"one"), Some(&1));
    /// assert_eq!(map.get_key(&"two"), None);
    /// ```
    pub fn get_key(&self, value: &V) -> Option<&K>
    where
        V: cmp::Ord,
    {
        let id = self.values.find(value)?;
        Some(self.keys.data(self.values.link(id)))
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &K) -> bool
    where
        K: cmp::Ord,
    {
        self.keys.find(key).is_some()
    }

    /// Whether `value` is present.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: cmp::Ord,
    {
        self.values.find(value).is_some()
    }

    /// Removes the pair stored under `key` and returns its value, or `None`
    /// (with no mutation) if the key is absent.
    ///
    /// The key tree deletion hands back the cross link of the logical entry
    /// it removed, which then names the exact node to delete from the value
    /// tree. The pair's two nodes die together; there is no state in which
    /// only one tree still holds the entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidimap::BidiMap;
    ///
    /// let mut map = BidiMap::new();
    /// map.put(1, "one");
    ///
    /// assert_eq!(map.remove(&1), Some("one"));
    /// assert_eq!(map.remove(&1), None);
    /// assert_eq!(map.get_key(&"one"), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V>
    where
        K: cmp::Ord,
        V: cmp::Ord,
    {
        let (_, value_id) = self.keys.remove(key, &mut self.values)?;
        let (value, _) = self.values.remove_id(value_id, &mut self.keys);
        self.len -= 1;
        Some(value)
    }

    /// The number of pairs in the map. Maintained as a counter, never
    /// computed by walking a tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the map holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every pair.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
        self.len = 0;
    }

    /// Iterates over `(key, value)` pairs in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidimap::BidiMap;
    ///
    /// let mut map = BidiMap::new();
    /// map.put(2, "b");
    /// map.put(1, "a");
    ///
    /// let pairs: Vec<_> = map.iter().collect();
    /// assert_eq!(pairs, vec![(&1, &"a"), (&2, &"b")]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            ids: self.keys.in_order(),
            keys: &self.keys,
            values: &self.values,
        }
    }

    /// Iterates over `(key, value)` pairs in ascending *value* order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidimap::BidiMap;
    ///
    /// let mut map = BidiMap::new();
    /// map.put(1, "b");
    /// map.put(2, "a");
    ///
    /// let pairs: Vec<_> = map.iter_by_values().collect();
    /// assert_eq!(pairs, vec![(&2, &"a"), (&1, &"b")]);
    /// ```
    pub fn iter_by_values(&self) -> IterByValues<'_, K, V> {
        IterByValues {
            ids: self.values.in_order(),
            keys: &self.keys,
            values: &self.values,
        }
    }

    /// Formats the pairs in ascending key order as
    /// `"(k1, v1), (k2, v2), ..."`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidimap::BidiMap;
    ///
    /// let mut map = BidiMap::new();
    /// map.put("banana", 5);
    /// map.put("apple", 3);
    ///
    /// assert_eq!(map.in_order_by_keys(), "(apple, 3), (banana, 5)");
    /// ```
    pub fn in_order_by_keys(&self) -> String
    where
        K: fmt::Display,
        V: fmt::Display,
    {
        format_pairs(self.iter())
    }

    /// Formats the pairs in ascending value order as
    /// `"(k1, v1), (k2, v2), ..."`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidimap::BidiMap;
    ///
    /// let mut map = BidiMap::new();
    /// map.put("banana", 5);
    /// map.put("apple", 3);
    ///
    /// assert_eq!(map.in_order_by_values(), "(apple, 3), (banana, 5)");
    /// ```
    pub fn in_order_by_values(&self) -> String
    where
        K: fmt::Display,
        V: fmt::Display,
    {
        format_pairs(self.iter_by_values())
    }
}

/// Builds a map with repeated [`put`][BidiMap::put]s. A pair whose key or
/// value is already present is silently rejected, so the first occurrence
/// wins.
impl<K, V> FromIterator<(K, V)> for BidiMap<K, V>
where
    K: cmp::Ord,
    V: cmp::Ord,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.put(key, value);
        }
        map
    }
}

/// The string layer over the traversal iterators.
fn format_pairs<'a, K, V, I>(pairs: I) -> String
where
    K: fmt::Display + 'a,
    V: fmt::Display + 'a,
    I: Iterator<Item = (&'a K, &'a V)>,
{
    let mut out = String::new();
    for (i, (key, value)) in pairs.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write!(out, "({}, {})", key, value).expect("writing to a String cannot fail");
    }
    out
}

/// Iterator over a map's pairs in ascending key order. Created by
/// [`BidiMap::iter`].
pub struct Iter<'a, K, V> {
    ids: InOrderIds<'a, K>,
    keys: &'a Tree<K>,
    values: &'a Tree<V>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.ids.next()?;
        Some((self.keys.data(id), self.values.data(self.keys.link(id))))
    }
}

/// Iterator over a map's pairs in ascending value order. Created by
/// [`BidiMap::iter_by_values`].
pub struct IterByValues<'a, K, V> {
    ids: InOrderIds<'a, V>,
    keys: &'a Tree<K>,
    values: &'a Tree<V>,
}

impl<'a, K, V> Iterator for IterByValues<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.ids.next()?;
        Some((self.keys.data(self.values.link(id)), self.values.data(id)))
    }
}
