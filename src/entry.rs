use crate::key::RadixKey;
use crate::node::NodeId;
use crate::RadixMap;

/// Represents an entry in a `RadixMap` which may either be vacant or occupied.
///
/// This is part of the `Entry API` and is used to ensure that only a single
/// lookup is performed.
///
/// # Examples
///
/// ```
/// use radixmap::{Entry, RadixMap};
///
/// let mut map = RadixMap::new();
///
/// match map.entry("a".to_string()) {
///     Entry::Vacant(entry) => {
///         entry.insert(1);
///     }
///     Entry::Occupied(entry) => {
///         *entry.into_mut() += 1;
///     }
/// }
/// ```
pub enum Entry<'a, K: RadixKey, V> {
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V>),
    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V>),
}

/// A view into an occupied entry in a `RadixMap`.
///
/// It is part of the [`Entry`] API.
pub struct OccupiedEntry<'a, K: RadixKey, V> {
    pub(crate) map: &'a mut RadixMap<K, V>,
    pub(crate) leaf: NodeId,
}

/// A view into a vacant entry in a `RadixMap`.
///
/// It is part of the [`Entry`] API.
pub struct VacantEntry<'a, K: RadixKey, V> {
    pub(crate) map: &'a mut RadixMap<K, V>,
    pub(crate) key: K,
}

impl<'a, K: RadixKey, V> Entry<'a, K, V> {
    /// Returns a reference to the value in the entry.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixmap::RadixMap;
    /// let mut map = RadixMap::new();
    /// map.insert("a".to_string(), 1);
    ///
    /// assert_eq!(map.entry("a".to_string()).get(), Some(&1));
    /// assert_eq!(map.entry("b".to_string()).get(), None);
    /// ```
    pub fn get(&self) -> Option<&V> {
        match self {
            Entry::Occupied(entry) => Some(entry.get()),
            Entry::Vacant(_) => None,
        }
    }

    /// Returns a mutable reference to the value in the entry.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixmap::RadixMap;
    /// let mut map = RadixMap::new();
    /// map.insert("a".to_string(), 1);
    ///
    /// if let Some(value) = map.entry("a".to_string()).get_mut() {
    ///     *value += 1;
    /// }
    /// assert_eq!(map.get(&"a".to_string()), Some(&2));
    /// ```
    pub fn get_mut(&mut self) -> Option<&mut V> {
        match self {
            Entry::Occupied(entry) => Some(entry.get_mut()),
            Entry::Vacant(_) => None,
        }
    }

    /// Ensures a value is in the entry by inserting the default if empty.
    ///
    /// This is the subscript operation of the map: looking up a missing key
    /// stores `V::default()` under it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixmap::RadixMap;
    /// let mut map: RadixMap<String, i32> = RadixMap::new();
    ///
    /// map.entry("a".to_string()).or_default();
    /// assert_eq!(map.get(&"a".to_string()), Some(&0));
    /// ```
    pub fn or_default(self) -> &'a mut V
    where
        V: Default,
    {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(V::default()),
        }
    }

    /// Ensures a value is in the entry by inserting the given value if empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixmap::RadixMap;
    /// let mut map = RadixMap::new();
    ///
    /// map.entry("a".to_string()).or_insert(1);
    /// assert_eq!(map.get(&"a".to_string()), Some(&1));
    ///
    /// *map.entry("a".to_string()).or_insert(10) *= 2;
    /// assert_eq!(map.get(&"a".to_string()), Some(&2));
    /// ```
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Ensures a value is in the entry by inserting the result of the
    /// function if empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixmap::RadixMap;
    /// let mut map = RadixMap::new();
    ///
    /// map.entry("a".to_string()).or_insert_with(|| 1);
    /// assert_eq!(map.get(&"a".to_string()), Some(&1));
    /// ```
    pub fn or_insert_with<F: FnOnce() -> V>(self, default: F) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Ensures a value is in the entry by inserting the result of the
    /// function if empty. The function is given a reference to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixmap::RadixMap;
    /// let mut map = RadixMap::new();
    ///
    /// map.entry("abc".to_string()).or_insert_with_key(|key| key.len());
    /// assert_eq!(map.get(&"abc".to_string()), Some(&3));
    /// ```
    pub fn or_insert_with_key<F: FnOnce(&K) -> V>(self, default: F) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let value = default(entry.key());
                entry.insert(value)
            }
        }
    }

    /// Returns a reference to the key in the entry.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixmap::RadixMap;
    /// let mut map: RadixMap<String, ()> = RadixMap::new();
    ///
    /// assert_eq!(map.entry("a".to_string()).key(), "a");
    /// ```
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }

    /// Provides in-place mutable access to an occupied entry.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixmap::RadixMap;
    /// let mut map = RadixMap::new();
    ///
    /// map.entry("a".to_string())
    ///     .and_modify(|v| *v += 1)
    ///     .or_insert(1);
    /// assert_eq!(map.get(&"a".to_string()), Some(&1));
    ///
    /// map.entry("a".to_string())
    ///     .and_modify(|v| *v += 1)
    ///     .or_insert(0);
    /// assert_eq!(map.get(&"a".to_string()), Some(&2));
    /// ```
    pub fn and_modify<F: FnOnce(&mut V)>(self, f: F) -> Self {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }
}

impl<'a, K: RadixKey, V> OccupiedEntry<'a, K, V> {
    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        &self.map.node(self.leaf).entry.as_ref().unwrap().1
    }

    /// Gets a mutable reference to the value in the entry.
    ///
    /// See [`into_mut`] for a reference bound to the map's lifetime.
    ///
    /// [`into_mut`]: OccupiedEntry::into_mut
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.map.node_mut(self.leaf).entry.as_mut().unwrap().1
    }

    /// Converts the entry into a mutable reference to the value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixmap::{Entry, RadixMap};
    /// let mut map = RadixMap::new();
    /// map.insert("a".to_string(), 1);
    ///
    /// if let Entry::Occupied(entry) = map.entry("a".to_string()) {
    ///     *entry.into_mut() += 1;
    /// }
    /// assert_eq!(map.get(&"a".to_string()), Some(&2));
    /// ```
    pub fn into_mut(self) -> &'a mut V {
        &mut self.map.node_mut(self.leaf).entry.as_mut().unwrap().1
    }

    /// Gets a reference to the key in the entry.
    pub fn key(&self) -> &K {
        &self.map.node(self.leaf).entry.as_ref().unwrap().0
    }

    /// Removes the entry, returning the value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixmap::{Entry, RadixMap};
    /// let mut map = RadixMap::new();
    /// map.insert("a".to_string(), 1);
    ///
    /// if let Entry::Occupied(entry) = map.entry("a".to_string()) {
    ///     assert_eq!(entry.remove(), 1);
    /// }
    /// assert!(!map.contains_key(&"a".to_string()));
    /// ```
    pub fn remove(self) -> V {
        let key = self.key().clone();
        self.map.remove_leaf(&key).unwrap().1
    }

    /// Replaces the value in the entry with the given value, returning the
    /// old value.
    ///
    /// Plain [`RadixMap::insert`] never overwrites; this is the one
    /// deliberate way to do so.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixmap::{Entry, RadixMap};
    /// let mut map = RadixMap::new();
    /// map.insert("a".to_string(), 1);
    ///
    /// if let Entry::Occupied(mut entry) = map.entry("a".to_string()) {
    ///     assert_eq!(entry.insert(2), 1);
    /// }
    /// assert_eq!(map.get(&"a".to_string()), Some(&2));
    /// ```
    pub fn insert(&mut self, value: V) -> V {
        std::mem::replace(self.get_mut(), value)
    }
}

impl<'a, K: RadixKey, V> VacantEntry<'a, K, V> {
    /// Gets a reference to the key that would be used when inserting a value.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Inserts the given value into the entry, and returns a mutable
    /// reference to it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixmap::{Entry, RadixMap};
    /// let mut map = RadixMap::new();
    ///
    /// if let Entry::Vacant(entry) = map.entry("a".to_string()) {
    ///     entry.insert(1);
    /// }
    /// assert_eq!(map.get(&"a".to_string()), Some(&1));
    /// ```
    pub fn insert(self, value: V) -> &'a mut V {
        let (leaf, _) = self.map.insert_leaf(self.key, value);
        &mut self.map.node_mut(leaf).entry.as_mut().unwrap().1
    }
}
