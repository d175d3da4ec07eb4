use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use crate::entry::{Entry, OccupiedEntry, VacantEntry};
use crate::iter::{Iter, Keys, Matches, Values};
use crate::key::RadixKey;
use crate::node::{Node, NodeId};

/// A `RadixMap` is a key-value data structure backed by a radix tree
/// (compressed trie): unlike a plain trie, edges carry whole key fragments,
/// so a chain of single-child nodes collapses into one edge.
///
/// # Features
///
/// - Lookups, inserts and removals in O(k) where k is the key length
/// - Prefix, greedy and longest-prefix searches
/// - Ordered iteration over the stored keys
/// - Entry API for in-place updates
///
/// Duplicate inserts keep the stored value: [`insert`] never overwrites.
/// Use the [`entry`] API to update a value in place.
///
/// [`insert`]: RadixMap::insert
/// [`entry`]: RadixMap::entry
///
/// # Examples
///
/// ```
/// use radixmap::RadixMap;
///
/// let mut map = RadixMap::new();
///
/// map.insert("apple".to_string(), 1);
/// map.insert("application".to_string(), 2);
/// map.insert("banana".to_string(), 3);
///
/// assert_eq!(map.get(&"apple".to_string()), Some(&1));
/// assert_eq!(map.len(), 3);
///
/// // All keys sharing a prefix:
/// let apps: Vec<_> = map.prefix_match(&"app".to_string()).collect();
/// assert_eq!(apps.len(), 2);
///
/// // The longest stored key that prefixes a query:
/// let found = map.longest_match(&"applesauce".to_string());
/// assert_eq!(found.peek(), Some((&"apple".to_string(), &1)));
///
/// assert!(map.remove(&"banana".to_string()));
/// assert_eq!(map.len(), 2);
/// ```
pub struct RadixMap<K, V> {
    pub(crate) nodes: Vec<Option<Node<K, V>>>,
    pub(crate) free: Vec<usize>,
    pub(crate) root: Option<NodeId>,
    pub(crate) size: usize,
}

impl<K: RadixKey, V> Default for RadixMap<K, V> {
    /// Creates a new empty `RadixMap`.
    fn default() -> Self {
        Self::new()
    }
}

impl<K: RadixKey, V> RadixMap<K, V> {
    /// Creates a new empty `RadixMap`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixmap::RadixMap;
    /// let map: RadixMap<String, i32> = RadixMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        RadixMap {
            nodes: Vec::new(),
            free: Vec::new(),
            root: None,
            size: 0,
        }
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixmap::RadixMap;
    /// let mut map = RadixMap::new();
    /// assert_eq!(map.len(), 0);
    ///
    /// map.insert("a".to_string(), 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the map contains no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes all elements from the map.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixmap::RadixMap;
    /// let mut map = RadixMap::new();
    /// map.insert("a".to_string(), 1);
    /// map.insert("b".to_string(), 2);
    ///
    /// map.clear();
    /// assert!(map.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.root = None;
        self.size = 0;
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixmap::RadixMap;
    /// let mut map = RadixMap::new();
    /// map.insert("a".to_string(), 1);
    ///
    /// assert_eq!(map.get(&"a".to_string()), Some(&1));
    /// assert_eq!(map.get(&"b".to_string()), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        let leaf = self.find_leaf(key)?;
        Some(&self.node(leaf).entry.as_ref().unwrap().1)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixmap::RadixMap;
    /// let mut map = RadixMap::new();
    /// map.insert("a".to_string(), 1);
    ///
    /// if let Some(value) = map.get_mut(&"a".to_string()) {
    ///     *value = 10;
    /// }
    /// assert_eq!(map.get(&"a".to_string()), Some(&10));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let leaf = self.find_leaf(key)?;
        Some(&mut self.node_mut(leaf).entry.as_mut().unwrap().1)
    }

    /// Returns the stored key-value pair corresponding to the key.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        let leaf = self.find_leaf(key)?;
        let (k, v) = self.node(leaf).entry.as_ref().unwrap();
        Some((k, v))
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixmap::RadixMap;
    /// let mut map = RadixMap::new();
    /// map.insert("a".to_string(), 1);
    ///
    /// assert!(map.contains_key(&"a".to_string()));
    /// assert!(!map.contains_key(&"b".to_string()));
    /// ```
    pub fn contains_key(&self, key: &K) -> bool {
        self.find_leaf(key).is_some()
    }

    /// Looks up a key and returns an iterator positioned at its leaf, or an
    /// exhausted iterator if the key is not stored.
    ///
    /// The iterator continues in order from the found key, so this doubles
    /// as a ranged scan starting point.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixmap::RadixMap;
    /// let mut map = RadixMap::new();
    /// map.insert("a".to_string(), 1);
    /// map.insert("b".to_string(), 2);
    ///
    /// let rest: Vec<_> = map.find(&"a".to_string()).collect();
    /// assert_eq!(rest.len(), 2);
    ///
    /// assert!(map.find(&"c".to_string()).peek().is_none());
    /// ```
    pub fn find(&self, key: &K) -> Iter<'_, K, V> {
        Iter::at(self, self.find_leaf(key))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// Returns an iterator positioned at the key's leaf together with a flag
    /// telling whether the insertion happened. If the key is already stored,
    /// the existing value is kept untouched and the flag is `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixmap::RadixMap;
    /// let mut map = RadixMap::new();
    ///
    /// let (_, inserted) = map.insert("a".to_string(), 1);
    /// assert!(inserted);
    ///
    /// // A duplicate insert does not replace the value.
    /// let (it, inserted) = map.insert("a".to_string(), 99);
    /// assert!(!inserted);
    /// assert_eq!(it.peek(), Some((&"a".to_string(), &1)));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> (Iter<'_, K, V>, bool) {
        let (leaf, inserted) = self.insert_leaf(key, value);
        (Iter::at(self, Some(leaf)), inserted)
    }

    /// Removes a key from the map. Returns `true` if it was stored.
    ///
    /// Removal re-compacts the tree: an internal node left with a single
    /// internal child is merged with it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixmap::RadixMap;
    /// let mut map = RadixMap::new();
    /// map.insert("a".to_string(), 1);
    ///
    /// assert!(map.remove(&"a".to_string()));
    /// assert!(!map.remove(&"a".to_string()));
    /// ```
    pub fn remove(&mut self, key: &K) -> bool {
        self.remove_leaf(key).is_some()
    }

    /// Removes every key matching the predicate.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixmap::RadixMap;
    /// let mut map = RadixMap::new();
    /// map.insert("apple".to_string(), 1);
    /// map.insert("apricot".to_string(), 2);
    /// map.insert("banana".to_string(), 3);
    ///
    /// map.remove_if(|key| key.starts_with('a'));
    /// assert_eq!(map.len(), 1);
    /// assert!(map.contains_key(&"banana".to_string()));
    /// ```
    pub fn remove_if<F: FnMut(&K) -> bool>(&mut self, mut pred: F) {
        let doomed: Vec<K> = self
            .iter()
            .filter(|(key, _)| pred(key))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &doomed {
            self.remove(key);
        }
    }

    /// Returns an entry representing a key in the map.
    ///
    /// The entry can be used to insert, remove, or modify the value
    /// associated with the key.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixmap::{Entry, RadixMap};
    /// let mut map = RadixMap::new();
    ///
    /// map.entry("a".to_string()).or_insert(1);
    ///
    /// if let Entry::Occupied(mut occupied) = map.entry("a".to_string()) {
    ///     *occupied.get_mut() += 10;
    /// }
    /// assert_eq!(map.get(&"a".to_string()), Some(&11));
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        match self.find_leaf(&key) {
            Some(leaf) => Entry::Occupied(OccupiedEntry { map: self, leaf }),
            None => Entry::Vacant(VacantEntry { map: self, key }),
        }
    }

    /// Returns all stored keys that have `key` as a prefix, as a lazy
    /// in-order iterator.
    ///
    /// An empty prefix matches every stored key.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixmap::RadixMap;
    /// let mut map = RadixMap::new();
    /// map.insert("bro".to_string(), 1);
    /// map.insert("brother".to_string(), 2);
    /// map.insert("bread".to_string(), 3);
    ///
    /// let matches: Vec<_> = map.prefix_match(&"bro".to_string()).collect();
    /// assert_eq!(matches, vec![
    ///     (&"bro".to_string(), &1),
    ///     (&"brother".to_string(), &2),
    /// ]);
    ///
    /// assert_eq!(map.prefix_match(&"brr".to_string()).count(), 0);
    /// ```
    pub fn prefix_match(&self, key: &K) -> Matches<'_, K, V> {
        let root = match self.root {
            Some(root) => root,
            None => return Matches::empty(self),
        };

        let mut found = self.find_node(key, root, 0);
        if self.node(found).is_leaf() {
            found = self.node(found).parent.unwrap();
        }

        let node = self.node(found);
        let len = key.length() - node.depth;
        let key_sub = key.substr(node.depth, len);
        let label_sub = node.label.substr(0, len);
        if key_sub != label_sub {
            return Matches::empty(self);
        }

        Matches::subtree(self, found)
    }

    /// Returns every stored key in the subtree reached by following `key`
    /// as far as the tree allows.
    ///
    /// Unlike [`prefix_match`], this does not check that the edge the search
    /// stopped on is actually consistent with `key`: whatever subtree the
    /// descent landed on is emitted wholesale.
    ///
    /// [`prefix_match`]: RadixMap::prefix_match
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixmap::RadixMap;
    /// let mut map = RadixMap::new();
    /// map.insert("apple".to_string(), 1);
    /// map.insert("apply".to_string(), 2);
    ///
    /// // "apricot" diverges inside the "appl" edge, but the subtree it
    /// // reached is still returned.
    /// let matches: Vec<_> = map.greedy_match(&"apricot".to_string()).collect();
    /// assert_eq!(matches.len(), 2);
    ///
    /// // The prefix-checked variant rejects the same query.
    /// assert_eq!(map.prefix_match(&"apricot".to_string()).count(), 0);
    /// ```
    pub fn greedy_match(&self, key: &K) -> Matches<'_, K, V> {
        let root = match self.root {
            Some(root) => root,
            None => return Matches::empty(self),
        };

        let mut found = self.find_node(key, root, 0);
        if self.node(found).is_leaf() {
            found = self.node(found).parent.unwrap();
        }

        Matches::subtree(self, found)
    }

    /// Finds the longest stored key that is a prefix of `key`, returning an
    /// iterator positioned at its leaf (exhausted if there is none).
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixmap::RadixMap;
    /// let mut map = RadixMap::new();
    /// map.insert("c".to_string(), 6);
    /// map.insert("cd".to_string(), 4);
    ///
    /// let found = map.longest_match(&"cdef".to_string());
    /// assert_eq!(found.peek(), Some((&"cd".to_string(), &4)));
    ///
    /// let found = map.longest_match(&"cf".to_string());
    /// assert_eq!(found.peek(), Some((&"c".to_string(), &6)));
    ///
    /// assert!(map.longest_match(&"x".to_string()).peek().is_none());
    /// ```
    pub fn longest_match(&self, key: &K) -> Iter<'_, K, V> {
        let root = match self.root {
            Some(root) => root,
            None => return Iter::at(self, None),
        };

        let found = self.find_node(key, root, 0);
        if self.node(found).is_leaf() {
            return Iter::at(self, Some(found));
        }

        // If the search stopped on a partially matched edge, that node's own
        // label is not a prefix of the query; start the ascent one level up.
        let node = self.node(found);
        let key_sub = key.substr(node.depth, node.label.length());
        let mut cursor = if key_sub == node.label {
            Some(found)
        } else {
            node.parent
        };

        let nul = key.nul();
        while let Some(id) = cursor {
            let node = self.node(id);
            if let Some(&child) = node.children.get(&nul) {
                if self.node(child).is_leaf() {
                    return Iter::at(self, Some(child));
                }
            }
            cursor = node.parent;
        }

        Iter::at(self, None)
    }

    /// Returns `true` if any stored key starts with the given prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixmap::RadixMap;
    /// let mut map = RadixMap::new();
    /// map.insert("apple".to_string(), 1);
    ///
    /// assert!(map.starts_with(&"app".to_string()));
    /// assert!(!map.starts_with(&"ban".to_string()));
    /// ```
    pub fn starts_with(&self, prefix: &K) -> bool {
        self.prefix_match(prefix).next().is_some()
    }

    /// Returns an iterator over the key-value pairs of the map, in
    /// child-map order (lexicographic for the provided key types).
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixmap::RadixMap;
    /// let mut map = RadixMap::new();
    /// map.insert("b".to_string(), 2);
    /// map.insert("a".to_string(), 1);
    ///
    /// let pairs: Vec<_> = map.iter().collect();
    /// assert_eq!(pairs, vec![(&"a".to_string(), &1), (&"b".to_string(), &2)]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        let first = self.root.and_then(|root| self.leftmost_leaf(root));
        Iter::at(self, first)
    }

    /// Returns an iterator over the keys of the map, in order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values of the map, in key order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Returns a mutable iterator over the values of the map, in no
    /// particular order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixmap::RadixMap;
    /// let mut map = RadixMap::new();
    /// map.insert("a".to_string(), 1);
    /// map.insert("b".to_string(), 2);
    ///
    /// for value in map.values_mut() {
    ///     *value *= 2;
    /// }
    /// assert_eq!(map.get(&"a".to_string()), Some(&2));
    /// assert_eq!(map.get(&"b".to_string()), Some(&4));
    /// ```
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> + '_ {
        self.nodes
            .iter_mut()
            .filter_map(|slot| slot.as_mut()?.entry.as_mut().map(|(_, v)| v))
    }

    // ------------------------------------------------------------------
    // Arena plumbing
    // ------------------------------------------------------------------

    pub(crate) fn node(&self, id: NodeId) -> &Node<K, V> {
        self.nodes[id.0].as_ref().unwrap()
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        self.nodes[id.0].as_mut().unwrap()
    }

    fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = Some(node);
                NodeId(idx)
            }
            None => {
                self.nodes.push(Some(node));
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Node<K, V> {
        let node = self.nodes[id.0].take().unwrap();
        self.free.push(id.0);
        node
    }

    // ------------------------------------------------------------------
    // Tree walking
    // ------------------------------------------------------------------

    /// Descends from `current`, which already matches `key[..depth]`, to the
    /// deepest node whose edge chain is a prefix of `key`.
    ///
    /// Returns the exact leaf when the whole key is consumed, the node on
    /// whose edge the key diverges (the split point for an insert), or the
    /// last fully matched node.
    fn find_node(&self, key: &K, mut current: NodeId, mut depth: usize) -> NodeId {
        loop {
            let node = self.node(current);
            if node.children.is_empty() {
                return current;
            }

            let remaining = key.length() - depth;
            if remaining == 0 {
                // the key ends here; its leaf, if stored, is the
                // empty-label child
                if let Some(&child) = node.children.get(&key.nul()) {
                    if self.node(child).is_leaf() {
                        return child;
                    }
                }
                return current;
            }

            // at most one internal child can share the next symbol
            let mut matched = None;
            for (label, &child) in &node.children {
                if self.node(child).is_leaf() {
                    continue;
                }
                if label.symbol_at(0) == key.symbol_at(depth) {
                    matched = Some((label.length(), child));
                    break;
                }
            }

            match matched {
                Some((label_len, child)) => {
                    let key_sub = key.substr(depth, label_len);
                    if key_sub == self.node(child).label {
                        depth += label_len;
                        current = child;
                    } else {
                        return child;
                    }
                }
                None => return current,
            }
        }
    }

    fn find_leaf(&self, key: &K) -> Option<NodeId> {
        let root = self.root?;
        let found = self.find_node(key, root, 0);
        if self.node(found).is_leaf() {
            Some(found)
        } else {
            None
        }
    }

    pub(crate) fn leftmost_leaf(&self, mut id: NodeId) -> Option<NodeId> {
        loop {
            let node = self.node(id);
            if node.is_leaf() {
                return Some(id);
            }
            id = node.first_child()?;
        }
    }

    /// Leaf following `from` in child-map order, ascending through parents
    /// and descending into the next sibling subtree. Never ascends past
    /// `bound` when one is given.
    pub(crate) fn next_leaf(&self, from: NodeId, bound: Option<NodeId>) -> Option<NodeId> {
        let mut current = from;
        loop {
            if Some(current) == bound {
                return None;
            }
            let node = self.node(current);
            let parent = node.parent?;
            if let Some(sibling) = self.node(parent).next_child_after(&node.label) {
                return self.leftmost_leaf(sibling);
            }
            current = parent;
        }
    }

    // ------------------------------------------------------------------
    // Shape mutation
    // ------------------------------------------------------------------

    pub(crate) fn insert_leaf(&mut self, key: K, value: V) -> (NodeId, bool) {
        let root = match self.root {
            Some(root) => root,
            None => {
                let id = self.alloc(Node::internal(key.nul(), 0, None));
                self.root = Some(id);
                id
            }
        };

        let found = self.find_node(&key, root, 0);
        if self.node(found).is_leaf() {
            return (found, false);
        }

        let leaf = if found == root {
            self.append(root, key, value)
        } else {
            let node = self.node(found);
            let key_sub = key.substr(node.depth, node.label.length());
            if key_sub == node.label {
                self.append(found, key, value)
            } else {
                self.prepend(found, key, value)
            }
        };

        self.size += 1;
        (leaf, true)
    }

    /// Adds a key whose stored prefix already matches the path to `parent`.
    fn append(&mut self, parent: NodeId, key: K, value: V) -> NodeId {
        let nul = key.nul();
        let node = self.node(parent);
        let depth = node.depth + node.label.length();
        let len = key.length() - depth;

        if len == 0 {
            // the key ends exactly at `parent`
            let leaf = self.alloc(Node::leaf(nul.clone(), depth, parent, key, value));
            self.node_mut(parent).children.insert(nul, leaf);
            leaf
        } else {
            let edge = key.substr(depth, len);
            let inner = self.alloc(Node::internal(edge.clone(), depth, Some(parent)));
            let leaf = self.alloc(Node::leaf(nul.clone(), depth + len, inner, key, value));
            self.node_mut(inner).children.insert(nul, leaf);
            self.node_mut(parent).children.insert(edge, inner);
            leaf
        }
    }

    /// Splits the edge of `split`, whose label shares a strict non-empty
    /// prefix with the new key, and hangs the new leaf off the branch point.
    fn prepend(&mut self, split: NodeId, key: K, value: V) -> NodeId {
        let (split_label, split_depth, split_parent) = {
            let node = self.node(split);
            // the split node is never the root
            (node.label.clone(), node.depth, node.parent.unwrap())
        };
        let len1 = split_label.length();
        let len2 = key.length() - split_depth;

        let mut count = 0;
        while count < len1 && count < len2 {
            if split_label.symbol_at(count) != key.symbol_at(count + split_depth) {
                break;
            }
            count += 1;
        }
        debug_assert!(count > 0 && count < len1);

        self.node_mut(split_parent).children.remove(&split_label);

        // branch node taking over the shared prefix of the two edges
        let branch_label = split_label.substr(0, count);
        let branch = self.alloc(Node::internal(
            branch_label.clone(),
            split_depth,
            Some(split_parent),
        ));
        self.node_mut(split_parent).children.insert(branch_label, branch);

        // the split node keeps the rest of its old label
        let rest = split_label.substr(count, len1 - count);
        {
            let node = self.node_mut(split);
            node.depth += count;
            node.parent = Some(branch);
            node.label = rest.clone();
        }
        self.node_mut(branch).children.insert(rest, split);

        let nul = key.nul();
        if count == len2 {
            // the new key ends exactly at the branch node
            let leaf = self.alloc(Node::leaf(
                nul.clone(),
                split_depth + count,
                branch,
                key,
                value,
            ));
            self.node_mut(branch).children.insert(nul, leaf);
            leaf
        } else {
            let edge = key.substr(split_depth + count, len2 - count);
            let inner = self.alloc(Node::internal(
                edge.clone(),
                split_depth + count,
                Some(branch),
            ));
            let key_len = key.length();
            let leaf = self.alloc(Node::leaf(nul.clone(), key_len, inner, key, value));
            self.node_mut(inner).children.insert(nul, leaf);
            self.node_mut(branch).children.insert(edge, inner);
            leaf
        }
    }

    pub(crate) fn remove_leaf(&mut self, key: &K) -> Option<(K, V)> {
        let root = self.root?;

        let child = self.find_node(key, root, 0);
        if !self.node(child).is_leaf() {
            return None;
        }

        let nul = key.nul();
        let parent = self.node(child).parent.unwrap();
        self.node_mut(parent).children.remove(&nul);
        let pair = self.release(child).entry.unwrap();
        self.size -= 1;

        if parent == root || self.node(parent).children.len() > 1 {
            return Some(pair);
        }

        // the parent is down to at most one child: drop it if empty,
        // otherwise it is itself the merge candidate
        let site = if self.node(parent).children.is_empty() {
            let label = self.node(parent).label.clone();
            let grandparent = self.node(parent).parent.unwrap();
            self.node_mut(grandparent).children.remove(&label);
            self.release(parent);
            grandparent
        } else {
            parent
        };

        if site == root {
            return Some(pair);
        }

        if self.node(site).children.len() == 1 {
            let survivor = self.node(site).first_child().unwrap();
            if self.node(survivor).is_leaf() {
                // a surviving leaf keeps its empty label under `site`;
                // collapsing here would change the shape find_node expects
                return Some(pair);
            }

            let site_node = self.release(site);
            let joined = site_node.label.join(&self.node(survivor).label);
            {
                let node = self.node_mut(survivor);
                node.depth = site_node.depth;
                node.label = joined.clone();
                node.parent = site_node.parent;
            }
            let site_parent = site_node.parent.unwrap();
            self.node_mut(site_parent).children.insert(joined, survivor);
            self.node_mut(site_parent).children.remove(&site_node.label);
        }

        Some(pair)
    }
}

impl<K: RadixKey + fmt::Debug, V: fmt::Debug> fmt::Debug for RadixMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: RadixKey, V: Clone> Clone for RadixMap<K, V> {
    fn clone(&self) -> Self {
        RadixMap {
            nodes: self.nodes.clone(),
            free: self.free.clone(),
            root: self.root,
            size: self.size,
        }
    }
}

impl<K: RadixKey, V: PartialEq> PartialEq for RadixMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        if self.size != other.size {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<K: RadixKey, V: Eq> Eq for RadixMap<K, V> {}

impl<K: RadixKey + Hash, V: Hash> Hash for RadixMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        for (key, value) in self.iter() {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl<K: RadixKey, V> Index<&K> for RadixMap<K, V> {
    type Output = V;

    fn index(&self, key: &K) -> &Self::Output {
        self.get(key).expect("no entry found for key")
    }
}

impl<K: RadixKey, V> IndexMut<&K> for RadixMap<K, V> {
    fn index_mut(&mut self, key: &K) -> &mut Self::Output {
        self.get_mut(key).expect("no entry found for key")
    }
}

impl<K: RadixKey, V> Extend<(K, V)> for RadixMap<K, V> {
    /// Inserts the pairs one by one; for duplicate keys the first stored
    /// value wins, per the no-replacement rule of [`insert`].
    ///
    /// [`insert`]: RadixMap::insert
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: RadixKey, V> FromIterator<(K, V)> for RadixMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = RadixMap::new();
        map.extend(iter);
        map
    }
}

impl<K: RadixKey, V, const N: usize> From<[(K, V); N]> for RadixMap<K, V> {
    fn from(array: [(K, V); N]) -> Self {
        array.into_iter().collect()
    }
}
