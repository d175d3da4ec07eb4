use std::collections::BTreeMap;
use std::ops::Bound;

use crate::key::RadixKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(pub(crate) usize);

pub(crate) struct Node<K, V> {
    pub(crate) label: K,
    pub(crate) depth: usize,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: BTreeMap<K, NodeId>,
    // present iff this node is a leaf; holds the original, uncompressed key
    pub(crate) entry: Option<(K, V)>,
}

impl<K: RadixKey, V> Node<K, V> {
    pub(crate) fn internal(label: K, depth: usize, parent: Option<NodeId>) -> Self {
        Node {
            label,
            depth,
            parent,
            children: BTreeMap::new(),
            entry: None,
        }
    }

    pub(crate) fn leaf(label: K, depth: usize, parent: NodeId, key: K, value: V) -> Self {
        Node {
            label,
            depth,
            parent: Some(parent),
            children: BTreeMap::new(),
            entry: Some((key, value)),
        }
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.entry.is_some()
    }

    #[inline]
    pub(crate) fn first_child(&self) -> Option<NodeId> {
        self.children.values().next().copied()
    }

    /// The child whose label follows `label` in child-map order.
    pub(crate) fn next_child_after(&self, label: &K) -> Option<NodeId> {
        self.children
            .range((Bound::Excluded(label), Bound::Unbounded))
            .next()
            .map(|(_, &id)| id)
    }
}

impl<K: Clone + Ord, V: Clone> Clone for Node<K, V> {
    fn clone(&self) -> Self {
        Node {
            label: self.label.clone(),
            depth: self.depth,
            parent: self.parent,
            children: self.children.clone(),
            entry: self.entry.clone(),
        }
    }
}
