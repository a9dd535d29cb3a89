//! The node contract and its id-derived identity helpers.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

use super::NodeId;

/// A graph vertex, identified exclusively by its id.
///
/// Implementors derive `PartialEq`, `Ord` and `Hash` from [`Node::id`]
/// (see [`node_eq`], [`node_cmp`] and [`hash_node`]) so that two nodes
/// with equal ids are interchangeable whatever else they carry.
pub trait Node: Eq + Ord + Hash + Debug {
    /// The identifying value type.
    type Id: NodeId;

    /// Returns the node id.
    fn id(&self) -> &Self::Id;
}

/// Node equality: ids are equal.
pub fn node_eq<N: Node>(a: &N, b: &N) -> bool {
    a.id() == b.id()
}

/// Node ordering: ids in ascending order.
pub fn node_cmp<N: Node>(a: &N, b: &N) -> Ordering {
    a.id().cmp(b.id())
}

/// Node hash: the hash of the id.
pub fn hash_node<N: Node, H: Hasher>(node: &N, state: &mut H) {
    node.id().hash(state);
}
