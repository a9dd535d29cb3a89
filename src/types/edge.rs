//! The edge contract and its id-sequence identity helpers.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::Node;

/// An ordered sequence of node references, conventionally `(start, end)`.
///
/// The contract permits any length of two or more. Equality, ordering and
/// hashing are functions of the id sequence only; implementors route their
/// trait impls through [`edge_eq`], [`edge_cmp`] and [`hash_edge`].
pub trait Edge: Eq + Ord + Hash + Debug {
    /// The node type this edge links.
    type Node: Node;

    /// Returns the linked nodes in order.
    fn nodes(&self) -> &[Arc<Self::Node>];

    /// First node of the sequence.
    fn start(&self) -> Option<&Arc<Self::Node>> {
        self.nodes().first()
    }

    /// Last node of the sequence.
    fn end(&self) -> Option<&Arc<Self::Node>> {
        self.nodes().last()
    }

    /// Ids of the first and last node. `None` only for an empty sequence.
    fn endpoints(&self) -> Option<(&<Self::Node as Node>::Id, &<Self::Node as Node>::Id)> {
        Some((self.start()?.id(), self.end()?.id()))
    }

    /// The id sequence of this edge.
    fn id_path(&self) -> Vec<&<Self::Node as Node>::Id> {
        self.nodes().iter().map(|n| n.id()).collect()
    }
}

/// Edge equality: same length and pairwise equal node ids.
pub fn edge_eq<E: Edge>(a: &E, b: &E) -> bool {
    let (ours, theirs) = (a.nodes(), b.nodes());
    ours.len() == theirs.len() && ours.iter().zip(theirs).all(|(x, y)| x.id() == y.id())
}

/// Strict "less than" over two edges.
///
/// Walks `a` position by position. `a` is not less if `b` runs out first,
/// is less as soon as its node compares less, and is not less as soon as
/// the ids differ otherwise. When every shared position is equal the
/// shorter sequence is less.
pub fn edge_less<E: Edge>(a: &E, b: &E) -> bool {
    let theirs = b.nodes();
    for (i, node) in a.nodes().iter().enumerate() {
        let Some(other) = theirs.get(i) else {
            return false;
        };
        if node < other {
            return true;
        }
        if node.id() != other.id() {
            return false;
        }
    }
    a.nodes().len() < theirs.len()
}

/// Total ordering built from [`edge_less`] in both directions.
pub fn edge_cmp<E: Edge>(a: &E, b: &E) -> Ordering {
    if edge_less(a, b) {
        Ordering::Less
    } else if edge_less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Edge hash: the hash of the id sequence.
pub fn hash_edge<E: Edge, H: Hasher>(edge: &E, state: &mut H) {
    edge.id_path().hash(state);
}
