//! Capability contracts shared by every graph implementation.

pub mod edge;
pub mod error;
pub mod factory;
pub mod graph;
pub mod node;

use std::fmt::Debug;
use std::hash::Hash;

pub use edge::{edge_cmp, edge_eq, edge_less, hash_edge, Edge};
pub use error::{GraphError, GraphResult};
pub use factory::Factory;
pub use graph::{display_graph, fmt_graph, graph_eq, Graph};
pub use node::{hash_node, node_cmp, node_eq, Node};

/// Bound for node id types: equality, a total order and hashing.
pub trait NodeId: Clone + Eq + Ord + Hash + Debug {}

impl<T: Clone + Eq + Ord + Hash + Debug> NodeId for T {}

/// The node id type of graph `G`.
pub type IdOf<G> = <<G as Graph>::Node as Node>::Id;

/// The node id type produced by factory `F`.
pub type FactoryId<F> = <<F as Factory>::Node as Node>::Id;
