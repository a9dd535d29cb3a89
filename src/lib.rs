//! Generic graph modeling.
//!
//! Node, edge, graph and factory contracts with identity derived from node
//! ids, a memoizing builder that snapshots immutable graphs, and read-only
//! algorithms (adjacency matrix, parents, children, Markov blanket,
//! reachability) that work over any implementation of the contracts.

pub mod basic;
pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use basic::{BasicEdge, BasicFactory, BasicGraph, BasicNode};
pub use graph::{
    adjacency_matrix, children, extend_from_str, from_string, is_connected, markov_blanket,
    neighbor_map, parents, EdgeDirection, GraphBuilder, SharedBuilder,
};
pub use types::{
    Edge, Factory, FactoryId, Graph, GraphError, GraphResult, IdOf, Node, NodeId,
};
