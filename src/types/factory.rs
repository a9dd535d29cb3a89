//! The factory contract: stateless constructors for graph components.

use std::sync::Arc;

use super::{Edge, Graph, Node};

/// Creates nodes, edges and graphs on demand.
///
/// Factories never deduplicate or memoize; that is the builder's job.
pub trait Factory {
    /// Node type produced.
    type Node: Node;
    /// Edge type produced.
    type Edge: Edge<Node = Self::Node>;
    /// Graph type produced.
    type Graph: Graph<Node = Self::Node, Edge = Self::Edge>;

    /// Create a node with the given id.
    fn create_node(&self, id: <Self::Node as Node>::Id) -> Self::Node;

    /// Create an edge linking `start` to `end`.
    fn create_edge(&self, start: Arc<Self::Node>, end: Arc<Self::Node>) -> Self::Edge;

    /// Create a graph from the given nodes and edges.
    fn create_graph<NI, EI>(&self, nodes: NI, edges: EI) -> Self::Graph
    where
        NI: IntoIterator<Item = Arc<Self::Node>>,
        EI: IntoIterator<Item = Arc<Self::Edge>>;
}
