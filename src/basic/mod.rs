//! Plain value types implementing the graph contracts.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::Arc;

use serde::ser::{Serialize, Serializer};

use crate::types::{
    display_graph, edge_cmp, edge_eq, fmt_graph, graph_eq, hash_edge, hash_node, node_cmp,
    node_eq, Edge, Factory, Graph, GraphError, GraphResult, Node, NodeId,
};

/// A node holding nothing but its id.
pub struct BasicNode<Id> {
    id: Id,
}

impl<Id: NodeId> BasicNode<Id> {
    /// Create a node with the given id.
    pub fn new(id: Id) -> Self {
        Self { id }
    }
}

impl<Id: NodeId> Node for BasicNode<Id> {
    type Id = Id;

    fn id(&self) -> &Id {
        &self.id
    }
}

impl<Id: NodeId> PartialEq for BasicNode<Id> {
    fn eq(&self, other: &Self) -> bool {
        node_eq(self, other)
    }
}

impl<Id: NodeId> Eq for BasicNode<Id> {}

impl<Id: NodeId> PartialOrd for BasicNode<Id> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Id: NodeId> Ord for BasicNode<Id> {
    fn cmp(&self, other: &Self) -> Ordering {
        node_cmp(self, other)
    }
}

impl<Id: NodeId> Hash for BasicNode<Id> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_node(self, state)
    }
}

impl<Id: NodeId> fmt::Debug for BasicNode<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[BasicNode: id={:?}]", self.id)
    }
}

impl<Id: NodeId + fmt::Display> fmt::Display for BasicNode<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl<Id: NodeId + Serialize> Serialize for BasicNode<Id> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.id.serialize(serializer)
    }
}

/// An edge over a fixed sequence of nodes, normally `(start, end)`.
pub struct BasicEdge<Id> {
    nodes: Vec<Arc<BasicNode<Id>>>,
}

impl<Id: NodeId> BasicEdge<Id> {
    /// Create a two-node edge.
    pub fn new(start: Arc<BasicNode<Id>>, end: Arc<BasicNode<Id>>) -> Self {
        Self {
            nodes: vec![start, end],
        }
    }

    /// Create an edge over an arbitrary node sequence of length two or more.
    pub fn from_nodes(nodes: Vec<Arc<BasicNode<Id>>>) -> GraphResult<Self> {
        if nodes.len() < 2 {
            return Err(GraphError::EdgeTooShort(nodes.len()));
        }
        Ok(Self { nodes })
    }
}

impl<Id: NodeId> Edge for BasicEdge<Id> {
    type Node = BasicNode<Id>;

    fn nodes(&self) -> &[Arc<BasicNode<Id>>] {
        &self.nodes
    }
}

impl<Id: NodeId> PartialEq for BasicEdge<Id> {
    fn eq(&self, other: &Self) -> bool {
        edge_eq(self, other)
    }
}

impl<Id: NodeId> Eq for BasicEdge<Id> {}

impl<Id: NodeId> PartialOrd for BasicEdge<Id> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Id: NodeId> Ord for BasicEdge<Id> {
    fn cmp(&self, other: &Self) -> Ordering {
        edge_cmp(self, other)
    }
}

impl<Id: NodeId> Hash for BasicEdge<Id> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_edge(self, state)
    }
}

impl<Id: NodeId> fmt::Debug for BasicEdge<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chain: Vec<String> = self.nodes.iter().map(|n| format!("{:?}", n.id)).collect();
        write!(f, "[BasicEdge: {}]", chain.join("->"))
    }
}

/// Renders the id chain, e.g. `A->B`.
impl<Id: NodeId + fmt::Display> fmt::Display for BasicEdge<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chain: Vec<String> = self.nodes.iter().map(|n| n.id.to_string()).collect();
        f.write_str(&chain.join("->"))
    }
}

impl<Id: NodeId + Serialize> Serialize for BasicEdge<Id> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.nodes.iter().map(|n| &n.id))
    }
}

/// A graph holding plain sets of nodes and edges.
pub struct BasicGraph<Id> {
    nodes: HashSet<Arc<BasicNode<Id>>>,
    edges: HashSet<Arc<BasicEdge<Id>>>,
}

impl<Id: NodeId> BasicGraph<Id> {
    /// Collect nodes and edges into sets; equal members collapse to the first seen.
    pub fn new<NI, EI>(nodes: NI, edges: EI) -> Self
    where
        NI: IntoIterator<Item = Arc<BasicNode<Id>>>,
        EI: IntoIterator<Item = Arc<BasicEdge<Id>>>,
    {
        Self {
            nodes: nodes.into_iter().collect(),
            edges: edges.into_iter().collect(),
        }
    }
}

impl<Id: NodeId> Graph for BasicGraph<Id> {
    type Node = BasicNode<Id>;
    type Edge = BasicEdge<Id>;

    fn nodes(&self) -> &HashSet<Arc<BasicNode<Id>>> {
        &self.nodes
    }

    fn edges(&self) -> &HashSet<Arc<BasicEdge<Id>>> {
        &self.edges
    }
}

impl<Id: NodeId> PartialEq for BasicGraph<Id> {
    fn eq(&self, other: &Self) -> bool {
        graph_eq(self, other)
    }
}

impl<Id: NodeId> Eq for BasicGraph<Id> {}

impl<Id: NodeId> fmt::Debug for BasicGraph<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_graph(self, "BasicGraph", f)
    }
}

impl<Id: NodeId + fmt::Display> fmt::Display for BasicGraph<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_graph(self, "BasicGraph", f)
    }
}

/// Factory for the basic types.
pub struct BasicFactory<Id> {
    _id: PhantomData<fn() -> Id>,
}

impl<Id: NodeId> BasicFactory<Id> {
    /// Create a factory.
    pub fn new() -> Self {
        Self { _id: PhantomData }
    }
}

impl<Id: NodeId> Default for BasicFactory<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id> Clone for BasicFactory<Id> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Id> Copy for BasicFactory<Id> {}

impl<Id> fmt::Debug for BasicFactory<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BasicFactory")
    }
}

impl<Id: NodeId> Factory for BasicFactory<Id> {
    type Node = BasicNode<Id>;
    type Edge = BasicEdge<Id>;
    type Graph = BasicGraph<Id>;

    fn create_node(&self, id: Id) -> BasicNode<Id> {
        BasicNode::new(id)
    }

    fn create_edge(&self, start: Arc<BasicNode<Id>>, end: Arc<BasicNode<Id>>) -> BasicEdge<Id> {
        BasicEdge::new(start, end)
    }

    fn create_graph<NI, EI>(&self, nodes: NI, edges: EI) -> BasicGraph<Id>
    where
        NI: IntoIterator<Item = Arc<BasicNode<Id>>>,
        EI: IntoIterator<Item = Arc<BasicEdge<Id>>>,
    {
        BasicGraph::new(nodes, edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id() {
        assert_eq!(BasicNode::new("abcd").id(), &"abcd");
        assert_eq!(BasicNode::new(None::<u8>).id(), &None);
    }

    #[test]
    fn test_edge_nodes() {
        let edge = BasicEdge::new(Arc::new(BasicNode::new(1)), Arc::new(BasicNode::new(2)));
        let ids: Vec<_> = edge.nodes().iter().map(|n| *n.id()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_short_edge_rejected() {
        let one = vec![Arc::new(BasicNode::new(1))];
        assert!(matches!(
            BasicEdge::from_nodes(one),
            Err(GraphError::EdgeTooShort(1))
        ));
    }

    #[test]
    fn test_graph_dedups_members() {
        let n = |i: u32| Arc::new(BasicNode::new(i));
        let e1 = Arc::new(BasicEdge::new(n(1), n(2)));
        let e2 = Arc::new(BasicEdge::new(n(2), n(1)));
        let g = BasicGraph::new(
            vec![n(3), n(2), n(1), n(2)],
            vec![e2.clone(), e1.clone(), Arc::new(BasicEdge::new(n(1), n(2)))],
        );
        assert_eq!(g.nodes().len(), 3);
        assert_eq!(g.edges().len(), 2);
        assert!(g.edges().contains(&e1));
        assert!(g.edges().contains(&e2));
    }

    #[test]
    fn test_factory_is_pure() {
        let factory = BasicFactory::new();
        let node = Arc::new(factory.create_node(1));
        let edge = Arc::new(factory.create_edge(node.clone(), node.clone()));
        let graph =
            factory.create_graph(vec![node.clone(), node.clone()], vec![edge.clone(), edge]);

        assert_eq!(node.id(), &1);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_serialize_ids() {
        let edge = BasicEdge::new(
            Arc::new(BasicNode::new("A".to_string())),
            Arc::new(BasicNode::new("B".to_string())),
        );
        assert_eq!(serde_json::to_string(&edge).unwrap(), r#"["A","B"]"#);
        assert_eq!(serde_json::to_string(&BasicNode::new(7u32)).unwrap(), "7");
    }

    #[test]
    fn test_display_renders_bare_ids() {
        let a = Arc::new(BasicNode::new("A".to_string()));
        let b = Arc::new(BasicNode::new("B".to_string()));
        assert_eq!(a.to_string(), "A");
        assert_eq!(format!("{:?}", a), r#"[BasicNode: id="A"]"#);

        let edge = BasicEdge::from_nodes(vec![a.clone(), b.clone(), a]).unwrap();
        assert_eq!(edge.to_string(), "A->B->A");
        assert_eq!(format!("{:?}", edge), r#"[BasicEdge: "A"->"B"->"A"]"#);
    }
}
