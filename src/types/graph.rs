//! The graph contract: a set of nodes plus a set of edges.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use super::{Edge, IdOf, Node};

/// A deduplicated set of nodes and a deduplicated set of edges.
///
/// Set membership is value equality (id, or id sequence), so equal nodes
/// or edges collapse to one representative. Implementors get
/// order-independent equality through [`graph_eq`].
pub trait Graph {
    /// Node type held by the graph.
    type Node: Node;
    /// Edge type held by the graph.
    type Edge: Edge<Node = Self::Node>;

    /// All nodes.
    fn nodes(&self) -> &HashSet<Arc<Self::Node>>;

    /// All edges.
    fn edges(&self) -> &HashSet<Arc<Self::Edge>>;

    /// Nodes in ascending id order.
    fn sorted_nodes(&self) -> Vec<&Arc<Self::Node>> {
        let mut nodes: Vec<_> = self.nodes().iter().collect();
        nodes.sort();
        nodes
    }

    /// Edges in ascending edge order.
    fn sorted_edges(&self) -> Vec<&Arc<Self::Edge>> {
        let mut edges: Vec<_> = self.edges().iter().collect();
        edges.sort();
        edges
    }

    /// Distinct node ids in ascending order.
    fn node_ids(&self) -> Vec<&<Self::Node as Node>::Id> {
        self.sorted_nodes().into_iter().map(|n| n.id()).collect()
    }

    /// Number of nodes.
    fn node_count(&self) -> usize {
        self.nodes().len()
    }

    /// Number of edges.
    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Whether a node with this id is present.
    fn contains_node(&self, id: &<Self::Node as Node>::Id) -> bool {
        self.nodes().iter().any(|n| n.id() == id)
    }
}

/// Graph equality: sorted node lists equal and sorted edge lists equal.
pub fn graph_eq<G: Graph>(a: &G, b: &G) -> bool {
    a.sorted_nodes() == b.sorted_nodes() && a.sorted_edges() == b.sorted_edges()
}

/// Render `[name: Nodes={a,b}, Edges={a->b}]` with ids ascending, ids in `Debug` form.
pub fn fmt_graph<G: Graph>(graph: &G, name: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write_graph(graph, name, f, |id| format!("{:?}", id))
}

/// Same layout as [`fmt_graph`] with ids in `Display` form, so string ids
/// come out unquoted.
pub fn display_graph<G>(graph: &G, name: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    G: Graph,
    IdOf<G>: fmt::Display,
{
    write_graph(graph, name, f, |id| id.to_string())
}

fn write_graph<G, R>(graph: &G, name: &str, f: &mut fmt::Formatter<'_>, render: R) -> fmt::Result
where
    G: Graph,
    R: Fn(&IdOf<G>) -> String,
{
    let nodes: Vec<String> = graph.node_ids().into_iter().map(&render).collect();
    let edges: Vec<String> = graph
        .sorted_edges()
        .into_iter()
        .map(|e| {
            e.id_path()
                .into_iter()
                .map(&render)
                .collect::<Vec<_>>()
                .join("->")
        })
        .collect();
    write!(
        f,
        "[{}: Nodes={{{}}}, Edges={{{}}}]",
        name,
        nodes.join(","),
        edges.join(",")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::{BasicEdge, BasicGraph, BasicNode};

    fn graph(nodes: &[u32], edges: &[(u32, u32)]) -> BasicGraph<u32> {
        BasicGraph::new(
            nodes.iter().map(|&i| Arc::new(BasicNode::new(i))),
            edges.iter().map(|&(a, b)| {
                Arc::new(BasicEdge::new(
                    Arc::new(BasicNode::new(a)),
                    Arc::new(BasicNode::new(b)),
                ))
            }),
        )
    }

    #[test]
    fn test_empty_graphs_equal() {
        assert_eq!(graph(&[], &[]), graph(&[], &[]));
        assert_ne!(graph(&[], &[]), graph(&[1, 2], &[(1, 2), (2, 1)]));
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a = graph(&[1, 2, 3], &[(1, 2), (2, 1)]);
        let b = graph(&[3, 1, 2], &[(2, 1), (1, 2)]);
        assert_eq!(a, b);
        assert_ne!(graph(&[1, 2], &[(1, 2), (2, 1)]), a);
    }

    #[test]
    fn test_sorted_views() {
        let g = graph(&[3, 1, 2, 2], &[(2, 1), (1, 2), (1, 2)]);
        assert_eq!(g.node_ids(), vec![&1, &2, &3]);
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 2);
        let edges = g.sorted_edges();
        let paths: Vec<_> = edges.iter().map(|e| e.id_path()).collect();
        assert_eq!(paths, vec![vec![&1, &2], vec![&2, &1]]);
        assert!(g.contains_node(&3));
        assert!(!g.contains_node(&4));
    }

    #[test]
    fn test_debug_rendering_sorted() {
        let g = graph(&[2, 1], &[(2, 1), (1, 2)]);
        assert_eq!(
            format!("{:?}", g),
            "[BasicGraph: Nodes={1,2}, Edges={1->2,2->1}]"
        );
    }

    #[test]
    fn test_display_leaves_string_ids_unquoted() {
        let a = Arc::new(BasicNode::new("A".to_string()));
        let b = Arc::new(BasicNode::new("B".to_string()));
        let g = BasicGraph::new(
            vec![b.clone(), a.clone()],
            vec![Arc::new(BasicEdge::new(a, b))],
        );
        assert_eq!(format!("{}", g), "[BasicGraph: Nodes={A,B}, Edges={A->B}]");
        assert_eq!(
            format!("{:?}", g),
            r#"[BasicGraph: Nodes={"A","B"}, Edges={"A"->"B"}]"#
        );
    }
}
