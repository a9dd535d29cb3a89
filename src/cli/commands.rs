//! CLI command implementations.
//!
//! Each command renders its result as text or pretty JSON and returns it,
//! leaving printing to the binary.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use log::debug;

use crate::basic::{BasicEdge, BasicFactory, BasicGraph, BasicNode};
use crate::graph::{
    adjacency_matrix, children, from_string, is_connected, markov_blanket, neighbor_map, parents,
    EdgeDirection,
};
use crate::types::{Graph, GraphResult};

/// Graph type handled by the CLI: string ids over the basic realization.
pub type TextGraph = BasicGraph<String>;

/// Prefix marking a graph argument as a file path.
pub const FILE_PREFIX: char = '@';

/// Load a graph from a mini-language string, or from a file for `@path`.
///
/// File contents are parsed as-is: a newline is whitespace around a token,
/// so chains in a file are separated by `,` like on the command line.
pub fn load_graph(source: &str) -> GraphResult<TextGraph> {
    let text = match source.strip_prefix(FILE_PREFIX) {
        Some(path) => {
            debug!("Reading graph description from {}", path);
            std::fs::read_to_string(Path::new(path))?
        }
        None => source.to_string(),
    };
    Ok(from_string(BasicFactory::new(), &text))
}

fn sorted(ids: HashSet<String>) -> Vec<String> {
    let mut ids: Vec<String> = ids.into_iter().collect();
    ids.sort();
    ids
}

fn id_list(ids: &[String]) -> String {
    if ids.is_empty() {
        "(none)".to_string()
    } else {
        ids.join(", ")
    }
}

fn pretty(value: &serde_json::Value) -> GraphResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// List nodes and edges in ascending order.
pub fn cmd_show(graph: &TextGraph, json: bool) -> GraphResult<String> {
    let nodes = graph.sorted_nodes();
    let edges = graph.sorted_edges();

    if json {
        let nodes: Vec<&BasicNode<String>> = nodes.iter().map(|n| Arc::as_ref(n)).collect();
        let edges: Vec<&BasicEdge<String>> = edges.iter().map(|e| Arc::as_ref(e)).collect();
        return pretty(&serde_json::json!({ "nodes": nodes, "edges": edges }));
    }

    let node_ids: Vec<String> = graph.node_ids().into_iter().cloned().collect();
    let edge_paths: Vec<String> = edges.iter().map(|e| e.to_string()).collect();
    Ok(format!(
        "Nodes ({}): {}\nEdges ({}): {}",
        node_ids.len(),
        id_list(&node_ids),
        edge_paths.len(),
        id_list(&edge_paths)
    ))
}

/// Adjacency matrix over `order`, or over the sorted node ids.
pub fn cmd_matrix(
    graph: &TextGraph,
    order: Option<Vec<String>>,
    json: bool,
) -> GraphResult<String> {
    let order = order.unwrap_or_else(|| graph.node_ids().into_iter().cloned().collect());
    let matrix = adjacency_matrix(graph, Some(&order))?;

    if json {
        return pretty(&serde_json::json!({ "order": order, "matrix": matrix }));
    }

    let width = order.iter().map(|id| id.len()).max().unwrap_or(0);
    let mut lines = vec![format!("{:width$}  {}", "", order.join(" "), width = width)];
    for (id, row) in order.iter().zip(&matrix) {
        let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        lines.push(format!("{:width$}  {}", id, cells.join(" "), width = width));
    }
    Ok(lines.join("\n"))
}

fn render_relation(label: &str, id: &str, ids: HashSet<String>, json: bool) -> GraphResult<String> {
    let ids = sorted(ids);
    if json {
        let mut object = serde_json::Map::new();
        object.insert("id".to_string(), id.into());
        object.insert(label.to_string(), ids.into());
        return pretty(&serde_json::Value::Object(object));
    }
    Ok(format!("{} of {}: {}", label, id, id_list(&ids)))
}

/// Parents of a node.
pub fn cmd_parents(graph: &TextGraph, id: &str, json: bool) -> GraphResult<String> {
    render_relation("parents", id, parents(graph, &id.to_string()), json)
}

/// Children of a node.
pub fn cmd_children(graph: &TextGraph, id: &str, json: bool) -> GraphResult<String> {
    render_relation("children", id, children(graph, &id.to_string()), json)
}

/// Markov blanket of a node.
pub fn cmd_blanket(graph: &TextGraph, id: &str, json: bool) -> GraphResult<String> {
    render_relation("blanket", id, markov_blanket(graph, &id.to_string()), json)
}

/// Neighbor map, keys and neighbor lists sorted.
pub fn cmd_neighbors(
    graph: &TextGraph,
    direction: EdgeDirection,
    json: bool,
) -> GraphResult<String> {
    let map: BTreeMap<String, Vec<String>> = neighbor_map(graph, direction)
        .into_iter()
        .map(|(id, mut next)| {
            next.sort();
            (id, next)
        })
        .collect();

    if json {
        return pretty(&serde_json::json!(map));
    }
    if map.is_empty() {
        return Ok("(none)".to_string());
    }
    let lines: Vec<String> = map
        .iter()
        .map(|(id, next)| format!("{}: {}", id, next.join(", ")))
        .collect();
    Ok(lines.join("\n"))
}

/// Whether `to` is reachable from `from`.
pub fn cmd_connected(
    graph: &TextGraph,
    from: &str,
    to: &str,
    direction: EdgeDirection,
    json: bool,
) -> GraphResult<String> {
    let connected = is_connected(graph, &from.to_string(), &to.to_string(), direction);
    if json {
        return pretty(&serde_json::json!({
            "from": from,
            "to": to,
            "directed": direction == EdgeDirection::Directed,
            "connected": connected,
        }));
    }
    Ok(connected.to_string())
}
