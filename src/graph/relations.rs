//! Parent/child relations and the adjacency matrix.

use std::collections::{HashMap, HashSet};

use log::trace;

use crate::types::{Edge, Graph, GraphError, GraphResult, IdOf};

/// Build an adjacency matrix over `order`, or over the ascending node ids
/// when no order is given.
///
/// `m[i][j]` is 1 iff some edge starts at `order[i]` and ends at
/// `order[j]`. Parallel edges still give 1. Every edge endpoint must appear
/// in `order`; a missing one is [`GraphError::UnknownNode`].
pub fn adjacency_matrix<G: Graph>(
    graph: &G,
    order: Option<&[IdOf<G>]>,
) -> GraphResult<Vec<Vec<u8>>> {
    let order: Vec<&IdOf<G>> = match order {
        Some(ids) => ids.iter().collect(),
        None => graph.node_ids(),
    };

    // Duplicate ids keep their last position.
    let index: HashMap<&IdOf<G>, usize> =
        order.iter().enumerate().map(|(i, &id)| (id, i)).collect();
    let position = |id: &IdOf<G>| {
        index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(format!("{:?}", id)))
    };

    let mut matrix = vec![vec![0u8; order.len()]; order.len()];
    for edge in graph.edges() {
        let Some((from, to)) = edge.endpoints() else {
            continue;
        };
        let (i, j) = (position(from)?, position(to)?);
        matrix[i][j] = 1;
    }
    Ok(matrix)
}

/// Ids `p` such that an edge `p -> id` exists.
pub fn parents<G: Graph>(graph: &G, id: &IdOf<G>) -> HashSet<IdOf<G>> {
    graph
        .edges()
        .iter()
        .filter_map(|e| e.endpoints())
        .filter(|(_, to)| *to == id)
        .map(|(from, _)| from.clone())
        .collect()
}

/// Ids `c` such that an edge `id -> c` exists.
pub fn children<G: Graph>(graph: &G, id: &IdOf<G>) -> HashSet<IdOf<G>> {
    graph
        .edges()
        .iter()
        .filter_map(|e| e.endpoints())
        .filter(|(from, _)| *from == id)
        .map(|(_, to)| to.clone())
        .collect()
}

/// The Markov blanket of `id`: its parents, its children and the other
/// parents of its children. `id` itself is never included, even when a
/// cycle leads back to it.
pub fn markov_blanket<G: Graph>(graph: &G, id: &IdOf<G>) -> HashSet<IdOf<G>> {
    let kids = children(graph, id);
    let mut blanket = kids.clone();

    for child in kids.iter().filter(|c| *c != id) {
        blanket.extend(parents(graph, child));
    }
    blanket.extend(parents(graph, id));
    blanket.remove(id);

    trace!("Markov blanket of {:?} has {} members", id, blanket.len());
    blanket
}
