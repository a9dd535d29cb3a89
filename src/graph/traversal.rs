//! Neighbor maps and depth-first reachability.

use std::collections::{HashMap, HashSet};

use log::trace;

use crate::types::{Edge, Graph, IdOf};

/// How edges are followed during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeDirection {
    /// Follow edges from their first node to their last.
    #[default]
    Directed,
    /// Follow edges both ways.
    Undirected,
}

impl EdgeDirection {
    /// Parse a direction from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "directed" => Some(Self::Directed),
            "undirected" => Some(Self::Undirected),
            _ => None,
        }
    }
}

/// Map every id with at least one hop to the ids one hop away.
///
/// Ids without outgoing hops are absent rather than mapped to an empty
/// list. In [`EdgeDirection::Undirected`] mode every non-self-loop edge
/// also contributes its reverse hop.
pub fn neighbor_map<G: Graph>(
    graph: &G,
    direction: EdgeDirection,
) -> HashMap<IdOf<G>, Vec<IdOf<G>>> {
    let mut map: HashMap<IdOf<G>, Vec<IdOf<G>>> = HashMap::new();
    for edge in graph.edges() {
        let Some((from, to)) = edge.endpoints() else {
            continue;
        };
        map.entry(from.clone()).or_default().push(to.clone());
        if direction == EdgeDirection::Undirected && from != to {
            map.entry(to.clone()).or_default().push(from.clone());
        }
    }
    map
}

/// Whether a path of at least one edge leads from `start` to `end`.
///
/// Explores with a stack and a visited set, checking each popped id's
/// neighbor list for `end` before descending. `is_connected(g, x, x)` is
/// only true when a path actually returns to `x`.
pub fn is_connected<G: Graph>(
    graph: &G,
    start: &IdOf<G>,
    end: &IdOf<G>,
    direction: EdgeDirection,
) -> bool {
    let neighbors = neighbor_map(graph, direction);
    let mut stack: Vec<&IdOf<G>> = vec![start];
    let mut visited: HashSet<&IdOf<G>> = HashSet::new();

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        let Some(next) = neighbors.get(current) else {
            continue;
        };
        if next.contains(end) {
            trace!("Reached {:?} from {:?} via {:?}", end, start, current);
            return true;
        }
        stack.extend(next.iter());
    }

    trace!("No path from {:?} to {:?}", start, end);
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::{BasicFactory, BasicGraph};
    use crate::graph::from_string;

    fn parse(text: &str) -> BasicGraph<String> {
        from_string(BasicFactory::new(), text)
    }

    fn normalized(map: HashMap<String, Vec<String>>) -> Vec<(String, Vec<String>)> {
        let mut entries: Vec<_> = map
            .into_iter()
            .map(|(k, mut v)| {
                v.sort();
                (k, v)
            })
            .collect();
        entries.sort();
        entries
    }

    fn entry(key: &str, values: &[&str]) -> (String, Vec<String>) {
        (
            key.to_string(),
            values.iter().map(|v| v.to_string()).collect(),
        )
    }

    #[test]
    fn test_neighbor_map_directed() {
        let g = parse("A->A, B->B, C->C, E->E, A->E, F->E");
        assert_eq!(
            normalized(neighbor_map(&g, EdgeDirection::Directed)),
            vec![
                entry("A", &["A", "E"]),
                entry("B", &["B"]),
                entry("C", &["C"]),
                entry("E", &["E"]),
                entry("F", &["E"]),
            ]
        );
    }

    #[test]
    fn test_neighbor_map_undirected() {
        let g = parse("A->A, B->B, C->C, E->E, A->E, F->E");
        assert_eq!(
            normalized(neighbor_map(&g, EdgeDirection::Undirected)),
            vec![
                entry("A", &["A", "E"]),
                entry("B", &["B"]),
                entry("C", &["C"]),
                entry("E", &["A", "E", "F"]),
                entry("F", &["E"]),
            ]
        );
    }

    #[test]
    fn test_neighbor_map_omits_isolated() {
        let g = parse("A->B, C");
        let map = neighbor_map(&g, EdgeDirection::Directed);
        assert_eq!(map.len(), 1);
        assert!(!map.contains_key("B"));
        assert!(!map.contains_key("C"));
    }

    #[test]
    fn test_is_connected() {
        let g = parse("A->A, B->E, C->C, E->E, E->C, F->E");
        let c = |a: &str, b: &str| {
            is_connected(&g, &a.to_string(), &b.to_string(), EdgeDirection::Directed)
        };
        assert!(c("A", "A"));
        assert!(c("B", "E"));
        assert!(c("E", "C"));
        assert!(c("F", "E"));
        assert!(c("C", "C"));
        assert!(c("B", "C"));
        assert!(c("F", "C"));
        assert!(!c("B", "B"));
        assert!(!c("F", "F"));
        assert!(!c("C", "B"));
        assert!(is_connected(
            &g,
            &"C".to_string(),
            &"B".to_string(),
            EdgeDirection::Undirected
        ));
    }

    #[test]
    fn test_self_reachability_needs_a_path() {
        let g = parse("A, B->C");
        let a = "A".to_string();
        assert!(!is_connected(&g, &a, &a, EdgeDirection::Directed));
        assert!(!is_connected(&g, &a, &a, EdgeDirection::Undirected));

        // Undirected, B reaches itself by walking B->C and back.
        let b = "B".to_string();
        assert!(is_connected(&g, &b, &b, EdgeDirection::Undirected));
    }

    #[test]
    fn test_direction_from_name() {
        assert_eq!(
            EdgeDirection::from_name("Undirected"),
            Some(EdgeDirection::Undirected)
        );
        assert_eq!(EdgeDirection::from_name("sideways"), None);
        assert_eq!(EdgeDirection::default(), EdgeDirection::Directed);
    }
}
