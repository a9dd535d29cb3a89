//! Graph construction and read-only graph algorithms.

pub mod builder;
pub mod parse;
pub mod relations;
pub mod traversal;

pub use builder::{GraphBuilder, SharedBuilder};
pub use parse::{extend_from_str, from_string};
pub use relations::{adjacency_matrix, children, markov_blanket, parents};
pub use traversal::{is_connected, neighbor_map, EdgeDirection};
