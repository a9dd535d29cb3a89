//! Text-to-graph mini-language.
//!
//! ```text
//! graph   := chain (',' chain)*
//! chain   := segment ('->' segment)*
//! segment := whitespace* token whitespace*
//! ```
//!
//! Every trimmed token is a node id. Consecutive tokens in a chain are
//! linked, so `A->B->C` yields `A->B` and `B->C` but never `A->C`.

use log::debug;

use crate::types::{Factory, FactoryId};

use super::GraphBuilder;

/// Separator between chains.
pub const CHAIN_SEPARATOR: char = ',';

/// Separator between segments of a chain.
pub const EDGE_ARROW: &str = "->";

/// Register every chain of `text` on an existing builder.
pub fn extend_from_str<F>(builder: &mut GraphBuilder<F>, text: &str)
where
    F: Factory,
    for<'a> FactoryId<F>: From<&'a str>,
{
    for chain in text.split(CHAIN_SEPARATOR) {
        let mut previous: Option<&str> = None;
        for segment in chain.split(EDGE_ARROW) {
            let id = segment.trim();
            builder.node(id.into());
            if let Some(prev) = previous {
                builder.edge(prev.into(), id.into());
            }
            previous = Some(id);
        }
    }
}

/// Build a graph from a description such as `"A->B->C, B->D, E"`.
pub fn from_string<F>(factory: F, text: &str) -> F::Graph
where
    F: Factory,
    for<'a> FactoryId<F>: From<&'a str>,
{
    let mut builder = GraphBuilder::new(factory);
    extend_from_str(&mut builder, text);
    debug!(
        "Parsed {} nodes and {} edges",
        builder.node_count(),
        builder.edge_count()
    );
    builder.build()
}
