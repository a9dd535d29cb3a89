//! Memoizing builders for immutable graphs.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, trace};

use crate::types::{Factory, FactoryId};

/// Incremental graph builder that deduplicates by id.
///
/// Nodes are memoized by id and edges by `(start_id, end_id)`, so repeated
/// requests return the same `Arc`. [`GraphBuilder::build`] snapshots the
/// current contents and may be called any number of times.
pub struct GraphBuilder<F: Factory> {
    factory: F,
    nodes: HashMap<FactoryId<F>, Arc<F::Node>>,
    edges: HashMap<(FactoryId<F>, FactoryId<F>), Arc<F::Edge>>,
}

impl<F: Factory> GraphBuilder<F> {
    /// Create an empty builder over the given factory.
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            nodes: HashMap::new(),
            edges: HashMap::new(),
        }
    }

    /// Return the node for `id`, creating it on first request.
    pub fn node(&mut self, id: FactoryId<F>) -> Arc<F::Node> {
        if let Some(node) = self.nodes.get(&id) {
            trace!("Reusing node {:?}", id);
            return Arc::clone(node);
        }

        debug!("Creating node {:?}", id);
        let node = Arc::new(self.factory.create_node(id.clone()));
        self.nodes.insert(id, Arc::clone(&node));
        node
    }

    /// Return the edge `start_id -> end_id`, creating it (and any missing
    /// endpoint) on first request.
    pub fn edge(&mut self, start_id: FactoryId<F>, end_id: FactoryId<F>) -> Arc<F::Edge> {
        let key = (start_id, end_id);
        if let Some(edge) = self.edges.get(&key) {
            trace!("Reusing edge {:?} -> {:?}", key.0, key.1);
            return Arc::clone(edge);
        }

        let start = self.node(key.0.clone());
        let end = self.node(key.1.clone());
        debug!("Creating edge {:?} -> {:?}", key.0, key.1);
        let edge = Arc::new(self.factory.create_edge(start, end));
        self.edges.insert(key, Arc::clone(&edge));
        edge
    }

    /// Build a graph from everything registered so far.
    pub fn build(&self) -> F::Graph {
        debug!(
            "Building graph with {} nodes and {} edges",
            self.nodes.len(),
            self.edges.len()
        );
        self.factory.create_graph(
            self.nodes.values().cloned(),
            self.edges.values().cloned(),
        )
    }

    /// Number of distinct nodes registered.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct edges registered.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether a node with this id has been registered.
    pub fn contains_node(&self, id: &FactoryId<F>) -> bool {
        self.nodes.contains_key(id)
    }

    /// Whether the edge `start_id -> end_id` has been registered.
    pub fn contains_edge(&self, start_id: &FactoryId<F>, end_id: &FactoryId<F>) -> bool {
        self.edges.contains_key(&(start_id.clone(), end_id.clone()))
    }

    /// The factory used to create components.
    pub fn factory(&self) -> &F {
        &self.factory
    }
}

impl<F: Factory + Default> Default for GraphBuilder<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

/// A [`GraphBuilder`] behind one mutex, for concurrent writers.
///
/// Get-or-create happens under the lock, so two threads asking for the
/// same id always receive the same instance.
pub struct SharedBuilder<F: Factory> {
    inner: Mutex<GraphBuilder<F>>,
}

impl<F: Factory> SharedBuilder<F> {
    /// Create an empty shared builder over the given factory.
    pub fn new(factory: F) -> Self {
        Self {
            inner: Mutex::new(GraphBuilder::new(factory)),
        }
    }

    // Memo entries are inserted only after the factory returns, so a poisoned
    // lock still guards consistent tables.
    fn lock(&self) -> MutexGuard<'_, GraphBuilder<F>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`GraphBuilder::node`].
    pub fn node(&self, id: FactoryId<F>) -> Arc<F::Node> {
        self.lock().node(id)
    }

    /// See [`GraphBuilder::edge`].
    pub fn edge(&self, start_id: FactoryId<F>, end_id: FactoryId<F>) -> Arc<F::Edge> {
        self.lock().edge(start_id, end_id)
    }

    /// See [`GraphBuilder::build`].
    pub fn build(&self) -> F::Graph {
        self.lock().build()
    }

    /// Unwrap into the plain single-writer builder.
    pub fn into_inner(self) -> GraphBuilder<F> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<F: Factory + Default> Default for SharedBuilder<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F: Factory> From<GraphBuilder<F>> for SharedBuilder<F> {
    fn from(builder: GraphBuilder<F>) -> Self {
        Self {
            inner: Mutex::new(builder),
        }
    }
}
