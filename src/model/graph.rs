//! Graph container: the vertex registry plus its construction flags.

use hashbrown::HashMap;
use tracing::warn;

use super::{Vertex, VertexId};
use crate::config::GraphConfig;
use crate::{Error, Result};

/// A region graph.
///
/// Vertices are keyed by id; each vertex owns its outgoing edges. The
/// `weighted` / `directed` flags are fixed at construction and applied on
/// every [`add_edge`](Graph::add_edge).
///
/// There is no internal locking. Queries borrow the graph immutably, so the
/// borrow checker already rules out mutation during a search.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: HashMap<VertexId, Vertex>,
    config: GraphConfig,
}

impl Graph {
    pub fn new(config: GraphConfig) -> Self {
        Self {
            vertices: HashMap::new(),
            config,
        }
    }

    pub fn weighted_directed() -> Self {
        Self::new(GraphConfig::new())
    }

    pub fn weighted_undirected() -> Self {
        Self::new(GraphConfig::new().with_directed(false))
    }

    pub fn config(&self) -> GraphConfig {
        self.config
    }

    pub fn is_weighted(&self) -> bool {
        self.config.weighted
    }

    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Inserts a vertex, or returns the existing one untouched if `id` is taken.
    pub fn add_vertex(&mut self, id: impl Into<VertexId>, x: i32, y: i32) -> &mut Vertex {
        let id = id.into();
        self.vertices
            .entry(id.clone())
            .or_insert_with(|| Vertex::new(id, x, y))
    }

    /// Connects `from` to `to`.
    ///
    /// Unweighted graphs store `1.0` regardless of `weight`; undirected graphs
    /// also insert `to -> from`.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<()> {
        if !self.vertices.contains_key(from) || !self.vertices.contains_key(to) {
            return Err(Error::Reference {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        let weight = if self.config.weighted {
            if weight.is_nan() || weight < 0.0 {
                return Err(Error::InvalidWeight(weight));
            }
            weight
        } else {
            1.0
        };

        if let Some(source) = self.vertices.get_mut(from) {
            source.push_edge(VertexId::from(to), weight);
        }
        if !self.config.directed {
            if from == to {
                warn!(vertex = from, "self loop on undirected graph is stored twice");
            }
            if let Some(dest) = self.vertices.get_mut(to) {
                dest.push_edge(VertexId::from(from), weight);
            }
        }
        Ok(())
    }

    /// Removes every `from -> to` edge (and `to -> from` when undirected).
    ///
    /// Returns whether any edge was removed. Unknown ids are not an error.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> bool {
        let mut removed = 0;
        if let Some(source) = self.vertices.get_mut(from) {
            removed += source.remove_edges_to(to);
        }
        if !self.config.directed {
            if let Some(dest) = self.vertices.get_mut(to) {
                removed += dest.remove_edges_to(from);
            }
        }
        removed > 0
    }

    /// Removes a vertex and every edge pointing at it.
    pub fn remove_vertex(&mut self, id: &str) -> Option<Vertex> {
        let removed = self.vertices.remove(id)?;
        for vertex in self.vertices.values_mut() {
            vertex.remove_edges_to(id);
        }
        Some(removed)
    }

    // ========================================================================
    // Access
    // ========================================================================

    pub fn vertex(&self, id: &str) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    pub fn vertex_mut(&mut self, id: &str) -> Option<&mut Vertex> {
        self.vertices.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.vertices.contains_key(id)
    }

    /// Snapshot copy of all vertices. Order is unspecified.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.vertices.values().cloned().collect()
    }

    /// Borrowing iteration over all vertices. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Total number of stored (directed) edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vertex::degree).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(config: GraphConfig) -> Graph {
        let mut g = Graph::new(config);
        g.add_vertex("a", 0, 0);
        g.add_vertex("b", 1, 0);
        g.add_vertex("c", 0, 1);
        g.add_edge("a", "b", 2.0).unwrap();
        g.add_edge("b", "c", 3.0).unwrap();
        g.add_edge("c", "a", 4.0).unwrap();
        g
    }

    #[test]
    fn add_vertex_is_idempotent() {
        let mut g = Graph::weighted_directed();
        g.add_vertex("a", 1, 2).set_obstacle(true);
        let again = g.add_vertex("a", 9, 9);
        assert_eq!((again.x, again.y), (1, 2));
        assert!(again.obstacle);
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn add_edge_unknown_vertex_is_reference_error() {
        let mut g = Graph::weighted_directed();
        g.add_vertex("a", 0, 0);
        let err = g.add_edge("a", "missing", 1.0).unwrap_err();
        assert!(matches!(err, Error::Reference { ref to, .. } if to == "missing"));
        let err = g.add_edge("missing", "a", 1.0).unwrap_err();
        assert!(matches!(err, Error::Reference { ref from, .. } if from == "missing"));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn add_edge_rejects_negative_weight_on_weighted_graph() {
        let mut g = Graph::weighted_directed();
        g.add_vertex("a", 0, 0);
        g.add_vertex("b", 0, 0);
        assert!(matches!(g.add_edge("a", "b", -1.0), Err(Error::InvalidWeight(_))));
        assert!(matches!(g.add_edge("a", "b", f64::NAN), Err(Error::InvalidWeight(_))));
    }

    #[test]
    fn unweighted_graph_coerces_weights() {
        let mut g = Graph::new(GraphConfig::new().with_weighted(false));
        g.add_vertex("a", 0, 0);
        g.add_vertex("b", 0, 0);
        g.add_edge("a", "b", 42.0).unwrap();
        g.add_edge("b", "a", -3.0).unwrap();
        assert_eq!(g.vertex("a").unwrap().edges()[0].weight, 1.0);
        assert_eq!(g.vertex("b").unwrap().edges()[0].weight, 1.0);
    }

    #[test]
    fn undirected_graph_inserts_both_directions() {
        let g = triangle(GraphConfig::new().with_directed(false));
        assert_eq!(g.edge_count(), 6);
        assert!(g.vertex("b").unwrap().has_edge_to("a"));
        assert!(g.vertex("a").unwrap().has_edge_to("c"));
    }

    #[test]
    fn remove_edge_directed_only_touches_one_side() {
        let mut g = triangle(GraphConfig::new());
        assert!(g.remove_edge("a", "b"));
        assert!(!g.vertex("a").unwrap().has_edge_to("b"));
        assert!(!g.remove_edge("a", "b"));
        assert!(!g.remove_edge("nope", "b"));
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn remove_edge_undirected_removes_both() {
        let mut g = triangle(GraphConfig::new().with_directed(false));
        assert!(g.remove_edge("b", "a"));
        assert!(!g.vertex("a").unwrap().has_edge_to("b"));
        assert!(!g.vertex("b").unwrap().has_edge_to("a"));
        assert_eq!(g.edge_count(), 4);
    }

    #[test]
    fn remove_vertex_cascades() {
        let mut g = triangle(GraphConfig::new().with_directed(false));
        let removed = g.remove_vertex("a").unwrap();
        assert_eq!(removed.id(), "a");
        assert!(g.vertex("a").is_none());
        assert!(g.iter().all(|v| !v.has_edge_to("a")));
        assert_eq!(g.edge_count(), 2);
        assert!(g.remove_vertex("a").is_none());
    }

    #[test]
    fn vertices_is_a_snapshot() {
        let mut g = triangle(GraphConfig::new());
        let snapshot = g.vertices();
        g.vertex_mut("a").unwrap().set_obstacle(true);
        let a = snapshot.iter().find(|v| v.id() == "a").unwrap();
        assert!(!a.obstacle);
        assert_eq!(snapshot.len(), 3);
    }
}
