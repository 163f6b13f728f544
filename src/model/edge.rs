//! Edge (weighted connection) between two vertices.

use serde::{Deserialize, Serialize};

use super::VertexId;

/// A directed, weighted edge.
///
/// Edges live in their source vertex's outgoing list and name both
/// endpoints by id; the destination is resolved through the owning graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: VertexId,
    pub destination: VertexId,
    /// Traversal cost, never negative.
    pub weight: f64,
}

impl Edge {
    pub fn new(source: VertexId, destination: VertexId, weight: f64) -> Self {
        Self { source, destination, weight }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({:.2})", self.source, self.destination, self.weight)
    }
}
