//! Vertex (region) in the graph.

use std::borrow::Borrow;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Edge;

/// Opaque vertex identifier, unique within one graph.
///
/// Borrows as `str`, so registries keyed by `VertexId` can be queried with
/// plain string slices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(pub String);

impl VertexId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for VertexId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VertexId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for VertexId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Outgoing edge list. Grid regions have at most four neighbours.
pub type EdgeList = SmallVec<[Edge; 4]>;

/// A vertex: a spatial region with a position, an optional feature
/// descriptor, an obstacle flag, and the edges it owns.
///
/// Equality and hashing consider only the id. The id is fixed at
/// construction; a graph's registry key and the vertex's own id always agree.
///
/// ```compile_fail
/// let mut graph = regiongraph::Graph::weighted_directed();
/// graph.add_vertex("b", 0, 0);
/// graph.vertex_mut("b").unwrap().id = "z".into();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    id: VertexId,
    pub x: i32,
    pub y: i32,
    /// Feature descriptor (e.g. mean RGB). `None` means "not comparable".
    pub features: Option<Vec<f64>>,
    /// Impassable for pathfinding.
    pub obstacle: bool,
    pub(crate) edges: EdgeList,
}

impl Vertex {
    pub fn new(id: impl Into<VertexId>, x: i32, y: i32) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            features: None,
            obstacle: false,
            edges: EdgeList::new(),
        }
    }

    pub fn with_features(mut self, features: impl Into<Vec<f64>>) -> Self {
        self.features = Some(features.into());
        self
    }

    pub fn with_obstacle(mut self, obstacle: bool) -> Self {
        self.obstacle = obstacle;
        self
    }

    pub fn set_features(&mut self, features: impl Into<Vec<f64>>) -> &mut Self {
        self.features = Some(features.into());
        self
    }

    pub fn set_obstacle(&mut self, obstacle: bool) -> &mut Self {
        self.obstacle = obstacle;
        self
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Outgoing edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of outgoing edges.
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    /// Whether any outgoing edge targets `destination`.
    pub fn has_edge_to(&self, destination: &str) -> bool {
        self.edges.iter().any(|e| e.destination.as_str() == destination)
    }

    pub(crate) fn push_edge(&mut self, destination: VertexId, weight: f64) {
        let edge = Edge::new(self.id.clone(), destination, weight);
        self.edges.push(edge);
    }

    /// Drops every outgoing edge that targets `destination`. Returns how many went.
    pub(crate) fn remove_edges_to(&mut self, destination: &str) -> usize {
        let before = self.edges.len();
        self.edges.retain(|e| e.destination.as_str() != destination);
        before - self.edges.len()
    }

    /// Straight-line distance between the two regions' coordinates.
    pub fn distance_to(&self, other: &Vertex) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }

    /// Euclidean distance between feature vectors; `+inf` if either is missing.
    pub fn feature_distance(&self, other: &Vertex) -> f64 {
        match (&self.features, &other.features) {
            (Some(a), Some(b)) => euclidean(a, b),
            _ => f64::INFINITY,
        }
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Euclidean distance over the common prefix of two vectors.
pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
