//! # Pathfinding
//!
//! Dijkstra and A* over a [`Graph`], sharing one best-first search.
//!
//! ```rust
//! use regiongraph::{Graph, Pathfinder};
//!
//! let mut graph = Graph::weighted_undirected();
//! graph.add_vertex("0,0", 0, 0);
//! graph.add_vertex("1,0", 1, 0);
//! graph.add_edge("0,0", "1,0", 1.0)?;
//!
//! let result = Pathfinder::new(&graph).a_star("0,0", "1,0")?;
//! assert_eq!(result.total_cost, 1.0);
//! # Ok::<(), regiongraph::Error>(())
//! ```

pub mod heuristic;
pub mod search;
mod frontier;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::{Graph, Vertex};
use crate::Result;

pub use heuristic::{Euclidean, Heuristic, ZeroHeuristic};
pub use search::Pathfinder;

/// Outcome of one shortest-path query. A read-only snapshot: the vertices
/// are copies taken when the search finished.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathResult {
    /// Vertices from start to end; empty when no path exists.
    pub path: Vec<Vertex>,
    /// Every non-stale pop, in expansion order. Entries superseded by a
    /// cheaper one are skipped; a vertex reopened with a better cost repeats.
    pub explored: Vec<Vertex>,
    /// Sum of edge weights along `path`; `+inf` when no path exists.
    pub total_cost: f64,
    /// Wall-clock time of the query. Informational only.
    pub elapsed: Duration,
}

impl PathResult {
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges on the path (0 when not found or start == end).
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn path_ids(&self) -> Vec<&str> {
        self.path.iter().map(Vertex::id).collect()
    }

    pub fn explored_count(&self) -> usize {
        self.explored.len()
    }
}

/// Shorthand for `Pathfinder::new(graph).dijkstra(start, end)`.
pub fn dijkstra(graph: &Graph, start: &str, end: &str) -> Result<PathResult> {
    Pathfinder::new(graph).dijkstra(start, end)
}

/// Shorthand for `Pathfinder::new(graph).a_star(start, end)`.
pub fn a_star(graph: &Graph, start: &str, end: &str) -> Result<PathResult> {
    Pathfinder::new(graph).a_star(start, end)
}
