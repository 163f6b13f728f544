//! # regiongraph — Region Graph Algorithm Engine
//!
//! Shortest paths and similarity scores over weighted graphs whose
//! vertices are spatial regions carrying feature vectors.
//!
//! ## Design Principles
//!
//! 1. **Owned data, no back-references**: edges belong to their source
//!    vertex and name the destination by id.
//! 2. **Read-only algorithms**: `Pathfinder` and `SimilarityDetector` only
//!    borrow a `Graph`; all bookkeeping lives and dies inside one call.
//! 3. **Degraded results, not errors**: empty graphs and unreachable
//!    targets yield an empty path / infinite cost / zero score. Errors are
//!    reserved for caller contract violations.
//!
//! ## Quick Start
//!
//! ```rust
//! use regiongraph::{Graph, Pathfinder, calculate_similarity};
//!
//! # fn example() -> regiongraph::Result<()> {
//! let mut graph = Graph::weighted_undirected();
//! graph.add_vertex("a", 0, 0).set_features(vec![255.0, 0.0, 0.0]);
//! graph.add_vertex("b", 1, 0).set_features(vec![250.0, 5.0, 0.0]);
//! graph.add_vertex("c", 2, 0).set_features(vec![0.0, 0.0, 255.0]);
//! graph.add_edge("a", "b", 1.0)?;
//! graph.add_edge("b", "c", 1.0)?;
//!
//! let route = Pathfinder::new(&graph).a_star("a", "c")?;
//! assert_eq!(route.path_ids(), vec!["a", "b", "c"]);
//!
//! let score = calculate_similarity(&graph, &graph, 1)?;
//! assert_eq!(score.feature_similarity, 1.0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `model` | Vertex / edge / graph data model |
//! | `pathfinding` | Dijkstra and A* |
//! | `similarity` | Feature, structural and kNN graph comparison |
//! | `builder` | Region graph from an RGB raster |
//! | `config` | Serde-loadable configuration |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod config;
pub mod pathfinding;
pub mod similarity;
pub mod builder;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{Vertex, VertexId, Edge, Graph};

// ============================================================================
// Re-exports: Configuration
// ============================================================================

pub use config::{GraphConfig, SimilarityConfig, RegionGridConfig};

// ============================================================================
// Re-exports: Algorithms
// ============================================================================

pub use pathfinding::{PathResult, Pathfinder, Heuristic, Euclidean, ZeroHeuristic};
pub use similarity::{SimilarityResult, SimilarityDetector, calculate_similarity};
pub use builder::{RasterSource, RgbRaster, build_region_graph};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Edge references unknown vertex: {from} -> {to}")]
    Reference { from: String, to: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid edge weight: {0} (weights must be non-negative)")]
    InvalidWeight(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
