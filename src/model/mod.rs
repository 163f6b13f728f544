//! # Region Graph Model
//!
//! The data every algorithm reads: vertices (regions), edges, and the
//! graph that owns them.
//!
//! Design rule: edges are owned by their source vertex and name their
//! destination by id. Nothing holds a reference to another vertex, so the
//! model is a plain tree of owned data. No I/O, no shared state.

pub mod vertex;
pub mod edge;
pub mod graph;

pub use vertex::{Vertex, VertexId, EdgeList, euclidean};
pub use edge::Edge;
pub use graph::Graph;
