//! Cost-to-go estimates for best-first search.

use crate::model::Vertex;

/// Lower bound on the remaining cost from `from` to `goal`.
///
/// A* is optimal only when the estimate never overestimates the true cost.
/// The search trusts the implementation on this and does not verify it.
pub trait Heuristic {
    fn estimate(&self, from: &Vertex, goal: &Vertex) -> f64;

    /// Label used in log events.
    fn name(&self) -> &'static str;
}

/// Straight-line distance between region coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl Heuristic for Euclidean {
    fn estimate(&self, from: &Vertex, goal: &Vertex) -> f64 {
        from.distance_to(goal)
    }

    fn name(&self) -> &'static str {
        "a_star"
    }
}

/// Always zero; reduces best-first search to Dijkstra.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _from: &Vertex, _goal: &Vertex) -> f64 {
        0.0
    }

    fn name(&self) -> &'static str {
        "dijkstra"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_estimate() {
        let a = Vertex::new("a", 0, 0);
        let b = Vertex::new("b", 6, 8);
        assert!((Euclidean.estimate(&a, &b) - 10.0).abs() < 1e-12);
        assert_eq!(ZeroHeuristic.estimate(&a, &b), 0.0);
    }
}
