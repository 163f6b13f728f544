//! Best-first shortest-path search shared by Dijkstra and A*.
//!
//! Both algorithms run the same loop; they differ only in the frontier
//! priority (`g` versus `g + h`). The loop:
//!
//! 1. collects the vertices reachable from `start` (BFS over outgoing
//!    edges) and seeds each with an infinite cost;
//! 2. pops the lowest-priority entry, skipping it if stale;
//! 3. stops once the goal is popped, else relaxes outgoing edges into
//!    non-obstacle neighbours on a strict improvement.
//!
//! Tie-break: equal priorities pop in push order (see `frontier`). An
//! equal-cost alternative never replaces a recorded predecessor, so among
//! equal-cost paths the first one discovered wins.

use std::collections::VecDeque;
use std::time::Instant;

use hashbrown::{HashMap, HashSet};
use tracing::{debug, trace};

use super::frontier::Frontier;
use super::heuristic::{Euclidean, Heuristic, ZeroHeuristic};
use super::PathResult;
use crate::model::{Graph, Vertex, VertexId};
use crate::{Error, Result};

/// Shortest-path queries over one graph.
///
/// Holds only a shared borrow; all bookkeeping is allocated per call.
#[derive(Debug, Clone, Copy)]
pub struct Pathfinder<'g> {
    graph: &'g Graph,
}

/// Per-query scratch state.
struct SearchState<'g> {
    cost: HashMap<&'g str, f64>,
    predecessor: HashMap<&'g str, &'g str>,
    explored: Vec<&'g Vertex>,
    peak_frontier: usize,
}

impl<'g> Pathfinder<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// Dijkstra's algorithm from `start` to `end`.
    pub fn dijkstra(&self, start: &str, end: &str) -> Result<PathResult> {
        self.search(start, end, &ZeroHeuristic)
    }

    /// A* with the straight-line distance heuristic.
    pub fn a_star(&self, start: &str, end: &str) -> Result<PathResult> {
        self.search(start, end, &Euclidean)
    }

    /// Best-first search guided by `heuristic`.
    ///
    /// An unreachable `end` is not an error: the result has an empty path
    /// and infinite cost. An unknown `start` or `end` is `Error::NotFound`.
    pub fn search<H: Heuristic + ?Sized>(
        &self,
        start: &str,
        end: &str,
        heuristic: &H,
    ) -> Result<PathResult> {
        let timer = Instant::now();

        let start_vertex = self.resolve(start)?;
        let end_vertex = self.resolve(end)?;

        let state = self.run(start_vertex, Some(end_vertex), heuristic);
        let path = self.reconstruct(&state, start_vertex, end_vertex);

        let total_cost = if path.is_empty() {
            f64::INFINITY
        } else {
            state.cost.get(end).copied().unwrap_or(f64::INFINITY)
        };

        debug!(
            algorithm = heuristic.name(),
            start,
            end,
            explored = state.explored.len(),
            peak_frontier = state.peak_frontier,
            found = !path.is_empty(),
            cost = total_cost,
            "search finished"
        );

        Ok(PathResult {
            path: path.into_iter().cloned().collect(),
            explored: state.explored.into_iter().cloned().collect(),
            total_cost,
            elapsed: timer.elapsed(),
        })
    }

    /// Dijkstra without early exit: the minimum cost from `start` to every
    /// vertex reachable from it while avoiding obstacles.
    pub fn shortest_distances(&self, start: &str) -> Result<HashMap<VertexId, f64>> {
        let start_vertex = self.resolve(start)?;
        let state = self.run(start_vertex, None, &ZeroHeuristic);

        Ok(state
            .cost
            .into_iter()
            .filter(|(_, cost)| cost.is_finite())
            .map(|(id, cost)| (VertexId::from(id), cost))
            .collect())
    }

    fn resolve(&self, id: &str) -> Result<&'g Vertex> {
        let graph = self.graph;
        graph
            .vertex(id)
            .ok_or_else(|| Error::NotFound(format!("Vertex {id}")))
    }

    /// Ids of every vertex reachable from `start` over outgoing edges.
    fn reachable(&self, start: &'g Vertex) -> HashSet<&'g str> {
        let graph = self.graph;
        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            if !visited.insert(current.id()) {
                continue;
            }
            for edge in current.edges() {
                if let Some(next) = graph.vertex(edge.destination.as_str()) {
                    if !visited.contains(next.id()) {
                        queue.push_back(next);
                    }
                }
            }
        }

        visited
    }

    fn run<H: Heuristic + ?Sized>(
        &self,
        start: &'g Vertex,
        goal: Option<&'g Vertex>,
        heuristic: &H,
    ) -> SearchState<'g> {
        let graph = self.graph;
        let estimate = |v: &Vertex| goal.map_or(0.0, |g| heuristic.estimate(v, g));

        let mut cost: HashMap<&'g str, f64> = self
            .reachable(start)
            .into_iter()
            .map(|id| (id, f64::INFINITY))
            .collect();
        let mut predecessor: HashMap<&'g str, &'g str> = HashMap::new();
        let mut explored: Vec<&'g Vertex> = Vec::new();
        let mut expanded: HashSet<&'g str> = HashSet::new();
        let mut frontier = Frontier::new();
        let mut peak_frontier = 0;

        // The start vertex is never checked for the obstacle flag.
        cost.insert(start.id(), 0.0);
        frontier.push(start.id(), 0.0, estimate(start));

        while let Some(entry) = frontier.pop() {
            let best = cost.get(entry.vertex).copied().unwrap_or(f64::INFINITY);
            if entry.cost > best {
                continue;
            }
            let Some(current) = graph.vertex(entry.vertex) else {
                continue;
            };

            if !expanded.insert(current.id()) {
                trace!(vertex = current.id(), cost = best, "vertex reopened");
            }
            explored.push(current);

            if goal.is_some_and(|g| g.id() == current.id()) {
                break;
            }

            for edge in current.edges() {
                let Some(neighbor) = graph.vertex(edge.destination.as_str()) else {
                    continue;
                };
                if neighbor.obstacle {
                    continue;
                }

                let tentative = best + edge.weight;
                let known = cost.get(neighbor.id()).copied().unwrap_or(f64::INFINITY);
                if tentative < known {
                    cost.insert(neighbor.id(), tentative);
                    predecessor.insert(neighbor.id(), current.id());
                    frontier.push(neighbor.id(), tentative, tentative + estimate(neighbor));
                }
            }
            peak_frontier = peak_frontier.max(frontier.len());
        }

        SearchState {
            cost,
            predecessor,
            explored,
            peak_frontier,
        }
    }

    /// Walks predecessors back from `end`. Empty when `end` was never reached.
    fn reconstruct(
        &self,
        state: &SearchState<'g>,
        start: &'g Vertex,
        end: &'g Vertex,
    ) -> Vec<&'g Vertex> {
        if start.id() == end.id() {
            return vec![start];
        }
        if !state.predecessor.contains_key(end.id()) {
            return Vec::new();
        }

        let graph = self.graph;
        let mut ids = vec![end.id()];
        let mut current = end.id();
        while let Some(&previous) = state.predecessor.get(current) {
            ids.push(previous);
            if previous == start.id() {
                break;
            }
            current = previous;
        }
        ids.reverse();

        ids.into_iter().filter_map(|id| graph.vertex(id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GraphConfig;

    /// a -1-> b -1-> d
    /// a -4-> c -1-> d
    fn diamond() -> Graph {
        let mut g = Graph::weighted_directed();
        g.add_vertex("a", 0, 0);
        g.add_vertex("b", 1, 0);
        g.add_vertex("c", 0, 1);
        g.add_vertex("d", 1, 1);
        g.add_edge("a", "b", 1.0).unwrap();
        g.add_edge("a", "c", 4.0).unwrap();
        g.add_edge("b", "d", 1.0).unwrap();
        g.add_edge("c", "d", 1.0).unwrap();
        g
    }

    #[test]
    fn dijkstra_takes_cheapest_branch() {
        let g = diamond();
        let result = Pathfinder::new(&g).dijkstra("a", "d").unwrap();
        assert_eq!(result.path_ids(), vec!["a", "b", "d"]);
        assert_eq!(result.total_cost, 2.0);
        assert_eq!(result.explored[0].id(), "a");
        assert_eq!(result.explored.last().unwrap().id(), "d");
    }

    #[test]
    fn unknown_endpoint_is_not_found() {
        let g = diamond();
        let finder = Pathfinder::new(&g);
        assert!(matches!(finder.dijkstra("zz", "d"), Err(Error::NotFound(_))));
        assert!(matches!(finder.a_star("a", "zz"), Err(Error::NotFound(_))));
        assert!(matches!(finder.shortest_distances("zz"), Err(Error::NotFound(_))));
    }

    #[test]
    fn start_equals_end() {
        let g = diamond();
        let result = Pathfinder::new(&g).a_star("c", "c").unwrap();
        assert_eq!(result.path_ids(), vec!["c"]);
        assert_eq!(result.total_cost, 0.0);
        assert_eq!(result.explored_count(), 1);
    }

    #[test]
    fn unreachable_end_gives_empty_path_and_infinite_cost() {
        let g = diamond();
        let result = Pathfinder::new(&g).dijkstra("d", "a").unwrap();
        assert!(result.path.is_empty());
        assert!(result.total_cost.is_infinite());
        assert!(!result.is_found());
        assert_eq!(result.explored_count(), 1);
    }

    #[test]
    fn obstacle_start_is_still_expanded() {
        let mut g = diamond();
        g.vertex_mut("a").unwrap().set_obstacle(true);
        let result = Pathfinder::new(&g).dijkstra("a", "d").unwrap();
        assert_eq!(result.total_cost, 2.0);
    }

    #[test]
    fn obstacle_end_is_never_reached() {
        let mut g = diamond();
        g.vertex_mut("d").unwrap().set_obstacle(true);
        let result = Pathfinder::new(&g).dijkstra("a", "d").unwrap();
        assert!(result.path.is_empty());
        assert!(result.total_cost.is_infinite());
    }

    #[test]
    fn equal_cost_tie_keeps_first_discovered_path() {
        // a -> b -> d and a -> c -> d both cost 2; b is pushed before c.
        let mut g = Graph::weighted_directed();
        for id in ["a", "b", "c", "d"] {
            g.add_vertex(id, 0, 0);
        }
        g.add_edge("a", "b", 1.0).unwrap();
        g.add_edge("a", "c", 1.0).unwrap();
        g.add_edge("b", "d", 1.0).unwrap();
        g.add_edge("c", "d", 1.0).unwrap();

        let result = Pathfinder::new(&g).dijkstra("a", "d").unwrap();
        assert_eq!(result.path_ids(), vec!["a", "b", "d"]);
        let explored: Vec<_> = result.explored.iter().map(Vertex::id).collect();
        assert_eq!(explored, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn superseded_entries_are_not_explored() {
        // b is pushed at 10, then improved to 2 through c. The 10 entry
        // pops before d and is skipped.
        let mut g = Graph::weighted_directed();
        for id in ["a", "b", "c", "d"] {
            g.add_vertex(id, 0, 0);
        }
        g.add_edge("a", "b", 10.0).unwrap();
        g.add_edge("a", "c", 1.0).unwrap();
        g.add_edge("c", "b", 1.0).unwrap();
        g.add_edge("b", "d", 100.0).unwrap();

        let result = Pathfinder::new(&g).dijkstra("a", "d").unwrap();
        let explored: Vec<_> = result.explored.iter().map(Vertex::id).collect();
        assert_eq!(explored, vec!["a", "c", "b", "d"]);
        assert_eq!(result.path_ids(), vec!["a", "c", "b", "d"]);
        assert_eq!(result.total_cost, 102.0);
    }

    #[test]
    fn shortest_distances_covers_reachable_vertices_only() {
        let mut g = diamond();
        g.add_vertex("island", 9, 9);
        let dist = Pathfinder::new(&g).shortest_distances("a").unwrap();
        assert_eq!(dist.len(), 4);
        assert_eq!(dist["a"], 0.0);
        assert_eq!(dist["b"], 1.0);
        assert_eq!(dist["c"], 4.0);
        assert_eq!(dist["d"], 2.0);
        assert!(!dist.contains_key("island"));
    }

    #[test]
    fn shortest_distances_skip_obstacles() {
        let mut g = diamond();
        g.vertex_mut("b").unwrap().set_obstacle(true);
        let dist = Pathfinder::new(&g).shortest_distances("a").unwrap();
        assert!(!dist.contains_key("b"));
        assert_eq!(dist["d"], 5.0);
    }

    #[test]
    fn inconsistent_heuristic_can_reopen_vertices() {
        // Heuristic that badly overestimates at "b" delays its expansion.
        struct Skewed;
        impl Heuristic for Skewed {
            fn estimate(&self, from: &Vertex, _goal: &Vertex) -> f64 {
                if from.id() == "b" { 10.0 } else { 0.0 }
            }
            fn name(&self) -> &'static str {
                "skewed"
            }
        }

        // a -> c (5), a -> b (1), b -> c (1), c -> d (10)
        let mut g = Graph::new(GraphConfig::new());
        for id in ["a", "b", "c", "d"] {
            g.add_vertex(id, 0, 0);
        }
        g.add_edge("a", "c", 5.0).unwrap();
        g.add_edge("a", "b", 1.0).unwrap();
        g.add_edge("b", "c", 1.0).unwrap();
        g.add_edge("c", "d", 10.0).unwrap();

        let result = Pathfinder::new(&g).search("a", "d", &Skewed).unwrap();
        let explored: Vec<_> = result.explored.iter().map(Vertex::id).collect();
        assert_eq!(explored, vec!["a", "c", "b", "c", "d"]);
        assert_eq!(result.path_ids(), vec!["a", "b", "c", "d"]);
        assert_eq!(result.total_cost, 12.0);
    }
}
