//! k-nearest-neighbour matching between two graphs.

use crate::model::{Graph, Vertex};

/// The `k` vertices of `candidates` closest to `query` in feature space,
/// nearest first. Vertices without features sit at `+inf` and come last.
/// Equal distances are ordered by id.
pub fn k_nearest<'c>(query: &Vertex, candidates: &'c Graph, k: usize) -> Vec<(&'c Vertex, f64)> {
    let mut ranked: Vec<(&Vertex, f64)> = candidates
        .iter()
        .map(|c| (c, query.feature_distance(c)))
        .collect();
    if ranked.is_empty() || k == 0 {
        return Vec::new();
    }

    let by_distance =
        |a: &(&Vertex, f64), b: &(&Vertex, f64)| a.1.total_cmp(&b.1).then_with(|| a.0.id().cmp(b.0.id()));

    let take = k.min(ranked.len());
    if take < ranked.len() {
        ranked.select_nth_unstable_by(take - 1, by_distance);
        ranked.truncate(take);
    }
    ranked.sort_by(by_distance);
    ranked
}

/// Mean over `a`'s vertices of their average `1 / (1 + d)` to the `k`
/// nearest vertices of `b`.
///
/// The per-vertex sum is divided by `k` even when `b` has fewer than `k`
/// vertices, so small candidate graphs are penalised. Returns 0 when either
/// graph is empty or `k` is 0.
pub fn knn_similarity(a: &Graph, b: &Graph, k: usize) -> f64 {
    if a.is_empty() || b.is_empty() || k == 0 {
        return 0.0;
    }

    let total: f64 = a
        .iter()
        .map(|vertex| {
            let matched: f64 = k_nearest(vertex, b, k)
                .into_iter()
                .map(|(_, distance)| 1.0 / (1.0 + distance))
                .sum();
            matched / k as f64
        })
        .sum();

    total / a.len() as f64
}
