//! Feature similarity: how closely A's region descriptors are matched in B.

use crate::model::{euclidean, Graph};

/// Directional nearest-feature score from `a` to `b`.
///
/// For every vertex of `a` carrying features, take the smallest Euclidean
/// distance to any feature vector in `b`, average those minima into `m`,
/// and map to `1 / (1 + m)`.
///
/// Only `a`'s vertices are matched, so `feature_similarity(a, b)` and
/// `feature_similarity(b, a)` can differ. Returns 0 when either side has
/// no feature vectors.
pub fn feature_similarity(a: &Graph, b: &Graph) -> f64 {
    let sources: Vec<&[f64]> = a.iter().filter_map(|v| v.features.as_deref()).collect();
    let targets: Vec<&[f64]> = b.iter().filter_map(|v| v.features.as_deref()).collect();
    if sources.is_empty() || targets.is_empty() {
        return 0.0;
    }

    let total: f64 = sources
        .iter()
        .map(|source| {
            targets
                .iter()
                .map(|target| euclidean(source, target))
                .fold(f64::INFINITY, f64::min)
        })
        .sum();

    1.0 / (1.0 + total / sources.len() as f64)
}
