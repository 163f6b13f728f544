//! Structural similarity from out-degree histograms.

use hashbrown::HashMap;

use crate::model::{Graph, Vertex};

/// Out-degree → number of vertices with that out-degree.
pub fn degree_histogram(graph: &Graph) -> HashMap<usize, usize> {
    let mut histogram = HashMap::new();
    for degree in graph.iter().map(Vertex::degree) {
        *histogram.entry(degree).or_insert(0) += 1;
    }
    histogram
}

/// Histogram intersection over the summed vertex count.
///
/// `Σ_d min(a[d], b[d]) / (|a| + |b|)`. The denominator counts both
/// graphs, so a graph compared with itself scores exactly 0.5 and 0.5 is
/// the ceiling. Returns 0 when both graphs are empty.
pub fn structural_similarity(a: &Graph, b: &Graph) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 0.0;
    }

    let hist_a = degree_histogram(a);
    let hist_b = degree_histogram(b);

    let intersection: usize = hist_a
        .iter()
        .map(|(degree, &count)| count.min(hist_b.get(degree).copied().unwrap_or(0)))
        .sum();

    intersection as f64 / total as f64
}
