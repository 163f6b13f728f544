//! # Graph Similarity
//!
//! Scores how alike two region graphs are, combining three metrics:
//!
//! | Metric | Module | Weight |
//! |--------|--------|--------|
//! | Feature (nearest descriptor, A→B) | `feature` | 0.4 |
//! | Structural (out-degree histograms) | `structural` | 0.3 |
//! | k-nearest-neighbour matching | `knn` | 0.3 |
//!
//! Two quirks of the scoring formulas are kept as-is: the feature metric
//! only matches A's vertices against B (argument order matters), and the
//! structural metric's denominator counts both graphs, so a perfect
//! structural match is 0.5.

pub mod feature;
pub mod structural;
pub mod knn;

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::SimilarityConfig;
use crate::model::Graph;
use crate::Result;

pub use feature::feature_similarity;
pub use knn::{k_nearest, knn_similarity};
pub use structural::{degree_histogram, structural_similarity};

pub const FEATURE_WEIGHT: f64 = 0.4;
pub const STRUCTURAL_WEIGHT: f64 = 0.3;
pub const KNN_WEIGHT: f64 = 0.3;

/// Outcome of one comparison. All scores lie in `[0, 1]`.
///
/// The kNN score is folded into `combined` and not reported on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    /// `0.4·feature + 0.3·structural + 0.3·knn`.
    pub combined: f64,
    pub feature_similarity: f64,
    pub structural_similarity: f64,
    /// Wall-clock time of the comparison. Informational only.
    pub elapsed: Duration,
}

/// Compares pairs of graphs under a fixed, validated configuration.
#[derive(Debug, Clone, Copy)]
pub struct SimilarityDetector {
    config: SimilarityConfig,
}

impl SimilarityDetector {
    /// Fails with `Error::Config` if the configuration is invalid (`k == 0`).
    pub fn new(config: SimilarityConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn with_k(k: usize) -> Result<Self> {
        Self::new(SimilarityConfig::new().with_k(k))
    }

    pub fn config(&self) -> SimilarityConfig {
        self.config
    }

    /// Scores `b` against `a`. Empty graphs degrade every metric to 0.
    pub fn compare(&self, a: &Graph, b: &Graph) -> SimilarityResult {
        let timer = Instant::now();

        let feature = feature_similarity(a, b);
        let structural = structural_similarity(a, b);
        let knn = knn_similarity(a, b, self.config.k);
        let combined = FEATURE_WEIGHT * feature + STRUCTURAL_WEIGHT * structural + KNN_WEIGHT * knn;

        trace!(
            feature,
            structural,
            knn,
            combined,
            k = self.config.k,
            vertices_a = a.len(),
            vertices_b = b.len(),
            "graphs compared"
        );

        SimilarityResult {
            combined,
            feature_similarity: feature,
            structural_similarity: structural,
            elapsed: timer.elapsed(),
        }
    }
}

/// One-shot comparison; `k == 0` is `Error::Config`.
pub fn calculate_similarity(a: &Graph, b: &Graph, k: usize) -> Result<SimilarityResult> {
    Ok(SimilarityDetector::with_k(k)?.compare(a, b))
}
