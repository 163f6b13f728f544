//! Engine configuration.
//!
//! Every struct here is plain data with builder-style setters and derives
//! serde, so a host application can load it from whatever format it uses.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ============================================================================
// Graph
// ============================================================================

/// Construction flags of a [`Graph`](crate::Graph). Fixed for the graph's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// When false, every inserted edge weight is coerced to `1.0`.
    pub weighted: bool,
    /// When false, `add_edge` inserts the edge in both directions.
    pub directed: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { weighted: true, directed: true }
    }
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    pub fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }
}

// ============================================================================
// Similarity
// ============================================================================

/// Settings for [`SimilarityDetector`](crate::SimilarityDetector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Neighbours considered per vertex by the kNN metric. Must be at least 1.
    pub k: usize,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self { k: 3 }
    }
}

impl SimilarityConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// `validate` reports `k == 0`.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(Error::Config("k must be at least 1".into()));
        }
        Ok(())
    }
}

// ============================================================================
// Region grid
// ============================================================================

/// Settings for [`build_region_graph`](crate::builder::build_region_graph).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionGridConfig {
    /// Side length of a square region, in pixels.
    pub region_size: u32,
    /// Mean channel intensity below which a pixel counts as dark.
    pub dark_threshold: u8,
    /// Fraction of dark pixels above which a region is an obstacle.
    pub obstacle_ratio: f64,
}

impl Default for RegionGridConfig {
    fn default() -> Self {
        Self {
            region_size: 10,
            dark_threshold: 50,
            obstacle_ratio: 0.7,
        }
    }
}

impl RegionGridConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region_size(mut self, size: u32) -> Self {
        self.region_size = size;
        self
    }

    pub fn with_dark_threshold(mut self, threshold: u8) -> Self {
        self.dark_threshold = threshold;
        self
    }

    pub fn with_obstacle_ratio(mut self, ratio: f64) -> Self {
        self.obstacle_ratio = ratio;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.region_size == 0 {
            return Err(Error::Config("region_size must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.obstacle_ratio) {
            return Err(Error::Config(format!(
                "obstacle_ratio must be within [0, 1], got {}",
                self.obstacle_ratio
            )));
        }
        Ok(())
    }
}
