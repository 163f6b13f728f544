//! Region-grid builder: turns an RGB raster into a region graph.
//!
//! The raster is tiled into `region_size`-pixel squares (partial squares at
//! the right and bottom edges). Each square becomes a vertex:
//!
//! - id `"x,y"` of its top-left pixel, coordinates `(x, y)`;
//! - features = mean `[r, g, b]` over its pixels;
//! - obstacle when the share of dark pixels exceeds `obstacle_ratio`.
//!
//! 4-adjacent squares are joined once by an undirected edge weighted
//! `distance · (1 + feature_distance)`, so crossing a colour boundary
//! costs more than staying inside a uniform area. Two adjacent obstacles
//! are left unconnected.
//!
//! Decoding an image file into a [`RasterSource`] is the caller's job.

use tracing::debug;

use crate::config::RegionGridConfig;
use crate::model::Graph;
use crate::{Error, Result};

/// Read access to decoded pixels.
pub trait RasterSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Pixel at `(x, y)`; callers stay within `width × height`.
    fn rgb(&self, x: u32, y: u32) -> [u8; 3];
}

/// Row-major in-memory raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbRaster {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl RgbRaster {
    /// Fails with `Error::Config` if `pixels.len() != width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<[u8; 3]>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::Config(format!(
                "raster {width}x{height} needs {expected} pixels, got {}",
                pixels.len()
            )));
        }
        Ok(Self { width, height, pixels })
    }

    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        Self {
            width,
            height,
            pixels: vec![rgb; width as usize * height as usize],
        }
    }

    /// Overwrites one pixel. Out-of-range coordinates are ignored.
    pub fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.pixels[idx] = rgb;
        }
    }

    /// Fills the axis-aligned rectangle `[x0, x1) × [y0, y1)`, clipped to the raster.
    pub fn fill_rect(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, rgb: [u8; 3]) {
        for y in y0..y1.min(self.height) {
            for x in x0..x1.min(self.width) {
                self.set(x, y, rgb);
            }
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl RasterSource for RgbRaster {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[self.index(x, y)]
    }
}

/// Vertex id of the region whose top-left pixel is `(x, y)`.
pub fn region_id(x: u32, y: u32) -> String {
    format!("{x},{y}")
}

/// Pixel statistics of one region.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RegionStats {
    mean: [f64; 3],
    dark_ratio: f64,
}

impl RegionStats {
    fn measure<S: RasterSource + ?Sized>(source: &S, x0: u32, y0: u32, config: &RegionGridConfig) -> Self {
        let x1 = x0.saturating_add(config.region_size).min(source.width());
        let y1 = y0.saturating_add(config.region_size).min(source.height());

        let mut sums = [0u64; 3];
        let mut dark = 0u64;
        let mut count = 0u64;
        for y in y0..y1 {
            for x in x0..x1 {
                let px = source.rgb(x, y);
                for (sum, channel) in sums.iter_mut().zip(px) {
                    *sum += u64::from(channel);
                }
                let intensity = (u32::from(px[0]) + u32::from(px[1]) + u32::from(px[2])) / 3;
                if intensity < u32::from(config.dark_threshold) {
                    dark += 1;
                }
                count += 1;
            }
        }

        if count == 0 {
            return Self { mean: [0.0; 3], dark_ratio: 0.0 };
        }
        let n = count as f64;
        Self {
            mean: sums.map(|s| s as f64 / n),
            dark_ratio: dark as f64 / n,
        }
    }
}

/// Builds a weighted, undirected region graph from `source`.
pub fn build_region_graph<S: RasterSource + ?Sized>(
    source: &S,
    config: &RegionGridConfig,
) -> Result<Graph> {
    config.validate()?;

    let (width, height) = (source.width(), source.height());
    let step = config.region_size as usize;
    let mut graph = Graph::weighted_undirected();
    let mut obstacles = 0usize;

    for y in (0..height).step_by(step) {
        for x in (0..width).step_by(step) {
            let stats = RegionStats::measure(source, x, y, config);
            let obstacle = stats.dark_ratio > config.obstacle_ratio;
            obstacles += usize::from(obstacle);

            graph
                .add_vertex(region_id(x, y), coordinate(x)?, coordinate(y)?)
                .set_features(stats.mean.to_vec())
                .set_obstacle(obstacle);
        }
    }

    for y in (0..height).step_by(step) {
        for x in (0..width).step_by(step) {
            let from = region_id(x, y);
            if let Some(right) = x.checked_add(config.region_size).filter(|&nx| nx < width) {
                connect(&mut graph, &from, &region_id(right, y))?;
            }
            if let Some(below) = y.checked_add(config.region_size).filter(|&ny| ny < height) {
                connect(&mut graph, &from, &region_id(x, below))?;
            }
        }
    }

    debug!(
        width,
        height,
        region_size = config.region_size,
        regions = graph.len(),
        obstacles,
        edges = graph.edge_count(),
        "region graph built"
    );

    Ok(graph)
}

fn coordinate(value: u32) -> Result<i32> {
    i32::try_from(value).map_err(|_| Error::Config(format!("coordinate {value} exceeds i32 range")))
}

fn connect(graph: &mut Graph, a: &str, b: &str) -> Result<()> {
    let (Some(va), Some(vb)) = (graph.vertex(a), graph.vertex(b)) else {
        return Ok(());
    };
    if va.obstacle && vb.obstacle {
        return Ok(());
    }
    let weight = va.distance_to(vb) * (1.0 + va.feature_distance(vb));
    graph.add_edge(a, b, weight)
}
