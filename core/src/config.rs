use image::Rgb;

use crate::error::{Result, VoxelError};

// Sky fill used when no sky box image is supplied
pub const SKY_BLUE: Rgb<u8> = Rgb([0, 0, 255]);
// Top and bottom of the generated gradient sky
pub const SKY_ZENITH: Rgb<u8> = Rgb([40, 90, 200]);
pub const SKY_HAZE: Rgb<u8> = Rgb([190, 215, 240]);

// How world coordinates are brought into the field before sampling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgePolicy {
    // modulo on every sample
    Wrap,
    // pre-tile the terrain factor x factor times and index directly.
    // World (0, 0) sits at the corner of tile `factor / 2`, so a W-wide map
    // covers world x in [-(factor / 2) * W, (factor - factor / 2) * W).
    // Factor 1 leaves no room below 0: cameras need positive coordinates at
    // least render_distance * sqrt(2) inside the map. Check `covers` first.
    Tile(usize),
}

// How `camera height - terrain height` is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeightMode {
    // wide signed arithmetic, terrain above the eye goes negative
    #[default]
    Signed,
    // 8-bit modular subtraction, terrain above the eye wraps to a large positive value
    Wrapping,
}

impl HeightMode {
    #[inline]
    pub fn difference(self, eye: f64, terrain: u8) -> f64 {
        match self {
            HeightMode::Signed => eye - terrain as f64,
            HeightMode::Wrapping => (eye as u8).wrapping_sub(terrain) as f64,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub render_distance: usize, // number of depth slices, farthest first
    pub width: usize,           // raster width in pixels
    pub height: usize,          // raster height in pixels
    pub horizon: f64,           // screen row of zero height difference
    pub height_scale: f64,      // perspective steepness
    pub edge: EdgePolicy,
    pub height_mode: HeightMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            render_distance: 200,
            width: 800,
            height: 600,
            horizon: 180.0,
            height_scale: 200.0,
            edge: EdgePolicy::Tile(3),
            height_mode: HeightMode::Signed,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(VoxelError::EmptyRaster {
                width: self.width,
                height: self.height,
            });
        }
        if self.render_distance < 2 {
            return Err(VoxelError::RenderDistance(self.render_distance));
        }
        if !(self.height_scale.is_finite() && self.height_scale > 0.0) {
            return Err(VoxelError::HeightScale(self.height_scale));
        }
        if !self.horizon.is_finite() {
            return Err(VoxelError::Horizon(self.horizon));
        }
        if self.edge == EdgePolicy::Tile(0) {
            return Err(VoxelError::ZeroFactor { what: "tile" });
        }
        Ok(())
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.width, self.height)
    }
}
