use std::f64::consts::SQRT_2;

use image::{Rgb, RgbImage};
use tracing::{debug, trace};

use crate::camera::Camera;
use crate::config::{EdgePolicy, RenderConfig};
use crate::error::{Result, VoxelError};
use crate::field::Terrain;
use crate::framebuffer::Framebuffer;
use crate::sky;

// Voxel-space terrain renderer.
//
// Sweeps depth slices from the render distance down to 2, projects one
// terrain sample per screen column and fills that column from the projected
// row to the bottom. Nearer slices are drawn last, so they paint over farther
// ones and no depth buffer is needed.
#[derive(Debug, Clone)]
pub struct VoxelRenderer {
    terrain: Terrain,
    sky: RgbImage,
    config: RenderConfig,
    origin: (f64, f64), // world (0, 0) inside `terrain`, non-zero only when tiled
}

impl VoxelRenderer {
    pub fn new(terrain: Terrain, sky: RgbImage, config: RenderConfig) -> Result<Self> {
        config.validate()?;

        let sky_dims = (sky.width() as usize, sky.height() as usize);
        if sky_dims != config.dims() {
            return Err(VoxelError::SkyMismatch {
                expected: config.dims(),
                actual: sky_dims,
            });
        }

        let (tile_w, tile_h) = (terrain.width(), terrain.height());
        let (terrain, origin) = match config.edge {
            EdgePolicy::Wrap => (terrain, (0.0, 0.0)),
            EdgePolicy::Tile(factor) => {
                // put the origin tile in the middle so the camera can roam both ways
                let centre = (factor / 2) as f64;
                (
                    terrain.tile(factor)?,
                    (centre * tile_w as f64, centre * tile_h as f64),
                )
            }
        };

        debug!(
            map_width = tile_w,
            map_height = tile_h,
            sampled_width = terrain.width(),
            sampled_height = terrain.height(),
            raster_width = config.width,
            raster_height = config.height,
            render_distance = config.render_distance,
            edge = ?config.edge,
            height_mode = ?config.height_mode,
            "voxel renderer ready"
        );

        Ok(Self {
            terrain,
            sky,
            config,
            origin,
        })
    }

    // Same as `new` with a single-color sky
    pub fn with_sky_color(terrain: Terrain, color: Rgb<u8>, config: RenderConfig) -> Result<Self> {
        let background = sky::solid(config.width, config.height, color);
        Self::new(terrain, background, config)
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    // The terrain actually sampled (the tiled copy under `EdgePolicy::Tile`)
    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    // Whether a render from `camera` keeps every sample inside the sampled terrain.
    // Always true with wrapping. With tiling the camera must stay at least
    // render_distance * sqrt(2) away from the edges of the tiled grid.
    pub fn covers(&self, camera: &Camera) -> bool {
        match self.config.edge {
            EdgePolicy::Wrap => true,
            EdgePolicy::Tile(_) => {
                let reach = self.config.render_distance as f64 * SQRT_2;
                let x = camera.x + self.origin.0;
                let y = camera.y + self.origin.1;
                x - reach >= 0.0
                    && y - reach >= 0.0
                    && x + reach < self.terrain.width() as f64
                    && y + reach < self.terrain.height() as f64
            }
        }
    }

    pub fn render_at(&self, x: f64, y: f64, height: f64, heading: f64) -> Framebuffer {
        self.render(&Camera::new(x, y, height, heading))
    }

    pub fn render(&self, camera: &Camera) -> Framebuffer {
        let mut frame = Framebuffer::from_sky(&self.sky);

        let (sin_phi, cos_phi) = camera.heading.sin_cos();
        let columns = self.config.width;
        let cx = camera.x + self.origin.0;
        let cy = camera.y + self.origin.1;

        debug!(
            x = camera.x,
            y = camera.y,
            height = camera.height,
            heading = camera.heading,
            slices = self.config.render_distance - 1,
            "rendering frame"
        );

        for z in (2..=self.config.render_distance).rev() {
            let depth = z as f64;

            // ends of the view segment at this depth: the (-1, -1) and (1, -1)
            // corners of the view cone scaled by z, rotated by the heading
            let mut left_x = (-cos_phi - sin_phi) * depth + cx;
            let mut left_y = (sin_phi - cos_phi) * depth + cy;
            let right_x = (cos_phi - sin_phi) * depth + cx;
            let right_y = (-sin_phi - cos_phi) * depth + cy;

            let dx = (right_x - left_x) / columns as f64;
            let dy = (right_y - left_y) / columns as f64;

            trace!(z, left_x, left_y, right_x, right_y, "depth slice");

            for column in 0..columns {
                let (elevation, color) = self.sample(left_x, left_y);
                let rise = self.config.height_mode.difference(camera.height, elevation);
                let screen_y = rise / depth * self.config.height_scale + self.config.horizon;

                frame.fill_column(column, screen_y.floor() as i64, color);

                left_x += dx;
                left_y += dy;
            }
        }

        frame
    }

    #[inline]
    fn sample(&self, x: f64, y: f64) -> (u8, Rgb<u8>) {
        match self.config.edge {
            EdgePolicy::Wrap => (self.terrain.height_at(x, y), self.terrain.color_at(x, y)),
            EdgePolicy::Tile(_) => {
                let ix = x.floor() as i64;
                let iy = y.floor() as i64;
                assert!(
                    ix >= 0 && iy >= 0,
                    "sample ({x}, {y}) left the tiled terrain"
                );
                let (ix, iy) = (ix as usize, iy as usize);
                (
                    self.terrain.heights().get(ix, iy),
                    self.terrain.colors().get(ix, iy),
                )
            }
        }
    }
}
