//! Command-line front end for the voxel-space renderer.
//!
//! Loads a height map, a color map and an optional sky box, then writes:
//! - a single PNG frame at the requested pose
//! - a looping GIF turntable
//! - a Motion-JPEG turntable

mod animation;
mod encode;
mod load;

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{ArgAction, Parser};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};
use voxels::{Camera, EdgePolicy, HeightMode, RenderConfig, VoxelRenderer};

#[derive(Parser, Debug)]
#[command(name = "voxels")]
#[command(about = "Render heightfield terrain voxel-space style")]
struct Args {
    /// X coordinate of the render viewpoint
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    x: f64,

    /// Y coordinate of the render viewpoint
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    y: f64,

    /// Z coordinate (eye height) of the render viewpoint
    #[arg(short, long, default_value_t = 120.0, allow_negative_numbers = true)]
    z: f64,

    /// Phi angle (heading, radians) of the render viewpoint
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    phi: f64,

    /// Render a single PNG frame
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    png: bool,

    /// Render a 360 degree GIF
    #[arg(long)]
    gif: bool,

    /// Render a 360 degree MJPEG
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    mjpeg: bool,

    /// Grayscale height map
    #[arg(long, env = "VOXELS_HEIGHT_MAP", default_value = "height_map.png")]
    height_map: PathBuf,

    /// Color map, same size as the height map
    #[arg(long, env = "VOXELS_COLOR_MAP", default_value = "color_map.png")]
    color_map: PathBuf,

    /// Sky background; a gradient is generated when omitted
    #[arg(long, env = "VOXELS_SKY_BOX")]
    sky_box: Option<PathBuf>,

    /// Directory for out.png / out.gif / out.mjpeg
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Output width in pixels
    #[arg(long, default_value_t = 800)]
    width: usize,

    /// Output height in pixels
    #[arg(long, default_value_t = 600)]
    height: usize,

    /// Screen row of the horizon
    #[arg(long, default_value_t = 180.0, allow_negative_numbers = true)]
    horizon: f64,

    /// Perspective height scale
    #[arg(long, default_value_t = 200.0)]
    height_scale: f64,

    /// Number of depth slices
    #[arg(long, env = "VOXELS_RENDER_DISTANCE", default_value_t = 200)]
    render_distance: usize,

    /// How many times the map is tiled on each axis
    #[arg(long, default_value_t = 3)]
    tile_factor: usize,

    /// Wrap sample coordinates instead of tiling the map
    #[arg(long)]
    wrap: bool,

    /// Nearest-neighbour map supersampling factor
    #[arg(long, default_value_t = 1)]
    upsample: usize,

    /// Subtract heights in 8-bit modular arithmetic
    #[arg(long)]
    wrapping_heights: bool,

    /// Heading step between GIF frames (radians)
    #[arg(long, default_value_t = 0.2)]
    gif_step: f64,

    /// Delay between GIF frames in milliseconds
    #[arg(long, default_value_t = 100)]
    gif_delay_ms: u32,

    /// Heading step between MJPEG frames (radians)
    #[arg(long, default_value_t = 0.1)]
    mjpeg_step: f64,

    /// JPEG quality for MJPEG frames
    #[arg(long, default_value_t = 90)]
    jpeg_quality: u8,

    /// Log level
    #[arg(long, env = "VOXELS_LOG", default_value = "info")]
    log_level: String,
}

impl Args {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            render_distance: self.render_distance,
            width: self.width,
            height: self.height,
            horizon: self.horizon,
            height_scale: self.height_scale,
            edge: if self.wrap {
                EdgePolicy::Wrap
            } else {
                EdgePolicy::Tile(self.tile_factor)
            },
            height_mode: if self.wrapping_heights {
                HeightMode::Wrapping
            } else {
                HeightMode::Signed
            },
        }
    }

    fn camera(&self) -> Camera {
        Camera::new(self.x, self.y, self.z, self.phi)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    fmt().with_env_filter(filter).with_target(true).with_level(true).init();

    info!("Voxels");

    info!("Loading height map");
    let height_map = load::load_image(&args.height_map)?;
    info!("Loading color map");
    let color_map = load::load_image(&args.color_map)?;
    let sky_box = match &args.sky_box {
        Some(path) => {
            info!("Loading sky box");
            Some(load::load_image(path)?)
        }
        None => None,
    };

    let mut terrain = load::terrain_from_images(&height_map, &color_map)?;
    if args.upsample != 1 {
        terrain = terrain.upsample(args.upsample)?;
        info!(factor = args.upsample, width = terrain.width(), height = terrain.height(), "upsampled map");
    }

    info!("Initializing renderer");
    let config = args.render_config();
    let sky = load::sky_background(sky_box.as_ref(), config.width, config.height);
    let renderer = VoxelRenderer::new(terrain, sky, config)?;

    let camera = args.camera();
    if !renderer.covers(&camera) {
        bail!(
            "camera ({}, {}) is too close to the edge of the tiled map for render distance {}; \
             move it toward the origin, raise --tile-factor or pass --wrap",
            camera.x,
            camera.y,
            args.render_distance
        );
    }

    if args.png {
        let frame = renderer.render(&camera);
        encode::save_png(&args.out_dir.join("out.png"), frame.as_image())?;
    }

    if args.gif {
        let frames = animation::render_turntable(&renderer, camera, args.gif_step)?;
        encode::save_gif(&args.out_dir.join("out.gif"), &frames, args.gif_delay_ms)?;
    }

    if args.mjpeg {
        let frames = animation::render_turntable(&renderer, camera, args.mjpeg_step)?;
        encode::save_mjpeg(&args.out_dir.join("out.mjpeg"), &frames, args.jpeg_quality)?;
    }

    Ok(())
}
