use std::path::Path;

use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};
use tracing::{debug, info};
use voxels::config::{SKY_HAZE, SKY_ZENITH};
use voxels::{SampleField, Terrain, sky};

pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let img = image::open(path).with_context(|| format!("failed to load image {}", path.display()))?;
    info!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        "loaded image"
    );
    Ok(img)
}

// Height map is read as 8-bit luminance, color map as 8-bit RGB
pub fn terrain_from_images(height_map: &DynamicImage, color_map: &DynamicImage) -> Result<Terrain> {
    let heights = height_map.to_luma8();
    let (hw, hh) = heights.dimensions();
    let heights = SampleField::new(hw as usize, hh as usize, heights.into_raw())?;

    let colors = color_map.to_rgb8();
    let (cw, ch) = colors.dimensions();
    let colors = SampleField::new(cw as usize, ch as usize, colors.pixels().copied().collect())?;

    debug!(first_height = heights.get(0, 0), first_color = ?colors.get(0, 0), "decoded terrain");
    Ok(Terrain::new(heights, colors)?)
}

// Sky box scaled to the raster, or a generated gradient when there is none
pub fn sky_background(sky_box: Option<&DynamicImage>, width: usize, height: usize) -> RgbImage {
    match sky_box {
        Some(img) => {
            let rgb = img.to_rgb8();
            let raster = (width as u32, height as u32);
            if rgb.dimensions() == raster {
                rgb
            } else {
                debug!(from = ?rgb.dimensions(), to = ?raster, "resizing sky box");
                imageops::resize(&rgb, raster.0, raster.1, FilterType::Triangle)
            }
        }
        None => sky::gradient(width, height, SKY_ZENITH, SKY_HAZE),
    }
}
