use std::path::Path;

use image::Rgb;
use voxels::config::{SKY_HAZE, SKY_ZENITH};
use voxels::{Camera, RenderConfig, SampleField, Terrain, VoxelRenderer, sky};

// Banded terrain color by elevation
fn shade(h: u8) -> Rgb<u8> {
    match h {
        0..=60 => Rgb([30, 70, 160]),   // water
        61..=80 => Rgb([200, 185, 130]), // sand
        81..=170 => Rgb([40, 130 + h / 4, 50]),
        171..=210 => Rgb([120, 110, 100]), // rock
        _ => Rgb([240, 240, 240]),         // snow
    }
}

fn main() {
    let size = 512;
    let heights = SampleField::from_fn(size, size, |x, y| {
        let fx = x as f64 / size as f64 * std::f64::consts::TAU;
        let fy = y as f64 / size as f64 * std::f64::consts::TAU;
        let ridge = (fx * 2.0).sin() * (fy * 3.0).cos() * 80.0;
        let ripple = (fx * 9.0 + fy * 7.0).sin() * 15.0;
        (ridge + ripple + 120.0).clamp(0.0, 255.0) as u8
    })
    .unwrap();
    let colors = SampleField::from_fn(size, size, |x, y| shade(heights.get(x, y))).unwrap();
    let terrain = Terrain::new(heights, colors).unwrap();

    let config = RenderConfig::default();
    let background = sky::gradient(config.width, config.height, SKY_ZENITH, SKY_HAZE);
    let renderer = VoxelRenderer::new(terrain, background, config).unwrap();

    let frame = renderer.render(&Camera::new(0.0, 0.0, 180.0, 0.6));

    let path = Path::new("synthetic_flyover.png");
    frame.into_image().save(path).unwrap();
    println!("Saved voxel render to {:?}", path);
}
