use std::f64::consts::TAU;

use anyhow::{Result, ensure};
use image::RgbImage;
use rayon::prelude::*;
use tracing::info;
use voxels::{Camera, VoxelRenderer};

// Headings 0, step, 2 * step, ... short of one full turn
pub fn turntable_headings(step: f64) -> Result<Vec<f64>> {
    ensure!(
        step.is_finite() && step > 0.0,
        "heading step must be positive, got {step}"
    );
    Ok((0u32..)
        .map(|i| i as f64 * step)
        .take_while(|angle| *angle < TAU)
        .collect())
}

// Spin the camera in place, one frame per heading.
// Frames render in parallel against the shared renderer and come back in heading order.
pub fn render_turntable(renderer: &VoxelRenderer, camera: Camera, step: f64) -> Result<Vec<RgbImage>> {
    let headings = turntable_headings(step)?;
    info!(frames = headings.len(), step, "rendering turntable");

    let frames = headings
        .par_iter()
        .map(|&heading| {
            let frame = renderer.render(&camera.with_heading(heading));
            info!(angle = heading, "render complete");
            frame.into_image()
        })
        .collect();
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::{render_turntable, turntable_headings};
    use image::Rgb;
    use voxels::{Camera, EdgePolicy, RenderConfig, SKY_BLUE, SampleField, Terrain, VoxelRenderer};

    #[test]
    fn heading_counts_match_step() {
        assert_eq!(turntable_headings(0.2).unwrap().len(), 32);
        assert_eq!(turntable_headings(0.1).unwrap().len(), 63);
        assert_eq!(turntable_headings(10.0).unwrap(), vec![0.0]);
    }

    #[test]
    fn bad_step_is_an_error() {
        assert!(turntable_headings(0.0).is_err());
        assert!(turntable_headings(-0.1).is_err());
        assert!(turntable_headings(f64::NAN).is_err());
    }

    #[test]
    fn turntable_frames_come_back_in_order() {
        let heights = SampleField::from_fn(32, 32, |x, y| ((x * 5 + y * 3) % 90) as u8).unwrap();
        let colors = SampleField::from_fn(32, 32, |x, y| Rgb([x as u8 * 8, y as u8 * 8, 0])).unwrap();
        let cfg = RenderConfig {
            render_distance: 20,
            width: 24,
            height: 16,
            horizon: 5.0,
            height_scale: 10.0,
            edge: EdgePolicy::Wrap,
            ..RenderConfig::default()
        };
        let renderer =
            VoxelRenderer::with_sky_color(Terrain::new(heights, colors).unwrap(), SKY_BLUE, cfg).unwrap();
        let camera = Camera::new(4.5, 9.5, 100.0, 0.0);

        let frames = render_turntable(&renderer, camera, 1.0).unwrap();
        assert_eq!(frames.len(), 7);
        for (i, frame) in frames.iter().enumerate() {
            let expected = renderer.render(&camera.with_heading(i as f64));
            assert_eq!(frame, expected.as_image());
        }
    }
}
