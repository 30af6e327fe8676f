use image::{Rgb, RgbImage};
use palette::{Gradient, LinSrgb};

// Background with one color everywhere
pub fn solid(width: usize, height: usize, color: Rgb<u8>) -> RgbImage {
    RgbImage::from_pixel(width as u32, height as u32, color)
}

// Vertical gradient from `top` (row 0) to `bottom` (last row), blended in linear RGB
pub fn gradient(width: usize, height: usize, top: Rgb<u8>, bottom: Rgb<u8>) -> RgbImage {
    let ramp = Gradient::with_domain(vec![(0.0, to_linear(top)), (1.0, to_linear(bottom))]);
    let last_row = height.saturating_sub(1).max(1) as f32;

    let mut img = RgbImage::new(width as u32, height as u32);
    for y in 0..height {
        let col: LinSrgb = ramp.get(y as f32 / last_row);
        let rgb = col.into_format::<u8>();
        let pixel = Rgb([rgb.red, rgb.green, rgb.blue]);
        for x in 0..width {
            img.put_pixel(x as u32, y as u32, pixel);
        }
    }
    img
}

fn to_linear(c: Rgb<u8>) -> LinSrgb {
    LinSrgb::new(
        c[0] as f32 / 255.0,
        c[1] as f32 / 255.0,
        c[2] as f32 / 255.0,
    )
}
