use image::{Rgb, RgbImage};

// Output raster of one render call
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    image: RgbImage,
}

impl Framebuffer {
    // Start a frame from a copy of the sky background
    pub fn from_sky(sky: &RgbImage) -> Self {
        Self { image: sky.clone() }
    }

    pub fn width(&self) -> usize {
        self.image.width() as usize
    }

    pub fn height(&self) -> usize {
        self.image.height() as usize
    }

    pub fn pixel(&self, x: usize, y: usize) -> Rgb<u8> {
        *self.image.get_pixel(x as u32, y as u32)
    }

    // Paint column `x` from row `top` down to the bottom edge.
    // A negative top paints the whole column, a top past the bottom paints nothing.
    pub fn fill_column(&mut self, x: usize, top: i64, color: Rgb<u8>) {
        let height = self.image.height();
        let start = top.clamp(0, height as i64) as u32;
        for y in start..height {
            self.image.put_pixel(x as u32, y, color);
        }
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }
}
