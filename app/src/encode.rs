use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use image::codecs::gif::{GifEncoder, Repeat};
use image::codecs::jpeg::JpegEncoder;
use image::{Delay, DynamicImage, Frame, ImageFormat, RgbImage};
use tracing::{debug, info};

pub fn save_png(path: &Path, image: &RgbImage) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("cannot save output file {}", path.display()))?;
    info!(path = %path.display(), "saved png");
    Ok(())
}

pub fn save_gif(path: &Path, frames: &[RgbImage], delay_ms: u32) -> Result<()> {
    let mut out = create(path)?;
    write_gif(&mut out, frames, delay_ms)?;
    out.flush()?;
    info!(path = %path.display(), frames = frames.len(), "saved gif");
    Ok(())
}

pub fn save_mjpeg(path: &Path, frames: &[RgbImage], quality: u8) -> Result<()> {
    let mut out = create(path)?;
    write_mjpeg(&mut out, frames, quality)?;
    out.flush()?;
    info!(path = %path.display(), frames = frames.len(), "saved mjpeg");
    Ok(())
}

// Looping animated GIF, every frame shown for `delay_ms`
pub fn write_gif<W: Write>(writer: W, frames: &[RgbImage], delay_ms: u32) -> Result<()> {
    let mut encoder = GifEncoder::new(writer);
    encoder.set_repeat(Repeat::Infinite)?;
    let delay = Delay::from_numer_denom_ms(delay_ms, 1);
    for (count, img) in frames.iter().enumerate() {
        debug!(frame = count, "quantizing frame");
        let rgba = DynamicImage::ImageRgb8(img.clone()).into_rgba8();
        encoder
            .encode_frame(Frame::from_parts(rgba, 0, 0, delay))
            .with_context(|| format!("cannot encode gif frame {count}"))?;
    }
    Ok(())
}

// Raw Motion-JPEG stream: complete JPEG images back to back
pub fn write_mjpeg<W: Write>(mut writer: W, frames: &[RgbImage], quality: u8) -> Result<()> {
    for (count, img) in frames.iter().enumerate() {
        let mut encoder = JpegEncoder::new_with_quality(&mut writer, quality);
        encoder
            .encode_image(img)
            .with_context(|| format!("cannot encode frame {count} into jpeg"))?;
    }
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).with_context(|| format!("cannot create output file {}", path.display()))?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::{save_png, write_gif, write_mjpeg};
    use image::codecs::gif::GifDecoder;
    use image::{AnimationDecoder, Rgb, RgbImage};
    use std::io::Cursor;

    fn frames() -> Vec<RgbImage> {
        (0..3u8)
            .map(|i| RgbImage::from_pixel(8, 6, Rgb([i * 80, 40, 200 - i * 50])))
            .collect()
    }

    #[test]
    fn gif_holds_every_frame() {
        let mut buf = Vec::new();
        write_gif(&mut buf, &frames(), 100).unwrap();
        assert!(buf.starts_with(b"GIF89a"));

        let decoded = GifDecoder::new(Cursor::new(buf))
            .unwrap()
            .into_frames()
            .collect_frames()
            .unwrap();
        assert_eq!(decoded.len(), 3);
    }

    #[test]
    fn mjpeg_is_concatenated_jpegs() {
        let mut buf = Vec::new();
        write_mjpeg(&mut buf, &frames(), 90).unwrap();
        assert_eq!(&buf[..2], &[0xFF, 0xD8]);
        // end-of-image markers never occur inside entropy-coded data
        let eoi = buf.windows(2).filter(|w| w[0] == 0xFF && w[1] == 0xD9).count();
        assert_eq!(eoi, 3);
        assert!(buf.ends_with(&[0xFF, 0xD9]));
    }

    #[test]
    fn png_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let img = frames().remove(1);
        save_png(&path, &img).unwrap();
        assert_eq!(image::open(&path).unwrap().to_rgb8(), img);
    }
}
