// Image files -> RGBA channel buffers. EXIF orientation is applied so the
// grid comes out upright.

use std::path::Path;

use image::imageops::FilterType;
use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageReader};

use crate::color::{ChannelBuffer, DEFAULT_CHANNELS};
use crate::error::{Error, Result};

fn load_image_with_orientation(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)?;
    let mut decoder = reader
        .with_guessed_format()?
        .into_decoder()
        .map_err(|e| Error::Image(e.to_string()))?;
    let orientation = decoder.orientation().unwrap_or(Orientation::NoTransforms);
    let mut img = DynamicImage::from_decoder(decoder).map_err(|e| Error::Image(e.to_string()))?;
    img.apply_orientation(orientation);
    Ok(img)
}

/// Shrinks `img` so it is at most `max_width` wide, keeping the aspect ratio.
/// Never upscales.
fn fit_width(img: DynamicImage, max_width: Option<u32>) -> DynamicImage {
    let Some(max_width) = max_width else {
        return img;
    };
    let (w, h) = (img.width(), img.height());
    if w <= max_width || w == 0 {
        return img;
    }
    let target_h = ((u64::from(h) * u64::from(max_width)) / u64::from(w)).max(1) as u32;
    log::info!("downscaling {w}x{h} -> {max_width}x{target_h}");
    img.resize_exact(max_width, target_h, FilterType::Nearest)
}

/// Converts an in-memory image into an RGBA [`ChannelBuffer`].
pub fn channel_buffer_from_image(img: DynamicImage, max_width: Option<u32>) -> ChannelBuffer {
    let rgba = fit_width(img, max_width).to_rgba8();
    let (width, height) = (rgba.width() as usize, rgba.height() as usize);
    ChannelBuffer {
        data: rgba.into_raw(),
        width,
        height,
        channels: DEFAULT_CHANNELS,
    }
}

/// Decodes the image at `path` into an RGBA [`ChannelBuffer`].
pub fn load_channel_buffer(path: &Path, max_width: Option<u32>) -> Result<ChannelBuffer> {
    let img = load_image_with_orientation(path)?;
    let buffer = channel_buffer_from_image(img, max_width);
    log::debug!(
        "loaded {} as {}x{} ({} values)",
        path.display(),
        buffer.width,
        buffer.height,
        buffer.data.len()
    );
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn checker(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        }))
    }

    #[test]
    fn keeps_small_images_as_is() {
        let buffer = channel_buffer_from_image(checker(3, 2), Some(64));
        assert_eq!((buffer.width, buffer.height), (3, 2));
        assert_eq!(&buffer.data[..8], &[0, 0, 0, 255, 255, 255, 255, 255]);
        buffer.validate().unwrap();
    }

    #[test]
    fn downscales_wide_images() {
        let buffer = channel_buffer_from_image(checker(100, 50), Some(10));
        assert_eq!((buffer.width, buffer.height), (10, 5));
        buffer.validate().unwrap();
    }

    #[test]
    fn loads_png_from_disk() {
        let path = std::env::temp_dir().join(format!("swatchline-{}.png", std::process::id()));
        checker(4, 4).save(&path).unwrap();
        let buffer = load_channel_buffer(&path, None).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!((buffer.width, buffer.height, buffer.channels), (4, 4, 4));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_channel_buffer(Path::new("/nonexistent/swatch.png"), None).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
