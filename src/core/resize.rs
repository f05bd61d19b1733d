use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::{DynamicImage, RgbaImage};
use tracing::info;

use crate::error::{Error, Result};

/// Resample `img` to a square `target`x`target` RGBA buffer.
///
/// Uses a Lanczos3 convolution filter, which minimizes aliasing on downscale
/// and stays smooth on upscale. The source is converted to RGBA8 first so
/// logos with transparency keep their alpha channel.
pub fn resize_to_square(img: &DynamicImage, target: u32) -> Result<RgbaImage> {
    if target == 0 {
        return Err(Error::ZeroSize { size: target });
    }

    let rgba = img.to_rgba8();
    let (width, height) = (rgba.width(), rgba.height());
    info!("Resizing {}x{} -> {}x{}", width, height, target, target);

    let src_image = Image::from_vec_u8(width, height, rgba.into_raw(), PixelType::U8x4)?;
    let mut dst_image = Image::new(target, target, PixelType::U8x4);

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    RgbaImage::from_raw(target, target, dst_image.into_vec())
        .ok_or_else(|| Error::Processing("failed to convert resized pixel buffer".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downscale_hits_exact_dimensions() {
        let img = DynamicImage::new_rgba8(512, 512);
        let resized = resize_to_square(&img, 96).unwrap();
        assert_eq!(resized.width(), 96);
        assert_eq!(resized.height(), 96);
    }

    #[test]
    fn upscale_hits_exact_dimensions() {
        let img = DynamicImage::new_rgba8(64, 64);
        let resized = resize_to_square(&img, 384).unwrap();
        assert_eq!(resized.width(), 384);
        assert_eq!(resized.height(), 384);
    }

    #[test]
    fn non_square_source_still_produces_square_output() {
        let img = DynamicImage::new_rgb8(640, 480);
        let resized = resize_to_square(&img, 128).unwrap();
        assert_eq!(resized.dimensions(), (128, 128));
    }

    #[test]
    fn zero_size_is_rejected() {
        let img = DynamicImage::new_rgba8(16, 16);
        match resize_to_square(&img, 0).unwrap_err() {
            Error::ZeroSize { size } => assert_eq!(size, 0),
            other => panic!("expected ZeroSize, got {other}"),
        }
    }
}
