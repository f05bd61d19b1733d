use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::RgbaImage;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use tracing::info;

use crate::error::Result;

/// Encode `img` as PNG at `output`, overwriting any existing file.
///
/// Best compression plus adaptive row filtering keeps the files as small as
/// the codec allows without leaving lossless territory.
pub fn write_optimized_png(output: &Path, img: &RgbaImage) -> Result<()> {
    let file = File::create(output)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, CompressionType::Best, FilterType::Adaptive);
    img.write_with_encoder(encoder)?;
    info!("PNG saved: {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn written_png_decodes_back_with_same_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.png");
        let img = RgbaImage::from_pixel(96, 96, image::Rgba([10, 20, 30, 255]));

        write_optimized_png(&output, &img).unwrap();

        let decoded = image::open(&output).unwrap();
        assert_eq!(decoded.width(), 96);
        assert_eq!(decoded.height(), 96);
    }

    #[test]
    fn unwritable_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("no-such-subdir").join("out.png");
        let img = RgbaImage::new(8, 8);
        assert!(write_optimized_png(&output, &img).is_err());
    }
}
