use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbImage;
use tracing::info;

use crate::error::{Error, Result};

/// Stretch an RGB image so both dimensions equal the longer side. This
/// changes the aspect ratio slightly; callers gate it on the square
/// threshold. An already-square image is returned as-is.
pub fn stretch_to_square(rgb: &RgbImage) -> Result<RgbImage> {
    let (width, height) = rgb.dimensions();
    if width == height {
        return Ok(rgb.clone());
    }
    let side = width.max(height);

    info!("Stretching {}x{} to {}x{}", width, height, side, side);

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(width, height, rgb.as_raw().clone(), PixelType::U8x3)
        .map_err(|e| Error::Resize(e.to_string()))?;
    let mut dst_image = Image::new(side, side, PixelType::U8x3);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(|e| Error::Resize(e.to_string()))?;

    RgbImage::from_raw(side, side, dst_image.into_vec())
        .ok_or_else(|| Error::Processing("stretched buffer has unexpected size".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn stretches_shorter_dimension_up() {
        let rgb = RgbImage::from_pixel(120, 100, Rgb([200, 10, 10]));
        let out = stretch_to_square(&rgb).unwrap();
        assert_eq!(out.dimensions(), (120, 120));
    }

    #[test]
    fn tall_image_widens() {
        let rgb = RgbImage::from_pixel(100, 130, Rgb([30, 30, 30]));
        let out = stretch_to_square(&rgb).unwrap();
        assert_eq!(out.dimensions(), (130, 130));
    }

    #[test]
    fn square_input_is_identity() {
        let rgb = RgbImage::from_pixel(64, 64, Rgb([1, 2, 3]));
        let out = stretch_to_square(&rgb).unwrap();
        assert_eq!(out, rgb);
    }
}
