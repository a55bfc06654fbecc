use std::path::Path;

use image::RgbImage;
use tracing::{debug, info};

use crate::core::params::NormalizeParams;
use crate::core::processing::padding::pad_to_square;
use crate::core::processing::resize::stretch_to_square;
use crate::error::{Error, Result};
use crate::types::SquarePolicy;

/// Normalize a single raster image onto a square canvas.
///
/// Decodes `input`, decides pad-vs-policy on the width/height difference,
/// and encodes the result to `output` in the codec implied by its file
/// extension. A difference strictly greater than the threshold pads onto a
/// black canvas with centered, floor-divided offsets; anything at or below
/// it falls to the configured [`SquarePolicy`].
pub fn normalize_to_square(input: &Path, output: &Path, params: &NormalizeParams) -> Result<()> {
    let decoded = image::open(input).map_err(Error::Decode)?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    let diff = width.abs_diff(height);
    debug!("{:?}: {}x{}, diff={}", input, width, height, diff);

    let normalized = if diff > params.threshold {
        let (padded, side) = pad_to_square(rgb.as_raw(), width as usize, height as usize);
        RgbImage::from_raw(side as u32, side as u32, padded)
            .ok_or_else(|| Error::Processing("padded buffer has unexpected size".to_string()))?
    } else {
        match params.policy {
            SquarePolicy::Stretch if diff > 0 => stretch_to_square(&rgb)?,
            _ => rgb,
        }
    };

    normalized.save(output).map_err(Error::Write)?;
    info!(
        "Wrote {}x{} image to {:?}",
        normalized.width(),
        normalized.height(),
        output
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32, color: Rgb<u8>) -> PathBuf {
        let path = dir.join(name);
        RgbImage::from_pixel(width, height, color).save(&path).unwrap();
        path
    }

    #[test]
    fn large_difference_pads_to_square() {
        let dir = TempDir::new().unwrap();
        let input = write_png(dir.path(), "wide.png", 400, 100, Rgb([255, 255, 255]));
        let output = dir.path().join("out.png");

        normalize_to_square(&input, &output, &NormalizeParams::default()).unwrap();

        let out = image::open(&output).unwrap().to_rgb8();
        assert_eq!(out.dimensions(), (400, 400));
        // pad_rows = (400 - 100) / 2 = 150: black bars above and below
        assert_eq!(out.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(out.get_pixel(200, 149), &Rgb([0, 0, 0]));
        assert_eq!(out.get_pixel(200, 150), &Rgb([255, 255, 255]));
        assert_eq!(out.get_pixel(200, 249), &Rgb([255, 255, 255]));
        assert_eq!(out.get_pixel(200, 250), &Rgb([0, 0, 0]));
        assert_eq!(out.get_pixel(399, 399), &Rgb([0, 0, 0]));
    }

    #[test]
    fn difference_equal_to_threshold_does_not_pad() {
        let dir = TempDir::new().unwrap();
        let input = write_png(dir.path(), "near.png", 125, 100, Rgb([50, 60, 70]));
        let output = dir.path().join("out.png");

        // diff == 25 falls to the policy branch (strict comparison)
        normalize_to_square(&input, &output, &NormalizeParams::default()).unwrap();
        assert_eq!(image::image_dimensions(&output).unwrap(), (125, 125));

        // one more pixel of difference pads instead
        let input = write_png(dir.path(), "over.png", 126, 100, Rgb([50, 60, 70]));
        let output = dir.path().join("out2.png");
        normalize_to_square(&input, &output, &NormalizeParams::default()).unwrap();
        let out = image::open(&output).unwrap().to_rgb8();
        assert_eq!(out.dimensions(), (126, 126));
        assert_eq!(out.get_pixel(0, 0), &Rgb([0, 0, 0]));
    }

    #[test]
    fn keep_policy_passes_near_square_through() {
        let dir = TempDir::new().unwrap();
        let input = write_png(dir.path(), "near.png", 120, 100, Rgb([9, 9, 9]));
        let output = dir.path().join("out.png");

        let params = NormalizeParams {
            policy: SquarePolicy::Keep,
            ..NormalizeParams::default()
        };
        normalize_to_square(&input, &output, &params).unwrap();
        assert_eq!(image::image_dimensions(&output).unwrap(), (120, 100));
    }

    #[test]
    fn square_input_keeps_its_dimensions_under_both_policies() {
        let dir = TempDir::new().unwrap();
        let input = write_png(dir.path(), "square.png", 200, 200, Rgb([10, 20, 30]));

        for policy in [SquarePolicy::Stretch, SquarePolicy::Keep] {
            let output = dir.path().join(format!("out-{}.png", policy));
            let params = NormalizeParams {
                policy,
                ..NormalizeParams::default()
            };
            normalize_to_square(&input, &output, &params).unwrap();
            assert_eq!(image::image_dimensions(&output).unwrap(), (200, 200));
        }
    }

    #[test]
    fn geometry_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let input = write_png(dir.path(), "wide.png", 300, 100, Rgb([80, 80, 80]));
        let first = dir.path().join("first.png");
        let second = dir.path().join("second.png");

        let params = NormalizeParams::default();
        normalize_to_square(&input, &first, &params).unwrap();
        normalize_to_square(&first, &second, &params).unwrap();
        assert_eq!(
            image::image_dimensions(&first).unwrap(),
            image::image_dimensions(&second).unwrap()
        );
    }

    #[test]
    fn corrupt_input_is_a_decode_error() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("broken.png");
        fs::write(&input, b"INVALID_PNG_DATA").unwrap();
        let output = dir.path().join("out.png");

        let err = normalize_to_square(&input, &output, &NormalizeParams::default()).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
        assert!(!output.exists());
    }

    #[test]
    fn unknown_destination_extension_is_a_write_error() {
        let dir = TempDir::new().unwrap();
        let input = write_png(dir.path(), "a.png", 10, 10, Rgb([0, 0, 0]));
        let output = dir.path().join("a.nope");

        let err = normalize_to_square(&input, &output, &NormalizeParams::default()).unwrap_err();
        assert!(matches!(err, Error::Write(_)));
    }
}
