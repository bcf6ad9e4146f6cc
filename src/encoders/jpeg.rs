use std::io::Write;

use image::codecs::jpeg::JpegEncoder;
use image::ImageEncoder;

use crate::{
    error::{ErrorKind, ThumbnailError},
    image::Image,
    plan::Modifiers,
    tn_try,
};

/// Matches the default of imagemagick when the input quality cannot be estimated
pub const DEFAULT_QUALITY: u8 = 92;

pub fn encode<W: Write>(
    image: &Image,
    writer: &mut W,
    modifiers: &Modifiers,
) -> Result<(), ThumbnailError> {
    let mut encoder =
        JpegEncoder::new_with_quality(writer, modifiers.quality.unwrap_or(DEFAULT_QUALITY));
    if !modifiers.strip {
        if let Some(icc) = image.icc.clone() {
            let _ = encoder.set_icc_profile(icc); // ignore UnsupportedError
        }
    }
    // JPEG only stores 8-bit grayscale or RGB
    let pixels = image.pixels.to_rgb8();
    tn_try!(
        ErrorKind::Encode,
        encoder.write_image(
            pixels.as_raw(),
            pixels.width(),
            pixels.height(),
            image::ExtendedColorType::Rgb8,
        )
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

    fn sample() -> Image {
        Image {
            format: Some(ImageFormat::Png),
            icc: None,
            pixels: DynamicImage::ImageRgb8(RgbImage::from_pixel(20, 10, Rgb([200, 10, 10]))),
        }
    }

    #[test]
    fn test_writes_jpeg_bytes() {
        let mut output = Vec::new();
        encode(&sample(), &mut output, &Modifiers::default()).unwrap();
        assert_eq!(image::guess_format(&output).unwrap(), ImageFormat::Jpeg);
        let decoded = image::load_from_memory(&output).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (20, 10));
    }

    #[test]
    fn test_quality_affects_size() {
        let noisy = Image {
            pixels: DynamicImage::ImageRgb8(RgbImage::from_fn(64, 64, |x, y| {
                Rgb([(x * 37 % 256) as u8, (y * 91 % 256) as u8, ((x ^ y) * 13 % 256) as u8])
            })),
            ..sample()
        };
        let mut low = Vec::new();
        let mut high = Vec::new();
        let low_quality = Modifiers {
            quality: Some(10),
            ..Default::default()
        };
        let high_quality = Modifiers {
            quality: Some(100),
            ..Default::default()
        };
        encode(&noisy, &mut low, &low_quality).unwrap();
        encode(&noisy, &mut high, &high_quality).unwrap();
        assert!(low.len() < high.len());
    }
}
