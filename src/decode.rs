use std::ffi::OsStr;

use image::{DynamicImage, ImageDecoder, ImageReader};
use tracing::{debug, info_span};

use crate::{
    error::{ErrorKind, ThumbnailError},
    image::Image,
    tn_err, tn_try,
};

/// Opens and decodes the file at `path`, guessing the format based on file contents.
pub fn read_image(path: &OsStr) -> Result<Image, ThumbnailError> {
    let _span = info_span!("decode", path = %path.to_string_lossy()).entered();

    let reader = ImageReader::open(path).map_err(|error| {
        tn_err!(
            ErrorKind::Decode,
            "unable to open image '{}': {error}",
            path.to_string_lossy()
        )
    })?;
    let reader = tn_try!(ErrorKind::Decode, reader.with_guessed_format());
    let format = reader.format();
    let mut decoder = tn_try!(ErrorKind::Decode, reader.into_decoder());
    // a broken or unsupported profile is not a reason to reject the whole image
    let icc = decoder.icc_profile().unwrap_or(None);
    let pixels = tn_try!(ErrorKind::Decode, DynamicImage::from_decoder(decoder));

    debug!(
        ?format,
        width = pixels.width(),
        height = pixels.height(),
        color = ?pixels.color(),
        has_icc = icc.is_some(),
        "decoded image"
    );
    Ok(Image {
        format,
        icc,
        pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};

    #[test]
    fn test_reads_png_by_contents() {
        let dir = tempfile::tempdir().unwrap();
        // intentionally misleading extension
        let path = dir.path().join("actually_a_png.jpg");
        RgbImage::from_pixel(7, 3, Rgb([10, 20, 30]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let image = read_image(path.as_os_str()).unwrap();
        assert_eq!(image.format, Some(ImageFormat::Png));
        assert_eq!((image.width(), image.height()), (7, 3));
    }

    #[test]
    fn test_missing_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.png");
        let err = read_image(path.as_os_str()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Decode);
        assert!(err.to_string().contains("unable to open image"));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"this is not an image").unwrap();
        let err = read_image(path.as_os_str()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Decode);
    }
}
