use image::{DynamicImage, Rgb, RgbImage};
use pic_scale_safe::{ImageSize, ResamplingFunction};
use tracing::{debug, info_span};

use crate::{
    error::{ErrorKind, ThumbnailError},
    image::Image,
    tn_err, tn_try,
};

/// Length of the longer side of every thumbnail, in pixels
pub const THUMBNAIL_SIZE: u32 = 200;

/// Bicubic
const FILTER: ResamplingFunction = ResamplingFunction::CatmullRom;

/// Produces a new image whose longer side is [`THUMBNAIL_SIZE`], preserving aspect ratio.
pub fn scale(image: Image) -> Result<Image, ThumbnailError> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(tn_err!(
            ErrorKind::Resize,
            "negative or zero image size `{width}x{height}'"
        ));
    }
    let (dst_width, dst_height) = compute_dimensions(width, height);
    let _span = info_span!("scale", width, height, dst_width, dst_height).entered();

    // JPEG has no alpha channel, so flatten before resampling rather than after.
    // Resampling premultiplied data would otherwise be needed to avoid dark fringes.
    let src = flatten_onto_white(image.pixels);
    let pixels = if (width, height) == (dst_width, dst_height) {
        debug!("image already has thumbnail dimensions");
        src
    } else {
        resize_rgb8(&src, dst_width, dst_height)?
    };

    Ok(Image {
        pixels: DynamicImage::ImageRgb8(pixels),
        ..image
    })
}

fn resize_rgb8(
    src: &RgbImage,
    dst_width: u32,
    dst_height: u32,
) -> Result<RgbImage, ThumbnailError> {
    let src_size = ImageSize::new(src.width() as usize, src.height() as usize);
    let dst_size = ImageSize::new(dst_width as usize, dst_height as usize);
    let resized = tn_try!(
        ErrorKind::Resize,
        pic_scale_safe::resize_rgb8(src.as_raw(), src_size, dst_size, FILTER)
    );
    RgbImage::from_raw(dst_width, dst_height, resized).ok_or_else(|| {
        tn_err!(
            ErrorKind::Resize,
            "resampler returned a buffer of the wrong size for {dst_width}x{dst_height}"
        )
    })
}

/// Converts to 8-bit RGB, compositing any transparency onto a white background
fn flatten_onto_white(pixels: DynamicImage) -> RgbImage {
    if !pixels.color().has_alpha() {
        return pixels.into_rgb8();
    }
    let rgba = pixels.into_rgba8();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        Rgb([blend(r, a), blend(g, a), blend(b, a)])
    })
}

fn blend(channel: u8, alpha: u8) -> u8 {
    let (c, a) = (channel as u32, alpha as u32);
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}

/// Fits the longer side to [`THUMBNAIL_SIZE`].
/// The shorter side is rounded to nearest and never drops below 1 pixel.
pub fn compute_dimensions(width: u32, height: u32) -> (u32, u32) {
    if width >= height {
        (THUMBNAIL_SIZE, scale_side(height, width))
    } else {
        (scale_side(width, height), THUMBNAIL_SIZE)
    }
}

fn scale_side(short: u32, long: u32) -> u32 {
    let (short, long) = (short as u64, long as u64);
    let scaled = (short * THUMBNAIL_SIZE as u64 + long / 2) / long;
    // `short <= long`, so this always fits
    (scaled as u32).max(1)
}
