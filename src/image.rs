use image::{DynamicImage, ImageFormat};

/// A decoded raster image along with the metadata we carry through to the output
#[derive(Debug, Clone)]
pub struct Image {
    /// Format detected from the file contents, if `image` recognized it natively
    pub format: Option<ImageFormat>,
    pub icc: Option<Vec<u8>>,
    pub pixels: DynamicImage,
}

impl Image {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}
