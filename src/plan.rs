use std::ffi::OsString;

use tracing::info;

use crate::{decode::read_image, encode::write_image, error::ThumbnailError, operations};

/// Everything needed for one run: decode `input`, scale it, encode to `output`
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Plan {
    pub input: OsString,
    pub output: OsString,
    pub modifiers: Modifiers,
}

/// Settings that affect how the output is written, but not which pixels end up in it
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Modifiers {
    /// JPEG quality, 1 to 100
    pub quality: Option<u8>,
    /// Drop the ICC profile instead of copying it to the output
    pub strip: bool,
}

impl Plan {
    pub fn execute(&self) -> Result<(), ThumbnailError> {
        crate::init::init();

        let image = read_image(&self.input)?;
        let (width, height) = (image.width(), image.height());
        let thumbnail = operations::scale(image)?;
        write_image(&thumbnail, &self.output, &self.modifiers)?;

        info!(
            input = %self.input.to_string_lossy(),
            output = %self.output.to_string_lossy(),
            "{width}x{height} => {}x{}",
            thumbnail.width(),
            thumbnail.height()
        );
        Ok(())
    }
}
