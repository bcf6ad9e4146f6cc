use std::{
    ffi::OsStr,
    fs::File,
    io::{BufWriter, Write},
};

use tracing::{debug, info_span};

use crate::{
    encoders,
    error::{ErrorKind, ThumbnailError},
    image::Image,
    plan::Modifiers,
    tn_err, tn_try,
};

/// Encodes the image as JPEG and writes it to `path`, replacing any existing file.
pub fn write_image(
    image: &Image,
    path: &OsStr,
    modifiers: &Modifiers,
) -> Result<(), ThumbnailError> {
    let _span = info_span!("encode", path = %path.to_string_lossy()).entered();

    // `File::create` automatically truncates (overwrites) the file if it exists.
    let file = File::create(path).map_err(|error| {
        tn_err!(
            ErrorKind::Encode,
            "unable to open image '{}': {error}",
            path.to_string_lossy()
        )
    })?;
    // Wrap in BufWriter for performance
    let mut writer = BufWriter::new(file);

    encoders::jpeg::encode(image, &mut writer, modifiers)?;

    // Flush the buffers to write everything to disk.
    // The buffers will be flushed automatically when the writer goes out of scope,
    // but that will not report any errors. This handles errors.
    tn_try!(ErrorKind::Encode, writer.flush());

    debug!(
        width = image.width(),
        height = image.height(),
        "wrote thumbnail"
    );
    Ok(())
}
