#![no_main]

use std::{num::NonZeroU16, path::Path};

use arbitrary::Unstructured;
use image::GenericImageView;
use libfuzzer_sys::fuzz_target;
use thumbnail::{operations::scale::compute_dimensions, plan::Plan};

#[derive(Debug)]
struct StructuredImage {
    width: NonZeroU16,
    height: NonZeroU16,
    rgba_data: Vec<u8>,
}

impl StructuredImage {
    fn save_as_png(&self, path: impl AsRef<Path>) -> Result<(), image::ImageError> {
        let (width, height) = (self.width.get() as u32, self.height.get() as u32);
        let img = image::RgbaImage::from_fn(width, height, |x, y| {
            // the pixel data is cycled so that large images don't need huge inputs
            let idx = (y as usize * width as usize + x as usize) * 4 % self.rgba_data.len();
            image::Rgba([
                self.rgba_data[idx],
                self.rgba_data[(idx + 1) % self.rgba_data.len()],
                self.rgba_data[(idx + 2) % self.rgba_data.len()],
                self.rgba_data[(idx + 3) % self.rgba_data.len()],
            ])
        });
        img.save_with_format(path, image::ImageFormat::Png)
    }
}

impl<'a> arbitrary::Arbitrary<'a> for StructuredImage {
    fn arbitrary(unstructured: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        // keep the pixel count bounded so that every run completes quickly
        let width = NonZeroU16::new(unstructured.int_in_range(1..=2048)?).unwrap();
        let height = NonZeroU16::new(unstructured.int_in_range(1..=2048)?).unwrap();
        let len = unstructured.int_in_range(4..=4096)?;
        let rgba_data = unstructured.bytes(len)?.to_vec();

        Ok(Self {
            width,
            height,
            rgba_data,
        })
    }
}

fuzz_target!(|image: StructuredImage| {
    let temp_directory = tempfile::tempdir().expect("failed to create temporary directory");
    let input_path = temp_directory.path().join("input_image.png");
    let output_path = temp_directory.path().join("thumbnail.jpg");
    image
        .save_as_png(&input_path)
        .expect("failed to save image as PNG");

    let plan = Plan {
        input: input_path.into_os_string(),
        output: output_path.clone().into_os_string(),
        modifiers: Default::default(),
    };
    plan.execute().expect("must have succeeded");

    let dimensions = image::open(&output_path)
        .expect("could not open the thumbnail")
        .dimensions();
    let expected = compute_dimensions(image.width.get() as u32, image.height.get() as u32);
    assert_eq!(dimensions, expected, "{image:?}");
    assert_eq!(dimensions.0.max(dimensions.1), 200);
});
