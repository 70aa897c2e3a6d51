//! core/cover/mod.rs
//!
//! Cover image pipeline: decoded image + crop rectangle -> PNG bytes ready for an APIC frame.
//! Public API:
//! - [`initialize_crop_for_image`] seeds a centered square crop.
//! - [`extract_cropped_region`] renders the crop at the requested size and encodes it.
//! - [`load_source_image`] / [`source_image_from_bytes`] decode files or embedded art.

mod crop;
mod data_uri;
mod pipeline;

use std::path::Path;

use image::ImageReader;

use crate::core::error::Result;

pub use crop::{CropRegion, SourceImage, SourceRect, initialize_crop_for_image};
pub use data_uri::{decode_data_uri, encode_as_data_uri};
pub use pipeline::{EncodedImageBuffer, extract_cropped_region};

/// Decode an image file and size it for a `max_w x max_h` display box.
pub fn load_source_image(path: &Path, max_w: f32, max_h: f32) -> Result<SourceImage> {
    let pixels = ImageReader::open(path)
        .map_err(image::ImageError::IoError)?
        .with_guessed_format()
        .map_err(image::ImageError::IoError)?
        .decode()?;
    Ok(SourceImage::fit_within(pixels, max_w, max_h))
}

/// Same, for bytes already in memory (embedded cover art).
pub fn source_image_from_bytes(bytes: &[u8], max_w: f32, max_h: f32) -> Result<SourceImage> {
    let pixels = image::load_from_memory(bytes)?;
    Ok(SourceImage::fit_within(pixels, max_w, max_h))
}
