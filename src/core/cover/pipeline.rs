//! core/cover/pipeline.rs
//! Crop -> render -> PNG.
//!
//! The output surface is always `trunc(crop.width) x trunc(crop.height)`,
//! whatever the source resolution. Parts of the source rectangle that fall
//! outside the image render transparent, the way a canvas `drawImage` does.

use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};
use tracing::debug;

use super::crop::{CropRegion, SourceImage, SourceRect};
use super::data_uri::{decode_data_uri, encode_as_data_uri};
use crate::core::error::{Error, Result};

/// A finished cover: PNG bytes and their pixel size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImageBuffer {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
}

impl EncodedImageBuffer {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn to_data_uri(&self) -> String {
        encode_as_data_uri(&self.bytes)
    }

    /// Parse a data URI; dimensions come from the image header.
    pub fn from_data_uri(uri: &str) -> Result<Self> {
        let bytes = decode_data_uri(uri)?;
        let (width, height) = ImageReader::new(Cursor::new(&bytes))
            .with_guessed_format()
            .map_err(image::ImageError::IoError)?
            .into_dimensions()?;
        Ok(Self {
            bytes,
            width,
            height,
        })
    }
}

/// Cut `crop` (displayed space) out of `image` at source resolution and
/// encode it as a PNG of the crop's displayed size.
pub fn extract_cropped_region(image: &SourceImage, crop: &CropRegion) -> Result<EncodedImageBuffer> {
    let (out_w, out_h) = crop.output_size().ok_or(Error::EmptySelection {
        width: crop.width,
        height: crop.height,
    })?;

    let (scale_x, scale_y) = image.scale();
    let src = crop.to_source(scale_x, scale_y);

    let surface = render_region(&image.pixels, src, out_w, out_h).ok_or(Error::EmptySelection {
        width: crop.width,
        height: crop.height,
    })?;

    let bytes = encode_png(surface)?;
    debug!(
        out_w,
        out_h,
        src_x = src.x,
        src_y = src.y,
        src_w = src.width,
        src_h = src.height,
        png_bytes = bytes.len(),
        "extracted crop"
    );

    Ok(EncodedImageBuffer {
        bytes,
        width: out_w,
        height: out_h,
    })
}

/// Draw `src` scaled into an `out_w x out_h` transparent surface.
///
/// `None` if `src` does not overlap the image at all.
fn render_region(pixels: &DynamicImage, src: SourceRect, out_w: u32, out_h: u32) -> Option<RgbaImage> {
    let (nat_w, nat_h) = (pixels.width() as f64, pixels.height() as f64);

    // Visible part of the source rectangle.
    let x0 = src.x.max(0.0);
    let y0 = src.y.max(0.0);
    let x1 = (src.x + src.width).min(nat_w);
    let y1 = (src.y + src.height).min(nat_h);
    if x1 <= x0 || y1 <= y0 || src.width <= 0.0 || src.height <= 0.0 {
        return None;
    }

    let sx = x0.floor() as u32;
    let sy = y0.floor() as u32;
    let sw = (x1.ceil() as u32).saturating_sub(sx).max(1);
    let sh = (y1.ceil() as u32).saturating_sub(sy).max(1);

    // Where that visible part lands on the output surface.
    let kx = out_w as f64 / src.width;
    let ky = out_h as f64 / src.height;
    let dx = ((x0 - src.x) * kx).round() as i64;
    let dy = ((y0 - src.y) * ky).round() as i64;
    let dw = (((x1 - x0) * kx).round() as u32).clamp(1, out_w);
    let dh = (((y1 - y0) * ky).round() as u32).clamp(1, out_h);

    let cropped = pixels.crop_imm(sx, sy, sw, sh);
    let patch = if (sw, sh) == (dw, dh) {
        cropped.to_rgba8()
    } else {
        cropped.resize_exact(dw, dh, FilterType::Triangle).to_rgba8()
    };

    let mut surface = RgbaImage::new(out_w, out_h);
    imageops::overlay(&mut surface, &patch, dx, dy);
    Some(surface)
}

fn encode_png(surface: RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(surface).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const RED: Rgba<u8> = Rgba([220, 20, 60, 255]);

    fn solid(w: u32, h: u32, px: Rgba<u8>) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(w, h, px))
    }

    fn region(x: f32, y: f32, width: f32, height: f32) -> CropRegion {
        CropRegion {
            x,
            y,
            width,
            height,
            aspect: None,
        }
    }

    fn decode(buf: &EncodedImageBuffer) -> RgbaImage {
        image::load_from_memory_with_format(buf.as_bytes(), ImageFormat::Png)
            .unwrap()
            .to_rgba8()
    }

    #[test]
    fn unscaled_output_matches_crop_size() {
        let img = SourceImage::unscaled(solid(64, 48, RED));

        for (w, h) in [(10.0, 10.0), (64.0, 48.0), (1.0, 30.0), (33.7, 12.2)] {
            let out = extract_cropped_region(&img, &region(0.0, 0.0, w, h)).unwrap();
            let decoded = decode(&out);
            assert_eq!(decoded.dimensions(), (w as u32, h as u32));
            assert_eq!((out.width(), out.height()), (w as u32, h as u32));
        }
    }

    #[test]
    fn empty_selection_is_an_error() {
        let img = SourceImage::unscaled(solid(16, 16, RED));

        for crop in [
            region(0.0, 0.0, 0.0, 10.0),
            region(0.0, 0.0, 10.0, 0.0),
            region(0.0, 0.0, -5.0, 10.0),
            CropRegion::default(),
        ] {
            assert!(matches!(
                extract_cropped_region(&img, &crop),
                Err(Error::EmptySelection { .. })
            ));
        }
    }

    #[test]
    fn solid_color_survives_png() {
        let img = SourceImage::unscaled(solid(40, 40, RED));
        let out = extract_cropped_region(&img, &region(5.0, 5.0, 20.0, 20.0)).unwrap();

        let decoded = decode(&out);
        assert!(decoded.pixels().all(|p| *p == RED));
    }

    #[test]
    fn scaled_source_keeps_displayed_output_size() {
        // 200x200 shown at 100x100 -> scale 2.
        let img = SourceImage::new(solid(200, 200, RED), 100.0, 100.0);
        let crop = region(10.0, 10.0, 40.0, 40.0);

        assert_eq!(
            crop.to_source(img.scale().0, img.scale().1),
            SourceRect {
                x: 20.0,
                y: 20.0,
                width: 80.0,
                height: 80.0
            }
        );

        let out = extract_cropped_region(&img, &crop).unwrap();
        assert_eq!((out.width(), out.height()), (40, 40));

        let decoded = decode(&out);
        for p in decoded.pixels() {
            for c in 0..4 {
                assert!(p.0[c].abs_diff(RED.0[c]) <= 1, "{p:?}");
            }
        }
    }

    #[test]
    fn picks_the_right_pixels() {
        // Left half black, right half white.
        let mut buf = RgbaImage::from_pixel(20, 10, Rgba([0, 0, 0, 255]));
        for x in 10..20 {
            for y in 0..10 {
                buf.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            }
        }
        let img = SourceImage::unscaled(DynamicImage::ImageRgba8(buf));

        let out = extract_cropped_region(&img, &region(12.0, 2.0, 5.0, 5.0)).unwrap();
        assert!(decode(&out).pixels().all(|p| p.0 == [255, 255, 255, 255]));

        let out = extract_cropped_region(&img, &region(0.0, 0.0, 5.0, 5.0)).unwrap();
        assert!(decode(&out).pixels().all(|p| p.0 == [0, 0, 0, 255]));
    }

    #[test]
    fn out_of_bounds_part_is_transparent() {
        let img = SourceImage::unscaled(solid(10, 10, RED));
        let out = extract_cropped_region(&img, &region(5.0, 0.0, 10.0, 10.0)).unwrap();
        let decoded = decode(&out);

        assert_eq!(decoded.dimensions(), (10, 10));
        assert_eq!(*decoded.get_pixel(0, 0), RED);
        assert_eq!(decoded.get_pixel(9, 0).0[3], 0);
    }

    #[test]
    fn fully_outside_is_empty() {
        let img = SourceImage::unscaled(solid(10, 10, RED));
        assert!(matches!(
            extract_cropped_region(&img, &region(50.0, 50.0, 5.0, 5.0)),
            Err(Error::EmptySelection { .. })
        ));
    }

    #[test]
    fn data_uri_round_trip_keeps_dimensions() {
        let img = SourceImage::unscaled(solid(30, 30, RED));
        let out = extract_cropped_region(&img, &region(0.0, 0.0, 12.0, 7.0)).unwrap();

        let uri = out.to_data_uri();
        assert!(uri.starts_with("data:image/png;base64,"));

        let back = EncodedImageBuffer::from_data_uri(&uri).unwrap();
        assert_eq!(back, out);
    }
}
