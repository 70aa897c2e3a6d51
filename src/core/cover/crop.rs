//! core/cover/crop.rs
//! Crop rectangles in displayed space, and the source image they point into.
//!
//! Two coordinate spaces:
//! - displayed: what the user sees on screen (possibly scaled down)
//! - source: the real pixels of the decoded image
//!
//! `CropRegion` always lives in displayed space. `SourceRect` is the same
//! rectangle mapped into source space.

use std::sync::Arc;

use image::DynamicImage;

/// Default crop covers this share of the shorter displayed side.
pub const CROP_FILL_RATIO: f32 = 0.8;

/// Smallest side a drag can shrink the crop to (displayed px).
pub const MIN_CROP_SIDE: f32 = 8.0;

/// Crop rectangle in displayed pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CropRegion {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// width / height lock. `Some(1.0)` = square.
    pub aspect: Option<f32>,
}

/// A crop rectangle mapped into source pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CropRegion {
    /// Centered square covering `CROP_FILL_RATIO` of the shorter side.
    ///
    /// Portrait images are anchored by width, everything else by height.
    pub fn centered_square(width: f32, height: f32) -> Self {
        let size = if height > width {
            width * CROP_FILL_RATIO
        } else {
            height * CROP_FILL_RATIO
        };

        CropRegion {
            x: (width - size) / 2.0,
            y: (height - size) / 2.0,
            width: size,
            height: size,
            aspect: Some(1.0),
        }
    }

    /// True if the region can be extracted (positive, finite area).
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Output surface size. Truncates like a canvas size assignment.
    pub fn output_size(&self) -> Option<(u32, u32)> {
        if !self.has_area() || !self.width.is_finite() || !self.height.is_finite() {
            return None;
        }
        let w = self.width as u32;
        let h = self.height as u32;
        (w > 0 && h > 0).then_some((w, h))
    }

    /// Map into source space by per-axis scale factors.
    pub fn to_source(&self, scale_x: f64, scale_y: f64) -> SourceRect {
        SourceRect {
            x: self.x as f64 * scale_x,
            y: self.y as f64 * scale_y,
            width: self.width as f64 * scale_x,
            height: self.height as f64 * scale_y,
        }
    }

    /// Force `width == height * aspect`, keeping the height.
    pub fn with_aspect_applied(mut self) -> Self {
        if let Some(a) = self.aspect.filter(|a| *a > 0.0) {
            self.width = self.height * a;
        }
        self
    }

    /// Keep the region inside a `bounds_w x bounds_h` image.
    ///
    /// Oversized regions are shrunk (aspect preserved), then shifted in.
    pub fn clamped_to(mut self, bounds_w: f32, bounds_h: f32) -> Self {
        if self.width > bounds_w {
            let k = bounds_w / self.width;
            self.width = bounds_w;
            if self.aspect.is_some() {
                self.height *= k;
            }
        }
        if self.height > bounds_h {
            let k = bounds_h / self.height;
            self.height = bounds_h;
            if self.aspect.is_some() {
                self.width *= k;
            }
        }

        self.x = self.x.clamp(0.0, (bounds_w - self.width).max(0.0));
        self.y = self.y.clamp(0.0, (bounds_h - self.height).max(0.0));
        self
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }

    /// Translate by a drag delta.
    pub fn moved_by(mut self, dx: f32, dy: f32) -> Self {
        self.x += dx;
        self.y += dy;
        self
    }

    /// Drag the bottom-right corner to `(px, py)`; top-left stays put.
    pub fn resized_to(mut self, px: f32, py: f32) -> Self {
        let w = (px - self.x).max(MIN_CROP_SIDE);
        let h = (py - self.y).max(MIN_CROP_SIDE);

        match self.aspect.filter(|a| *a > 0.0) {
            Some(a) => {
                // Follow whichever axis the cursor pushed further.
                let h_locked = h.max(w / a);
                self.height = h_locked;
                self.width = h_locked * a;
            }
            None => {
                self.width = w;
                self.height = h;
            }
        }
        self
    }

    /// New selection drawn from `start` toward `end`, honoring the aspect lock.
    ///
    /// `start` is the fixed corner; the region grows in the direction of the drag.
    pub fn from_drag(start: (f32, f32), end: (f32, f32), aspect: Option<f32>) -> Self {
        let dx = end.0 - start.0;
        let dy = end.1 - start.1;
        let mut w = dx.abs();
        let mut h = dy.abs();

        if let Some(a) = aspect.filter(|a| *a > 0.0) {
            h = h.max(w / a);
            w = h * a;
        }

        CropRegion {
            x: if dx < 0.0 { start.0 - w } else { start.0 },
            y: if dy < 0.0 { start.1 - h } else { start.1 },
            width: w,
            height: h,
            aspect,
        }
    }
}

/// A decoded image plus the size it is shown at.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub pixels: Arc<DynamicImage>,
    pub displayed_width: f32,
    pub displayed_height: f32,
}

impl SourceImage {
    pub fn new(pixels: DynamicImage, displayed_width: f32, displayed_height: f32) -> Self {
        Self {
            pixels: Arc::new(pixels),
            displayed_width,
            displayed_height,
        }
    }

    /// Shown at natural size.
    pub fn unscaled(pixels: DynamicImage) -> Self {
        let (w, h) = (pixels.width() as f32, pixels.height() as f32);
        Self::new(pixels, w, h)
    }

    /// Shown scaled down (never up) to fit a `max_w x max_h` box.
    pub fn fit_within(pixels: DynamicImage, max_w: f32, max_h: f32) -> Self {
        let (w, h) = (pixels.width() as f32, pixels.height() as f32);
        let k = (max_w / w).min(max_h / h).min(1.0);
        Self::new(pixels, (w * k).floor().max(1.0), (h * k).floor().max(1.0))
    }

    pub fn natural_width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn natural_height(&self) -> u32 {
        self.pixels.height()
    }

    /// (natural / displayed) per axis.
    pub fn scale(&self) -> (f64, f64) {
        scale_factors(
            (self.natural_width(), self.natural_height()),
            (self.displayed_width, self.displayed_height),
        )
    }
}

/// Per-axis natural/displayed ratio.
pub fn scale_factors(natural: (u32, u32), displayed: (f32, f32)) -> (f64, f64) {
    (
        natural.0 as f64 / displayed.0 as f64,
        natural.1 as f64 / displayed.1 as f64,
    )
}

/// Seed the interactive crop for a freshly loaded image.
pub fn initialize_crop_for_image(image: &SourceImage) -> CropRegion {
    CropRegion::centered_square(image.displayed_width, image.displayed_height)
}
