//! View constants (layout/sizing).

pub(crate) const FORM_W: f32 = 420.0;
pub(crate) const LABEL_W: f32 = 80.0;

/// Preview size for the embedded cover.
pub(crate) const COVER_BIG: f32 = 260.0;

// crop surface
pub(crate) const HANDLE_SIZE: f32 = 10.0;
pub(crate) const STROKE_W: f32 = 2.0;
pub(crate) const SHADE_ALPHA: f32 = 0.55;

pub(crate) const STATUS_TEXT: f32 = 13.0;
pub(crate) const SMALL_TEXT: f32 = 12.0;
