//! Padding, bounding box, fit and centering arithmetic

use crate::error::{Error, Result};
use image::RgbaImage;

/// Minimal rectangle enclosing every pixel with non-zero alpha
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Padding applied on each side, in whole pixels
pub fn padding_pixels(size: u32, padding_percent: f64) -> u32 {
    (size as f64 * (padding_percent / 100.0)).floor() as u32
}

/// Side of the square left for artwork once padding is removed from both sides
pub fn content_size(size: u32, padding_percent: f64) -> Result<u32> {
    let padding = padding_pixels(size, padding_percent);
    match padding.checked_mul(2).and_then(|both| size.checked_sub(both)) {
        Some(content) if content > 0 => Ok(content),
        _ => Err(Error::InvalidConfiguration(format!(
            "padding of {}% leaves no space for content at {}x{}",
            padding_percent, size, size
        ))),
    }
}

/// Bounds of the visible pixels, or `None` for a fully transparent image
pub fn bounding_box(image: &RgbaImage) -> Option<BoundingBox> {
    let mut left = u32::MAX;
    let mut top = u32::MAX;
    let mut right = 0;
    let mut bottom = 0;
    let mut found = false;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        found = true;
        left = left.min(x);
        top = top.min(y);
        right = right.max(x);
        bottom = bottom.max(y);
    }

    found.then(|| BoundingBox {
        x: left,
        y: top,
        width: right - left + 1,
        height: bottom - top + 1,
    })
}

/// Scale `(width, height)` uniformly so the larger side equals `target`.
///
/// The smaller side is truncated, and never drops below one pixel.
pub fn fit_within(width: u32, height: u32, target: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (width, height);
    }
    let (w, h, t) = (width as u64, height as u64, target as u64);
    if w >= h {
        (target, ((h * t) / w).max(1) as u32)
    } else {
        (((w * t) / h).max(1) as u32, target)
    }
}

/// Top-left offset that centers `width x height` in a square canvas of side `size`
pub fn center_offset(size: u32, width: u32, height: u32) -> (u32, u32) {
    (
        size.saturating_sub(width) / 2,
        size.saturating_sub(height) / 2,
    )
}
