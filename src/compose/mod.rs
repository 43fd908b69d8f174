//! Rasterize, crop, fit, center and composite one icon

mod blend;
mod color;
pub mod geometry;

pub use color::BackgroundColor;
pub use geometry::BoundingBox;

use crate::error::{Error, Result};
use crate::render::VectorRasterizer;
use crate::source::VectorSource;
use image::imageops;
use image::RgbaImage;

/// Validated parameters for a single square icon
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompositionRequest {
    size: u32,
    padding_percent: f64,
    background: BackgroundColor,
}

impl CompositionRequest {
    /// `padding_percent` must lie in `[0, 50)` and `size` must be positive
    pub fn new(size: u32, padding_percent: f64, background: BackgroundColor) -> Result<Self> {
        validate_padding(padding_percent)?;
        if size == 0 {
            return Err(Error::InvalidConfiguration(
                "icon size must be positive".to_string(),
            ));
        }
        Ok(Self {
            size,
            padding_percent,
            background,
        })
    }

    /// Like `new`, with the background given as a hex string
    pub fn parse(size: u32, padding_percent: f64, background: &str) -> Result<Self> {
        let background = background.parse()?;
        Self::new(size, padding_percent, background)
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn padding_percent(&self) -> f64 {
        self.padding_percent
    }

    pub fn background(&self) -> BackgroundColor {
        self.background
    }

    pub fn padding_pixels(&self) -> u32 {
        geometry::padding_pixels(self.size, self.padding_percent)
    }

    pub fn content_size(&self) -> Result<u32> {
        geometry::content_size(self.size, self.padding_percent)
    }
}

pub fn validate_padding(padding_percent: f64) -> Result<()> {
    if (0.0..50.0).contains(&padding_percent) {
        Ok(())
    } else {
        Err(Error::InvalidConfiguration(format!(
            "padding must be between 0 and 50 percent, got {}",
            padding_percent
        )))
    }
}

/// Produce a `size x size` canvas with the artwork cropped to its visible
/// bounds, fitted into the padded area and centered over the background.
pub fn compose(
    rasterizer: &dyn VectorRasterizer,
    source: &VectorSource,
    request: &CompositionRequest,
) -> Result<RgbaImage> {
    let size = request.size();
    let content_size = request.content_size()?;

    // Render at the final resolution instead of downscaling later
    let rendered = rasterizer.rasterize(source, content_size, content_size)?;

    let content = match geometry::bounding_box(&rendered) {
        Some(bbox) => {
            let cropped =
                imageops::crop_imm(&rendered, bbox.x, bbox.y, bbox.width, bbox.height).to_image();
            let (width, height) = geometry::fit_within(bbox.width, bbox.height, content_size);
            log::debug!(
                "{}px: content {:?} scaled to {}x{}",
                size,
                bbox,
                width,
                height
            );
            if (width, height) == cropped.dimensions() {
                cropped
            } else {
                blend::resize_premultiplied(&cropped, width, height)
            }
        }
        None => {
            log::debug!("{}px: rendered artwork is fully transparent", size);
            rendered
        }
    };

    let mut canvas = RgbaImage::from_pixel(size, size, request.background().rgba());
    let (x, y) = geometry::center_offset(size, content.width(), content.height());
    blend::composite_over(&mut canvas, &content, x, y);

    Ok(canvas)
}
