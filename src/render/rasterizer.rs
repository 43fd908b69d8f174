//! Vector rasterization backends

use crate::error::{Error, Result};
use crate::source::VectorSource;
use image::RgbaImage;
use std::sync::Arc;
use usvg::fontdb;

/// Turns vector artwork into an RGBA raster of an exact pixel size
///
/// The artwork is fitted uniformly into `width x height` and centered,
/// leaving transparent pixels where the aspect ratios differ.
pub trait VectorRasterizer {
    /// Name of this backend (for logging)
    fn name(&self) -> &str;

    /// Render `source` into a fresh `width x height` straight-alpha raster
    fn rasterize(&self, source: &VectorSource, width: u32, height: u32) -> Result<RgbaImage>;
}

/// resvg/usvg rasterizer rendering into a tiny-skia pixmap
pub struct ResvgRasterizer {
    fontdb: Arc<fontdb::Database>,
}

impl ResvgRasterizer {
    /// Rasterizer with the system fonts available for `<text>` elements
    pub fn new() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        log::debug!("Loaded {} font faces", db.len());
        Self {
            fontdb: Arc::new(db),
        }
    }

    /// Rasterizer that skips font discovery; text renders only if the
    /// artwork has already been converted to paths
    pub fn without_system_fonts() -> Self {
        Self {
            fontdb: Arc::new(fontdb::Database::new()),
        }
    }

    fn parse(&self, source: &VectorSource) -> Result<usvg::Tree> {
        let opt = usvg::Options {
            resources_dir: source.resources_dir(),
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };

        usvg::Tree::from_data(source.data(), &opt).map_err(|e| {
            Error::SourceUnavailable(format!("failed to parse {}: {}", source.describe(), e))
        })
    }
}

impl Default for ResvgRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl VectorRasterizer for ResvgRasterizer {
    fn name(&self) -> &str {
        "resvg"
    }

    fn rasterize(&self, source: &VectorSource, width: u32, height: u32) -> Result<RgbaImage> {
        let tree = self.parse(source)?;

        let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
            Error::InvalidConfiguration(format!("cannot allocate a {}x{} pixmap", width, height))
        })?;

        // Contain: keep aspect ratio, center the leftover
        let svg_size = tree.size();
        let scale_x = width as f32 / svg_size.width();
        let scale_y = height as f32 / svg_size.height();
        let scale = scale_x.min(scale_y);
        let dx = (width as f32 - svg_size.width() * scale) / 2.0;
        let dy = (height as f32 - svg_size.height() * scale) / 2.0;
        let transform = tiny_skia::Transform::from_translate(dx, dy).pre_scale(scale, scale);

        resvg::render(&tree, transform, &mut pixmap.as_mut());

        pixmap_to_rgba(&pixmap)
    }
}

/// tiny-skia stores premultiplied alpha, `image` expects straight alpha
fn pixmap_to_rgba(pixmap: &tiny_skia::Pixmap) -> Result<RgbaImage> {
    let mut data = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    RgbaImage::from_raw(pixmap.width(), pixmap.height(), data).ok_or_else(|| {
        Error::InvalidConfiguration(format!(
            "pixmap of {}x{} does not match its buffer",
            pixmap.width(),
            pixmap.height()
        ))
    })
}
