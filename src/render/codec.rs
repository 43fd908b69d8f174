//! Raster persistence

use crate::error::{Error, Result};
use image::{ImageFormat, RgbaImage};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Converts RGBA rasters to and from their on-disk encoding
pub trait ImageCodec {
    /// Name of this codec (for logging)
    fn name(&self) -> &str;

    /// File extension written by this codec, without the dot
    fn extension(&self) -> &str;

    fn encode(&self, image: &RgbaImage) -> Result<Vec<u8>>;

    fn decode(&self, bytes: &[u8]) -> Result<RgbaImage>;

    /// Encode and write to `path`, returning the number of bytes written
    fn save(&self, image: &RgbaImage, path: &Path) -> Result<u64> {
        let bytes = self.encode(image)?;
        fs::write(path, &bytes).map_err(|e| Error::io(path, e))?;
        Ok(bytes.len() as u64)
    }

    fn load(&self, path: &Path) -> Result<RgbaImage> {
        let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
        self.decode(&bytes)
    }
}

/// Lossless 8-bit RGBA PNG
#[derive(Clone, Copy, Debug, Default)]
pub struct PngCodec;

impl ImageCodec for PngCodec {
    fn name(&self) -> &str {
        "png"
    }

    fn extension(&self) -> &str {
        "png"
    }

    fn encode(&self, image: &RgbaImage) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    fn decode(&self, bytes: &[u8]) -> Result<RgbaImage> {
        let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)?;
        Ok(image.into_rgba8())
    }
}
