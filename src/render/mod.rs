mod codec;
mod rasterizer;

pub use codec::{ImageCodec, PngCodec};
pub use rasterizer::{ResvgRasterizer, VectorRasterizer};
