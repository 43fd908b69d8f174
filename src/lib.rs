//! Launcher icon generation
//!
//! Renders one SVG into a set of square PNG icons. Each icon is rendered at
//! its final resolution, cropped to the visible artwork, fitted into the
//! padded content area, centered and composited over a background color.
//!
//! # Example
//!
//! ```no_run
//! use launcher_icons::{compose, CompositionRequest, ImageCodec, PngCodec, ResvgRasterizer, VectorSource};
//!
//! # fn main() -> launcher_icons::Result<()> {
//! let source = VectorSource::from_path("assets/icons/app_icon.svg")?;
//! let request = CompositionRequest::parse(192, 10.0, "#FFFFFF")?;
//! let canvas = compose(&ResvgRasterizer::new(), &source, &request)?;
//! PngCodec.save(&canvas, std::path::Path::new("app_icon_192.png"))?;
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod compose;
pub mod config;
pub mod error;
pub mod render;
pub mod source;

pub use batch::{BatchReport, GeneratedIcon};
pub use compose::{compose, BackgroundColor, BoundingBox, CompositionRequest};
pub use config::{Config, IconTarget};
pub use error::{Error, Result};
pub use render::{ImageCodec, PngCodec, ResvgRasterizer, VectorRasterizer};
pub use source::VectorSource;
