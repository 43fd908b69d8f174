//! Error types for icon generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for icon generation
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating icons
#[derive(Error, Debug)]
pub enum Error {
    /// Padding, size or target list is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Background color is not a 6 or 8 digit hex value
    #[error("Invalid background color format: {0}")]
    MalformedColor(String),

    /// Vector input is missing, unreadable or cannot be parsed
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Encoding or decoding a raster failed
    #[error("Image codec error: {0}")]
    Codec(#[from] image::ImageError),

    /// Config file is not valid TOML for this tool
    #[error("Failed to parse config file {}: {source}", path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors raised while validating padding, sizes or colors
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::InvalidConfiguration(_) | Error::MalformedColor(_) | Error::ConfigFile { .. }
        )
    }
}
