use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Read-only vector artwork
#[derive(Clone, Debug)]
pub struct VectorSource {
    data: Vec<u8>,
    origin: Option<PathBuf>,
}

impl VectorSource {
    /// Read the whole file up front so later renders never touch the disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::SourceUnavailable(format!(
                "SVG file not found: {}",
                path.display()
            )));
        }
        let data = fs::read(path).map_err(|e| {
            Error::SourceUnavailable(format!("failed to read {}: {}", path.display(), e))
        })?;
        log::debug!("Loaded {} bytes from {}", data.len(), path.display());

        Ok(Self {
            data,
            origin: Some(path.to_path_buf()),
        })
    }

    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            origin: None,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// File the artwork was read from, if any
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    /// Directory used to resolve relative references inside the artwork
    pub fn resources_dir(&self) -> Option<PathBuf> {
        self.origin()
            .and_then(|p| fs::canonicalize(p).ok())
            .and_then(|p| p.parent().map(Path::to_path_buf))
    }

    /// Human readable name for log and error messages
    pub fn describe(&self) -> String {
        match self.origin() {
            Some(path) => path.display().to_string(),
            None => format!("<{} bytes in memory>", self.data.len()),
        }
    }
}
