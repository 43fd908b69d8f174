use crate::compose::{validate_padding, BackgroundColor};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory before the user config
pub const LOCAL_CONFIG_FILE: &str = "launcher-icons.toml";

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub output: OutputConfig,
    pub style: StyleConfig,
}

/// Vector input
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SourceConfig {
    /// Path to the SVG artwork
    pub path: PathBuf,
}

/// Where and what to write
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OutputConfig {
    /// Directory receiving the generated PNGs (created if missing)
    pub directory: PathBuf,
    /// One entry per generated file
    #[serde(default = "default_icons")]
    pub icons: Vec<IconTarget>,
}

/// A single generated file
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct IconTarget {
    pub file_name: String,
    /// Side of the square icon, in pixels
    pub size: u32,
}

impl IconTarget {
    pub fn new(file_name: impl Into<String>, size: u32) -> Self {
        Self {
            file_name: file_name.into(),
            size,
        }
    }
}

/// Padding and background shared by every icon
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct StyleConfig {
    /// Padding on each side as a percentage of the icon size, in [0, 50)
    pub padding_percent: f64,
    /// "#RRGGBB" or "#RRGGBBAA"
    pub background_color: BackgroundColor,
}

/// Launcher icon sizes: store artwork plus the Android density buckets
pub fn default_icons() -> Vec<IconTarget> {
    vec![
        IconTarget::new("app_icon.png", 1024),
        IconTarget::new("app_icon_512.png", 512),
        IconTarget::new("app_icon_192.png", 192),
        IconTarget::new("app_icon_144.png", 144),
        IconTarget::new("app_icon_96.png", 96),
        IconTarget::new("app_icon_72.png", 72),
        IconTarget::new("app_icon_48.png", 48),
        IconTarget::new("app_icon_36.png", 36),
    ]
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            path: PathBuf::from("assets/icons/app_icon.svg"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            directory: PathBuf::from("assets/icons/generated_icons"),
            icons: default_icons(),
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            padding_percent: 0.0,
            background_color: BackgroundColor::WHITE,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: SourceConfig::default(),
            output: OutputConfig::default(),
            style: StyleConfig::default(),
        }
    }
}

impl Config {
    /// Get the path to the per-user config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "launcher-icons")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Config file to use when none is given explicitly: the project-local
    /// file if present, then the per-user one if present
    pub fn discover() -> Option<PathBuf> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }
        Self::config_path().filter(|path| path.is_file())
    }

    /// Load and validate configuration from `path`.
    ///
    /// Relative paths inside the file are resolved against the file's own
    /// directory, so a project config works from any working directory.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let mut config: Config = toml::from_str(&contents).map_err(|e| Error::ConfigFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        if let Some(base) = path.parent() {
            config.source.path = resolve(base, &config.source.path);
            config.output.directory = resolve(base, &config.output.directory);
        }

        config.validate()?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load the discovered config file, or return defaults if there is none
    pub fn load() -> Result<Self> {
        match Self::discover() {
            Some(path) => Self::load_from(&path),
            None => {
                log::debug!("No config file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Reject settings that would fail halfway through a run
    pub fn validate(&self) -> Result<()> {
        validate_padding(self.style.padding_percent)?;

        if self.output.icons.is_empty() {
            return Err(Error::InvalidConfiguration(
                "no icons configured".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for icon in &self.output.icons {
            if icon.size == 0 {
                return Err(Error::InvalidConfiguration(format!(
                    "{} has a size of 0",
                    icon.file_name
                )));
            }
            if icon.file_name.trim().is_empty() {
                return Err(Error::InvalidConfiguration(
                    "icon file name is empty".to_string(),
                ));
            }
            if !seen.insert(icon.file_name.as_str()) {
                return Err(Error::InvalidConfiguration(format!(
                    "{} is listed more than once",
                    icon.file_name
                )));
            }
        }
        Ok(())
    }

    /// Save configuration to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfiguration(format!("cannot serialize config: {}", e)))?;
        fs::write(path, contents).map_err(|e| Error::io(path, e))
    }

    /// Write a default config file at `path` unless one already exists.
    ///
    /// Returns false when the file was left untouched.
    pub fn create_default(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        Config::default().save(path)?;
        Ok(true)
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
