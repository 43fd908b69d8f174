//! Batch generation of every configured icon size

use crate::compose::{compose, CompositionRequest};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::render::{ImageCodec, VectorRasterizer};
use crate::source::VectorSource;
use bytesize::ByteSize;
use std::fs;
use std::path::{Path, PathBuf};

/// One written file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub path: PathBuf,
    pub size: u32,
    pub bytes: u64,
}

/// Outcome of a complete run
#[derive(Clone, Debug)]
pub struct BatchReport {
    pub output_dir: PathBuf,
    pub icons: Vec<GeneratedIcon>,
}

impl BatchReport {
    pub fn total_bytes(&self) -> u64 {
        self.icons.iter().map(|icon| icon.bytes).sum()
    }
}

/// Generate every icon listed in `config`, stopping at the first failure
pub fn run(
    config: &Config,
    rasterizer: &dyn VectorRasterizer,
    codec: &dyn ImageCodec,
) -> Result<BatchReport> {
    // Everything that can be checked without touching the disk goes first
    config.validate()?;

    let source = VectorSource::from_path(&config.source.path)?;
    let output_dir = &config.output.directory;

    println!("SVG: {}", config.source.path.display());
    println!("Output: {}", output_dir.display());
    println!("Padding: {}%", config.style.padding_percent);
    println!("Background: {}", config.style.background_color);
    println!();

    fs::create_dir_all(output_dir).map_err(|e| Error::io(output_dir, e))?;
    log::debug!(
        "Rendering with {} and encoding with {}",
        rasterizer.name(),
        codec.name()
    );

    let mut icons = Vec::with_capacity(config.output.icons.len());
    for target in &config.output.icons {
        if !matches_codec(&target.file_name, codec) {
            log::warn!(
                "{} will be written as {} despite its extension",
                target.file_name,
                codec.extension()
            );
        }
        let request = CompositionRequest::new(
            target.size,
            config.style.padding_percent,
            config.style.background_color,
        )?;
        let canvas = compose(rasterizer, &source, &request)?;

        let path = output_dir.join(&target.file_name);
        let bytes = codec.save(&canvas, &path)?;
        println!(
            "Created: {} ({}x{}, padding: {}%)",
            path.display(),
            canvas.width(),
            canvas.height(),
            request.padding_percent()
        );
        log::info!("Wrote {} ({})", path.display(), ByteSize(bytes));

        icons.push(GeneratedIcon {
            path,
            size: target.size,
            bytes,
        });
    }

    let report = BatchReport {
        output_dir: output_dir.clone(),
        icons,
    };
    println!();
    println!("All icons generated in: {}", report.output_dir.display());
    log::info!(
        "{} icons, {} total",
        report.icons.len(),
        ByteSize(report.total_bytes())
    );

    Ok(report)
}

/// Whether `file_name` carries the extension the codec writes
fn matches_codec(file_name: &str, codec: &dyn ImageCodec) -> bool {
    Path::new(file_name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(codec.extension()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconTarget;
    use crate::render::{PngCodec, ResvgRasterizer};
    use image::RgbaImage;

    const DOT: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="32" height="32">
        <circle cx="16" cy="16" r="10" fill="#cc3300"/>
    </svg>"##;

    /// Rasterizer that counts calls, to prove nothing ran
    struct CountingRasterizer {
        calls: std::cell::Cell<usize>,
    }

    impl VectorRasterizer for CountingRasterizer {
        fn name(&self) -> &str {
            "counting"
        }

        fn rasterize(&self, _source: &VectorSource, width: u32, height: u32) -> Result<RgbaImage> {
            self.calls.set(self.calls.get() + 1);
            Ok(RgbaImage::new(width, height))
        }
    }

    fn config_in(dir: &Path) -> Config {
        let source = dir.join("icon.svg");
        fs::write(&source, DOT).unwrap();

        let mut config = Config::default();
        config.source.path = source;
        config.output.directory = dir.join("out").join("icons");
        config.output.icons = vec![IconTarget::new("big.png", 64), IconTarget::new("small.png", 16)];
        config
    }

    #[test]
    fn test_writes_every_target() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let report = run(&config, &ResvgRasterizer::without_system_fonts(), &PngCodec).unwrap();

        assert_eq!(report.icons.len(), 2);
        for (icon, expected) in report.icons.iter().zip([64, 16]) {
            assert_eq!(icon.size, expected);
            let image = PngCodec.load(&icon.path).unwrap();
            assert_eq!(image.dimensions(), (expected, expected));
            assert_eq!(icon.bytes, fs::metadata(&icon.path).unwrap().len());
        }
        assert_eq!(report.output_dir, config.output.directory);
    }

    #[test]
    fn test_matches_codec_extension() {
        assert!(matches_codec("app_icon.png", &PngCodec));
        assert!(matches_codec("APP_ICON.PNG", &PngCodec));
        assert!(!matches_codec("app_icon.jpg", &PngCodec));
        assert!(!matches_codec("app_icon", &PngCodec));
    }

    #[test]
    fn test_missing_source_aborts_before_work() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.source.path = dir.path().join("nope.svg");
        let rasterizer = CountingRasterizer {
            calls: std::cell::Cell::new(0),
        };

        let err = run(&config, &rasterizer, &PngCodec).unwrap_err();
        assert!(matches!(err, Error::SourceUnavailable(_)));
        assert_eq!(rasterizer.calls.get(), 0);
        assert!(!config.output.directory.exists());
    }

    #[test]
    fn test_bad_padding_aborts_before_work() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.style.padding_percent = 60.0;
        let rasterizer = CountingRasterizer {
            calls: std::cell::Cell::new(0),
        };

        let err = run(&config, &rasterizer, &PngCodec).unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(rasterizer.calls.get(), 0);
        assert!(!config.output.directory.exists());
    }

    #[test]
    fn test_stops_at_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        // A directory named like a target makes that write fail
        config.output.icons.push(IconTarget::new("blocked.png", 8));
        config.output.icons.push(IconTarget::new("never.png", 8));
        fs::create_dir_all(config.output.directory.join("blocked.png")).unwrap();

        let err = run(&config, &ResvgRasterizer::without_system_fonts(), &PngCodec).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(config.output.directory.join("big.png").exists());
        assert!(!config.output.directory.join("never.png").exists());
    }
}
