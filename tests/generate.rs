use launcher_icons::{batch, Config, IconTarget, ImageCodec, PngCodec, ResvgRasterizer};
use std::fs;
use std::path::Path;
use std::process::Command;

// Visible artwork only in the top-left quadrant
const QUADRANT_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="154" height="154" viewBox="0 0 154 154">
    <rect x="10" y="10" width="60" height="40" fill="#2040ff"/>
</svg>"##;

fn write_project(dir: &Path) {
    fs::create_dir_all(dir.join("art")).unwrap();
    fs::write(dir.join("art/logo.svg"), QUADRANT_SVG).unwrap();
    fs::write(
        dir.join("launcher-icons.toml"),
        r##"
[source]
path = "art/logo.svg"

[output]
directory = "generated"

[[output.icons]]
file_name = "app_icon_192.png"
size = 192

[[output.icons]]
file_name = "app_icon_48.png"
size = 48

[style]
padding_percent = 10.0
background_color = "#00000000"
"##,
    )
    .unwrap();
}

#[test]
fn config_file_drives_full_run() {
    let dir = tempfile::tempdir().unwrap();
    write_project(dir.path());

    let config = Config::load_from(&dir.path().join("launcher-icons.toml")).unwrap();
    let report = batch::run(&config, &ResvgRasterizer::without_system_fonts(), &PngCodec).unwrap();

    assert_eq!(report.icons.len(), 2);
    assert_eq!(report.output_dir, dir.path().join("generated"));

    let icon = PngCodec.load(&dir.path().join("generated/app_icon_192.png")).unwrap();
    assert_eq!(icon.dimensions(), (192, 192));

    // Transparent 19px padding band
    for (x, y, pixel) in icon.enumerate_pixels() {
        if x < 19 || y < 19 || x >= 173 || y >= 173 {
            assert_eq!(pixel[3], 0, "padding pixel at {x},{y}");
        }
    }

    // 60x40 artwork fitted to 154x102 and centered
    let painted: Vec<(u32, u32)> = icon
        .enumerate_pixels()
        .filter(|(_, _, p)| p[3] > 0)
        .map(|(x, y, _)| (x, y))
        .collect();
    let left = painted.iter().map(|p| p.0).min().unwrap();
    let right = painted.iter().map(|p| p.0).max().unwrap();
    let top = painted.iter().map(|p| p.1).min().unwrap();
    let bottom = painted.iter().map(|p| p.1).max().unwrap();
    assert_eq!((left, right), (19, 172));
    assert_eq!((top, bottom), (45, 146));

    let small = PngCodec.load(&dir.path().join("generated/app_icon_48.png")).unwrap();
    assert_eq!(small.dimensions(), (48, 48));
}

#[test]
fn default_targets_are_all_written() {
    let dir = tempfile::tempdir().unwrap();
    write_project(dir.path());

    let mut config = Config::default();
    config.source.path = dir.path().join("art/logo.svg");
    config.output.directory = dir.path().join("all");
    config.style.padding_percent = 5.0;

    batch::run(&config, &ResvgRasterizer::without_system_fonts(), &PngCodec).unwrap();

    for IconTarget { file_name, size } in Config::default().output.icons {
        let image = PngCodec.load(&dir.path().join("all").join(&file_name)).unwrap();
        assert_eq!(image.dimensions(), (size, size), "{file_name}");
        // Opaque white background outside the artwork
        assert_eq!(image.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }
}

#[test]
fn binary_reports_each_file_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    write_project(dir.path());

    let output = Command::new(env!("CARGO_BIN_EXE_launcher-icons"))
        .current_dir(dir.path())
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("app_icon_192.png (192x192, padding: 10%)"), "{stdout}");
    assert!(stdout.contains("app_icon_48.png (48x48, padding: 10%)"), "{stdout}");
    assert!(stdout.contains("All icons generated in:"), "{stdout}");
    assert!(dir.path().join("generated/app_icon_48.png").is_file());
}

#[test]
fn binary_fails_on_missing_source() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_launcher-icons"))
        .current_dir(dir.path())
        .arg("missing.svg")
        .arg("--output")
        .arg("out")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("SVG file not found"), "{stderr}");
    assert!(!dir.path().join("out").exists());
}

#[test]
fn binary_rejects_padding_of_fifty_percent() {
    let dir = tempfile::tempdir().unwrap();
    write_project(dir.path());

    let output = Command::new(env!("CARGO_BIN_EXE_launcher-icons"))
        .current_dir(dir.path())
        .args(["--padding", "50"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("padding must be between 0 and 50 percent"), "{stderr}");
    assert!(!dir.path().join("generated").exists());
}
