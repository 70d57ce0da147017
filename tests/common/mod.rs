#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub fn fixture_csv() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/pm_data.csv")
}

/// A TrueType font to render with: `PM_POSTER_TEST_FONT`, or a common system font.
/// Rendering tests are skipped when none is found.
pub fn test_font() -> Option<PathBuf> {
    if let Some(p) = std::env::var_os("PM_POSTER_TEST_FONT") {
        let p = PathBuf::from(p);
        if p.is_file() {
            return Some(p);
        }
    }
    [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "/Library/Fonts/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .find(|p| p.is_file())
}

/// Write a plain template big enough for the default layout.
pub fn write_template(path: &Path) {
    let img = image::RgbaImage::from_pixel(1200, 900, image::Rgba([250, 250, 245, 255]));
    img.save(path).unwrap();
}

pub fn png_files(dir: &Path) -> Vec<PathBuf> {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("png"))
        .collect()
}
