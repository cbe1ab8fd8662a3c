#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::{DynamicImage, Rgb, RgbImage};

use cellsort_core::config::SessionConfig;
use cellsort_core::label::Label;
use cellsort_core::output::OutputSession;

/// Build an RGB image where each pixel encodes its position, so crops can be
/// checked against their source region.
pub fn gradient_image(width: u32, height: u32) -> DynamicImage {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    DynamicImage::ImageRgb8(img)
}

/// Write a gradient PNG into `dir` and return its path.
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    gradient_image(width, height)
        .save_with_format(&path, image::ImageFormat::Png)
        .unwrap();
    path
}

pub fn healthy() -> Label {
    Label::new("healthy")
}

pub fn damaged() -> Label {
    Label::new("damaged")
}

pub fn default_output(base: &Path) -> OutputSession {
    let config = SessionConfig::default();
    OutputSession::create(base, &config.label_names(), "2025-04-19_12-00-00").unwrap()
}

/// Number of regular files directly inside `dir`.
pub fn file_count(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .filter(|e| e.path().is_file())
                .count()
        })
        .unwrap_or(0)
}
