use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageReader};

use crate::error::{CellsortError, Result};

/// List the images directly inside `dir`, sorted by file name.
///
/// Only regular files whose extension matches one of `extensions`
/// (case-insensitive, without the leading dot) are returned.
pub fn list_images(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| CellsortError::InputDirectory {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut images = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CellsortError::InputDirectory {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && has_accepted_extension(&path, extensions) {
            images.push(path);
        }
    }

    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(images)
}

pub fn has_accepted_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            extensions
                .iter()
                .any(|accepted| accepted.trim_start_matches('.').eq_ignore_ascii_case(ext))
        })
}

/// File name without its extension, used to namespace exported crops.
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Decode an image, sniffing the format from its contents rather than
/// trusting the extension.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(image)
}
