use std::fs;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

use crate::consts::JPEG_QUALITY;
use crate::error::{CellsortError, Result};
use crate::grid::{CellRect, GridGeometry};
use crate::label::{Label, SessionCounters};
use crate::selection::Selection;

/// A crop that could not be written.
#[derive(Debug)]
pub struct ExportFailure {
    pub cell: usize,
    pub label: Label,
    pub path: PathBuf,
    pub error: CellsortError,
}

/// Outcome of exporting one image's selection.
#[derive(Debug, Default)]
pub struct ExportReport {
    /// Number of crops written.
    pub written: usize,
    pub failures: Vec<ExportFailure>,
}

/// `<root>/<label>/<base_name>_cell<cell>.jpg`
pub fn crop_path(root: &Path, label: &Label, base_name: &str, cell: usize) -> PathBuf {
    root.join(label.as_str())
        .join(format!("{base_name}_cell{cell}.jpg"))
}

/// Write one JPEG per selected cell and bump the label counters.
///
/// Label directories must already exist; a missing one is reported as a
/// failure for every crop targeting it. Failures never stop the remaining
/// writes.
pub fn export_selections(
    image: &DynamicImage,
    geometry: &GridGeometry,
    selection: &Selection,
    root: &Path,
    base_name: &str,
    counters: &mut SessionCounters,
) -> ExportReport {
    let mut report = ExportReport::default();

    for (cell, label) in selection.iter() {
        let path = crop_path(root, label, base_name, cell);
        let result = match geometry.cell(cell) {
            Some(rect) => write_crop(image, rect, &path),
            None => Err(CellsortError::CellIndexOutOfRange {
                cell,
                total: geometry.len(),
            }),
        };

        match result {
            Ok(()) => {
                counters.increment(label);
                report.written += 1;
                tracing::debug!("Wrote {}", path.display());
            }
            Err(error) => {
                tracing::warn!("Failed to write {}: {error}", path.display());
                report.failures.push(ExportFailure {
                    cell,
                    label: label.clone(),
                    path,
                    error,
                });
            }
        }
    }

    report
}

/// Crop `rect` out of `image` and save it as a quality-100 JPEG at `path`.
pub fn write_crop(image: &DynamicImage, rect: &CellRect, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.is_dir() {
            return Err(CellsortError::MissingLabelDirectory(dir.to_path_buf()));
        }
    }

    // JPEG has no alpha and only 8-bit samples.
    let crop = image
        .crop_imm(rect.x1, rect.y1, rect.width(), rect.height())
        .to_rgb8();

    // Encode in memory so a failed encode leaves no partial file behind.
    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY).encode_image(&crop)?;
    fs::write(path, buf)?;
    Ok(())
}
