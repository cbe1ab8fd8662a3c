use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CellsortError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Cannot read input directory {}: {source}", .path.display())]
    InputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot create output session at {}: {source}", .path.display())]
    OutputSession {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Label directory does not exist: {}", .0.display())]
    MissingLabelDirectory(PathBuf),

    #[error("Cell index {cell} out of range (total: {total})")]
    CellIndexOutOfRange { cell: usize, total: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CellsortError>;
