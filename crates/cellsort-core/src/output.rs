use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::{SESSION_DIR_PREFIX, SESSION_TIMESTAMP_FORMAT};
use crate::error::{CellsortError, Result};
use crate::label::Label;

/// Destination root of one run: `<base>/session_<timestamp>/<label>/`.
#[derive(Clone, Debug)]
pub struct OutputSession {
    root: PathBuf,
}

impl OutputSession {
    /// Create a session folder stamped with the current local time.
    pub fn create_now(base: &Path, labels: &[Label]) -> Result<Self> {
        let stamp = chrono::Local::now()
            .format(SESSION_TIMESTAMP_FORMAT)
            .to_string();
        Self::create(base, labels, &stamp)
    }

    /// Create `<base>/session_<stamp>` and one subfolder per label. Existing
    /// folders are reused.
    pub fn create(base: &Path, labels: &[Label], stamp: &str) -> Result<Self> {
        let root = base.join(format!("{SESSION_DIR_PREFIX}{stamp}"));
        create_dir(&root)?;
        for label in labels {
            create_dir(&root.join(label.as_str()))?;
        }
        tracing::info!("Output session: {}", root.display());
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn label_dir(&self, label: &Label) -> PathBuf {
        self.root.join(label.as_str())
    }
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| CellsortError::OutputSession {
        path: path.to_path_buf(),
        source,
    })
}
