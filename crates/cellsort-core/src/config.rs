use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_EXTENSIONS, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, DEFAULT_INPUT_DIR,
    DEFAULT_MAX_DISPLAY_HEIGHT, DEFAULT_MAX_DISPLAY_WIDTH, DEFAULT_OUTPUT_DIR,
    DEFAULT_WINDOW_HEIGHT_FRACTION, DEFAULT_WINDOW_WIDTH_FRACTION, MAX_GRID_CELLS,
};
use crate::error::{CellsortError, Result};
use crate::label::Label;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub grid: GridConfig,
    pub display: DisplayConfig,
    pub labels: Vec<LabelConfig>,
    pub keys: KeyBindings,
    /// Accepted input extensions, compared case-insensitively.
    pub extensions: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            grid: GridConfig::default(),
            display: DisplayConfig::default(),
            labels: vec![
                LabelConfig::new("healthy", 'h', [0, 255, 0]),
                LabelConfig::new("damaged", 'd', [255, 0, 0]),
            ],
            keys: KeyBindings::default(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: u32,
    pub cols: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_GRID_ROWS,
            cols: DEFAULT_GRID_COLS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Cap on the rendered image width in pixels.
    pub max_width: u32,
    /// Cap on the rendered image height in pixels.
    pub max_height: u32,
    pub window_width_fraction: f32,
    pub window_height_fraction: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_DISPLAY_WIDTH,
            max_height: DEFAULT_MAX_DISPLAY_HEIGHT,
            window_width_fraction: DEFAULT_WINDOW_WIDTH_FRACTION,
            window_height_fraction: DEFAULT_WINDOW_HEIGHT_FRACTION,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelConfig {
    pub name: Label,
    /// Key that arms this label.
    pub key: char,
    /// Outline color of cells carrying this label, RGB.
    pub color: [u8; 3],
}

impl LabelConfig {
    pub fn new(name: &str, key: char, color: [u8; 3]) -> Self {
        Self {
            name: Label::new(name),
            key,
            color,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub save: char,
    pub skip: char,
    pub exit: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            save: 's',
            skip: 'q',
            exit: 'x',
        }
    }
}

/// Action bound to a key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Arm(Label),
    Save,
    Skip,
    Exit,
}

impl SessionConfig {
    /// Resolve a key press to its bound action. Letter keys match regardless
    /// of case.
    pub fn command_for(&self, key: char) -> Option<Command> {
        let key = key.to_ascii_lowercase();
        let matches = |bound: char| bound.to_ascii_lowercase() == key;

        if let Some(label) = self.labels.iter().find(|l| matches(l.key)) {
            return Some(Command::Arm(label.name.clone()));
        }
        if matches(self.keys.save) {
            Some(Command::Save)
        } else if matches(self.keys.skip) {
            Some(Command::Skip)
        } else if matches(self.keys.exit) {
            Some(Command::Exit)
        } else {
            None
        }
    }

    pub fn label_names(&self) -> Vec<Label> {
        self.labels.iter().map(|l| l.name.clone()).collect()
    }

    pub fn label_color(&self, label: &Label) -> Option<[u8; 3]> {
        self.labels.iter().find(|l| &l.name == label).map(|l| l.color)
    }

    /// One-line usage hint built from the key bindings.
    pub fn instructions(&self) -> String {
        let mut parts: Vec<String> = self
            .labels
            .iter()
            .map(|l| format!("[{}] {}", l.key, capitalize(l.name.as_str())))
            .collect();
        parts.push("[Click] Select/Toggle".to_string());
        parts.push(format!("[{}] Save", self.keys.save));
        parts.push(format!("[{}] Skip", self.keys.skip));
        parts.push(format!("[{}] Exit", self.keys.exit));
        parts.join("   ")
    }

    /// Reject configurations the session cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.grid.rows == 0 || self.grid.cols == 0 {
            return Err(invalid(format!(
                "grid must have at least one row and column (got {}x{})",
                self.grid.rows, self.grid.cols
            )));
        }
        match self.grid.rows.checked_mul(self.grid.cols) {
            Some(cells) if cells <= MAX_GRID_CELLS => {}
            _ => {
                return Err(invalid(format!(
                    "grid {}x{} exceeds {MAX_GRID_CELLS} cells",
                    self.grid.rows, self.grid.cols
                )))
            }
        }
        if self.display.max_width == 0 || self.display.max_height == 0 {
            return Err(invalid("display caps must be > 0"));
        }
        for (name, frac) in [
            ("window_width_fraction", self.display.window_width_fraction),
            ("window_height_fraction", self.display.window_height_fraction),
        ] {
            if !(frac > 0.0 && frac <= 1.0) {
                return Err(invalid(format!("{name} must be in (0, 1], got {frac}")));
            }
        }
        if self.labels.is_empty() {
            return Err(invalid("at least one label is required"));
        }
        if self.extensions.is_empty() {
            return Err(invalid("at least one input extension is required"));
        }

        let mut names = HashSet::new();
        for label in &self.labels {
            let name = label.name.as_str();
            if !is_safe_dir_name(name) {
                return Err(invalid(format!(
                    "label name {name:?} is not usable as a directory name"
                )));
            }
            if !names.insert(name) {
                return Err(invalid(format!("duplicate label {name:?}")));
            }
        }

        let mut keys = HashSet::new();
        let bound = self
            .labels
            .iter()
            .map(|l| l.key)
            .chain([self.keys.save, self.keys.skip, self.keys.exit]);
        for key in bound {
            if !keys.insert(key.to_ascii_lowercase()) {
                return Err(invalid(format!("key {key:?} is bound more than once")));
            }
        }

        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> CellsortError {
    CellsortError::InvalidConfig(msg.into())
}

fn is_safe_dir_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && !name.chars().any(char::is_control)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
