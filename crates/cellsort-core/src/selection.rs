use std::collections::BTreeMap;
use std::fmt;

use crate::label::Label;

/// Result of applying a click to a cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected { cell: usize, label: Label },
    Deselected { cell: usize, label: Label },
    Relabeled { cell: usize, from: Label, to: Label },
}

impl fmt::Display for ClickOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selected { cell, label } => write!(f, "Selected cell {cell} as {label}"),
            Self::Deselected { cell, .. } => write!(f, "Deselected cell {cell}"),
            Self::Relabeled { cell, to, .. } => {
                write!(f, "Updated label for cell {cell} to {to}")
            }
        }
    }
}

/// Labels assigned to the cells of the current image, ordered by cell index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    cells: BTreeMap<usize, Label>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle or relabel `cell` with the armed label.
    ///
    /// Absent cells are selected, cells already carrying `armed` are
    /// deselected, cells carrying another label are relabeled.
    pub fn apply_click(&mut self, cell: usize, armed: &Label) -> ClickOutcome {
        match self.cells.get(&cell) {
            None => {
                self.cells.insert(cell, armed.clone());
                ClickOutcome::Selected {
                    cell,
                    label: armed.clone(),
                }
            }
            Some(current) if current == armed => {
                let label = current.clone();
                self.cells.remove(&cell);
                ClickOutcome::Deselected { cell, label }
            }
            Some(current) => {
                let from = current.clone();
                self.cells.insert(cell, armed.clone());
                ClickOutcome::Relabeled {
                    cell,
                    from,
                    to: armed.clone(),
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn get(&self, cell: usize) -> Option<&Label> {
        self.cells.get(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Label)> {
        self.cells.iter().map(|(c, l)| (*c, l))
    }

    /// Number of selected cells carrying `label`.
    pub fn count_of(&self, label: &Label) -> usize {
        self.cells.values().filter(|l| *l == label).count()
    }
}

impl FromIterator<(usize, Label)> for Selection {
    fn from_iter<T: IntoIterator<Item = (usize, Label)>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
