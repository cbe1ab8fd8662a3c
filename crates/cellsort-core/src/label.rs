use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A categorical label assigned to grid cells. Also the name of the output
/// subdirectory crops with this label are written to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Running per-label total of exported crops for the whole run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionCounters(BTreeMap<Label, usize>);

impl SessionCounters {
    /// Start every label at zero so the summary lists labels with no crops.
    pub fn new<'a>(labels: impl IntoIterator<Item = &'a Label>) -> Self {
        Self(labels.into_iter().map(|l| (l.clone(), 0)).collect())
    }

    pub fn increment(&mut self, label: &Label) {
        *self.0.entry(label.clone()).or_insert(0) += 1;
    }

    pub fn get(&self, label: &Label) -> usize {
        self.0.get(label).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Label, usize)> {
        self.0.iter().map(|(l, n)| (l, *n))
    }
}
