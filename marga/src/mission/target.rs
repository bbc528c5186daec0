//! Named planning targets.

use serde::{Deserialize, Serialize};

use crate::core::GridCoord;

/// A named goal cell with a slot for its final path
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Identifying name
    pub name: String,
    /// Goal cell
    pub goal: GridCoord,
    /// Final path, once planned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<GridCoord>>,
}

impl Target {
    /// Create a target with no path yet
    pub fn new(name: impl Into<String>, goal: GridCoord) -> Self {
        Self {
            name: name.into(),
            goal,
            path: None,
        }
    }

    /// Record the final path. A second call replaces the first.
    pub fn set_path(&mut self, path: Vec<GridCoord>) {
        self.path = Some(path);
    }

    /// Has a path been recorded?
    pub fn has_path(&self) -> bool {
        self.path.is_some()
    }
}
