//! Scenario YAML parsing.
//!
//! A scenario bundles everything one planning run needs:
//! - Shared origin
//! - Risk field (ASCII rows or numeric values, plus per-cell overrides)
//! - Target list
//! - Optional planner overrides
//!
//! ```yaml
//! name: courtyard
//! origin: { x: 1, y: 1 }
//! risk_field:
//!   min: { x: 0, y: 0 }
//!   rows:
//!     - "......"
//!     - "..#~.."
//!   cells:
//!     - { x: 4, y: 0, risk: 0.5 }
//! targets:
//!   - { name: gate, goal: { x: 5, y: 1 } }
//! planner:
//!   length_budget: 40.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::PlannerConfig;
use crate::core::GridCoord;
use crate::error::{MargaError, Result};
use crate::grid::RiskField;
use crate::mission::Target;

/// A planning scenario loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scenario {
    /// Human-readable scenario name
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: String,

    /// Shared origin of every path
    pub origin: GridCoord,

    /// Risk field layout
    pub risk_field: RiskFieldSpec,

    /// Targets to plan for
    pub targets: Vec<Target>,

    /// Planner overrides; replaces the global planner section when present
    #[serde(default)]
    pub planner: Option<PlannerConfig>,
}

/// Risk field description
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RiskFieldSpec {
    /// Coordinate of the first row's first cell
    #[serde(default)]
    pub min: GridCoord,

    /// ASCII rows (`.` clear, `#` impassable, `~` penalty 1, digits raw)
    #[serde(default)]
    pub rows: Option<Vec<String>>,

    /// Numeric rows
    #[serde(default)]
    pub values: Option<Vec<Vec<f64>>>,

    /// Per-cell overrides applied after the rows
    #[serde(default)]
    pub cells: Vec<CellOverride>,
}

/// Single cell risk override
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CellOverride {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
    /// Raw risk value
    pub risk: f64,
}

impl RiskFieldSpec {
    /// Build the dense field
    pub fn build(&self) -> Result<RiskField> {
        let mut field = match (&self.rows, &self.values) {
            (Some(rows), None) => RiskField::from_ascii(self.min, rows.as_slice())?,
            (None, Some(values)) => RiskField::from_rows(self.min, values)?,
            (Some(_), Some(_)) => {
                return Err(MargaError::RiskField(
                    "specify either `rows` or `values`, not both".to_string(),
                ));
            }
            (None, None) => {
                return Err(MargaError::RiskField(
                    "one of `rows` or `values` is required".to_string(),
                ));
            }
        };

        for cell in &self.cells {
            field.set(GridCoord::new(cell.x, cell.y), cell.risk)?;
        }

        Ok(field)
    }
}

impl Scenario {
    /// Load a scenario from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse a scenario from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let scenario: Scenario = serde_yaml::from_str(yaml)?;
        if scenario.targets.is_empty() {
            return Err(MargaError::Config(format!(
                "scenario '{}' has no targets",
                scenario.name
            )));
        }
        Ok(scenario)
    }

    /// Build the risk field
    pub fn build_field(&self) -> Result<RiskField> {
        self.risk_field.build()
    }

    /// Fresh targets with empty path slots
    pub fn targets(&self) -> Vec<Target> {
        self.targets
            .iter()
            .map(|t| Target::new(t.name.clone(), t.goal))
            .collect()
    }

    /// Scenario planner settings, or `base` when the scenario has none
    pub fn planner_config(&self, base: &PlannerConfig) -> Result<PlannerConfig> {
        let config = self.planner.clone().unwrap_or_else(|| base.clone());
        config.validate()?;
        Ok(config)
    }
}
