//! Main MargaConfig and loading methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::planner::PlannerConfig;
use crate::error::Result;

/// Default config location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "configs/marga.yaml";

/// Full marga configuration loaded from YAML
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MargaConfig {
    /// Planner settings
    #[serde(default)]
    pub planner: PlannerConfig,
}

impl MargaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load from the default config path, falling back to defaults
    pub fn load_default() -> Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: MargaConfig = serde_yaml::from_str(yaml)?;
        config.planner.validate()?;
        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
