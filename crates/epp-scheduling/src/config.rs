//! Scheduler TOML configuration.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{SchedulingError, SchedulingResult};
use crate::picker::ROUND_ROBIN_PICKER;
use crate::plugins::Picker;
use crate::registry::PickerRegistry;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchedulerConfig {
    #[serde(default)]
    pub picker: PickerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Registry name of the picker to use.
    #[serde(default = "default_picker_name")]
    pub name: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            name: default_picker_name(),
        }
    }
}

fn default_picker_name() -> String {
    ROUND_ROBIN_PICKER.to_string()
}

impl SchedulerConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&content)?)
    }

    pub fn from_toml_str(content: &str) -> SchedulingResult<Self> {
        toml::from_str(content).map_err(|e| SchedulingError::Config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Resolve the configured picker from `registry`.
    pub fn resolve_picker(&self, registry: &PickerRegistry) -> SchedulingResult<Arc<dyn Picker>> {
        registry.get(&self.picker.name)
    }
}
