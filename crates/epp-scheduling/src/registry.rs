//! Picker registry — resolves picker names to shared instances.
//!
//! The registry is filled once at startup and then only read. A lookup
//! hands out the same `Arc` every time, so all callers share the
//! picker's rotation state.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::{SchedulingError, SchedulingResult};
use crate::picker::RoundRobinPicker;
use crate::plugins::Picker;

/// Name-keyed set of pickers.
#[derive(Default)]
pub struct PickerRegistry {
    pickers: HashMap<&'static str, Arc<dyn Picker>>,
}

impl PickerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the built-in pickers.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry
            .pickers
            .insert(crate::picker::ROUND_ROBIN_PICKER, Arc::new(RoundRobinPicker::new()));
        registry
    }

    /// Register a picker under its own name.
    pub fn register(&mut self, picker: Arc<dyn Picker>) -> SchedulingResult<()> {
        let name = picker.name();
        if self.pickers.contains_key(name) {
            return Err(SchedulingError::DuplicatePicker(name.to_string()));
        }
        debug!(picker = name, "registered picker");
        self.pickers.insert(name, picker);
        Ok(())
    }

    /// Look up a picker by name.
    pub fn get(&self, name: &str) -> SchedulingResult<Arc<dyn Picker>> {
        self.pickers
            .get(name)
            .cloned()
            .ok_or_else(|| SchedulingError::UnknownPicker(name.to_string()))
    }

    /// Registered picker names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.pickers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.pickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pickers.is_empty()
    }
}

impl std::fmt::Debug for PickerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickerRegistry")
            .field("pickers", &self.names())
            .finish()
    }
}
