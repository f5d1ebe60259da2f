//! Scheduling error types.

use thiserror::Error;

/// Errors raised by the plugin surface around the pickers.
///
/// Picking itself never fails; an empty candidate list is a valid
/// empty result, not an error.
#[derive(Debug, Error)]
pub enum SchedulingError {
    #[error("unknown picker: {0}")]
    UnknownPicker(String),

    #[error("picker already registered: {0}")]
    DuplicatePicker(String),

    #[error("invalid scheduler config: {0}")]
    Config(String),
}

pub type SchedulingResult<T> = Result<T, SchedulingError>;
