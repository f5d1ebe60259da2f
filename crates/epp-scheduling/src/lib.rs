//! epp-scheduling — picker plugins for the endpoint picker scheduler.
//!
//! Upstream filters and scorers produce a list of [`ScoredPod`]s; a
//! [`Picker`] chooses exactly one of them per request. Pickers are
//! plugins resolved by name through a [`PickerRegistry`], so the
//! surrounding scheduler never depends on a concrete strategy.
//!
//! # Architecture
//!
//! ```text
//! SchedulerConfig ([picker].name)
//!   └── PickerRegistry (name → Arc<dyn Picker>)
//!       └── RoundRobinPicker ("roundrobin", lock-free counter)
//! ```
//!
//! An empty candidate list is not an error: pickers return an empty
//! [`PickResult`] and the caller decides what that means.

pub mod config;
pub mod error;
pub mod picker;
pub mod plugins;
pub mod registry;
pub mod types;

pub use config::{PickerConfig, SchedulerConfig};
pub use error::{SchedulingError, SchedulingResult};
pub use picker::{ROUND_ROBIN_PICKER, RoundRobinPicker};
pub use plugins::{Picker, Plugin};
pub use registry::PickerRegistry;
pub use types::{PickResult, Pod, SchedulingContext, ScoredPod};
