//! Built-in pickers.

pub mod round_robin;

pub use round_robin::{ROUND_ROBIN_PICKER, RoundRobinPicker};
