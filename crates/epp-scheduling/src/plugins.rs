//! Plugin capability traits.
//!
//! Every scheduling strategy is a [`Plugin`] identified by a constant
//! name. The registry dispatches on that name, never on the concrete
//! type.

use crate::types::{PickResult, SchedulingContext, ScoredPod};

/// Common capability of all scheduling plugins.
pub trait Plugin: Send + Sync {
    /// Constant identifier used for registry lookup.
    fn name(&self) -> &'static str;
}

/// Selects one target out of the scored candidates.
pub trait Picker: Plugin {
    /// Pick a pod from `candidates`.
    ///
    /// Must not block and must not fail. An empty candidate list yields
    /// an empty [`PickResult`].
    fn pick<'a>(&self, ctx: &SchedulingContext, candidates: &'a [ScoredPod]) -> PickResult<'a>;
}
