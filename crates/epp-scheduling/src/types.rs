//! Scheduling data types shared by every picker.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A backend target that can serve inference traffic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pod {
    pub name: String,
    pub namespace: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
}

impl Pod {
    pub fn new(name: &str, namespace: &str, address: &str) -> Self {
        Self {
            name: name.to_string(),
            namespace: namespace.to_string(),
            address: address.to_string(),
            labels: HashMap::new(),
        }
    }

    /// `namespace/name`, the key used in logs and tallies.
    pub fn namespaced_name(&self) -> String {
        format!("{}/{}", self.namespace, self.name)
    }
}

/// A pod together with the score assigned by the upstream scorers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPod {
    pub pod: Pod,
    #[serde(default)]
    pub score: f64,
}

impl ScoredPod {
    pub fn new(pod: Pod, score: f64) -> Self {
        Self { pod, score }
    }
}

/// Per-request execution context handed to pickers.
///
/// Carries nothing that influences the selection; the fields only
/// annotate diagnostic output.
#[derive(Debug, Clone, Default)]
pub struct SchedulingContext {
    pub request_id: String,
    pub target_model: Option<String>,
}

impl SchedulingContext {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            target_model: None,
        }
    }

    pub fn with_target_model(mut self, model: impl Into<String>) -> Self {
        self.target_model = Some(model.into());
        self
    }
}

/// Outcome of a single pick.
///
/// `target_pod` is `None` when there was nothing to choose from. The
/// selected pod borrows from the candidate list passed to the picker.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PickResult<'a> {
    pub target_pod: Option<&'a ScoredPod>,
}

impl<'a> PickResult<'a> {
    pub fn empty() -> Self {
        Self { target_pod: None }
    }

    pub fn selected(pod: &'a ScoredPod) -> Self {
        Self {
            target_pod: Some(pod),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.target_pod.is_none()
    }
}
