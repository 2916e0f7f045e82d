// Options for the diagnostic tracing session attached to a Context.
//
// Tracing is started when a context is created and stopped as a pre-close
// side effect when the context is closed.

use serde::{Deserialize, Serialize};

/// Options for starting a tracing session on a context.
///
/// Every field defaults to the engine's own default when unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TracingStartOption {
    /// Capture a screenshot per action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshots: Option<bool>,

    /// Capture DOM snapshots per action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshots: Option<bool>,

    /// Include source files in the trace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<bool>,

    /// Trace name, used as a prefix for intermediate trace files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Title shown in the trace viewer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl TracingStartOption {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture a screenshot per action.
    pub fn screenshots(mut self, enabled: bool) -> Self {
        self.screenshots = Some(enabled);
        self
    }

    /// Capture DOM snapshots per action.
    pub fn snapshots(mut self, enabled: bool) -> Self {
        self.snapshots = Some(enabled);
        self
    }

    /// Include source files in the trace.
    pub fn sources(mut self, enabled: bool) -> Self {
        self.sources = Some(enabled);
        self
    }

    /// Set the trace name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the trace viewer title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Options for stopping a tracing session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TracingStopOption {
    /// Export the trace to this file path. When unset the trace is
    /// discarded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl TracingStopOption {
    pub fn new() -> Self {
        Self::default()
    }

    /// Export the trace to the given file path.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}
