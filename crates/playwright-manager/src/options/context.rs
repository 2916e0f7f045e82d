// Options for creating a Context from a Browser.

use serde::{Deserialize, Serialize};

/// Browser viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Options applied when creating an isolated browsing context.
///
/// Every field defaults to the engine's own default when unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextOption {
    /// Fixed viewport for all pages in the context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,

    /// Base URL used when navigating with relative paths.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// User agent string for all pages in the context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Ignore HTTPS certificate errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_https_errors: Option<bool>,
}

impl ContextOption {
    /// Creates a new `ContextOption` with engine defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a fixed viewport for all pages in the context.
    pub fn viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport = Some(Viewport { width, height });
        self
    }

    /// Set the base URL for relative navigation.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Ignore HTTPS certificate errors.
    pub fn ignore_https_errors(mut self, enabled: bool) -> Self {
        self.ignore_https_errors = Some(enabled);
        self
    }
}
