// Error types for playwright-manager

use crate::resource::{CreationFlag, ResourceKind};
use thiserror::Error;

/// Result type alias for playwright-manager operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when managing Playwright resources
#[derive(Debug, Error)]
pub enum Error {
    /// A resource was requested before its upstream resource existed
    ///
    /// Browsers are created from a Connection and Contexts from a Browser.
    /// Either create the upstream resource first or pass an explicit
    /// instance in `CreateParams`.
    #[error(
        "{upstream} instance is not initialized. \
        Create a {upstream} before creating a {resource}."
    )]
    DependencyMissing {
        resource: ResourceKind,
        upstream: ResourceKind,
    },

    /// Unrecognized browser-type selector in `LaunchOption`
    ///
    /// Supported selectors: "chromium", "chrome", "msedge", "firefox", "webkit".
    #[error("Unsupported browser: {0}")]
    UnsupportedBrowser(String),

    /// A creation flag was passed that does not apply to the resource kind
    ///
    /// For example `NewBrowserInstance` while creating a Connection. Pass
    /// the flag matching the kind, or no flag to reuse the tracked instance.
    #[error("Invalid creation flag {flag} passed while creating a {kind} resource")]
    InvalidFlag {
        kind: ResourceKind,
        flag: CreationFlag,
    },

    /// Failure surfaced by the underlying automation engine
    ///
    /// Covers both startup failures (connection startup is retried once
    /// before this propagates) and release failures during close, which are
    /// surfaced even after tracking state has been cleared.
    #[error("Engine error: {0}")]
    Engine(String),
}
