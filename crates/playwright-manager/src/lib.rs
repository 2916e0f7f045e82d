//! playwright-manager: lifecycle management for Playwright resources
//!
//! This crate orchestrates the three-tier hierarchy of browser-automation
//! resources used to drive UI test suites: a driver **Connection**, a
//! **Browser** process handle, and an isolated **Context**. It does not do
//! automation itself; the underlying engine is reached through the narrow
//! traits in [`engine`] and only asked to connect, launch, create contexts,
//! start/stop tracing, and close.
//!
//! What the manager decides:
//! - **Reuse vs. create**: Connection and Browser are singletons by
//!   default; an already-tracked instance is returned unless a
//!   [`CreationFlag`] forces a fresh one. Contexts are always fresh.
//! - **Option resolution**: every option is picked through the chain
//!   explicit argument -> value stored by the last creation of that kind ->
//!   built-in default.
//! - **Startup retry**: connection startup is retried once after a
//!   five-second delay, because driver initialization is observed to fail
//!   transiently.
//! - **Teardown side effects**: closing a Context stops its tracing session
//!   first; closing any resource removes only its own tracking state, never
//!   its dependents'.
//!
//! # Example
//!
//! ```ignore
//! use playwright_manager::{
//!     CreateParams, LaunchOption, Resource, ResourceKind, ResourceManager,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let manager = ResourceManager::new(engine); // engine: Arc<dyn Engine>
//!
//!     // Default options: headless chrome, 300ms slow-mo.
//!     let connection = manager.create_connection(CreateParams::new()).await?;
//!     let browser = manager.create_browser(CreateParams::new()).await?;
//!     let context = manager.create_context(CreateParams::new()).await?;
//!
//!     // A later call without options reuses the stored ones.
//!     assert_eq!(manager.get(ResourceKind::Browser), Some(Resource::from(browser.clone())));
//!
//!     manager.close(&Resource::from(context)).await?;
//!     manager.close(&Resource::from(browser)).await?;
//!     manager.close(&Resource::from(connection)).await?;
//!     Ok(())
//! }
//! ```

pub mod engine;
pub mod timeout;

mod error;
mod manager;
mod options;
mod resource;
mod retry;
mod singleton;
mod store;

/// Default per-operation slow-down in milliseconds.
///
/// Chosen to reflect real-world human execution speed; override per project
/// via [`LaunchOption::slow_mo_ms`].
pub const DEFAULT_SLOW_MO_MS: f64 = 300.0;

/// Default timeout in milliseconds for browser startup.
///
/// Matches Playwright's standard default across all language
/// implementations.
pub const DEFAULT_STARTUP_TIMEOUT_MS: f64 = 30000.0;

// Re-export error types
pub use error::{Error, Result};

// Re-export the manager facade and its parameter objects
pub use manager::{CloseParams, CreateParams, ResourceManager};

// Re-export resource handles and selectors
pub use resource::{Browser, Connection, Context, CreationFlag, Resource, ResourceKind};

// Re-export option sets
pub use options::{
    ConnectionOption, ContextOption, LaunchOption, TracingStartOption, TracingStopOption, Viewport,
};

// Re-export the ambient option store types (exposed for diagnostics)
pub use store::{OptionKey, OptionStore, OptionValue};
