// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// ResourceManager - facade over the engine for resource lifecycle
//
// Reference semantics: Connection and Browser are reused by default and
// replaced only on explicit request; Contexts are always fresh. One manager
// per test run or worker; nothing here is process-global.

use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::options::{
    ConnectionOption, ContextOption, LaunchOption, TracingStartOption, TracingStopOption, resolve,
};
use crate::resource::{Browser, Connection, Context, CreationFlag, Resource, ResourceKind};
use crate::retry;
use crate::singleton::SingletonSlot;
use crate::store::{OptionKey, OptionStore, OptionValue};
use crate::timeout;
use std::sync::Arc;

/// Structured creation arguments.
///
/// Replaces an "any order, any type" argument list with tagged fields: a
/// creation flag, at most one option per variant, and an explicit upstream
/// resource for Browser/Context creation. Fields that do not apply to the
/// kind being created are ignored, except the flag, which must match.
#[derive(Debug, Clone, Default)]
pub struct CreateParams {
    pub(crate) flag: Option<CreationFlag>,
    pub(crate) connection_option: Option<ConnectionOption>,
    pub(crate) launch_option: Option<LaunchOption>,
    pub(crate) context_option: Option<ContextOption>,
    pub(crate) tracing_start_option: Option<TracingStartOption>,
    pub(crate) connection: Option<Connection>,
    pub(crate) browser: Option<Browser>,
}

impl CreateParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a fresh instance instead of reusing the tracked one.
    pub fn flag(mut self, flag: CreationFlag) -> Self {
        self.flag = Some(flag);
        self
    }

    /// Override the default/stored `ConnectionOption`.
    pub fn connection_option(mut self, option: ConnectionOption) -> Self {
        self.connection_option = Some(option);
        self
    }

    /// Override the default/stored `LaunchOption`.
    pub fn launch_option(mut self, option: LaunchOption) -> Self {
        self.launch_option = Some(option);
        self
    }

    /// Override the default/stored `ContextOption`.
    pub fn context_option(mut self, option: ContextOption) -> Self {
        self.context_option = Some(option);
        self
    }

    /// Override the default/stored `TracingStartOption`.
    pub fn tracing_start_option(mut self, option: TracingStartOption) -> Self {
        self.tracing_start_option = Some(option);
        self
    }

    /// Launch the Browser from this Connection instead of the tracked one.
    ///
    /// Passing an explicit Connection also bypasses Browser reuse, so
    /// independent resource trees can be built side by side.
    pub fn connection(mut self, connection: Connection) -> Self {
        self.connection = Some(connection);
        self
    }

    /// Create the Context from this Browser instead of the tracked one.
    pub fn browser(mut self, browser: Browser) -> Self {
        self.browser = Some(browser);
        self
    }
}

/// Structured close arguments.
#[derive(Debug, Clone, Default)]
pub struct CloseParams {
    pub(crate) tracing_stop_option: Option<TracingStopOption>,
}

impl CloseParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the default/stored `TracingStopOption` when closing a
    /// Context.
    pub fn tracing_stop_option(mut self, option: TracingStopOption) -> Self {
        self.tracing_stop_option = Some(option);
        self
    }
}

/// Manages the lifecycle of Connection, Browser, and Context resources.
///
/// The manager decides when a resource is created versus reused, resolves
/// each option through the chain explicit argument -> last stored value ->
/// default, retries flaky connection startup once, and runs kind-specific
/// side effects on close (stopping tracing before a Context goes away).
///
/// Construct one manager per test run or worker and pass it by reference;
/// two workers never share slots or stored options that way.
///
/// # Example
///
/// ```ignore
/// use playwright_manager::{CreateParams, LaunchOption, ResourceManager};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let manager = ResourceManager::new(engine);
///
///     let connection = manager.create_connection(CreateParams::new()).await?;
///     let browser = manager
///         .create_browser(CreateParams::new().launch_option(LaunchOption::new().headless(false)))
///         .await?;
///     let context = manager.create_context(CreateParams::new()).await?;
///
///     // ... drive the UI through the engine ...
///
///     manager.close(&context.into()).await?;
///     manager.close(&browser.into()).await?;
///     manager.close(&connection.into()).await?;
///     Ok(())
/// }
/// ```
pub struct ResourceManager {
    engine: Arc<dyn Engine>,
    connection: SingletonSlot<Connection>,
    browser: SingletonSlot<Browser>,
    options: OptionStore,
}

impl ResourceManager {
    /// Creates a manager driving the given engine, with empty tracking
    /// state.
    pub fn new(engine: Arc<dyn Engine>) -> Self {
        Self {
            engine,
            connection: SingletonSlot::new(),
            browser: SingletonSlot::new(),
            options: OptionStore::new(),
        }
    }

    /// Creates a resource of the given kind.
    ///
    /// Dispatches to [`create_connection`](Self::create_connection),
    /// [`create_browser`](Self::create_browser), or
    /// [`create_context`](Self::create_context).
    pub async fn create(&self, kind: ResourceKind, params: CreateParams) -> Result<Resource> {
        match kind {
            ResourceKind::Connection => self.create_connection(params).await.map(Resource::from),
            ResourceKind::Browser => self.create_browser(params).await.map(Resource::from),
            ResourceKind::Context => self.create_context(params).await.map(Resource::from),
        }
    }

    /// Creates (or reuses) the driver Connection.
    ///
    /// If a Connection is already tracked and no flag is passed, the
    /// existing instance is returned. `NewConnectionInstance` forces a
    /// second live connection; the new one becomes the tracked instance.
    /// Startup goes through a single retry with a five-second delay because
    /// the driver intermittently fails to initialize at process start.
    pub async fn create_connection(&self, params: CreateParams) -> Result<Connection> {
        let CreateParams {
            flag,
            connection_option,
            ..
        } = params;

        match flag {
            None | Some(CreationFlag::NewConnectionInstance) => {}
            Some(flag) => {
                return Err(Error::InvalidFlag {
                    kind: ResourceKind::Connection,
                    flag,
                });
            }
        }

        if let Some(existing) = self.connection.get() {
            if flag.is_none() {
                tracing::info!("Existing Connection already active. Returning existing instance.");
                return Ok(existing);
            }
            tracing::warn!("You are creating more than one Connection instance.");
        }

        tracing::info!("Creating Connection resource...");

        let option = resolve(
            connection_option,
            self.options.connection_option(),
            "ConnectionOption",
        );

        let inner = retry::once_with_delay(
            || {
                let engine = Arc::clone(&self.engine);
                let option = option.clone();
                async move { engine.connect(&option).await }
            },
            timeout::FIVE,
        )
        .await?;

        let connection = Connection::new(inner);
        self.connection.set(connection.clone());
        self.options.put(OptionValue::Connection(option));

        Ok(connection)
    }

    /// Creates (or reuses) a Browser from the tracked or an explicit
    /// Connection.
    ///
    /// Reuse mirrors [`create_connection`](Self::create_connection) with
    /// `NewBrowserInstance`, except that passing an explicit Connection
    /// always creates a fresh Browser. The `browser_type` selector routes
    /// to the chromium ("chromium", "chrome", "msedge"), firefox, or webkit
    /// launcher; anything else is rejected.
    pub async fn create_browser(&self, params: CreateParams) -> Result<Browser> {
        let CreateParams {
            flag,
            launch_option,
            connection,
            ..
        } = params;

        match flag {
            None | Some(CreationFlag::NewBrowserInstance) => {}
            Some(flag) => {
                return Err(Error::InvalidFlag {
                    kind: ResourceKind::Browser,
                    flag,
                });
            }
        }

        if connection.is_none() {
            if let Some(existing) = self.browser.get() {
                if flag.is_none() {
                    tracing::info!("Existing Browser already active. Returning existing instance.");
                    return Ok(existing);
                }
                tracing::warn!("You are creating more than one Browser instance.");
            }
        }

        let connection = match connection {
            Some(connection) => connection,
            None => self.connection.get().ok_or(Error::DependencyMissing {
                resource: ResourceKind::Browser,
                upstream: ResourceKind::Connection,
            })?,
        };

        let option = resolve(launch_option, self.options.launch_option(), "LaunchOption");

        tracing::info!(browser_type = %option.browser_type, "Creating Browser resource...");

        let inner = match option.browser_type.as_str() {
            "chromium" | "chrome" | "msedge" => connection.inner().launch_chromium(&option).await?,
            "firefox" => connection.inner().launch_firefox(&option).await?,
            "webkit" => connection.inner().launch_webkit(&option).await?,
            other => return Err(Error::UnsupportedBrowser(other.to_string())),
        };

        let browser = Browser::new(inner);
        self.browser.set(browser.clone());
        self.options.put(OptionValue::Launch(option));

        Ok(browser)
    }

    /// Creates a Context from the tracked or an explicit Browser.
    ///
    /// Contexts are never reused; every call yields a fresh, independent
    /// sandbox with a tracing session already started on it.
    pub async fn create_context(&self, params: CreateParams) -> Result<Context> {
        let CreateParams {
            flag,
            context_option,
            tracing_start_option,
            browser,
            ..
        } = params;

        if let Some(flag) = flag {
            return Err(Error::InvalidFlag {
                kind: ResourceKind::Context,
                flag,
            });
        }

        let browser = match browser {
            Some(browser) => browser,
            None => self.browser.get().ok_or(Error::DependencyMissing {
                resource: ResourceKind::Context,
                upstream: ResourceKind::Browser,
            })?,
        };

        let context_option = resolve(
            context_option,
            self.options.context_option(),
            "ContextOption",
        );
        let tracing_start_option = resolve(
            tracing_start_option,
            self.options.tracing_start_option(),
            "TracingStartOption",
        );

        tracing::info!("Creating Context resource...");

        let inner = browser.inner().new_context(&context_option).await?;
        inner.tracing_start(&tracing_start_option).await?;

        self.options.put(OptionValue::Context(context_option));
        self.options
            .put(OptionValue::TracingStart(tracing_start_option));

        Ok(Context::new(inner))
    }

    /// Returns the tracked resource of the given kind, if any.
    ///
    /// For Connection and Browser this is the singleton slot; for Context
    /// it is the most recently created context of the tracked Browser.
    pub fn get(&self, kind: ResourceKind) -> Option<Resource> {
        match kind {
            ResourceKind::Connection => self.connection().map(Resource::from),
            ResourceKind::Browser => self.browser().map(Resource::from),
            ResourceKind::Context => self.context().map(Resource::from),
        }
    }

    /// Returns the ambient option store.
    ///
    /// Exposed so callers can inspect which option values later creations
    /// would reuse.
    pub fn options(&self) -> &OptionStore {
        &self.options
    }

    /// Returns the tracked Connection, if any.
    pub fn connection(&self) -> Option<Connection> {
        self.connection.get()
    }

    /// Returns the tracked Browser, if any.
    pub fn browser(&self) -> Option<Browser> {
        self.browser.get()
    }

    /// Returns the most recently created Context of the tracked Browser.
    pub fn context(&self) -> Option<Context> {
        let browser = self.browser.get()?;
        let inner = browser.inner().contexts().into_iter().next_back()?;
        Some(Context::new(inner))
    }

    /// Closes a resource with default close arguments.
    pub async fn close(&self, resource: &Resource) -> Result<()> {
        self.close_with(resource, CloseParams::new()).await
    }

    /// Closes a resource, removing its tracking state and releasing the
    /// underlying engine resource.
    ///
    /// Before a Context is released its tracing session is stopped with the
    /// resolved `TracingStopOption`. Closing a Connection or Browser clears
    /// its singleton slot only if the slot still holds that instance, so
    /// closing a superseded instance leaves the current one tracked. The
    /// final release always runs; a release failure surfaces even though
    /// tracking state has already been cleared. Closing never cascades to
    /// dependents; close Context before Browser before Connection.
    pub async fn close_with(&self, resource: &Resource, params: CloseParams) -> Result<()> {
        match resource {
            Resource::Context(context) => {
                let stop_option = resolve(
                    params.tracing_stop_option,
                    self.options.tracing_stop_option(),
                    "TracingStopOption",
                );
                context.inner().tracing_stop(&stop_option).await?;
                self.options.remove(OptionKey::Context);
                context.inner().close().await
            }
            Resource::Browser(browser) => {
                self.options.remove(OptionKey::Launch);
                self.browser.clear_if(|held| held == browser);
                browser.inner().close().await
            }
            Resource::Connection(connection) => {
                self.options.remove(OptionKey::Connection);
                self.connection.clear_if(|held| held == connection);
                connection.inner().close().await
            }
        }
    }
}

impl std::fmt::Debug for ResourceManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceManager")
            .field("connection", &self.connection.get())
            .field("browser", &self.browser.get())
            .finish()
    }
}
