// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// Resource handles and the enumerations that select creation/teardown paths.

use crate::engine::{EngineBrowser, EngineConnection, EngineContext};
use std::sync::Arc;

/// The three tiers of the managed resource hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Connection,
    Browser,
    Context,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Connection => write!(f, "Connection"),
            ResourceKind::Browser => write!(f, "Browser"),
            ResourceKind::Context => write!(f, "Context"),
        }
    }
}

/// Opt-in override to bypass singleton reuse for Connection/Browser creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationFlag {
    NewConnectionInstance,
    NewBrowserInstance,
}

impl std::fmt::Display for CreationFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreationFlag::NewConnectionInstance => write!(f, "NewConnectionInstance"),
            CreationFlag::NewBrowserInstance => write!(f, "NewBrowserInstance"),
        }
    }
}

/// Handle to an active session with the automation engine.
///
/// Cloning is cheap (an `Arc` bump) and clones refer to the same underlying
/// session. Equality is by engine guid.
#[derive(Clone)]
pub struct Connection {
    inner: Arc<dyn EngineConnection>,
}

impl Connection {
    pub(crate) fn new(inner: Arc<dyn EngineConnection>) -> Self {
        Self { inner }
    }

    pub fn guid(&self) -> &str {
        self.inner.guid()
    }

    pub(crate) fn inner(&self) -> &Arc<dyn EngineConnection> {
        &self.inner
    }
}

impl PartialEq for Connection {
    fn eq(&self, other: &Self) -> bool {
        self.guid() == other.guid()
    }
}

impl Eq for Connection {}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("guid", &self.guid())
            .finish()
    }
}

/// Handle to a launched browser process, owned by exactly one Connection.
#[derive(Clone)]
pub struct Browser {
    inner: Arc<dyn EngineBrowser>,
}

impl Browser {
    pub(crate) fn new(inner: Arc<dyn EngineBrowser>) -> Self {
        Self { inner }
    }

    pub fn guid(&self) -> &str {
        self.inner.guid()
    }

    pub(crate) fn inner(&self) -> &Arc<dyn EngineBrowser> {
        &self.inner
    }
}

impl PartialEq for Browser {
    fn eq(&self, other: &Self) -> bool {
        self.guid() == other.guid()
    }
}

impl Eq for Browser {}

impl std::fmt::Debug for Browser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Browser")
            .field("guid", &self.guid())
            .finish()
    }
}

/// Handle to an isolated browsing sandbox created from a Browser.
#[derive(Clone)]
pub struct Context {
    inner: Arc<dyn EngineContext>,
}

impl Context {
    pub(crate) fn new(inner: Arc<dyn EngineContext>) -> Self {
        Self { inner }
    }

    pub fn guid(&self) -> &str {
        self.inner.guid()
    }

    pub(crate) fn inner(&self) -> &Arc<dyn EngineContext> {
        &self.inner
    }
}

impl PartialEq for Context {
    fn eq(&self, other: &Self) -> bool {
        self.guid() == other.guid()
    }
}

impl Eq for Context {}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("guid", &self.guid())
            .finish()
    }
}

/// A managed resource of any kind, as returned by the facade `create`/`get`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Connection(Connection),
    Browser(Browser),
    Context(Context),
}

impl Resource {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Resource::Connection(_) => ResourceKind::Connection,
            Resource::Browser(_) => ResourceKind::Browser,
            Resource::Context(_) => ResourceKind::Context,
        }
    }

    pub fn guid(&self) -> &str {
        match self {
            Resource::Connection(connection) => connection.guid(),
            Resource::Browser(browser) => browser.guid(),
            Resource::Context(context) => context.guid(),
        }
    }

    pub fn as_connection(&self) -> Option<&Connection> {
        match self {
            Resource::Connection(connection) => Some(connection),
            _ => None,
        }
    }

    pub fn as_browser(&self) -> Option<&Browser> {
        match self {
            Resource::Browser(browser) => Some(browser),
            _ => None,
        }
    }

    pub fn as_context(&self) -> Option<&Context> {
        match self {
            Resource::Context(context) => Some(context),
            _ => None,
        }
    }
}

impl From<Connection> for Resource {
    fn from(connection: Connection) -> Self {
        Resource::Connection(connection)
    }
}

impl From<Browser> for Resource {
    fn from(browser: Browser) -> Self {
        Resource::Browser(browser)
    }
}

impl From<Context> for Resource {
    fn from(context: Context) -> Self {
        Resource::Context(context)
    }
}
