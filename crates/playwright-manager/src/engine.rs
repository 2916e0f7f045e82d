// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// Engine - Narrow trait surface over the underlying automation engine
//
// The manager never talks to a driver process directly; everything it needs
// from the engine goes through these traits. Production code plugs in real
// Playwright bindings, integration tests plug in an in-memory fake.

use crate::error::Result;
use crate::options::{
    ConnectionOption, ContextOption, LaunchOption, TracingStartOption, TracingStopOption,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Entry point of the automation engine.
///
/// `connect` spawns the driver process and establishes a session with it.
/// The `ConnectionOption` env surface (`PWDEBUG`, `DEBUG=pw:api`) applies to
/// the spawned process.
#[async_trait]
pub trait Engine: Send + Sync {
    async fn connect(&self, options: &ConnectionOption) -> Result<Arc<dyn EngineConnection>>;
}

/// A live driver session; parent of browser handles.
///
/// One launcher per browser engine, mirroring the driver's chromium /
/// firefox / webkit entry points. The distribution channel (chrome, msedge)
/// travels inside `LaunchOption`.
#[async_trait]
pub trait EngineConnection: Send + Sync {
    /// Stable identifier assigned by the engine (e.g. "connection@1").
    fn guid(&self) -> &str;

    async fn launch_chromium(&self, options: &LaunchOption) -> Result<Arc<dyn EngineBrowser>>;

    async fn launch_firefox(&self, options: &LaunchOption) -> Result<Arc<dyn EngineBrowser>>;

    async fn launch_webkit(&self, options: &LaunchOption) -> Result<Arc<dyn EngineBrowser>>;

    /// Tears down the session and the driver process behind it.
    async fn close(&self) -> Result<()>;
}

/// A launched browser process handle; parent of contexts.
#[async_trait]
pub trait EngineBrowser: Send + Sync {
    fn guid(&self) -> &str;

    async fn new_context(&self, options: &ContextOption) -> Result<Arc<dyn EngineContext>>;

    /// Live contexts in creation order.
    fn contexts(&self) -> Vec<Arc<dyn EngineContext>>;

    async fn close(&self) -> Result<()>;
}

/// An isolated cookie/storage sandbox within a browser.
#[async_trait]
pub trait EngineContext: Send + Sync {
    fn guid(&self) -> &str;

    async fn tracing_start(&self, options: &TracingStartOption) -> Result<()>;

    async fn tracing_stop(&self, options: &TracingStopOption) -> Result<()>;

    async fn close(&self) -> Result<()>;
}
