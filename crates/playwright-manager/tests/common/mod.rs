// In-memory fake of the automation engine traits.
//
// Records every call the manager makes (connect env, launcher used, launch
// options, tracing start/stop, close order) so integration tests can assert
// on orchestration behavior without a driver process.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use playwright_manager::engine::{Engine, EngineBrowser, EngineConnection, EngineContext};
use playwright_manager::{
    ConnectionOption, ContextOption, Error, LaunchOption, Result, TracingStartOption,
    TracingStopOption,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

/// One recorded browser launch.
#[derive(Debug, Clone)]
pub struct Launch {
    /// Which launcher handled it: "chromium", "firefox", or "webkit".
    pub launcher: &'static str,
    pub option: LaunchOption,
}

/// Shared record of everything the fake engine was asked to do.
#[derive(Default)]
pub struct Journal {
    guid_counter: AtomicU64,
    pub connect_attempts: AtomicU32,
    connect_failures_remaining: AtomicU32,
    pub connect_envs: Mutex<Vec<HashMap<String, String>>>,
    pub launches: Mutex<Vec<Launch>>,
    pub context_options: Mutex<Vec<ContextOption>>,
    pub contexts_created: Mutex<Vec<Arc<FakeContext>>>,
    pub closed: Mutex<Vec<String>>,
    fail_close_of: Mutex<Option<String>>,
}

impl Journal {
    fn next_guid(&self, prefix: &str) -> String {
        let n = self.guid_counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{prefix}@{n}")
    }

    /// Make the next `n` connect calls fail.
    pub fn fail_next_connects(&self, n: u32) {
        self.connect_failures_remaining.store(n, Ordering::SeqCst);
    }

    /// Make the final `close` of the resource with this guid fail.
    pub fn fail_close_of(&self, guid: &str) {
        *self.fail_close_of.lock() = Some(guid.to_string());
    }

    fn record_close(&self, guid: &str) -> Result<()> {
        self.closed.lock().push(guid.to_string());
        if self.fail_close_of.lock().as_deref() == Some(guid) {
            return Err(Error::Engine(format!("failed to release {guid}")));
        }
        Ok(())
    }

    pub fn closed_guids(&self) -> Vec<String> {
        self.closed.lock().clone()
    }

    pub fn launchers_used(&self) -> Vec<&'static str> {
        self.launches.lock().iter().map(|l| l.launcher).collect()
    }

    /// Tracing start options recorded for the context with this guid.
    pub fn tracing_started_for(&self, guid: &str) -> Option<TracingStartOption> {
        self.contexts_created
            .lock()
            .iter()
            .find(|context| context.guid == guid)
            .and_then(|context| context.tracing_started_with.lock().clone())
    }

    /// Tracing stop options recorded for the context with this guid.
    pub fn tracing_stopped_for(&self, guid: &str) -> Option<TracingStopOption> {
        self.contexts_created
            .lock()
            .iter()
            .find(|context| context.guid == guid)
            .and_then(|context| context.tracing_stopped_with.lock().clone())
    }
}

pub struct FakeEngine {
    pub journal: Arc<Journal>,
}

impl FakeEngine {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            journal: Arc::new(Journal::default()),
        })
    }
}

#[async_trait]
impl Engine for FakeEngine {
    async fn connect(&self, options: &ConnectionOption) -> Result<Arc<dyn EngineConnection>> {
        self.journal.connect_attempts.fetch_add(1, Ordering::SeqCst);

        let remaining = self.journal.connect_failures_remaining.load(Ordering::SeqCst);
        if remaining > 0 {
            self.journal
                .connect_failures_remaining
                .store(remaining - 1, Ordering::SeqCst);
            return Err(Error::Engine("driver failed to initialize".to_string()));
        }

        self.journal.connect_envs.lock().push(options.env_vars());

        Ok(Arc::new(FakeConnection {
            guid: self.journal.next_guid("connection"),
            journal: Arc::clone(&self.journal),
        }))
    }
}

pub struct FakeConnection {
    guid: String,
    journal: Arc<Journal>,
}

impl FakeConnection {
    fn launch(&self, launcher: &'static str, option: &LaunchOption) -> Arc<dyn EngineBrowser> {
        self.journal.launches.lock().push(Launch {
            launcher,
            option: option.clone(),
        });
        Arc::new(FakeBrowser {
            guid: self.journal.next_guid("browser"),
            journal: Arc::clone(&self.journal),
            contexts: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl EngineConnection for FakeConnection {
    fn guid(&self) -> &str {
        &self.guid
    }

    async fn launch_chromium(&self, options: &LaunchOption) -> Result<Arc<dyn EngineBrowser>> {
        Ok(self.launch("chromium", options))
    }

    async fn launch_firefox(&self, options: &LaunchOption) -> Result<Arc<dyn EngineBrowser>> {
        Ok(self.launch("firefox", options))
    }

    async fn launch_webkit(&self, options: &LaunchOption) -> Result<Arc<dyn EngineBrowser>> {
        Ok(self.launch("webkit", options))
    }

    async fn close(&self) -> Result<()> {
        self.journal.record_close(&self.guid)
    }
}

pub struct FakeBrowser {
    guid: String,
    journal: Arc<Journal>,
    contexts: Mutex<Vec<Arc<FakeContext>>>,
}

#[async_trait]
impl EngineBrowser for FakeBrowser {
    fn guid(&self) -> &str {
        &self.guid
    }

    async fn new_context(&self, options: &ContextOption) -> Result<Arc<dyn EngineContext>> {
        self.journal.context_options.lock().push(options.clone());

        let context = Arc::new(FakeContext {
            guid: self.journal.next_guid("context"),
            journal: Arc::clone(&self.journal),
            tracing_started_with: Mutex::new(None),
            tracing_stopped_with: Mutex::new(None),
        });
        self.contexts.lock().push(Arc::clone(&context));
        self.journal.contexts_created.lock().push(Arc::clone(&context));

        Ok(context)
    }

    fn contexts(&self) -> Vec<Arc<dyn EngineContext>> {
        self.contexts
            .lock()
            .iter()
            .map(|context| Arc::clone(context) as Arc<dyn EngineContext>)
            .collect()
    }

    async fn close(&self) -> Result<()> {
        self.journal.record_close(&self.guid)
    }
}

pub struct FakeContext {
    guid: String,
    journal: Arc<Journal>,
    pub tracing_started_with: Mutex<Option<TracingStartOption>>,
    pub tracing_stopped_with: Mutex<Option<TracingStopOption>>,
}

#[async_trait]
impl EngineContext for FakeContext {
    fn guid(&self) -> &str {
        &self.guid
    }

    async fn tracing_start(&self, options: &TracingStartOption) -> Result<()> {
        *self.tracing_started_with.lock() = Some(options.clone());
        Ok(())
    }

    async fn tracing_stop(&self, options: &TracingStopOption) -> Result<()> {
        *self.tracing_stopped_with.lock() = Some(options.clone());
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        self.journal.record_close(&self.guid)
    }
}

/// A manager wired to a fresh fake engine, plus the journal to assert on.
///
/// Run with `RUST_LOG=playwright_manager=info` to see the manager's
/// reuse/resolution decisions while debugging a test.
pub fn manager_with_fake_engine() -> (playwright_manager::ResourceManager, Arc<Journal>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let engine = FakeEngine::new();
    let journal = Arc::clone(&engine.journal);
    (playwright_manager::ResourceManager::new(engine), journal)
}
