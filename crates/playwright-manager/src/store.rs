// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// Ambient option store: remembers the option value last used per resource
// kind so later creations can omit it and transparently reuse the prior
// configuration.

use crate::options::{
    ConnectionOption, ContextOption, LaunchOption, TracingStartOption, TracingStopOption,
};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Key identifying one stored option variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    Connection,
    Launch,
    Context,
    TracingStart,
    TracingStop,
}

/// A stored option value of any variant.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Connection(ConnectionOption),
    Launch(LaunchOption),
    Context(ContextOption),
    TracingStart(TracingStartOption),
    TracingStop(TracingStopOption),
}

impl OptionValue {
    pub fn key(&self) -> OptionKey {
        match self {
            OptionValue::Connection(_) => OptionKey::Connection,
            OptionValue::Launch(_) => OptionKey::Launch,
            OptionValue::Context(_) => OptionKey::Context,
            OptionValue::TracingStart(_) => OptionKey::TracingStart,
            OptionValue::TracingStop(_) => OptionKey::TracingStop,
        }
    }
}

/// Keyed store of the most recently used option value per variant.
///
/// Owned by the `ResourceManager`, populated on every successful create and
/// cleared per-variant when the corresponding resource closes. Entries have
/// no expiry and persist across unrelated creations. At most one value per
/// key; a new creation overwrites.
#[derive(Debug, Default)]
pub struct OptionStore {
    entries: Mutex<HashMap<OptionKey, OptionValue>>,
}

impl OptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, value: OptionValue) {
        self.entries.lock().insert(value.key(), value);
    }

    pub fn get(&self, key: OptionKey) -> Option<OptionValue> {
        self.entries.lock().get(&key).cloned()
    }

    pub fn remove(&self, key: OptionKey) {
        self.entries.lock().remove(&key);
    }

    pub fn exists(&self, key: OptionKey) -> bool {
        self.entries.lock().contains_key(&key)
    }

    pub(crate) fn connection_option(&self) -> Option<ConnectionOption> {
        match self.get(OptionKey::Connection) {
            Some(OptionValue::Connection(option)) => Some(option),
            _ => None,
        }
    }

    pub(crate) fn launch_option(&self) -> Option<LaunchOption> {
        match self.get(OptionKey::Launch) {
            Some(OptionValue::Launch(option)) => Some(option),
            _ => None,
        }
    }

    pub(crate) fn context_option(&self) -> Option<ContextOption> {
        match self.get(OptionKey::Context) {
            Some(OptionValue::Context(option)) => Some(option),
            _ => None,
        }
    }

    pub(crate) fn tracing_start_option(&self) -> Option<TracingStartOption> {
        match self.get(OptionKey::TracingStart) {
            Some(OptionValue::TracingStart(option)) => Some(option),
            _ => None,
        }
    }

    pub(crate) fn tracing_stop_option(&self) -> Option<TracingStopOption> {
        match self.get(OptionKey::TracingStop) {
            Some(OptionValue::TracingStop(option)) => Some(option),
            _ => None,
        }
    }
}
