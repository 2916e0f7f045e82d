// Options for creating a driver Connection.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Options applied when establishing the driver connection.
///
/// Both flags translate into environment variables injected into the
/// spawned engine process; this is the only environment-variable surface of
/// the manager.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionOption {
    /// Configures the engine for debugging and opens the inspector.
    /// The browser launches in headed mode, so use this for local runs only.
    #[serde(default)]
    pub debug_mode: bool,

    /// Emits verbose API call logs from the driver.
    #[serde(default)]
    pub verbose_api_logs: bool,
}

impl ConnectionOption {
    /// Creates a new `ConnectionOption` with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the engine inspector.
    pub fn debug_mode(mut self, enabled: bool) -> Self {
        self.debug_mode = enabled;
        self
    }

    /// Enable or disable verbose API call logs.
    pub fn verbose_api_logs(mut self, enabled: bool) -> Self {
        self.verbose_api_logs = enabled;
        self
    }

    /// Environment variables to inject into the spawned engine process.
    pub fn env_vars(&self) -> HashMap<String, String> {
        let mut env = HashMap::new();

        if self.debug_mode {
            env.insert("PWDEBUG".to_string(), "1".to_string());
        }

        if self.verbose_api_logs {
            env.insert("DEBUG".to_string(), "pw:api".to_string());
        }

        env
    }
}
