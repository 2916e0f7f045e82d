// Options for launching a Browser from a Connection.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Options applied when launching a browser process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchOption {
    /// Run the browser without a visible UI.
    pub headless: bool,

    /// Slow down execution by N milliseconds per operation. Defaulted to
    /// 300ms because this reflects closely to real-world human execution
    /// speed; adjust depending on the nature of your project.
    pub slow_mo_ms: f64,

    /// Browser-type selector. Supported values: "chromium", "chrome",
    /// "msedge", "firefox", "webkit". Chrome and Edge are distribution
    /// channels of the chromium launcher.
    pub browser_type: String,

    /// Maximum time in milliseconds to wait for the browser to start.
    pub startup_timeout_ms: f64,
}

impl Default for LaunchOption {
    fn default() -> Self {
        Self {
            headless: true,
            slow_mo_ms: crate::DEFAULT_SLOW_MO_MS,
            browser_type: "chrome".to_string(),
            startup_timeout_ms: crate::DEFAULT_STARTUP_TIMEOUT_MS,
        }
    }
}

impl LaunchOption {
    /// Creates a new `LaunchOption` with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run in headless mode.
    pub fn headless(mut self, enabled: bool) -> Self {
        self.headless = enabled;
        self
    }

    /// Slow down operations by N milliseconds.
    pub fn slow_mo_ms(mut self, ms: f64) -> Self {
        self.slow_mo_ms = ms;
        self
    }

    /// Set the browser-type selector.
    pub fn browser_type(mut self, browser_type: impl Into<String>) -> Self {
        self.browser_type = browser_type.into();
        self
    }

    /// Set the browser startup timeout in milliseconds.
    pub fn startup_timeout_ms(mut self, ms: f64) -> Self {
        self.startup_timeout_ms = ms;
        self
    }

    /// Normalize options for protocol transmission.
    ///
    /// The "chrome" and "msedge" selectors launch through the chromium
    /// launcher with the distribution `channel` set; "chromium", "firefox"
    /// and "webkit" carry no channel.
    pub fn normalize(&self) -> Value {
        let mut value = json!({
            "headless": self.headless,
            "slowMo": self.slow_mo_ms,
            "timeout": self.startup_timeout_ms,
        });

        if self.browser_type.eq_ignore_ascii_case("chrome")
            || self.browser_type.eq_ignore_ascii_case("msedge")
        {
            value["channel"] = json!(self.browser_type.to_ascii_lowercase());
        }

        value
    }
}
