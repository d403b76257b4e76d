use anyhow::Context;
use serde::{Deserialize, Serialize};

/// How the navigation bar learns about registered panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscoveryMode {
    /// Reactive view over the registry: sees every registration and removal.
    #[default]
    Subscribe,
    /// Recurring timer, stops at the first non-empty tick.
    Poll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoverySettings {
    #[serde(default)]
    pub mode: DiscoveryMode,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u32,
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            mode: DiscoveryMode::default(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

fn default_poll_interval_ms() -> u32 {
    300
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TabsConfig {
    #[serde(default)]
    pub discovery: DiscoverySettings,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[discovery]
mode = "subscribe"
poll_interval_ms = 300
"#;

/// Load tab group configuration.
///
/// Uses `overrides` when given (missing keys fall back to defaults),
/// otherwise the embedded default document.
pub fn load_config(overrides: Option<&str>) -> anyhow::Result<TabsConfig> {
    match overrides {
        Some(source) => {
            log::info!("Loading tabs config from override document");
            toml::from_str(source).context("invalid tabs configuration")
        }
        None => {
            log::debug!("Using default embedded tabs configuration");
            toml::from_str(DEFAULT_CONFIG).context("invalid embedded tabs configuration")
        }
    }
}
