//! `echofield.yaml` configuration.
//!
//! Every field is optional:
//!
//! ```yaml
//! output: src/blog/static/blog/themes.css
//! hook:
//!   command: echofield generate
//!   timeout_secs: 60   # 0 waits forever
//! bundle:
//!   command: npx vite build
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use echofield_pipe::{DEFAULT_GENERATE_COMMAND, DEFAULT_HOOK_TIMEOUT};
use serde::{Deserialize, Serialize};

/// Looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE: &str = "echofield.yaml";

pub const DEFAULT_OUTPUT: &str = "src/blog/static/blog/themes.css";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where `generate` writes and `check` reads.
    pub output: PathBuf,
    pub hook: HookConfig,
    pub bundle: BundleConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            hook: HookConfig::default(),
            bundle: BundleConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HookConfig {
    pub command: String,
    pub timeout_secs: u64,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_GENERATE_COMMAND.to_string(),
            timeout_secs: DEFAULT_HOOK_TIMEOUT.as_secs(),
        }
    }
}

impl HookConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BundleConfig {
    pub command: Option<String>,
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// Loads `explicit`, or [`CONFIG_FILE`] from `dir` when present.
    ///
    /// A relative `explicit` path is taken from `dir`. An explicit path must
    /// exist; a missing default file means defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> anyhow::Result<Self> {
        let path = match explicit {
            Some(path) => dir.join(path),
            None => {
                let candidate = dir.join(CONFIG_FILE);
                if !candidate.exists() {
                    tracing::debug!("no {} found, using defaults", CONFIG_FILE);
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_yaml(&text)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
