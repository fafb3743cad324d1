use std::time::Duration;

use crate::shell::{run_command, ShellError};

/// Command that regenerates the theme stylesheet.
pub const DEFAULT_GENERATE_COMMAND: &str = "echofield generate";

/// Timeout applied to hook commands unless configured otherwise.
pub const DEFAULT_HOOK_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("Shell error: {0}")]
    Shell(#[from] ShellError),

    /// Failure from a hook that runs in-process.
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// A step run when a build starts.
///
/// Hooks are best effort: a failing hook is reported and the build goes on.
pub trait BuildHook: Send + Sync {
    fn name(&self) -> &str;

    fn on_build_start(&self) -> Result<(), HookError>;

    /// Logged when [`on_build_start`](Self::on_build_start) fails.
    fn failure_message(&self) -> &str {
        "Build hook failed, continuing anyway"
    }
}

/// Runs the theme generator before a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateThemesHook {
    command: String,
    timeout: Option<Duration>,
}

impl GenerateThemesHook {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            timeout: Some(DEFAULT_HOOK_TIMEOUT),
        }
    }

    /// `None` waits indefinitely.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl Default for GenerateThemesHook {
    fn default() -> Self {
        Self::new(DEFAULT_GENERATE_COMMAND)
    }
}

impl BuildHook for GenerateThemesHook {
    fn name(&self) -> &str {
        "generate-themes"
    }

    fn on_build_start(&self) -> Result<(), HookError> {
        run_command(&self.command, self.timeout)?;
        Ok(())
    }

    fn failure_message(&self) -> &str {
        "Failed to generate themes, continuing anyway"
    }
}

/// What happened to one hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookOutcome {
    pub name: String,
    /// Rendered error, if the hook failed.
    pub error: Option<String>,
}

impl HookOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Runs every hook once, in order.
///
/// Failures are logged as warnings and recorded; they never stop later hooks
/// or the caller.
pub fn run_hooks(hooks: &[Box<dyn BuildHook>]) -> Vec<HookOutcome> {
    hooks
        .iter()
        .map(|hook| {
            let name = hook.name().to_string();
            match hook.on_build_start() {
                Ok(()) => {
                    tracing::debug!(hook = %name, "build hook finished");
                    HookOutcome { name, error: None }
                }
                Err(err) => {
                    tracing::warn!(hook = %name, error = %err, "{}", hook.failure_message());
                    HookOutcome {
                        name,
                        error: Some(err.to_string()),
                    }
                }
            }
        })
        .collect()
}
