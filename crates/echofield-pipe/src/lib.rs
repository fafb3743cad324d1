//! Build hooks for the echofield asset pipeline.
//!
//! Before assets are bundled, the theme stylesheet is regenerated by shelling
//! out to a configurable command. That step is best effort: a failure is
//! logged as a warning and the build continues with whatever stylesheet is
//! already on disk.
//!
//! ```no_run
//! use echofield_pipe::{run_hooks, BuildHook, GenerateThemesHook};
//!
//! let hooks: Vec<Box<dyn BuildHook>> = vec![Box::new(GenerateThemesHook::default())];
//! for outcome in run_hooks(&hooks) {
//!     println!("{}: {}", outcome.name, outcome.succeeded());
//! }
//! ```

pub mod hook;
pub mod shell;

pub use hook::{
    run_hooks, BuildHook, GenerateThemesHook, HookError, HookOutcome, DEFAULT_GENERATE_COMMAND,
    DEFAULT_HOOK_TIMEOUT,
};
pub use shell::{run_command, ShellError};
