use std::process::{Command, ExitStatus, Stdio};
use std::time::Duration;
use thiserror::Error;
use wait_timeout::ChildExt;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Command `{0}` timed out after {1:?}")]
    Timeout(String, Duration),
    #[error("Command `{0}` failed with status {1}")]
    CommandFailed(String, ExitStatus),
}

fn shell(command_str: &str) -> Command {
    if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command_str);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command_str);
        c
    }
}

/// Execute a shell command with the parent's stdio.
///
/// Output goes straight to the terminal, so build tools keep their own
/// progress display.
///
/// # Arguments
///
/// * `command_str` - The shell command to execute
/// * `timeout` - Optional timeout; if exceeded, the process is killed
pub fn run_command(command_str: &str, timeout: Option<Duration>) -> Result<(), ShellError> {
    let mut cmd = shell(command_str);
    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    tracing::debug!(command = command_str, ?timeout, "running shell command");
    let mut child = cmd.spawn()?;

    let status = match timeout {
        Some(duration) => match child.wait_timeout(duration)? {
            Some(status) => status,
            None => {
                child.kill()?;
                child.wait()?;
                return Err(ShellError::Timeout(command_str.to_string(), duration));
            }
        },
        None => child.wait()?,
    };

    if !status.success() {
        return Err(ShellError::CommandFailed(command_str.to_string(), status));
    }
    Ok(())
}
