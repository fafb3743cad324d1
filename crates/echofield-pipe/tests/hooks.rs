//! Integration tests for echofield-pipe.

use std::fs;
use std::time::Duration;

use echofield_pipe::{run_command, run_hooks, BuildHook, GenerateThemesHook, ShellError};

#[test]
fn generate_hook_runs_configured_command() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("themes.css");
    let cmd = if cfg!(windows) {
        format!("echo generated> \"{}\"", out.display())
    } else {
        format!("echo generated > '{}'", out.display())
    };

    let hooks: Vec<Box<dyn BuildHook>> = vec![Box::new(GenerateThemesHook::new(cmd))];
    let outcomes = run_hooks(&hooks);

    assert!(outcomes[0].succeeded());
    assert_eq!(fs::read_to_string(&out).unwrap().trim(), "generated");
}

#[test]
fn missing_program_is_a_failure_not_a_panic() {
    let hooks: Vec<Box<dyn BuildHook>> = vec![Box::new(GenerateThemesHook::new(
        "definitely-not-a-real-program-echofield",
    ))];
    let outcomes = run_hooks(&hooks);
    assert_eq!(outcomes.len(), 1);
    assert!(!outcomes[0].succeeded());
}

#[test]
fn hooks_run_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("order.txt");
    let append = |word: &str| {
        if cfg!(windows) {
            format!("echo {}>> \"{}\"", word, log.display())
        } else {
            format!("echo {} >> '{}'", word, log.display())
        }
    };

    let hooks: Vec<Box<dyn BuildHook>> = vec![
        Box::new(GenerateThemesHook::new(append("first"))),
        Box::new(GenerateThemesHook::new("exit 7")),
        Box::new(GenerateThemesHook::new(append("third"))),
    ];
    let outcomes = run_hooks(&hooks);

    let succeeded: Vec<bool> = outcomes.iter().map(|o| o.succeeded()).collect();
    assert_eq!(succeeded, vec![true, false, true]);
    let words: Vec<String> = fs::read_to_string(&log)
        .unwrap()
        .lines()
        .map(|l| l.trim().to_string())
        .collect();
    assert_eq!(words, vec!["first", "third"]);
}

#[test]
fn run_command_without_timeout_waits() {
    let res = run_command("exit 0", None);
    assert!(res.is_ok());
    let res = run_command("exit 2", Some(Duration::from_secs(5)));
    assert!(matches!(res, Err(ShellError::CommandFailed(_, _))));
}
