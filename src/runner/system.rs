use std::process::{Command, ExitStatus, Stdio};

use log::debug;

use crate::domain::CliCommand;
use crate::error::{ReleaseError, Result};
use crate::runner::CommandRunner;

/// Runs commands as real child processes in the current working directory
/// and environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        SystemRunner
    }

    fn build(command: &CliCommand) -> Command {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args);
        for (key, value) in &command.envs {
            cmd.env(key, value);
        }
        cmd
    }

    fn check(command: &CliCommand, status: ExitStatus) -> Result<()> {
        if status.success() {
            Ok(())
        } else {
            Err(ReleaseError::command_failed(
                command.to_string(),
                status.code(),
            ))
        }
    }

    fn spawn_error(command: &CliCommand, source: std::io::Error) -> ReleaseError {
        ReleaseError::Spawn {
            command: command.to_string(),
            source,
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run_streaming(&self, command: &CliCommand) -> Result<()> {
        debug!("running (streaming): {}", command);

        let status = Self::build(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Self::spawn_error(command, e))?;

        debug!("{} exited with {}", command, status);
        Self::check(command, status)
    }

    fn run_captured(&self, command: &CliCommand) -> Result<String> {
        debug!("running (captured): {}", command);

        let output = Self::build(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| Self::spawn_error(command, e))?;

        debug!(
            "{} exited with {} ({} bytes of output)",
            command,
            output.status,
            output.stdout.len()
        );
        Self::check(command, output.status)?;

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_streaming_success() {
        let runner = SystemRunner::new();
        assert!(runner.run_streaming(&CliCommand::new("true")).is_ok());
    }

    #[test]
    fn test_streaming_failure_reports_exit_code() {
        let runner = SystemRunner::new();
        let err = runner
            .run_streaming(&CliCommand::new("sh").args(["-c", "exit 3"]))
            .unwrap_err();
        match err {
            ReleaseError::CommandFailed { code, .. } => assert_eq!(code, Some(3)),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_captured_returns_stdout() {
        let runner = SystemRunner::new();
        let output = runner
            .run_captured(&CliCommand::new("echo").arg("Created version 5"))
            .unwrap();
        assert_eq!(output.trim(), "Created version 5");
    }

    #[test]
    fn test_captured_passes_environment() {
        let runner = SystemRunner::new();
        let cmd = CliCommand::new("sh")
            .args(["-c", "printf %s \"$CLASP_RELEASE_TEST\""])
            .env("CLASP_RELEASE_TEST", "hello");
        assert_eq!(runner.run_captured(&cmd).unwrap(), "hello");
    }

    #[test]
    fn test_captured_failure() {
        let runner = SystemRunner::new();
        let result = runner.run_captured(&CliCommand::new("false"));
        assert!(matches!(result, Err(ReleaseError::CommandFailed { .. })));
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let runner = SystemRunner::new();
        let result = runner.run_streaming(&CliCommand::new("/nonexistent/clasp-release-bin"));
        assert!(matches!(result, Err(ReleaseError::Spawn { .. })));
    }
}
