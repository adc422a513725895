use std::collections::HashSet;
use std::sync::Mutex;

use crate::domain::CliCommand;
use crate::error::{ReleaseError, Result};
use crate::runner::CommandRunner;

/// Mock runner for testing without spawning processes
///
/// Records every command it is asked to run. A command fails with exit code 1
/// when its program or any argument equals a registered failure key.
pub struct MockRunner {
    captured_output: String,
    failures: HashSet<String>,
    invocations: Mutex<Vec<CliCommand>>,
}

impl MockRunner {
    /// Create a runner whose captured commands print nothing
    pub fn new() -> Self {
        MockRunner {
            captured_output: String::new(),
            failures: HashSet::new(),
            invocations: Mutex::new(Vec::new()),
        }
    }

    /// Set the text returned by every captured command
    pub fn with_captured_output(mut self, output: impl Into<String>) -> Self {
        self.captured_output = output.into();
        self
    }

    /// Make commands mentioning `token` fail
    pub fn fail_on(mut self, token: impl Into<String>) -> Self {
        self.failures.insert(token.into());
        self
    }

    /// All commands run so far, in order
    pub fn invocations(&self) -> Vec<CliCommand> {
        match self.invocations.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// True if any recorded command mentions `token`
    pub fn was_invoked(&self, token: &str) -> bool {
        self.invocations().iter().any(|cmd| cmd.mentions(token))
    }

    fn record(&self, command: &CliCommand) -> Result<()> {
        match self.invocations.lock() {
            Ok(mut guard) => guard.push(command.clone()),
            Err(poisoned) => poisoned.into_inner().push(command.clone()),
        }

        if self.failures.iter().any(|token| command.mentions(token)) {
            return Err(ReleaseError::command_failed(command.to_string(), Some(1)));
        }

        Ok(())
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for MockRunner {
    fn run_streaming(&self, command: &CliCommand) -> Result<()> {
        self.record(command)
    }

    fn run_captured(&self, command: &CliCommand) -> Result<String> {
        self.record(command)?;
        Ok(self.captured_output.clone())
    }
}
