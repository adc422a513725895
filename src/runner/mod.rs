//! External command execution abstraction
//!
//! The release workflow never spawns processes itself. It talks to a
//! [CommandRunner], which has two implementations:
//!
//! - [system::SystemRunner]: spawns real processes with `std::process::Command`
//! - [mock::MockRunner]: records invocations and returns scripted results for tests
//!
//! ```rust
//! # use clasp_release::domain::CliCommand;
//! # use clasp_release::runner::CommandRunner;
//! # fn example<R: CommandRunner>(runner: &R) -> clasp_release::Result<()> {
//! runner.run_streaming(&CliCommand::new("npx").args(["clasp", "push"]))?;
//! let output = runner.run_captured(&CliCommand::new("npx").args(["clasp", "version", "x"]))?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod system;

pub use mock::MockRunner;
pub use system::SystemRunner;

use crate::domain::CliCommand;
use crate::error::Result;

/// Capability to run external commands.
///
/// Both operations block until the process exits. A non-zero exit status is
/// returned as [crate::error::ReleaseError::CommandFailed]; a process that
/// cannot be started is [crate::error::ReleaseError::Spawn].
pub trait CommandRunner: Send + Sync {
    /// Run with inherited stdio so output streams live to the console.
    fn run_streaming(&self, command: &CliCommand) -> Result<()>;

    /// Run with stdout captured and returned as text.
    ///
    /// Stdin and stderr stay attached to the console.
    fn run_captured(&self, command: &CliCommand) -> Result<String>;
}

