use std::path::Path;

use log::{info, warn};

use crate::domain::CliCommand;
use crate::error::{ReleaseError, Result};
use crate::hooks::HookContext;
use crate::runner::CommandRunner;
use crate::warning::ReleaseWarning;

/// Executes clasp-release hook scripts
pub struct HookExecutor;

impl HookExecutor {
    /// Path used to launch the script.
    ///
    /// A bare file name is anchored to the current directory, otherwise the
    /// OS would look it up on `PATH` instead of running the checked file.
    pub fn launch_path(script_path: &str) -> String {
        let path = Path::new(script_path);
        if path.is_relative() && path.components().count() == 1 {
            Path::new(".").join(path).to_string_lossy().into_owned()
        } else {
            script_path.to_string()
        }
    }

    /// Build the command that runs a hook script with the context's environment
    pub fn command(script_path: &str, context: &HookContext) -> CliCommand {
        context
            .to_env_vars()
            .into_iter()
            .fold(CliCommand::new(Self::launch_path(script_path)), |cmd, (key, value)| {
                cmd.env(key, value)
            })
    }

    /// Execute a hook script with the given context
    ///
    /// The script runs with inherited stdio and CLASP_RELEASE_* environment
    /// variables. Any non-zero exit code is treated as a failure.
    ///
    /// # Returns
    /// * `Ok(())` if hook succeeds (exit code 0)
    /// * `Err` if script not found, not a file, cannot be started, or fails
    pub fn execute<R: CommandRunner>(
        runner: &R,
        script_path: &str,
        context: &HookContext,
    ) -> Result<()> {
        let path = Path::new(script_path);

        if !path.exists() {
            return Err(ReleaseError::hook(format!(
                "Hook script not found: {}",
                script_path
            )));
        }

        if !path.is_file() {
            return Err(ReleaseError::hook(format!(
                "Hook path is not a file: {}",
                script_path
            )));
        }

        info!("running {} hook: {}", context.hook_type.name(), script_path);

        runner
            .run_streaming(&Self::command(script_path, context))
            .map_err(|e| {
                ReleaseError::hook(format!(
                    "{} hook {} failed: {}",
                    context.hook_type.name(),
                    script_path,
                    e
                ))
            })
    }

    /// Try to execute a hook, turning a failure into a warning
    ///
    /// Used for post-deploy hooks where the deployment already happened and a
    /// hook failure must not fail the release retroactively.
    pub fn execute_permissive<R: CommandRunner>(
        runner: &R,
        script_path: &str,
        context: &HookContext,
    ) -> Option<ReleaseWarning> {
        match Self::execute(runner, script_path, context) {
            Ok(()) => None,
            Err(e) => {
                warn!("{}", e);
                Some(ReleaseWarning::HookFailed {
                    hook: context.hook_type.name().to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }
}
