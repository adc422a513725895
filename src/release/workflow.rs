use log::info;

use crate::config::{CliConfig, Config};
use crate::domain::{find_version_numbers, parse_version_number};
use crate::domain::{CliCommand, ReleaseDescription, VersionNumber};
use crate::error::Result;
use crate::hooks::{HookContext, HookExecutor, HookType};
use crate::runner::CommandRunner;
use crate::ui;
use crate::warning::ReleaseWarning;

/// Placeholder shown in a plan where the parsed version number will go.
const VERSION_PLACEHOLDER: &str = "<version>";

/// Result of a successful release
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseOutcome {
    /// The version that was created and deployed
    pub version: VersionNumber,

    /// Description attached to both the version and the deployment
    pub description: String,

    /// Non-fatal problems seen along the way
    pub warnings: Vec<ReleaseWarning>,
}

/// One command a release would run
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedStep {
    pub label: &'static str,
    pub command: CliCommand,
}

/// Ordered commands for a dry run
#[derive(Debug, Clone, PartialEq)]
pub struct ReleasePlan {
    pub steps: Vec<PlannedStep>,
}

/// `clasp push`
pub fn push_command(cli: &CliConfig) -> CliCommand {
    cli.base_command().arg("push")
}

/// `clasp version "<description>"`
pub fn version_command(cli: &CliConfig, description: &str) -> CliCommand {
    cli.base_command().arg("version").arg(description)
}

/// `clasp deploy --versionNumber <N> --description "<description>" [--deploymentId <id>]`
pub fn deploy_command(
    cli: &CliConfig,
    version: &str,
    description: &str,
    deployment_id: Option<&str>,
) -> CliCommand {
    let cmd = cli
        .base_command()
        .arg("deploy")
        .args(["--versionNumber", version])
        .args(["--description", description]);

    match deployment_id {
        Some(id) => cmd.args(["--deploymentId", id]),
        None => cmd,
    }
}

fn hook_context(
    hook_type: HookType,
    description: &ReleaseDescription,
    version: Option<&VersionNumber>,
) -> HookContext {
    HookContext {
        hook_type,
        description: description.to_string(),
        timestamp: description.timestamp(),
        version: version.map(|v| v.to_string()),
    }
}

fn hook_step(
    config: &Config,
    hook_type: HookType,
    description: &ReleaseDescription,
    version: Option<&VersionNumber>,
) -> Option<PlannedStep> {
    hook_type.script(&config.hooks).map(|script| PlannedStep {
        label: hook_type.name(),
        command: HookExecutor::command(script, &hook_context(hook_type, description, version)),
    })
}

/// Build the commands a release would run, without running any of them.
///
/// The deploy step shows a `<version>` placeholder since the number is only
/// known after `clasp version` has run.
pub fn plan_release(config: &Config, description: &ReleaseDescription) -> ReleasePlan {
    let text = description.to_string();
    let deployment_id = config.release.deployment_id.as_deref();

    let mut steps = Vec::new();
    steps.extend(hook_step(config, HookType::PrePush, description, None));
    steps.push(PlannedStep {
        label: "push",
        command: push_command(&config.cli),
    });
    steps.push(PlannedStep {
        label: "version",
        command: version_command(&config.cli, &text),
    });
    steps.extend(hook_step(config, HookType::PostVersion, description, None));
    steps.push(PlannedStep {
        label: "deploy",
        command: deploy_command(&config.cli, VERSION_PLACEHOLDER, &text, deployment_id),
    });
    steps.extend(hook_step(config, HookType::PostDeploy, description, None));

    ReleasePlan { steps }
}

fn run_hook<R: CommandRunner>(
    runner: &R,
    config: &Config,
    hook_type: HookType,
    description: &ReleaseDescription,
    version: Option<&VersionNumber>,
    warnings: &mut Vec<ReleaseWarning>,
) -> Result<()> {
    let Some(script) = hook_type.script(&config.hooks) else {
        return Ok(());
    };

    let context = hook_context(hook_type, description, version);
    if hook_type.is_fatal() {
        HookExecutor::execute(runner, script, &context)
    } else {
        if let Some(warning) = HookExecutor::execute_permissive(runner, script, &context) {
            ui::display_warning(&warning);
            warnings.push(warning);
        }
        Ok(())
    }
}

/// Main release workflow
///
/// Runs strictly in order, stopping at the first failure:
/// 1. pre-push hook (if configured)
/// 2. `clasp push`, streamed to the console
/// 3. `clasp version`, output captured
/// 4. Parse the version number from that output
/// 5. post-version hook (if configured)
/// 6. `clasp deploy` for that version, streamed to the console
/// 7. post-deploy hook (if configured, failure only warns)
///
/// A version created before a later failure is left in place.
///
/// # Arguments
///
/// * `runner` - Executes the external commands
/// * `config` - clasp invocation, deployment id and hooks
/// * `description` - Description shared by the version and the deployment
pub fn run_release<R: CommandRunner>(
    runner: &R,
    config: &Config,
    description: &ReleaseDescription,
) -> Result<ReleaseOutcome> {
    let text = description.to_string();
    let mut warnings = Vec::new();

    ui::display_start_banner(&description.timestamp());

    run_hook(runner, config, HookType::PrePush, description, None, &mut warnings)?;

    info!("pushing project files");
    runner.run_streaming(&push_command(&config.cli))?;

    info!("creating version \"{}\"", text);
    let output = runner.run_captured(&version_command(&config.cli, &text))?;

    let version = parse_version_number(&output)?;
    let all = find_version_numbers(&output);
    if all.len() > 1 {
        let warning = ReleaseWarning::MultipleVersionNumbers {
            used: version.to_string(),
            all: all.iter().map(|v| v.to_string()).collect(),
        };
        ui::display_warning(&warning);
        warnings.push(warning);
    }
    ui::display_success(&format!("Created version {}", version));

    run_hook(
        runner,
        config,
        HookType::PostVersion,
        description,
        Some(&version),
        &mut warnings,
    )?;

    info!("deploying version {}", version);
    runner.run_streaming(&deploy_command(
        &config.cli,
        version.as_str(),
        &text,
        config.release.deployment_id.as_deref(),
    ))?;

    run_hook(
        runner,
        config,
        HookType::PostDeploy,
        description,
        Some(&version),
        &mut warnings,
    )?;

    ui::display_complete_banner();

    Ok(ReleaseOutcome {
        version,
        description: text,
        warnings,
    })
}
