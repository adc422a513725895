use chrono::{TimeZone, Utc};
use clasp_release::config::{CliConfig, Config};
use clasp_release::domain::{CliCommand, ReleaseDescription};
use clasp_release::release::{plan_release, run_release};
use clasp_release::runner::MockRunner;
use clasp_release::warning::ReleaseWarning;
use clasp_release::ReleaseError;
use tempfile::NamedTempFile;

fn description() -> ReleaseDescription {
    ReleaseDescription::new(
        "Auto deploy",
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
    )
}

fn npx_config() -> Config {
    Config {
        cli: CliConfig {
            program: "npx".to_string(),
            args: vec!["clasp".to_string()],
        },
        ..Config::default()
    }
}

fn subcommands(invocations: &[CliCommand]) -> Vec<String> {
    invocations
        .iter()
        .map(|cmd| cmd.args.get(1).cloned().unwrap_or_else(|| cmd.program.clone()))
        .collect()
}

#[test]
fn test_release_runs_push_version_deploy_in_order() {
    let runner = MockRunner::new().with_captured_output("Created version 42 for project X");
    let outcome = run_release(&runner, &npx_config(), &description()).unwrap();

    assert_eq!(outcome.version.as_str(), "42");
    assert_eq!(
        subcommands(&runner.invocations()),
        vec!["push", "version", "deploy"]
    );
}

#[test]
fn test_version_and_deploy_share_description() {
    let runner = MockRunner::new().with_captured_output("Created version 7.");
    run_release(&runner, &npx_config(), &description()).unwrap();

    let invocations = runner.invocations();
    let version_description = &invocations[1].args[2];
    let deploy = &invocations[2].args;
    let flag = deploy.iter().position(|a| a == "--description").unwrap();

    assert_eq!(version_description, "Auto deploy 2024-05-01T12:30:00.000Z");
    assert_eq!(&deploy[flag + 1], version_description);
    assert_eq!(deploy[3], "7");
}

#[test]
fn test_push_failure_stops_before_version() {
    let runner = MockRunner::new()
        .with_captured_output("Created version 1")
        .fail_on("push");

    let err = run_release(&runner, &npx_config(), &description()).unwrap_err();

    assert!(matches!(err, ReleaseError::CommandFailed { .. }));
    assert_eq!(subcommands(&runner.invocations()), vec!["push"]);
    assert!(!runner.was_invoked("version"));
    assert!(!runner.was_invoked("deploy"));
}

#[test]
fn test_version_failure_stops_before_deploy() {
    let runner = MockRunner::new().fail_on("version");

    let err = run_release(&runner, &npx_config(), &description()).unwrap_err();

    assert!(err.to_string().contains("npx clasp version"));
    assert!(!runner.was_invoked("deploy"));
}

#[test]
fn test_unparsable_output_stops_before_deploy() {
    let output = "Nothing relevant here";
    let runner = MockRunner::new().with_captured_output(output);

    let err = run_release(&runner, &npx_config(), &description()).unwrap_err();

    assert!(matches!(err, ReleaseError::VersionParse { .. }));
    assert!(err.to_string().contains(output));
    assert!(!runner.was_invoked("deploy"));
}

#[test]
fn test_deploy_failure_is_returned() {
    let runner = MockRunner::new()
        .with_captured_output("Created version 3")
        .fail_on("deploy");

    let err = run_release(&runner, &npx_config(), &description()).unwrap_err();

    assert!(matches!(err, ReleaseError::CommandFailed { code: Some(1), .. }));
    assert_eq!(runner.invocations().len(), 3);
}

#[test]
fn test_deployment_id_updates_existing_deployment() {
    let mut config = npx_config();
    config.release.deployment_id = Some("AKfycbxTest123".to_string());
    let runner = MockRunner::new().with_captured_output("Created version 5");

    run_release(&runner, &config, &description()).unwrap();

    let deploy = runner.invocations().pop().unwrap();
    assert!(deploy
        .args
        .windows(2)
        .any(|pair| pair[0] == "--deploymentId" && pair[1] == "AKfycbxTest123"));
}

#[test]
fn test_pre_push_hook_failure_stops_release() {
    let hook = NamedTempFile::new().unwrap();
    let hook_path = hook.path().to_str().unwrap().to_string();

    let mut config = npx_config();
    config.hooks.pre_push = Some(hook_path.clone());
    let runner = MockRunner::new()
        .with_captured_output("Created version 2")
        .fail_on(hook_path.clone());

    let err = run_release(&runner, &config, &description()).unwrap_err();

    assert!(matches!(err, ReleaseError::Hook(_)));
    assert_eq!(runner.invocations().len(), 1);
    assert!(!runner.was_invoked("push"));
}

#[test]
fn test_post_version_hook_sees_version_number() {
    let hook = NamedTempFile::new().unwrap();
    let hook_path = hook.path().to_str().unwrap().to_string();

    let mut config = npx_config();
    config.hooks.post_version = Some(hook_path.clone());
    let runner = MockRunner::new().with_captured_output("Created version 11");

    run_release(&runner, &config, &description()).unwrap();

    let invocations = runner.invocations();
    assert_eq!(invocations.len(), 4);
    assert_eq!(invocations[2].program, hook_path);
    assert!(invocations[2]
        .envs
        .contains(&("CLASP_RELEASE_VERSION".to_string(), "11".to_string())));
    assert!(invocations[3].mentions("deploy"));
}

#[test]
fn test_post_deploy_hook_failure_only_warns() {
    let hook = NamedTempFile::new().unwrap();
    let hook_path = hook.path().to_str().unwrap().to_string();

    let mut config = npx_config();
    config.hooks.post_deploy = Some(hook_path.clone());
    let runner = MockRunner::new()
        .with_captured_output("Created version 4")
        .fail_on(hook_path);

    let outcome = run_release(&runner, &config, &description()).unwrap();

    assert_eq!(outcome.version.as_str(), "4");
    assert!(matches!(
        outcome.warnings.as_slice(),
        [ReleaseWarning::HookFailed { .. }]
    ));
}

#[test]
fn test_plan_runs_nothing() {
    let runner = MockRunner::new();
    let plan = plan_release(&npx_config(), &description());

    assert_eq!(plan.steps.len(), 3);
    assert_eq!(plan.steps[0].command.to_string(), "npx clasp push");
    assert!(runner.invocations().is_empty());
}
