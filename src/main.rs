use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use log::debug;

use clasp_release::config;
use clasp_release::domain::ReleaseDescription;
use clasp_release::release;
use clasp_release::runner::SystemRunner;
use clasp_release::ui;

#[derive(clap::Parser)]
#[command(
    name = "clasp-release",
    version,
    about = "Push, version and deploy an Apps Script project with clasp"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Print the commands that would run and exit")]
    dry_run: bool,

    #[arg(
        long,
        value_name = "TEXT",
        help = "Text placed before the timestamp in the version and deployment description"
    )]
    description_prefix: Option<String>,

    #[arg(long, value_name = "ID", help = "Update this existing deployment")]
    deployment_id: Option<String>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v, -vv)")]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() {
    // Captured once; every step of the run shares this instant
    let started_at = Utc::now();
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args, started_at) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args, started_at: DateTime<Utc>) -> Result<()> {
    let mut config =
        config::load_config(args.config.as_deref()).context("Error loading config")?;

    if let Some(prefix) = args.description_prefix {
        config.release.description_prefix = prefix;
    }
    if let Some(id) = args.deployment_id {
        config.release.deployment_id = Some(id);
    }
    config.validate()?;
    debug!("effective config: {:?}", config);

    let description =
        ReleaseDescription::new(config.release.description_prefix.clone(), started_at);

    if args.dry_run {
        ui::display_plan(&release::plan_release(&config, &description));
        return Ok(());
    }

    let outcome = release::run_release(&SystemRunner::new(), &config, &description)?;
    debug!(
        "released version {} with {} warning(s)",
        outcome.version,
        outcome.warnings.len()
    );

    Ok(())
}
