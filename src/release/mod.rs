//! The push, version and deploy workflow
//!
//! Kept separate from `main.rs` so the workflow can be driven with any
//! [crate::runner::CommandRunner] and tested without clap or real processes.

pub mod workflow;

pub use workflow::{
    deploy_command, plan_release, push_command, run_release, version_command, PlannedStep,
    ReleaseOutcome, ReleasePlan,
};
