//! Release hooks for extensibility
//!
//! Allows users to run custom scripts at key release points:
//! - pre-push: Before `clasp push`
//! - post-version: After the version is created, before deploy
//! - post-deploy: After the deployment succeeded

pub mod executor;
pub mod lifecycle;

pub use executor::HookExecutor;
pub use lifecycle::{HookContext, HookType};
