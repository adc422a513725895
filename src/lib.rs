pub mod config;
pub mod domain;
pub mod error;
pub mod hooks;
pub mod release;
pub mod runner;
pub mod ui;
pub mod warning;

pub use error::{ReleaseError, Result};
