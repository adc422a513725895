//! User interface module - console output for a release run.
//!
//! Everything here writes human-readable lines. Machine-oriented diagnostics
//! go through the `log` facade instead.

pub mod formatter;

pub use formatter::{
    display_complete_banner, display_error, display_plan, display_start_banner, display_status,
    display_success, display_warning, format_plan, format_start_banner, COMPLETE_BANNER,
};
