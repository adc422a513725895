//! Domain values for a release run, independent of process execution

pub mod command;
pub mod description;
pub mod version;

pub use command::CliCommand;
pub use description::ReleaseDescription;
pub use version::{find_version_numbers, parse_version_number, VersionNumber};
