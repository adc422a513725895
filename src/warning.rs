use std::fmt;

/// Non-fatal conditions noticed during a release.
/// These are reported to the user but do not stop the run.
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseWarning {
    /// `clasp version` output mentioned more than one version number
    MultipleVersionNumbers { used: String, all: Vec<String> },
    /// A permissive hook exited with an error
    HookFailed { hook: String, reason: String },
}

impl fmt::Display for ReleaseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseWarning::MultipleVersionNumbers { used, all } => {
                write!(
                    f,
                    "clasp output mentions several versions ({}); using version {}",
                    all.join(", "),
                    used
                )
            }
            ReleaseWarning::HookFailed { hook, reason } => {
                write!(f, "{} hook failed: {}", hook, reason)
            }
        }
    }
}
