use thiserror::Error;

/// Unified error type for clasp-release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Command `{command}` failed with {}", describe_exit(.code))]
    CommandFailed { command: String, code: Option<i32> },

    #[error("Failed to launch `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to parse version number from clasp output:\n{output}")]
    VersionParse { output: String },

    #[error("Hook error: {0}")]
    Hook(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in clasp-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl ReleaseError {
    /// Create a command failure for the given rendered command line
    pub fn command_failed(command: impl Into<String>, code: Option<i32>) -> Self {
        ReleaseError::CommandFailed {
            command: command.into(),
            code,
        }
    }

    /// Create a version parse error carrying the raw captured output
    pub fn version_parse(output: impl Into<String>) -> Self {
        ReleaseError::VersionParse {
            output: output.into(),
        }
    }

    /// Create a hook error with context
    pub fn hook(msg: impl Into<String>) -> Self {
        ReleaseError::Hook(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }
}
