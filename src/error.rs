use thiserror::Error;

/// Unified error type for git-semver operations
#[derive(Error, Debug)]
pub enum GitSemverError {
    #[error("Describe command failed: exit code {exit_code}, stderr: '{stderr}'")]
    Describe { exit_code: i32, stderr: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-semver
pub type Result<T> = std::result::Result<T, GitSemverError>;

impl GitSemverError {
    /// Create a describe failure carrying the exit code and captured stderr
    pub fn describe(exit_code: i32, stderr: impl Into<String>) -> Self {
        GitSemverError::Describe {
            exit_code,
            stderr: stderr.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitSemverError::Config(msg.into())
    }
}
