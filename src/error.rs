// ABOUTME: Application-wide error types for envssh.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::launch::LaunchError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("configuration file not found in {0}")]
    ConfigNotFound(PathBuf),

    #[error("unknown environment: {0}")]
    UnknownEnvironment(String),

    #[error("no instances defined for environment {0}")]
    NoInstances(String),

    #[error("no instance in {environment} matches {filter:?}")]
    NoMatchingInstance { environment: String, filter: String },

    #[error("{count} instances match, pick one with --index: {candidates}")]
    AmbiguousInstance { count: usize, candidates: String },

    #[error("instance index {index} is out of range (1..={count})")]
    InstanceIndexOutOfRange { index: usize, count: usize },

    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Process exit code for this error: ssh's own code when it ran, else 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Launch(e) => e.exit_code().unwrap_or(1),
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ssh_exit_code_is_passed_through() {
        let err = Error::from(LaunchError::Exited {
            program: "ssh".to_string(),
            code: 255,
        });
        assert_eq!(err.exit_code(), 255);
    }

    #[test]
    fn other_errors_exit_with_one() {
        assert_eq!(Error::from(LaunchError::MissingUser).exit_code(), 1);
        assert_eq!(Error::UnknownEnvironment("dev".to_string()).exit_code(), 1);
    }
}
