// ABOUTME: Launch-specific error types.
// ABOUTME: Covers missing login user, invalid port forwards, and ssh process failures.

use crate::types::ParseForwardError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("missing `ssh_user` in config file (or no `--user`)")]
    MissingUser,

    #[error(transparent)]
    InvalidForward(#[from] ParseForwardError),

    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with code {code}")]
    Exited { program: String, code: i32 },

    #[error("{program} was terminated by a signal")]
    Terminated { program: String },
}

impl LaunchError {
    /// Exit code of the ssh process, when it ran and reported one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            LaunchError::Exited { code, .. } => Some(*code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LaunchError>;
