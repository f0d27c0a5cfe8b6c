// ABOUTME: Local port-forward specification parsing and validation.
// ABOUTME: Handles formats like 8080, 8080:80, and 8080:db.internal:5432.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Host used when a spec names no remote host.
pub const DEFAULT_REMOTE_HOST: &str = "localhost";

/// The ssh flag introducing a local forward.
pub const LOCAL_FORWARD_FLAG: &str = "-L";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{spec:?} is not a valid port forwarding argument")]
pub struct ParseForwardError {
    spec: String,
}

impl ParseForwardError {
    fn new(spec: &str) -> Self {
        Self {
            spec: spec.to_string(),
        }
    }

    /// The exact string that failed to parse.
    pub fn spec(&self) -> &str {
        &self.spec
    }
}

/// A validated `LOCAL[:[HOST:]REMOTE]` forward, normalized to all three parts.
///
/// Ports are kept as the digit sequences the user typed. They are not
/// range-checked against 0-65535; ssh reports out-of-range ports itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PortForward {
    local_port: String,
    remote_host: String,
    remote_port: String,
}

impl PortForward {
    pub fn parse(spec: &str) -> Result<Self, ParseForwardError> {
        let fields: Vec<&str> = spec.split(':').collect();

        let (local, host, remote) = match fields.as_slice() {
            [local] => (*local, DEFAULT_REMOTE_HOST, *local),
            [local, remote] => (*local, DEFAULT_REMOTE_HOST, *remote),
            [local, host, remote] if is_valid_host(host) => (*local, *host, *remote),
            _ => return Err(ParseForwardError::new(spec)),
        };

        if !is_port(local) || !is_port(remote) {
            return Err(ParseForwardError::new(spec));
        }

        Ok(Self {
            local_port: local.to_string(),
            remote_host: host.to_string(),
            remote_port: remote.to_string(),
        })
    }

    pub fn local_port(&self) -> &str {
        &self.local_port
    }

    pub fn remote_host(&self) -> &str {
        &self.remote_host
    }

    pub fn remote_port(&self) -> &str {
        &self.remote_port
    }

    /// The `-L <local:host:remote>` flag pair for the ssh command line.
    pub fn to_args(&self) -> [String; 2] {
        [LOCAL_FORWARD_FLAG.to_string(), self.to_string()]
    }
}

fn is_port(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
}

// Valid characters: lowercase alphanumeric, hyphen, underscore, dot
fn is_valid_host(field: &str) -> bool {
    !field.is_empty()
        && field
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '.'))
}

impl FromStr for PortForward {
    type Err = ParseForwardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PortForward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.local_port, self.remote_host, self.remote_port
        )
    }
}
