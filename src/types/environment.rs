// ABOUTME: Deployment environment and target instance descriptors.
// ABOUTME: Both are read-only inputs to a launch, produced by config and discovery.

use super::Profile;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A deployment target as described by the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Environment {
    pub name: String,
    pub profile: Profile,
    /// Login name for instance-id addressing. Direct-IP addressing uses the
    /// configured ssh user instead.
    pub user: String,
}

impl Environment {
    pub fn new(name: impl Into<String>, profile: Profile, user: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            profile,
            user: user.into(),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A remote machine within an environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TargetInstance {
    pub name: String,
    pub ip: String,
    pub id: String,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl TargetInstance {
    /// Whether `filter` names this instance or one of its groups or aliases.
    pub fn matches(&self, filter: &str) -> bool {
        self.name == filter
            || self.id == filter
            || self.ip == filter
            || self.groups.iter().any(|g| g == filter)
            || self.aliases.iter().any(|a| a == filter)
    }

    /// One-line summary shown before connecting.
    pub fn summary(&self) -> String {
        format!(
            "[IP: {} | Name: {} | Groups: [{}] | AKA: {}]",
            self.ip,
            self.name,
            self.groups.join(" "),
            self.aliases.join(", ")
        )
    }
}
