// ABOUTME: Deployment profile identifiers and the addressing rules they imply.
// ABOUTME: Cloud-backed profiles connect by instance id; everything else by IP.

use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// How the ssh host token is addressed for a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Addressing {
    /// `<configured user>@<ip>`, with local port forwards.
    DirectIp,
    /// `<environment user>@<instance id>`, with `AWS_PROFILE` set for ssh.
    InstanceId,
}

/// Which checkout holds the automation directory for a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutomationRoot {
    Ci,
    Setup,
}

/// Name of a profile outside the cloud-backed set.
///
/// Only produced by parsing, so it never holds one of the known names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OtherProfile(String);

impl OtherProfile {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Profile {
    Sandbox,
    Prod,
    Ci,
    Other(OtherProfile),
}

impl Profile {
    pub fn as_str(&self) -> &str {
        match self {
            Profile::Sandbox => "dp-sandbox",
            Profile::Prod => "dp-prod",
            Profile::Ci => "dp-ci",
            Profile::Other(name) => name.as_str(),
        }
    }

    pub fn addressing(&self) -> Addressing {
        match self {
            Profile::Sandbox | Profile::Prod | Profile::Ci => Addressing::InstanceId,
            Profile::Other(_) => Addressing::DirectIp,
        }
    }

    pub fn automation_root(&self) -> AutomationRoot {
        match self {
            Profile::Ci => AutomationRoot::Ci,
            Profile::Sandbox | Profile::Prod | Profile::Other(_) => AutomationRoot::Setup,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Profile::Prod)
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err("profile cannot be empty".to_string()),
            "dp-sandbox" => Ok(Profile::Sandbox),
            "dp-prod" => Ok(Profile::Prod),
            "dp-ci" => Ok(Profile::Ci),
            other => Ok(Profile::Other(OtherProfile(other.to_string()))),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<'de> Deserialize<'de> for Profile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

impl Serialize for Profile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
