// ABOUTME: Configuration types and parsing for envssh.yml.
// ABOUTME: Handles YAML parsing, config discovery, and login user resolution.

mod deserialize;
mod env_value;
mod init;

pub use env_value::EnvValue;
pub use init::init_config;

use crate::error::{Error, Result};
use crate::launch::LaunchSettings;
use crate::types::{Environment, Profile, TargetInstance};
use deserialize::deserialize_environments;
use nonempty::NonEmpty;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "envssh.yml";
pub const CONFIG_FILENAME_ALT: &str = "envssh.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".envssh/config.yml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Login name for direct-IP environments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_user: Option<EnvValue>,

    pub setup_path: PathBuf,

    pub ci_path: PathBuf,

    #[serde(deserialize_with = "deserialize_environments")]
    pub environments: NonEmpty<EnvironmentConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnvironmentConfig {
    pub name: String,

    pub profile: Profile,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user: String,

    #[serde(default)]
    pub instances: Vec<TargetInstance>,
}

impl EnvironmentConfig {
    pub fn environment(&self) -> Environment {
        Environment::new(&self.name, self.profile.clone(), &self.user)
    }
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!("loading config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Find a config file in `dir`, then in the home directory.
    pub fn discover(dir: &Path) -> Result<Self> {
        let mut candidates = vec![
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];
        if let Some(home) = dirs::home_dir() {
            candidates.push(home.join(CONFIG_FILENAME_DIR));
        }

        for path in &candidates {
            if path.exists() {
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    pub fn environment(&self, name: &str) -> Result<&EnvironmentConfig> {
        self.environments
            .iter()
            .find(|env| env.name == name)
            .ok_or_else(|| Error::UnknownEnvironment(name.to_string()))
    }

    /// The login user: `user_override` if given, else the resolved `ssh_user`.
    pub fn resolve_user(&self, user_override: Option<&str>) -> Result<Option<String>> {
        if let Some(user) = user_override {
            return Ok(Some(user.to_string()));
        }
        self.ssh_user.as_ref().map(EnvValue::resolve).transpose()
    }

    pub fn launch_settings(&self, user_override: Option<&str>) -> Result<LaunchSettings> {
        Ok(LaunchSettings {
            user: self.resolve_user(user_override)?,
            ci_path: expand_home(&self.ci_path),
            setup_path: expand_home(&self.setup_path),
        })
    }
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
