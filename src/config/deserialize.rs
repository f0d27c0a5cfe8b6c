// ABOUTME: Custom serde deserializers for config types.
// ABOUTME: Validates the environment list as a whole.

use nonempty::NonEmpty;
use serde::Deserialize;
use std::collections::HashSet;

use super::EnvironmentConfig;
use crate::types::Addressing;

pub fn deserialize_environments<'de, D>(
    deserializer: D,
) -> Result<NonEmpty<EnvironmentConfig>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let values: Vec<EnvironmentConfig> = Vec::deserialize(deserializer)?;
    validate_environments(&values).map_err(serde::de::Error::custom)?;

    NonEmpty::from_vec(values)
        .ok_or_else(|| serde::de::Error::custom("at least one environment is required"))
}

fn validate_environments(values: &[EnvironmentConfig]) -> Result<(), String> {
    let mut seen = HashSet::new();
    for env in values {
        if env.name.trim().is_empty() {
            return Err("environment name cannot be empty".to_string());
        }
        if !seen.insert(env.name.as_str()) {
            return Err(format!("duplicate environment name: {}", env.name));
        }
        // Instance-id addressing logs in as the environment's own user.
        if env.profile.addressing() == Addressing::InstanceId && env.user.trim().is_empty() {
            return Err(format!(
                "environment {} uses profile {} and needs a user",
                env.name, env.profile
            ));
        }
    }
    Ok(())
}
