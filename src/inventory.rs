// ABOUTME: Instance discovery for environments and selection of a single target.
// ABOUTME: The config-backed Inventory lists instances declared in envssh.yml.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::{Environment, TargetInstance};

/// Source of the instances that make up an environment.
pub trait InstanceSource {
    fn instances(&self, environment: &Environment) -> Result<Vec<TargetInstance>>;
}

/// Instances declared statically in the configuration file.
pub struct Inventory<'a> {
    config: &'a Config,
}

impl<'a> Inventory<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

impl InstanceSource for Inventory<'_> {
    fn instances(&self, environment: &Environment) -> Result<Vec<TargetInstance>> {
        let entry = self.config.environment(&environment.name)?;
        Ok(entry.instances.clone())
    }
}

/// Pick one instance.
///
/// `filter` keeps instances whose name, id or IP equals it, or that belong to
/// a group or alias of that name. `index` is 1-based and chooses among the
/// remaining instances; it is required when more than one remains.
pub fn select_instance(
    environment: &Environment,
    instances: Vec<TargetInstance>,
    filter: Option<&str>,
    index: Option<usize>,
) -> Result<TargetInstance> {
    if instances.is_empty() {
        return Err(Error::NoInstances(environment.name.clone()));
    }

    let mut matching: Vec<TargetInstance> = match filter {
        Some(f) => instances.into_iter().filter(|i| i.matches(f)).collect(),
        None => instances,
    };

    if matching.is_empty() {
        return Err(Error::NoMatchingInstance {
            environment: environment.name.clone(),
            filter: filter.unwrap_or_default().to_string(),
        });
    }

    let count = matching.len();
    match index {
        Some(index) if index == 0 || index > count => {
            Err(Error::InstanceIndexOutOfRange { index, count })
        }
        Some(index) => Ok(matching.swap_remove(index - 1)),
        None if count == 1 => Ok(matching.swap_remove(0)),
        None => Err(Error::AmbiguousInstance {
            count,
            candidates: describe_candidates(&matching),
        }),
    }
}

fn describe_candidates(instances: &[TargetInstance]) -> String {
    instances
        .iter()
        .enumerate()
        .map(|(n, i)| format!("{}) {} ({})", n + 1, i.name, i.ip))
        .collect::<Vec<_>>()
        .join(", ")
}
