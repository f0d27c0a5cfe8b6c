// ABOUTME: Builds the ssh command line for an environment and instance, then runs it.
// ABOUTME: Chooses direct-IP or instance-id addressing from the environment profile.

mod error;
mod runner;

pub use error::{LaunchError, Result};
pub use runner::{Invocation, PrintRunner, ProcessRunner, SystemRunner};

use crate::output::{Emphasis, Output};
use crate::types::{Addressing, AutomationRoot, Environment, PortForward, Profile, TargetInstance};
use std::path::PathBuf;

pub const SSH_PROGRAM: &str = "ssh";
pub const SSH_CONFIG_FILE: &str = "ssh.cfg";
pub const VERBOSE_FLAG: &str = "-v";

/// Subdirectory of each checkout that holds `ssh.cfg`.
pub const AUTOMATION_SUBDIR: &str = "ansible";

/// Variable naming the cloud profile for instance-id connections.
pub const PROFILE_ENV_VAR: &str = "AWS_PROFILE";

const MISSING_USER_HINT: &str = "no ssh_user is defined in the configuration file (or `--user`); \
     you can view the configuration values with the `config` command";

/// Settings supplied by the configuration layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSettings {
    /// Login name for direct-IP addressing.
    pub user: Option<String>,
    pub ci_path: PathBuf,
    pub setup_path: PathBuf,
}

impl LaunchSettings {
    /// The configured login user, treating an empty string as absent.
    pub fn login_user(&self) -> Option<&str> {
        self.user.as_deref().filter(|u| !u.is_empty())
    }

    /// Working directory for ssh, where `ssh.cfg` lives.
    pub fn automation_dir(&self, profile: &Profile) -> PathBuf {
        let root = match profile.automation_root() {
            AutomationRoot::Ci => &self.ci_path,
            AutomationRoot::Setup => &self.setup_path,
        };
        root.join(AUTOMATION_SUBDIR)
    }
}

/// Everything needed to connect to one instance.
#[derive(Debug, Clone)]
pub struct LaunchRequest {
    pub environment: Environment,
    pub instance: TargetInstance,
    /// Raw `LOCAL[:[HOST:]REMOTE]` specs, in the order given.
    pub forwards: Vec<String>,
    pub verbosity: u8,
    /// Appended after the host token without modification.
    pub extra_args: Vec<String>,
}

/// Assemble the ssh invocation for `request` without running it.
pub fn build_invocation(request: &LaunchRequest, settings: &LaunchSettings) -> Result<Invocation> {
    let user = settings.login_user().ok_or(LaunchError::MissingUser)?;
    assemble(request, settings, user)
}

/// Connect to the requested instance, blocking until ssh exits.
pub fn launch(
    request: &LaunchRequest,
    settings: &LaunchSettings,
    runner: &dyn ProcessRunner,
    output: &Output,
) -> Result<()> {
    let Some(user) = settings.login_user() else {
        tracing::debug!("no login user configured");
        output.warning(MISSING_USER_HINT);
        return Err(LaunchError::MissingUser);
    };

    announce(request, output);

    let invocation = assemble(request, settings, user)?;
    tracing::debug!(
        dir = %invocation.current_dir().display(),
        args = ?invocation.args(),
        "assembled ssh invocation"
    );

    runner.run(&invocation)
}

fn announce(request: &LaunchRequest, output: &Output) {
    let emphasis = if request.environment.profile.is_production() {
        Emphasis::Warn
    } else {
        Emphasis::Info
    };

    output.blank_line();
    output.highlight(
        emphasis,
        &format!("Launching SSH connection to {}", request.environment.name),
    );
    output.highlight(emphasis, &request.instance.summary());
}

fn assemble(request: &LaunchRequest, settings: &LaunchSettings, user: &str) -> Result<Invocation> {
    let profile = &request.environment.profile;
    let current_dir = settings.automation_dir(profile);

    let mut args = vec!["-F".to_string(), SSH_CONFIG_FILE.to_string()];
    let mut env = Vec::new();

    let user_host = match profile.addressing() {
        Addressing::DirectIp => {
            for spec in &request.forwards {
                let forward = PortForward::parse(spec)?;
                args.extend(forward.to_args());
            }
            format!("{}@{}", user, request.instance.ip)
        }
        Addressing::InstanceId => {
            if !request.forwards.is_empty() {
                tracing::debug!(
                    count = request.forwards.len(),
                    "port forwards are not applied to instance-id connections"
                );
            }
            env.push((PROFILE_ENV_VAR.to_string(), profile.as_str().to_string()));
            format!("{}@{}", request.environment.user, request.instance.id)
        }
    };

    args.extend((0..request.verbosity).map(|_| VERBOSE_FLAG.to_string()));
    args.push(user_host);
    args.extend(request.extra_args.iter().cloned());

    Ok(Invocation::new(SSH_PROGRAM, args, current_dir, env))
}
