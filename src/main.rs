// ABOUTME: Entry point for the envssh CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use envssh::config::{self, Config};
use envssh::error::Result;
use envssh::inventory::{InstanceSource, Inventory, select_instance};
use envssh::launch::{self, LaunchRequest, PrintRunner, ProcessRunner, SystemRunner};
use envssh::output::{Output, OutputMode};
use serde::Serialize;
use std::env;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on debug flag
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mode = if cli.json {
        OutputMode::Json
    } else if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let output = Output::new(mode);

    if let Err(e) = run(cli, &output) {
        let code = e.exit_code();
        output.error(&e.to_string(), Some(code));
        std::process::exit(code);
    }
}

fn run(cli: Cli, output: &Output) -> Result<()> {
    match cli.command {
        Commands::Init { force } => {
            let cwd = env::current_dir()?;
            config::init_config(&cwd, force)?;
            output.progress(&format!("Created {}", config::CONFIG_FILENAME));
            Ok(())
        }
        Commands::Ssh {
            environment,
            filter,
            index,
            user,
            ports,
            verbose,
            dry_run,
            ssh_args,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let environment = config.environment(&environment)?.environment();

            let instances = Inventory::new(&config).instances(&environment)?;
            let instance = select_instance(&environment, instances, filter.as_deref(), index)?;

            let settings = config.launch_settings(user.as_deref())?;
            let request = LaunchRequest {
                environment,
                instance,
                forwards: ports,
                verbosity: verbose,
                extra_args: ssh_args,
            };

            let print_runner = PrintRunner::new(*output);
            let runner: &dyn ProcessRunner = if dry_run {
                &print_runner
            } else {
                &SystemRunner
            };

            launch::launch(&request, &settings, runner, output)?;
            Ok(())
        }
        Commands::Environments => {
            let config = load_config(cli.config.as_deref())?;
            let mut lines = Vec::new();
            for env in config.environments.iter() {
                lines.push(format!(
                    "{} ({}, {} instance(s))",
                    env.name,
                    env.profile,
                    env.instances.len()
                ));
                for instance in &env.instances {
                    lines.push(format!("  {}", instance.summary()));
                }
            }
            output.data(&lines.join("\n"), &config.environments);
            Ok(())
        }
        Commands::Config { user } => {
            let config = load_config(cli.config.as_deref())?;
            let resolved_user = match config.resolve_user(user.as_deref()) {
                Ok(user) => user.filter(|u| !u.is_empty()),
                Err(e) => {
                    output.warning(&e.to_string());
                    None
                }
            };

            let yaml = serde_yaml::to_string(&config)?;
            let human = format!(
                "{}\nresolved ssh_user: {}",
                yaml.trim_end(),
                resolved_user.as_deref().unwrap_or("(none)")
            );
            let report = ConfigReport {
                resolved_user: resolved_user.as_deref(),
                config: &config,
            };
            output.data(&human, &report);
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct ConfigReport<'a> {
    resolved_user: Option<&'a str>,
    #[serde(flatten)]
    config: &'a Config,
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Config::discover(&env::current_dir()?),
    }
}
