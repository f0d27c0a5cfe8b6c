// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "envssh")]
#[command(about = "Open ssh sessions to instances of deployment environments")]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: discovered from the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Only print results and errors
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Print results and errors as JSON lines
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Connect to an instance of an environment
    Ssh {
        /// Environment name (defined in config)
        environment: String,

        /// Instance name, id, IP, group or alias
        filter: Option<String>,

        /// Pick the Nth matching instance, starting at 1
        #[arg(short = 'n', long)]
        index: Option<usize>,

        /// Login user for direct-IP environments (overrides ssh_user)
        #[arg(short, long)]
        user: Option<String>,

        /// Local port forward: LOCAL[:[HOST:]REMOTE] (repeatable)
        #[arg(short, long = "port", value_name = "SPEC")]
        ports: Vec<String>,

        /// Increase ssh verbosity (repeatable)
        #[arg(short, long, action = ArgAction::Count)]
        verbose: u8,

        /// Print the ssh command instead of running it
        #[arg(long)]
        dry_run: bool,

        /// Extra arguments passed to ssh after the host
        #[arg(last = true)]
        ssh_args: Vec<String>,
    },

    /// List configured environments and their instances
    Environments,

    /// Print the loaded configuration and the user ssh would log in as
    Config {
        /// Login user override, as accepted by `ssh --user`
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Create an envssh.yml template in the current directory
    Init {
        /// Overwrite an existing envssh.yml
        #[arg(long)]
        force: bool,
    },
}
