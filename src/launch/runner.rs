// ABOUTME: Process boundary for launching the external ssh client.
// ABOUTME: Invocation holds the final command; ProcessRunner executes it.

use super::error::{LaunchError, Result};
use crate::output::Output;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// A fully assembled external command. Built once per launch and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
    current_dir: PathBuf,
    env: Vec<(String, String)>,
}

impl Invocation {
    pub(crate) fn new(
        program: impl Into<String>,
        args: Vec<String>,
        current_dir: PathBuf,
        env: Vec<(String, String)>,
    ) -> Self {
        Self {
            program: program.into(),
            args,
            current_dir,
            env,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    /// Variables set for the child on top of the inherited environment.
    pub fn env(&self) -> &[(String, String)] {
        &self.env
    }

    /// Look up an override by name.
    pub fn env_var(&self, key: &str) -> Option<&str> {
        self.env
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Shell-like rendering for logs and dry runs.
    pub fn command_line(&self) -> String {
        let mut line = String::new();
        for (key, value) in &self.env {
            line.push_str(&format!("{key}={value} "));
        }
        line.push_str(&self.program);
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Executes an invocation and reports whether it succeeded.
pub trait ProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<()>;
}

/// Runs the command as a child process with inherited stdio, blocking until
/// it exits.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        tracing::info!(
            "Running {} in {}",
            invocation.program(),
            invocation.current_dir().display()
        );

        let status = Command::new(invocation.program())
            .args(invocation.args())
            .current_dir(invocation.current_dir())
            .envs(invocation.env().iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| LaunchError::Spawn {
                program: invocation.program().to_string(),
                source,
            })?;

        if status.success() {
            tracing::info!("{} exited successfully", invocation.program());
            Ok(())
        } else {
            tracing::warn!("{} failed: {}", invocation.program(), status);
            let program = invocation.program().to_string();
            Err(match status.code() {
                Some(code) => LaunchError::Exited { program, code },
                None => LaunchError::Terminated { program },
            })
        }
    }
}

/// Prints the command instead of running it.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintRunner {
    output: Output,
}

impl PrintRunner {
    pub fn new(output: Output) -> Self {
        Self { output }
    }
}

impl ProcessRunner for PrintRunner {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        let human = format!(
            "(cd {} && {})",
            invocation.current_dir().display(),
            invocation.command_line()
        );
        self.output.data(&human, invocation);
        Ok(())
    }
}
