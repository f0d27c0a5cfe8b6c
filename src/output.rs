// ABOUTME: Output formatting for CLI feedback.
// ABOUTME: Supports normal, quiet (CI), and JSON output modes.

use serde::Serialize;

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-friendly output with progress messages
    #[default]
    Normal,
    /// Minimal output for scripts (no progress lines)
    Quiet,
    /// JSON lines for scripting
    Json,
}

/// How strongly a progress line should stand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Info,
    /// Used for production targets.
    Warn,
}

/// Handles CLI output based on the configured mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Print an empty separator line (normal mode only).
    pub fn blank_line(&self) {
        if self.mode == OutputMode::Normal {
            println!();
        }
    }

    /// Print a progress message (suppressed in quiet/json mode).
    pub fn progress(&self, message: &str) {
        if self.mode == OutputMode::Normal {
            println!("{message}");
        }
    }

    /// Print a progress message at the given emphasis.
    pub fn highlight(&self, emphasis: Emphasis, message: &str) {
        match emphasis {
            Emphasis::Info => self.progress(message),
            Emphasis::Warn => self.progress(&format!("⚠ {message}")),
        }
    }

    /// Print a warning. Shown in every mode.
    pub fn warning(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => eprintln!("Warning: {message}"),
            OutputMode::Json => emit_json_stderr(&JsonEvent {
                event: "warning",
                message,
                exit_code: None,
            }),
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str, exit_code: Option<i32>) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => eprintln!("Error: {message}"),
            OutputMode::Json => emit_json_stderr(&JsonEvent {
                event: "error",
                message,
                exit_code,
            }),
        }
    }

    /// Print command results: `human` as text, or `value` as a JSON line.
    pub fn data<T: Serialize>(&self, human: &str, value: &T) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => println!("{human}"),
            OutputMode::Json => {
                if let Ok(json) = serde_json::to_string(value) {
                    println!("{json}");
                }
            }
        }
    }
}

fn emit_json_stderr(event: &JsonEvent<'_>) {
    if let Ok(json) = serde_json::to_string(event) {
        eprintln!("{json}");
    }
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    event: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    exit_code: Option<i32>,
}
