//! Observations emitted while a script runs
//!
//! Every user-visible effect of the interpreter is one of these events. The
//! context either prints them as text or records them in order.

use std::fmt;

/// Severity used to filter events on the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Script or subprocess text, printed to stdout
    Text,
    Run,
    Info,
    Error,
    Debug,
}

/// A single observation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    VariableSet { name: String, value: String },
    Print(String),
    Run(String),
    Output(String),
    OutputFound(String),
    OutputMissing(String),
    UnknownCommand(String),
    TaskNotFound(String),
    TaskStart(String),
    Deleted(String),
    DirectoryCreated(String),
    Unresolved(String),
    Failed(String),
    Stopped,
}

impl Event {
    pub fn level(&self) -> Level {
        match self {
            Event::Print(_) | Event::Output(_) => Level::Text,
            Event::Run(_) => Level::Run,
            Event::VariableSet { .. }
            | Event::OutputFound(_)
            | Event::TaskStart(_)
            | Event::Deleted(_)
            | Event::Stopped => Level::Info,
            Event::OutputMissing(_)
            | Event::UnknownCommand(_)
            | Event::TaskNotFound(_)
            | Event::Failed(_) => Level::Error,
            Event::DirectoryCreated(_) | Event::Unresolved(_) => Level::Debug,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::VariableSet { name, value } => write!(f, "Set variable: {} = {}", name, value),
            Event::Print(text) | Event::Output(text) => write!(f, "{}", text),
            Event::Run(cmd) => write!(f, "Executing command: {}", cmd),
            Event::OutputFound(path) => write!(f, "Output target: {}", path),
            Event::OutputMissing(path) => write!(f, "Output file not found: {}", path),
            Event::UnknownCommand(line) => write!(f, "Unknown command: {}", line),
            Event::TaskNotFound(name) => write!(f, "Task '{}' not found.", name),
            Event::TaskStart(name) => write!(f, "Running task: {}", name),
            Event::Deleted(path) => write!(f, "Deleted: {}", path),
            Event::DirectoryCreated(path) => write!(f, "Created directory: {}", path),
            Event::Unresolved(name) => write!(f, "Unresolved variable: ${}", name),
            Event::Failed(message) => write!(f, "{}", message),
            Event::Stopped => write!(f, "Execution stopped."),
        }
    }
}
