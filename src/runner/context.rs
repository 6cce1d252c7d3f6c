//! Interpreter context
//!
//! The context owns all state for one script run: variables, registered tasks,
//! the shell to use and where observations go. Independent contexts never
//! share state.

use crate::runner::{Event, Level, Platform, TaskRegistry, VariableStore};
use colored::Colorize;
use std::env;
use std::path::{Path, PathBuf};

/// State carried through parsing, dispatch and task replay
pub struct Context {
    /// Directory commands run in and relative paths resolve against
    pub working_dir: PathBuf,

    /// Script file path, when loaded from disk
    pub script_path: Option<PathBuf>,

    /// Variables assigned so far
    pub vars: VariableStore,

    /// Buffered task bodies
    pub tasks: TaskRegistry,

    /// Host platform (shell family and executable suffix)
    pub platform: Platform,

    /// Shell invocation (e.g., ["sh", "-c"])
    pub interpreter: Vec<String>,

    /// Verbosity level
    pub verbosity: Verbosity,

    output: Output,
}

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Silent = 0,
    Quiet = 1,
    Normal = 2,
    Verbose = 3,
}

/// Where observations go
enum Output {
    Console,
    Captured(Vec<Event>),
}

impl Context {
    /// Create a new context with default settings
    pub fn new() -> Self {
        let platform = Platform::detect();
        Context {
            working_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            script_path: None,
            vars: VariableStore::new(),
            tasks: TaskRegistry::new(),
            platform,
            interpreter: platform.shell(),
            verbosity: Verbosity::Normal,
            output: Output::Console,
        }
    }

    /// Create a context with a specific working directory
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = dir;
        self
    }

    /// Set the script file path
    pub fn with_script_path(mut self, path: PathBuf) -> Self {
        self.script_path = Some(path);
        self
    }

    /// Seed variables
    pub fn with_vars(mut self, vars: VariableStore) -> Self {
        self.vars = vars;
        self
    }

    /// Set the platform; also resets the interpreter to that platform's shell
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self.interpreter = platform.shell();
        self
    }

    /// Set the interpreter
    pub fn with_interpreter(mut self, interpreter: Vec<String>) -> Self {
        self.interpreter = interpreter;
        self
    }

    /// Set verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Record events in memory instead of printing them
    pub fn capturing(mut self) -> Self {
        self.output = Output::Captured(Vec::new());
        self
    }

    /// Events recorded so far (empty unless capturing)
    pub fn events(&self) -> &[Event] {
        match &self.output {
            Output::Captured(events) => events.as_slice(),
            Output::Console => &[],
        }
    }

    /// Rendered text of recorded events
    pub fn transcript(&self) -> Vec<String> {
        self.events().iter().map(ToString::to_string).collect()
    }

    /// Directory holding the script; settings and `.env` are looked up here
    pub fn script_dir(&self) -> PathBuf {
        self.script_path
            .as_deref()
            .and_then(Path::parent)
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.working_dir.clone())
    }

    /// Resolve a script path against the working directory
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.working_dir.join(Path::new(path))
    }

    /// Emit an observation
    pub fn emit(&mut self, event: Event) {
        if let Output::Captured(events) = &mut self.output {
            events.push(event);
            return;
        }

        match event.level() {
            Level::Text => {
                if self.verbosity > Verbosity::Silent {
                    println!("{}", event);
                }
            }
            Level::Run => {
                if self.verbosity >= Verbosity::Normal {
                    println!("{} {}", "[RUN]".cyan(), event);
                }
            }
            Level::Info => {
                if self.verbosity >= Verbosity::Normal {
                    println!("{} {}", "[INFO]".green(), event);
                }
            }
            Level::Error => {
                if self.verbosity >= Verbosity::Quiet {
                    println!("{} {}", "[ERROR]".red().bold(), event);
                }
            }
            Level::Debug => {
                if self.verbosity >= Verbosity::Verbose {
                    println!("{} {}", "[DEBUG]".dimmed(), event);
                }
            }
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
