//! gMake - a minimal interpreter for line-oriented build scripts
//!
//! A gMake script declares variables, named tasks and directives that run
//! immediately. Top-level directives execute while the script is parsed; task
//! bodies are buffered and replayed on demand through the same dispatcher.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;

// Re-export commonly used types
pub use error::{GmakeError, Result};
pub use runner::{parse_script, run_task, Context, Flow};

/// Current version of gMake
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
