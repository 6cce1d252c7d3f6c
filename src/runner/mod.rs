//! Script interpreter
//!
//! This module holds the engine: variable store, task registry, line
//! dispatch, command execution and the script parser.

pub mod command;
pub mod context;
pub mod directive;
pub mod event;
pub mod platform;
pub mod script;
pub mod task;
pub mod vars;

// Re-export main types
pub use command::*;
pub use context::*;
pub use directive::*;
pub use event::*;
pub use platform::*;
pub use script::*;
pub use task::*;
pub use vars::*;
