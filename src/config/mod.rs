//! Script loading and settings
//!
//! This module finds and reads gMake scripts and the optional gmake.yml
//! settings that tune how they run.

pub mod parse;
pub mod settings;

// Re-export main types
pub use parse::*;
pub use settings::*;
