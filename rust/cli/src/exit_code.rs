//! Exit code constants for the CLI application.
//!
//! The session only ends through a confirmed quit or end of input, so there
//! are just two outcomes.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// Startup failure: unreadable config, unwritable save directory, bad flags.
pub const ERROR: i32 = 2;
