//! Exit code constants for the felt binary.
//!
//! Centralized so every subcommand maps its result to the same codes.

/// Success (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error: bad arguments, unreadable input, engine failure.
pub const ERROR: i32 = 2;

/// Interrupted by the user (Ctrl+C).
pub const INTERRUPTED: i32 = 130;
