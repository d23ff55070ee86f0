//! Process exit codes.

pub const SUCCESS: i32 = 0;

/// Any failure: bad arguments, invalid configuration, I/O, corrupt input.
pub const ERROR: i32 = 2;

/// A run stopped early on request (e.g. `ELEMENTAL_SIM_BREAK_AFTER`).
pub const INTERRUPTED: i32 = 130;
