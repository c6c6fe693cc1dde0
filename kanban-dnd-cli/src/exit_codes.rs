//! Process exit codes

/// Command completed
pub const EXIT_SUCCESS: i32 = 0;

/// Command failed: bad arguments, unreadable config or script, invalid board
pub const EXIT_ERROR: i32 = 1;
