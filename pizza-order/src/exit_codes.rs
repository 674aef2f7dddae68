//! Stable exit codes for the `pizza-order` CLI.

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid config, template, or other runtime error.
pub const INVALID: i32 = 1;
/// A selection was rejected (unknown flavor, size, quantity, or pickup date).
pub const REJECTED: i32 = 2;
