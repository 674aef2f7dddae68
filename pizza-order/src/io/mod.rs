//! I/O helpers for order sessions.

pub mod clock;
pub mod config;
