//! Deterministic, pure logic shared by the order core.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests. The
//! only ambient input, the current date, is passed in by the caller.

pub mod calendar;
pub mod catalog;
pub mod error;
pub mod invariants;
pub mod pricing;
pub mod types;
