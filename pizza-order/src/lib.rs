//! Order state and pricing core for a pizza storefront checkout.
//!
//! The checkout flow (flavor, size, quantity, pickup date, summary) is driven
//! by an external front end. This crate owns what that front end reads and
//! updates:
//!
//! - **[`core`]**: Pure, deterministic logic (catalog lookups, pricing,
//!   pickup-date labels). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting inputs (wall clock, config file).
//! - **[`state`]**: The single mutable `OrderState` per session, publishing a
//!   snapshot after every completed mutation.
//!
//! [`summary`] renders share text from a snapshot and [`checkout`] wires a
//! session up from config for the CLI.

pub mod checkout;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod state;
pub mod summary;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
