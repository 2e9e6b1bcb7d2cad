//! Subcommand implementations.
//!
//! Each command computes a value first and prints it in a separate step, so
//! the computation can be tested without capturing stdout.

pub mod credit;
pub mod demo;
pub mod deposit;
