//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write to a
//! caller-supplied writer so they can be exercised without a terminal.

pub mod advice;
pub mod check;
pub mod plan;
pub mod session;
