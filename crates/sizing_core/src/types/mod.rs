//! Input, output, and error records.
//!
//! This module provides:
//! - `input`: The user-editable input record and the boundary clamping rules
//! - `plan`: The derived output record and per-trade rows
//! - `error`: Structured errors for field-by-field editing
//!
//! # Re-exports
//!
//! - [`RiskInput`], [`InputField`] from `input`
//! - [`RiskPlan`], [`TradeLine`], [`PerTradeMetrics`] from `plan`
//! - [`InputError`] from `error`

pub mod error;
pub mod input;
pub mod plan;

pub use error::InputError;
pub use input::{InputField, RiskInput};
pub use plan::{PerTradeMetrics, RiskPlan, TradeLine};
