//! # sizing_core: Position-Sizing Foundation
//!
//! ## Layer 1 (Foundation) Role
//!
//! sizing_core is the bottom layer of the trade risk manager, providing:
//! - Input record and boundary clamping: `RiskInput`, `InputField` (`types::input`)
//! - Derived output record: `RiskPlan`, `TradeLine`, `PerTradeMetrics` (`types::plan`)
//! - Error types: `InputError` (`types::error`)
//! - The pure derivation engine and per-trade schedule generator (`engine`)
//! - Display formatting for presentation layers (`display`)
//! - Static advisory content (`advice`)
//! - An in-memory editing session with recompute-on-edit (`session`)
//!
//! ## Total Arithmetic
//!
//! The engine never fails and never panics. Every division by zero and every
//! non-finite intermediate resolves to `0.0`, so presentation layers never see
//! `NaN` or infinities.
//!
//! ## Usage Examples
//!
//! ```rust
//! use sizing_core::engine::derive;
//! use sizing_core::types::RiskInput;
//!
//! let input = RiskInput {
//!     entry_price: 1.1,
//!     ..RiskInput::default()
//! };
//! let plan = derive(&input);
//!
//! assert!((plan.daily_risk_amount - 20.0).abs() < 1e-9);
//! assert!((plan.sl_pips - 40.0).abs() < 1e-9);
//! assert!((plan.sl_price - 1.096).abs() < 1e-12);
//! assert_eq!(plan.trade_lines.len(), 5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod advice;
pub mod display;
pub mod engine;
pub mod session;
pub mod types;
