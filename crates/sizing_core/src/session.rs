//! In-memory editing session.
//!
//! A [`Session`] owns one input record for the lifetime of an interactive
//! session and recomputes the plan after every edit, so the plan it exposes
//! always matches the current input. Nothing is saved when it is dropped.
//!
//! # Examples
//!
//! ```
//! use sizing_core::session::Session;
//! use sizing_core::types::InputField;
//!
//! let mut session = Session::new();
//! session.edit(InputField::NumTrades, "4");
//! assert_eq!(session.plan().trade_lines.len(), 4);
//!
//! session.apply("entry=1.1").unwrap();
//! assert!(session.plan().sl_price > 0.0);
//! ```

use crate::engine::derive;
use crate::types::{InputError, InputField, RiskInput, RiskPlan};

/// One interactive editing session.
#[derive(Clone, Debug)]
pub struct Session {
    input: RiskInput,
    plan: RiskPlan,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_input(RiskInput::default())
    }
}

impl Session {
    /// Start a session with the form defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session from an existing input record, clamped at the boundary.
    pub fn with_input(input: RiskInput) -> Self {
        let input = input.clamped();
        let plan = derive(&input);
        Self { input, plan }
    }

    /// The current input record.
    pub fn input(&self) -> &RiskInput {
        &self.input
    }

    /// The plan derived from the current input record.
    pub fn plan(&self) -> &RiskPlan {
        &self.plan
    }

    /// Edit one field from raw text and recompute.
    pub fn edit(&mut self, field: InputField, raw: &str) -> &RiskPlan {
        self.input.edit(field, raw);
        self.recompute()
    }

    /// Apply a `field=value` edit and recompute.
    ///
    /// # Errors
    ///
    /// Propagates [`InputError`] from parsing the edit; the session is left
    /// unchanged in that case.
    pub fn apply(&mut self, edit: &str) -> Result<&RiskPlan, InputError> {
        self.input.apply_edit(edit)?;
        Ok(self.recompute())
    }

    /// Restore the form defaults.
    pub fn reset(&mut self) -> &RiskPlan {
        self.input = RiskInput::default();
        self.recompute()
    }

    fn recompute(&mut self) -> &RiskPlan {
        self.plan = derive(&self.input);
        &self.plan
    }
}
