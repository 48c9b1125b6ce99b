//! Error types for field-by-field input editing.
//!
//! The derivation engine itself has no error type: degenerate arithmetic resolves
//! to zero. Errors only arise when a presentation layer names a field that does
//! not exist or submits an edit that cannot be split into a field and a value.

use thiserror::Error;

/// Input editing errors.
///
/// # Variants
/// - `UnknownField`: The field name does not match any input field
/// - `MalformedEdit`: An edit line is not of the form `field=value`
///
/// # Examples
/// ```
/// use sizing_core::types::InputError;
///
/// let err = InputError::UnknownField("leverage".to_string());
/// assert_eq!(format!("{}", err), "Unknown input field: leverage");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The field name does not match any input field.
    #[error("Unknown input field: {0}")]
    UnknownField(String),

    /// The edit is not of the form `field=value`.
    #[error("Malformed edit '{0}': expected field=value")]
    MalformedEdit(String),
}
