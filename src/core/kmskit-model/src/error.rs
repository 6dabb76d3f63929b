//! Model error types.

use thiserror::Error;

/// Errors raised while building model values on the client side.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// An enumeration was parsed from an empty string.
    #[error("invalid argument: {kind} value cannot be empty")]
    EmptyValue {
        /// Enumeration type name.
        kind: &'static str,
    },

    /// An enumeration was parsed from a string that matches no variant.
    #[error("invalid argument: cannot create {kind} from value `{value}`")]
    UnknownValue {
        /// Enumeration type name.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}

impl ModelError {
    /// Returns true for failures caused by a bad caller-supplied argument.
    ///
    /// Every current variant is an invalid-argument failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            ModelError::EmptyValue { .. } | ModelError::UnknownValue { .. }
        )
    }
}
