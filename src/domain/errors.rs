// ============================================================================
// Entity Errors
// Validation, identity and configuration failures of the domain entities
// ============================================================================

use crate::numeric::NumericError;
use thiserror::Error;

/// Errors raised while constructing or combining domain entities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityError {
    /// Decimal boundary or scaling failure
    #[error(transparent)]
    Numeric(#[from] NumericError),

    /// An asset field failed validation
    #[error("invalid asset field `{field}`: {reason}")]
    InvalidAssetField {
        field: &'static str,
        reason: &'static str,
    },

    /// Binary operation between values of different assets
    #[error("asset mismatch: expected {expected}, got {actual}")]
    AssetMismatch { expected: String, actual: String },

    /// Config key outside the fixed allow-list
    #[error("unknown config key: {0:?}")]
    UnknownConfigKey(String),

    /// Config value of the wrong kind for its key
    #[error("config value does not match key {key:?}")]
    ConfigValueMismatch { key: &'static str },

    /// Variadic operation called without arguments
    #[error("at least one argument is required")]
    EmptyArguments,
}

impl EntityError {
    /// Returns the numeric cause, if this error came from the decimal layer.
    pub fn as_numeric(&self) -> Option<&NumericError> {
        match self {
            EntityError::Numeric(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type alias for entity operations
pub type EntityResult<T> = Result<T, EntityError>;
