//! Registry error type

use thiserror::Error;

/// Failure to parse an identifier or key string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("unknown action identifier: {0}")]
    UnknownIdentifier(String),
    #[error("unknown action key: {0}")]
    UnknownKey(String),
    #[error("unknown action selector: {0}")]
    UnknownSelector(String),
}
