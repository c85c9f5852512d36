use thiserror::Error;

/// Misuse of the validator. Invalid identifiers are never reported through
/// this type, they produce a negative result instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The requested type is not one of the supported identifier kinds
    #[error("Invalid validation type: {0}")]
    UnknownKind(String),

    /// The request could not be decoded
    #[error("Invalid validation request: {0}")]
    InvalidRequest(String),
}
