//! Protocol error types.

use kmskit_model::{KmsException, Operation};
use thiserror::Error;

/// Errors that can occur while marshalling requests or responses.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Request body could not be serialized.
    #[error("failed to encode {operation} request: {source}")]
    Encode {
        /// Operation being encoded.
        operation: Operation,
        /// Underlying serializer error.
        #[source]
        source: serde_json::Error,
    },

    /// Response body did not match the result shape.
    #[error("failed to decode {operation} response: {source}")]
    Decode {
        /// Operation being decoded.
        operation: Operation,
        /// Underlying deserializer error.
        #[source]
        source: serde_json::Error,
    },

    /// Region name cannot form an endpoint host.
    #[error("invalid region: {0:?}")]
    InvalidRegion(String),

    /// The service answered with an error.
    #[error(transparent)]
    Service(#[from] KmsException),
}

impl ProtocolError {
    /// The service exception, if this error carries one.
    pub fn as_service(&self) -> Option<&KmsException> {
        match self {
            ProtocolError::Service(exception) => Some(exception),
            _ => None,
        }
    }
}
