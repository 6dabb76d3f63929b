//! # kmskit Protocol
//!
//! JSON 1.1 wire codec for the kmskit data model.
//!
//! This crate provides:
//! - Request encoding (body, `X-Amz-Target` and content type)
//! - Response decoding into typed results
//! - Error response decoding into [`KmsException`](kmskit_model::KmsException)
//! - Regional endpoint resolution
//!
//! It performs no I/O: callers hand [`EncodedRequest`] to their own HTTP
//! transport and feed the status, request ID and body back to
//! [`decode_response`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod codec;
pub mod endpoint;
pub mod error;

pub use codec::{
    decode_error, decode_response, encode_request, EncodedRequest, Response, ResponseMetadata,
    CONTENT_TYPE, UNKNOWN_ERROR_CODE,
};
pub use endpoint::endpoint_for_region;
pub use error::ProtocolError;
pub use kmskit_model::{API_VERSION, SERVICE_NAME, TARGET_PREFIX};
