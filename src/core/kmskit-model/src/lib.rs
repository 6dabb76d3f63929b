//! # kmskit Model
//!
//! Typed data model for a key management service speaking the
//! `TrentService` JSON 1.1 contract (API version `2014-11-01`).
//!
//! This crate provides:
//! - Request and result shapes for every operation, with getters, setters
//!   and chaining `with_*` builders
//! - String enumerations with exact-match parsing and tolerant decoding
//! - One exception variant per documented service error code
//! - The operation catalogue binding each request to its result
//!
//! Shapes carry no validation: every field is optional and sent verbatim.
//! Sensitive payloads use [`SecretBlob`], which is redacted in `Debug` and
//! `Display` output and zeroized on drop.
//!
//! ```
//! use kmskit_model::{EncryptRequest, KmsRequest, Operation};
//!
//! let request = EncryptRequest::new()
//!     .with_key_id("alias/app")
//!     .with_plaintext(b"hello")
//!     .with_encryption_context("purpose", "demo");
//!
//! assert_eq!(EncryptRequest::OPERATION, Operation::Encrypt);
//! assert!(!request.to_string().contains("hello"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod shape;

pub mod aliases;
pub mod crypto;
pub mod enums;
pub mod error;
pub mod exception;
pub mod grants;
pub mod import;
pub mod keys;
pub mod operation;
pub mod policy;
pub mod rotation;
pub mod signing;
pub mod tags;
pub mod types;

pub use error::ModelError;
pub use exception::{ErrorCode, ErrorMetadata, ErrorType, KmsException};
pub use operation::{KmsRequest, Operation};
pub use types::{Blob, SecretBlob, Timestamp, REDACTED};

pub use aliases::*;
pub use crypto::*;
pub use enums::*;
pub use grants::*;
pub use import::*;
pub use keys::*;
pub use policy::*;
pub use rotation::*;
pub use signing::*;
pub use tags::*;

/// Service identifier used for endpoints and request signing.
pub const SERVICE_NAME: &str = "kms";

/// Namespace of every `X-Amz-Target` header value.
pub const TARGET_PREFIX: &str = "TrentService";

/// API version the shapes describe.
pub const API_VERSION: &str = "2014-11-01";
