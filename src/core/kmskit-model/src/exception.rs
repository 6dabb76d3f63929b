//! Service exceptions.
//!
//! Every error code the remote API documents maps to one [`KmsException`]
//! variant. Each variant carries the same [`ErrorMetadata`]; codes the model
//! does not know about land in [`KmsException::Unhandled`] with the raw code
//! preserved.

use std::fmt;

use thiserror::Error;

use crate::shape::string_enum;

/// Who is at fault for a failed call, derived from the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// 4xx: the request was rejected.
    Client,
    /// 5xx: the service failed.
    Service,
    /// No HTTP status, or one outside both ranges.
    Unknown,
}

impl ErrorType {
    /// Classifies an HTTP status code.
    pub fn from_status(status_code: u16) -> Self {
        match status_code {
            400..=499 => ErrorType::Client,
            500..=599 => ErrorType::Service,
            _ => ErrorType::Unknown,
        }
    }
}

/// Request-scoped details shared by every exception variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ErrorMetadata {
    message: Option<String>,
    request_id: Option<String>,
    status_code: u16,
}

impl ErrorMetadata {
    /// Creates metadata for a response with the given HTTP status.
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            ..Self::default()
        }
    }

    /// Sets the human-readable message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the request ID echoed by the service.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Human-readable message, if the service sent one.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Request ID, if known.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// HTTP status code; `0` when there was no response.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }
}

impl fmt::Display for ErrorMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_deref().unwrap_or("(no message)"))?;
        if let Some(request_id) = &self.request_id {
            write!(f, " (request id: {})", request_id)?;
        }
        Ok(())
    }
}

macro_rules! service_exceptions {
    (
        $(
            $(#[$doc:meta])*
            $variant:ident => $code:literal
        ),+ $(,)?
    ) => {
        string_enum! {
            /// Error codes the remote API documents.
            pub enum ErrorCode {
                $(
                    $(#[$doc])*
                    $variant => $code,
                )+
            }
        }

        /// An error response returned by the service.
        #[derive(Debug, Clone, PartialEq, Eq, Error)]
        pub enum KmsException {
            $(
                $(#[$doc])*
                #[error("{}: {}", $code, .0)]
                $variant(ErrorMetadata),
            )+

            /// An error code with no dedicated variant.
            #[error("{code}: {metadata}")]
            Unhandled {
                /// Raw error code as sent by the service.
                code: String,
                /// Request details.
                metadata: ErrorMetadata,
            },
        }

        impl KmsException {
            /// Builds the variant for a documented code.
            pub fn from_error_code(code: ErrorCode, metadata: ErrorMetadata) -> Self {
                match code {
                    $(ErrorCode::$variant => KmsException::$variant(metadata),)+
                }
            }

            /// The documented code, or `None` for [`KmsException::Unhandled`].
            pub fn error_code(&self) -> Option<ErrorCode> {
                match self {
                    $(KmsException::$variant(_) => Some(ErrorCode::$variant),)+
                    KmsException::Unhandled { .. } => None,
                }
            }

            /// Request details carried by every variant.
            pub fn metadata(&self) -> &ErrorMetadata {
                match self {
                    $(KmsException::$variant(metadata) => metadata,)+
                    KmsException::Unhandled { metadata, .. } => metadata,
                }
            }
        }
    };
}

service_exceptions! {
    /// The resource already exists.
    AlreadyExists => "AlreadyExistsException",
    /// The associated CloudHSM cluster does not meet the configuration requirements.
    CloudHsmClusterInvalidConfiguration => "CloudHsmClusterInvalidConfigurationException",
    /// The custom key store is not in a valid state for the operation.
    CustomKeyStoreInvalidState => "CustomKeyStoreInvalidStateException",
    /// No custom key store matches the given identifier.
    CustomKeyStoreNotFound => "CustomKeyStoreNotFoundException",
    /// The system timed out while processing the request.
    DependencyTimeout => "DependencyTimeoutException",
    /// The key is disabled.
    Disabled => "DisabledException",
    /// The dry run would have succeeded.
    DryRunOperation => "DryRunOperationException",
    /// The import token has expired.
    ExpiredImportToken => "ExpiredImportTokenException",
    /// The key in the request is not the one that produced the ciphertext.
    IncorrectKey => "IncorrectKeyException",
    /// The imported key material differs from what was previously imported.
    IncorrectKeyMaterial => "IncorrectKeyMaterialException",
    /// The alias name is not valid.
    InvalidAliasName => "InvalidAliasNameException",
    /// The ARN is not valid.
    InvalidArn => "InvalidArnException",
    /// The ciphertext, context or grant token cannot be used for decryption.
    InvalidCiphertext => "InvalidCiphertextException",
    /// The grant ID is not valid.
    InvalidGrantId => "InvalidGrantIdException",
    /// The grant token is not valid.
    InvalidGrantToken => "InvalidGrantTokenException",
    /// The import token does not belong to the key.
    InvalidImportToken => "InvalidImportTokenException",
    /// The key usage or spec does not permit the operation.
    InvalidKeyUsage => "InvalidKeyUsageException",
    /// The pagination marker is not valid.
    InvalidMarker => "InvalidMarkerException",
    /// The key is temporarily unavailable.
    KeyUnavailable => "KeyUnavailableException",
    /// An internal service failure.
    KmsInternal => "KMSInternalException",
    /// The signature did not verify.
    KmsInvalidSignature => "KMSInvalidSignatureException",
    /// The key is not in a valid state for the operation.
    KmsInvalidState => "KMSInvalidStateException",
    /// A quota was exceeded.
    LimitExceeded => "LimitExceededException",
    /// The policy document is malformed.
    MalformedPolicyDocument => "MalformedPolicyDocumentException",
    /// The resource was not found.
    NotFound => "NotFoundException",
    /// A tag operation failed.
    Tag => "TagException",
    /// The operation is not supported for this key.
    UnsupportedOperation => "UnsupportedOperationException",
}

impl KmsException {
    /// Builds an exception from a raw error code.
    ///
    /// Codes the model does not document become [`KmsException::Unhandled`].
    pub fn from_code(code: &str, metadata: ErrorMetadata) -> Self {
        match ErrorCode::from_value(code) {
            Ok(code) => Self::from_error_code(code, metadata),
            Err(_) => KmsException::Unhandled {
                code: code.to_string(),
                metadata,
            },
        }
    }

    /// The error code as sent by the service.
    pub fn code(&self) -> &str {
        match self {
            KmsException::Unhandled { code, .. } => code,
            other => other.error_code().map_or("", |code| code.as_str()),
        }
    }

    /// Human-readable message, if any.
    pub fn message(&self) -> Option<&str> {
        self.metadata().message()
    }

    /// Request ID, if known.
    pub fn request_id(&self) -> Option<&str> {
        self.metadata().request_id()
    }

    /// HTTP status code.
    pub fn status_code(&self) -> u16 {
        self.metadata().status_code()
    }

    /// Client or service fault, derived from the status code.
    pub fn error_type(&self) -> ErrorType {
        ErrorType::from_status(self.status_code())
    }

    /// Name of the service that raised the exception.
    pub fn service_name(&self) -> &'static str {
        crate::SERVICE_NAME
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    fn metadata() -> ErrorMetadata {
        ErrorMetadata::new(400)
            .with_message("Key 'arn:aws:kms:us-east-1:111122223333:key/x' does not exist")
            .with_request_id("c5a1b1d2")
    }

    #[test]
    fn test_every_code_maps_to_its_variant() {
        for code in ErrorCode::VALUES {
            let exception = KmsException::from_code(code.as_str(), ErrorMetadata::new(400));
            assert_eq!(exception.error_code(), Some(*code));
            assert_eq!(exception.code(), code.as_str());
        }
    }

    #[test]
    fn test_unknown_code_is_unhandled() {
        let exception = KmsException::from_code("XksKeyNotFoundException", metadata());
        assert!(matches!(exception, KmsException::Unhandled { .. }));
        assert_eq!(exception.code(), "XksKeyNotFoundException");
        assert_eq!(exception.error_code(), None);
        assert_eq!(exception.request_id(), Some("c5a1b1d2"));
    }

    #[test]
    fn test_display_includes_code_and_message() {
        let exception = KmsException::NotFound(metadata());
        assert_eq!(
            exception.to_string(),
            "NotFoundException: Key 'arn:aws:kms:us-east-1:111122223333:key/x' does not exist (request id: c5a1b1d2)"
        );
        let bare = KmsException::KmsInternal(ErrorMetadata::new(500));
        assert_eq!(bare.to_string(), "KMSInternalException: (no message)");
    }

    #[test]
    fn test_error_type_from_status() {
        assert_eq!(KmsException::Disabled(ErrorMetadata::new(400)).error_type(), ErrorType::Client);
        assert_eq!(
            KmsException::DependencyTimeout(ErrorMetadata::new(503)).error_type(),
            ErrorType::Service
        );
        assert_eq!(
            KmsException::Tag(ErrorMetadata::default()).error_type(),
            ErrorType::Unknown
        );
    }

    #[test]
    fn test_code_literals_are_exact() {
        assert_eq!(ErrorCode::KmsInvalidState.as_str(), "KMSInvalidStateException");
        assert_eq!(ErrorCode::VALUES.len(), 27);
        assert!(ErrorCode::from_value("kmsinvalidstateexception").is_err());
    }

    #[test]
    fn test_service_name() {
        assert_eq!(KmsException::Tag(metadata()).service_name(), "kms");
    }
}
