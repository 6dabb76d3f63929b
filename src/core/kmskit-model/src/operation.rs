//! Operation catalogue and the request/result binding.
//!
//! Each remote operation is listed once below with its request type, result
//! type and the error codes the API documents for it. The [`Operation`]
//! enum, the [`KmsRequest`] impls and [`Operation::documented_errors`] are
//! all generated from that single table.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::aliases::*;
use crate::crypto::*;
use crate::exception::ErrorCode;
use crate::grants::*;
use crate::import::*;
use crate::keys::*;
use crate::policy::*;
use crate::rotation::*;
use crate::shape::string_enum;
use crate::signing::*;
use crate::tags::*;
use crate::TARGET_PREFIX;

/// A request shape bound to exactly one remote operation.
pub trait KmsRequest:
    Serialize + DeserializeOwned + fmt::Debug + fmt::Display + Clone + Default + PartialEq
{
    /// Shape the service returns on success.
    type Result: Serialize
        + DeserializeOwned
        + fmt::Debug
        + fmt::Display
        + Clone
        + Default
        + PartialEq;

    /// The operation this request invokes.
    const OPERATION: Operation;
}

macro_rules! operations {
    (
        $(
            $variant:ident = $literal:literal => $request:ident, $result:ident, [$($error:ident),* $(,)?]
        );+ $(;)?
    ) => {
        string_enum! {
            /// Remote operations of the key management API.
            pub enum Operation {
                $(
                    #[doc = concat!("`", $literal, "`.")]
                    $variant => $literal,
                )+
            }
        }

        impl Operation {
            /// Value of the `X-Amz-Target` header for this operation.
            pub const fn target(&self) -> &'static str {
                match self {
                    $(Operation::$variant => concat!("TrentService.", $literal),)+
                }
            }

            /// Error codes the API documents for this operation.
            ///
            /// The service may still return other codes; those decode to
            /// [`KmsException::Unhandled`](crate::KmsException::Unhandled)
            /// when the model does not know them.
            pub fn documented_errors(&self) -> &'static [ErrorCode] {
                match self {
                    $(Operation::$variant => &[$(ErrorCode::$error),*],)+
                }
            }
        }

        $(
            impl KmsRequest for $request {
                type Result = $result;
                const OPERATION: Operation = Operation::$variant;
            }
        )+
    };
}

operations! {
    CreateKey = "CreateKey" => CreateKeyRequest, CreateKeyResult, [
        MalformedPolicyDocument, DependencyTimeout, InvalidArn, UnsupportedOperation, KmsInternal,
        LimitExceeded, Tag, CustomKeyStoreNotFound, CustomKeyStoreInvalidState,
        CloudHsmClusterInvalidConfiguration,
    ];
    DescribeKey = "DescribeKey" => DescribeKeyRequest, DescribeKeyResult, [
        NotFound, InvalidArn, DependencyTimeout, KmsInternal,
    ];
    ListKeys = "ListKeys" => ListKeysRequest, ListKeysResult, [
        DependencyTimeout, KmsInternal, InvalidMarker,
    ];
    EnableKey = "EnableKey" => EnableKeyRequest, EnableKeyResult, [
        NotFound, InvalidArn, DependencyTimeout, KmsInternal, LimitExceeded, KmsInvalidState,
    ];
    DisableKey = "DisableKey" => DisableKeyRequest, DisableKeyResult, [
        NotFound, InvalidArn, DependencyTimeout, KmsInternal, KmsInvalidState,
    ];
    ScheduleKeyDeletion = "ScheduleKeyDeletion" => ScheduleKeyDeletionRequest, ScheduleKeyDeletionResult, [
        NotFound, InvalidArn, DependencyTimeout, KmsInternal, KmsInvalidState,
    ];
    CancelKeyDeletion = "CancelKeyDeletion" => CancelKeyDeletionRequest, CancelKeyDeletionResult, [
        NotFound, InvalidArn, DependencyTimeout, KmsInternal, KmsInvalidState,
    ];
    UpdateKeyDescription = "UpdateKeyDescription" => UpdateKeyDescriptionRequest, UpdateKeyDescriptionResult, [
        NotFound, InvalidArn, DependencyTimeout, KmsInternal, KmsInvalidState,
    ];
    Encrypt = "Encrypt" => EncryptRequest, EncryptResult, [
        NotFound, Disabled, KeyUnavailable, DependencyTimeout, InvalidKeyUsage,
        InvalidGrantToken, KmsInternal, KmsInvalidState, DryRunOperation,
    ];
    Decrypt = "Decrypt" => DecryptRequest, DecryptResult, [
        NotFound, Disabled, InvalidCiphertext, KeyUnavailable, IncorrectKey, InvalidKeyUsage,
        DependencyTimeout, InvalidGrantToken, KmsInternal, KmsInvalidState, DryRunOperation,
    ];
    ReEncrypt = "ReEncrypt" => ReEncryptRequest, ReEncryptResult, [
        NotFound, Disabled, InvalidCiphertext, KeyUnavailable, IncorrectKey, DependencyTimeout,
        InvalidKeyUsage, InvalidGrantToken, KmsInternal, KmsInvalidState, DryRunOperation,
    ];
    GenerateDataKey = "GenerateDataKey" => GenerateDataKeyRequest, GenerateDataKeyResult, [
        NotFound, Disabled, KeyUnavailable, DependencyTimeout, InvalidKeyUsage,
        InvalidGrantToken, KmsInternal, KmsInvalidState, DryRunOperation,
    ];
    GenerateDataKeyWithoutPlaintext = "GenerateDataKeyWithoutPlaintext" => GenerateDataKeyWithoutPlaintextRequest, GenerateDataKeyWithoutPlaintextResult, [
        NotFound, Disabled, KeyUnavailable, DependencyTimeout, InvalidKeyUsage,
        InvalidGrantToken, KmsInternal, KmsInvalidState, DryRunOperation,
    ];
    GenerateRandom = "GenerateRandom" => GenerateRandomRequest, GenerateRandomResult, [
        DependencyTimeout, KmsInternal, UnsupportedOperation, CustomKeyStoreNotFound,
        CustomKeyStoreInvalidState,
    ];
    Sign = "Sign" => SignRequest, SignResult, [
        NotFound, Disabled, KeyUnavailable, DependencyTimeout, InvalidKeyUsage,
        InvalidGrantToken, KmsInternal, KmsInvalidState, DryRunOperation,
    ];
    Verify = "Verify" => VerifyRequest, VerifyResult, [
        NotFound, Disabled, KeyUnavailable, DependencyTimeout, InvalidKeyUsage,
        InvalidGrantToken, KmsInternal, KmsInvalidState, KmsInvalidSignature, DryRunOperation,
    ];
    GetPublicKey = "GetPublicKey" => GetPublicKeyRequest, GetPublicKeyResult, [
        NotFound, Disabled, KeyUnavailable, DependencyTimeout, UnsupportedOperation,
        InvalidArn, InvalidGrantToken, InvalidKeyUsage, KmsInternal, KmsInvalidState,
    ];
    CreateGrant = "CreateGrant" => CreateGrantRequest, CreateGrantResult, [
        NotFound, Disabled, DependencyTimeout, InvalidArn, KmsInternal, InvalidGrantToken,
        LimitExceeded, KmsInvalidState, DryRunOperation,
    ];
    ListGrants = "ListGrants" => ListGrantsRequest, ListGrantsResult, [
        NotFound, DependencyTimeout, InvalidMarker, InvalidGrantId, InvalidArn, KmsInternal,
        KmsInvalidState,
    ];
    ListRetirableGrants = "ListRetirableGrants" => ListRetirableGrantsRequest, ListRetirableGrantsResult, [
        DependencyTimeout, InvalidMarker, InvalidArn, NotFound, KmsInternal,
    ];
    RetireGrant = "RetireGrant" => RetireGrantRequest, RetireGrantResult, [
        InvalidArn, InvalidGrantToken, InvalidGrantId, NotFound, DependencyTimeout,
        KmsInternal, KmsInvalidState, DryRunOperation,
    ];
    RevokeGrant = "RevokeGrant" => RevokeGrantRequest, RevokeGrantResult, [
        NotFound, DependencyTimeout, InvalidArn, InvalidGrantId, KmsInternal, KmsInvalidState,
        DryRunOperation,
    ];
    CreateAlias = "CreateAlias" => CreateAliasRequest, CreateAliasResult, [
        DependencyTimeout, AlreadyExists, NotFound, InvalidAliasName, KmsInternal,
        LimitExceeded, KmsInvalidState,
    ];
    DeleteAlias = "DeleteAlias" => DeleteAliasRequest, DeleteAliasResult, [
        DependencyTimeout, NotFound, KmsInternal, KmsInvalidState,
    ];
    UpdateAlias = "UpdateAlias" => UpdateAliasRequest, UpdateAliasResult, [
        DependencyTimeout, NotFound, KmsInternal, LimitExceeded, KmsInvalidState,
    ];
    ListAliases = "ListAliases" => ListAliasesRequest, ListAliasesResult, [
        DependencyTimeout, InvalidMarker, KmsInternal, InvalidArn, NotFound,
    ];
    TagResource = "TagResource" => TagResourceRequest, TagResourceResult, [
        KmsInternal, NotFound, InvalidArn, KmsInvalidState, LimitExceeded, Tag,
    ];
    UntagResource = "UntagResource" => UntagResourceRequest, UntagResourceResult, [
        KmsInternal, NotFound, InvalidArn, KmsInvalidState, Tag,
    ];
    ListResourceTags = "ListResourceTags" => ListResourceTagsRequest, ListResourceTagsResult, [
        KmsInternal, NotFound, InvalidArn, InvalidMarker,
    ];
    EnableKeyRotation = "EnableKeyRotation" => EnableKeyRotationRequest, EnableKeyRotationResult, [
        NotFound, Disabled, InvalidArn, DependencyTimeout, KmsInternal, KmsInvalidState,
        UnsupportedOperation,
    ];
    DisableKeyRotation = "DisableKeyRotation" => DisableKeyRotationRequest, DisableKeyRotationResult, [
        NotFound, Disabled, InvalidArn, DependencyTimeout, KmsInternal, KmsInvalidState,
        UnsupportedOperation,
    ];
    GetKeyRotationStatus = "GetKeyRotationStatus" => GetKeyRotationStatusRequest, GetKeyRotationStatusResult, [
        NotFound, InvalidArn, DependencyTimeout, KmsInternal, KmsInvalidState,
        UnsupportedOperation,
    ];
    RotateKeyOnDemand = "RotateKeyOnDemand" => RotateKeyOnDemandRequest, RotateKeyOnDemandResult, [
        NotFound, Disabled, InvalidArn, DependencyTimeout, KmsInternal, KmsInvalidState,
        UnsupportedOperation, LimitExceeded,
    ];
    GetParametersForImport = "GetParametersForImport" => GetParametersForImportRequest, GetParametersForImportResult, [
        InvalidArn, UnsupportedOperation, DependencyTimeout, NotFound, KmsInternal,
        KmsInvalidState,
    ];
    ImportKeyMaterial = "ImportKeyMaterial" => ImportKeyMaterialRequest, ImportKeyMaterialResult, [
        InvalidArn, UnsupportedOperation, DependencyTimeout, NotFound, KmsInternal,
        KmsInvalidState, InvalidCiphertext, IncorrectKeyMaterial, ExpiredImportToken,
        InvalidImportToken,
    ];
    DeleteImportedKeyMaterial = "DeleteImportedKeyMaterial" => DeleteImportedKeyMaterialRequest, DeleteImportedKeyMaterialResult, [
        InvalidArn, UnsupportedOperation, DependencyTimeout, NotFound, KmsInternal,
        KmsInvalidState,
    ];
    GetKeyPolicy = "GetKeyPolicy" => GetKeyPolicyRequest, GetKeyPolicyResult, [
        NotFound, InvalidArn, DependencyTimeout, KmsInternal, KmsInvalidState,
    ];
    PutKeyPolicy = "PutKeyPolicy" => PutKeyPolicyRequest, PutKeyPolicyResult, [
        NotFound, InvalidArn, MalformedPolicyDocument, DependencyTimeout, UnsupportedOperation,
        KmsInternal, LimitExceeded, KmsInvalidState,
    ];
    ListKeyPolicies = "ListKeyPolicies" => ListKeyPoliciesRequest, ListKeyPoliciesResult, [
        NotFound, InvalidArn, DependencyTimeout, KmsInternal, KmsInvalidState,
    ];
}

impl Operation {
    /// Resolves an `X-Amz-Target` header value back to its operation.
    pub fn from_target(target: &str) -> Option<Self> {
        target
            .strip_prefix(TARGET_PREFIX)
            .and_then(|rest| rest.strip_prefix('.'))
            .and_then(|name| name.parse().ok())
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    fn operation_of<R: KmsRequest>(_: &R) -> Operation {
        R::OPERATION
    }

    #[test]
    fn test_catalogue_size() {
        assert_eq!(Operation::VALUES.len(), 39);
    }

    #[test]
    fn test_targets() {
        for operation in Operation::VALUES {
            let target = operation.target();
            assert_eq!(target, format!("{}.{}", TARGET_PREFIX, operation.as_str()));
            assert_eq!(Operation::from_target(target), Some(*operation));
        }
        assert_eq!(Operation::Encrypt.target(), "TrentService.Encrypt");
    }

    #[test]
    fn test_from_target_rejects_foreign_prefix() {
        assert_eq!(Operation::from_target("Kinesis_20131202.PutRecord"), None);
        assert_eq!(Operation::from_target("TrentServiceEncrypt"), None);
        assert_eq!(Operation::from_target("TrentService.Nope"), None);
    }

    #[test]
    fn test_documented_errors_not_empty() {
        for operation in Operation::VALUES {
            assert!(
                !operation.documented_errors().is_empty(),
                "{} has no documented errors",
                operation
            );
        }
        assert!(Operation::Verify
            .documented_errors()
            .contains(&ErrorCode::KmsInvalidSignature));
        assert!(Operation::ImportKeyMaterial
            .documented_errors()
            .contains(&ErrorCode::ExpiredImportToken));
    }

    #[test]
    fn test_request_binding() {
        assert_eq!(operation_of(&EncryptRequest::new()), Operation::Encrypt);
        assert_eq!(operation_of(&TagResourceRequest::new()), Operation::TagResource);
        assert_eq!(
            operation_of(&GenerateDataKeyWithoutPlaintextRequest::new()),
            Operation::GenerateDataKeyWithoutPlaintext
        );
        let _: <CreateGrantRequest as KmsRequest>::Result = CreateGrantResult::new();
    }
}
