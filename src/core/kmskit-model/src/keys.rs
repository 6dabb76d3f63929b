//! Key lifecycle: creation, description, listing, enablement and deletion.

use crate::enums::{
    EncryptionAlgorithmSpec, ExpirationModelType, KeyManagerType, KeySpec, KeyState,
    KeyUsageType, OriginType, SigningAlgorithmSpec,
};
use crate::shape::shape;
use crate::tags::Tag;
use crate::types::Timestamp;

shape! {
    /// Detailed description of a key.
    pub struct KeyMetadata {
        /// Account that owns the key.
        text aws_account_id: String => "AWSAccountId" { aws_account_id, set_aws_account_id, with_aws_account_id },
        /// Globally unique key ID.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Key ARN.
        text arn: String => "Arn" { arn, set_arn, with_arn },
        /// When the key was created.
        value creation_date: Timestamp => "CreationDate" { creation_date, set_creation_date, with_creation_date },
        /// Whether the key is enabled.
        value enabled: bool => "Enabled" { enabled, set_enabled, with_enabled },
        /// Free-form description.
        text description: String => "Description" { description, set_description, with_description },
        /// Permitted cryptographic operations.
        choice key_usage: KeyUsageType => "KeyUsage" { key_usage, set_key_usage, with_key_usage },
        /// Current lifecycle state.
        choice key_state: KeyState => "KeyState" { key_state, set_key_state, with_key_state },
        /// When the key will be deleted, if scheduled.
        value deletion_date: Timestamp => "DeletionDate" { deletion_date, set_deletion_date, with_deletion_date },
        /// When imported key material expires.
        value valid_to: Timestamp => "ValidTo" { valid_to, set_valid_to, with_valid_to },
        /// Source of the key material.
        choice origin: OriginType => "Origin" { origin, set_origin, with_origin },
        /// Custom key store holding the key.
        text custom_key_store_id: String => "CustomKeyStoreId" { custom_key_store_id, set_custom_key_store_id, with_custom_key_store_id },
        /// CloudHSM cluster holding the key material.
        text cloud_hsm_cluster_id: String => "CloudHsmClusterId" { cloud_hsm_cluster_id, set_cloud_hsm_cluster_id, with_cloud_hsm_cluster_id },
        /// Whether imported material expires.
        choice expiration_model: ExpirationModelType => "ExpirationModel" { expiration_model, set_expiration_model, with_expiration_model },
        /// Who manages the key.
        choice key_manager: KeyManagerType => "KeyManager" { key_manager, set_key_manager, with_key_manager },
        /// Type of key material.
        choice key_spec: KeySpec => "KeySpec" { key_spec, set_key_spec, with_key_spec },
        /// Encryption algorithms the key supports.
        list encryption_algorithms: EncryptionAlgorithmSpec => "EncryptionAlgorithms" { encryption_algorithms, set_encryption_algorithms, with_encryption_algorithms },
        /// Signing algorithms the key supports.
        list signing_algorithms: SigningAlgorithmSpec => "SigningAlgorithms" { signing_algorithms, set_signing_algorithms, with_signing_algorithms },
        /// Whether the key is a multi-Region key.
        value multi_region: bool => "MultiRegion" { multi_region, set_multi_region, with_multi_region },
        /// Waiting period of a pending replica deletion.
        value pending_deletion_window_in_days: i32 => "PendingDeletionWindowInDays" { pending_deletion_window_in_days, set_pending_deletion_window_in_days, with_pending_deletion_window_in_days },
    }
}

shape! {
    /// One entry of a `ListKeys` page.
    pub struct KeyListEntry {
        /// Key ID.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Key ARN.
        text key_arn: String => "KeyArn" { key_arn, set_key_arn, with_key_arn },
    }
}

shape! {
    /// Creates a key.
    pub struct CreateKeyRequest {
        /// Key policy document (JSON).
        text policy: String => "Policy" { policy, set_policy, with_policy },
        /// Free-form description.
        text description: String => "Description" { description, set_description, with_description },
        /// Permitted cryptographic operations.
        choice key_usage: KeyUsageType => "KeyUsage" { key_usage, set_key_usage, with_key_usage },
        /// Type of key material.
        choice key_spec: KeySpec => "KeySpec" { key_spec, set_key_spec, with_key_spec },
        /// Source of the key material.
        choice origin: OriginType => "Origin" { origin, set_origin, with_origin },
        /// Custom key store to create the key in.
        text custom_key_store_id: String => "CustomKeyStoreId" { custom_key_store_id, set_custom_key_store_id, with_custom_key_store_id },
        /// Skips the policy lockout safety check.
        value bypass_policy_lockout_safety_check: bool => "BypassPolicyLockoutSafetyCheck" { bypass_policy_lockout_safety_check, set_bypass_policy_lockout_safety_check, with_bypass_policy_lockout_safety_check },
        /// Tags to attach at creation.
        list tags: Tag => "Tags" { tags, set_tags, with_tags },
        /// Creates a multi-Region primary key.
        value multi_region: bool => "MultiRegion" { multi_region, set_multi_region, with_multi_region },
    }
}

shape! {
    /// Response of `CreateKey`.
    pub struct CreateKeyResult {
        /// Metadata of the new key.
        object key_metadata: KeyMetadata => "KeyMetadata" { key_metadata, set_key_metadata, with_key_metadata },
    }
}

shape! {
    /// Describes a key.
    pub struct DescribeKeyRequest {
        /// Key ID, key ARN, alias name or alias ARN.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Grant tokens.
        list grant_tokens: String => "GrantTokens" { grant_tokens, set_grant_tokens, with_grant_tokens },
    }
}

shape! {
    /// Response of `DescribeKey`.
    pub struct DescribeKeyResult {
        /// Metadata of the key.
        object key_metadata: KeyMetadata => "KeyMetadata" { key_metadata, set_key_metadata, with_key_metadata },
    }
}

shape! {
    /// Lists keys in the account and Region.
    pub struct ListKeysRequest {
        /// Page size.
        value limit: i32 => "Limit" { limit, set_limit, with_limit },
        /// Pagination marker from a previous response.
        text marker: String => "Marker" { marker, set_marker, with_marker },
    }
}

shape! {
    /// Response of `ListKeys`.
    pub struct ListKeysResult {
        /// Keys on this page.
        list keys: KeyListEntry => "Keys" { keys, set_keys, with_keys },
        /// Marker for the next page.
        text next_marker: String => "NextMarker" { next_marker, set_next_marker, with_next_marker },
        /// Whether more pages follow.
        value truncated: bool => "Truncated" { truncated, set_truncated, with_truncated },
    }
}

shape! {
    /// Enables a key.
    pub struct EnableKeyRequest {
        /// Key ID or key ARN.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
    }
}

shape! {
    /// Response of `EnableKey`.
    pub struct EnableKeyResult {}
}

shape! {
    /// Disables a key.
    pub struct DisableKeyRequest {
        /// Key ID or key ARN.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
    }
}

shape! {
    /// Response of `DisableKey`.
    pub struct DisableKeyResult {}
}

shape! {
    /// Schedules deletion of a key after a waiting period.
    pub struct ScheduleKeyDeletionRequest {
        /// Key ID or key ARN.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Waiting period in days (the server enforces 7 to 30, default 30).
        value pending_window_in_days: i32 => "PendingWindowInDays" { pending_window_in_days, set_pending_window_in_days, with_pending_window_in_days },
    }
}

shape! {
    /// Response of `ScheduleKeyDeletion`.
    pub struct ScheduleKeyDeletionResult {
        /// Key ARN.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// When the key will be deleted.
        value deletion_date: Timestamp => "DeletionDate" { deletion_date, set_deletion_date, with_deletion_date },
        /// State after scheduling.
        choice key_state: KeyState => "KeyState" { key_state, set_key_state, with_key_state },
        /// Effective waiting period in days.
        value pending_window_in_days: i32 => "PendingWindowInDays" { pending_window_in_days, set_pending_window_in_days, with_pending_window_in_days },
    }
}

shape! {
    /// Cancels a scheduled deletion.
    pub struct CancelKeyDeletionRequest {
        /// Key ID or key ARN.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
    }
}

shape! {
    /// Response of `CancelKeyDeletion`.
    pub struct CancelKeyDeletionResult {
        /// Key ARN.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
    }
}

shape! {
    /// Replaces the description of a key.
    pub struct UpdateKeyDescriptionRequest {
        /// Key ID or key ARN.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// New description.
        text description: String => "Description" { description, set_description, with_description },
    }
}

shape! {
    /// Response of `UpdateKeyDescription`.
    pub struct UpdateKeyDescriptionResult {}
}
