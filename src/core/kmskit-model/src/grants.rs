//! Grants: delegated, revocable permissions scoped to a key.

use crate::enums::GrantOperation;
use crate::shape::shape;
use crate::types::Timestamp;

shape! {
    /// Encryption context conditions a grant enforces.
    pub struct GrantConstraints {
        /// Context pairs that must be present in the request.
        map encryption_context_subset: String => "EncryptionContextSubset" { encryption_context_subset, set_encryption_context_subset, with_encryption_context_subset },
        /// Context that must match the request exactly.
        map encryption_context_equals: String => "EncryptionContextEquals" { encryption_context_equals, set_encryption_context_equals, with_encryption_context_equals },
    }
}

shape! {
    /// One grant as returned by the listing operations.
    pub struct GrantListEntry {
        /// Key the grant applies to.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Grant identifier.
        text grant_id: String => "GrantId" { grant_id, set_grant_id, with_grant_id },
        /// Friendly name.
        text name: String => "Name" { name, set_name, with_name },
        /// When the grant was created.
        value creation_date: Timestamp => "CreationDate" { creation_date, set_creation_date, with_creation_date },
        /// Principal receiving the permissions.
        text grantee_principal: String => "GranteePrincipal" { grantee_principal, set_grantee_principal, with_grantee_principal },
        /// Principal allowed to retire the grant.
        text retiring_principal: String => "RetiringPrincipal" { retiring_principal, set_retiring_principal, with_retiring_principal },
        /// Account that created the grant.
        text issuing_account: String => "IssuingAccount" { issuing_account, set_issuing_account, with_issuing_account },
        /// Permitted operations.
        list operations: GrantOperation => "Operations" { operations, set_operations, with_operations },
        /// Context conditions.
        object constraints: GrantConstraints => "Constraints" { constraints, set_constraints, with_constraints },
    }
}

shape! {
    /// Creates a grant.
    pub struct CreateGrantRequest {
        /// Key ID or key ARN.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Principal receiving the permissions.
        text grantee_principal: String => "GranteePrincipal" { grantee_principal, set_grantee_principal, with_grantee_principal },
        /// Principal allowed to retire the grant.
        text retiring_principal: String => "RetiringPrincipal" { retiring_principal, set_retiring_principal, with_retiring_principal },
        /// Permitted operations.
        list operations: GrantOperation => "Operations" { operations, set_operations, with_operations },
        /// Context conditions.
        object constraints: GrantConstraints => "Constraints" { constraints, set_constraints, with_constraints },
        /// Grant tokens.
        list grant_tokens: String => "GrantTokens" { grant_tokens, set_grant_tokens, with_grant_tokens },
        /// Friendly name; retrying with the same name is idempotent.
        text name: String => "Name" { name, set_name, with_name },
        /// Checks permissions without performing the operation.
        value dry_run: bool => "DryRun" { dry_run, set_dry_run, with_dry_run },
    }
}

shape! {
    /// Response of `CreateGrant`.
    pub struct CreateGrantResult {
        /// Token usable before the grant is eventually consistent.
        text grant_token: String => "GrantToken" { grant_token, set_grant_token, with_grant_token },
        /// Grant identifier.
        text grant_id: String => "GrantId" { grant_id, set_grant_id, with_grant_id },
    }
}

shape! {
    /// Lists the grants of a key.
    pub struct ListGrantsRequest {
        /// Page size.
        value limit: i32 => "Limit" { limit, set_limit, with_limit },
        /// Pagination marker from a previous response.
        text marker: String => "Marker" { marker, set_marker, with_marker },
        /// Key ID or key ARN.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Only this grant.
        text grant_id: String => "GrantId" { grant_id, set_grant_id, with_grant_id },
        /// Only grants for this grantee.
        text grantee_principal: String => "GranteePrincipal" { grantee_principal, set_grantee_principal, with_grantee_principal },
    }
}

shape! {
    /// Response of `ListGrants`.
    pub struct ListGrantsResult {
        /// Grants on this page.
        list grants: GrantListEntry => "Grants" { grants, set_grants, with_grants },
        /// Marker for the next page.
        text next_marker: String => "NextMarker" { next_marker, set_next_marker, with_next_marker },
        /// Whether more pages follow.
        value truncated: bool => "Truncated" { truncated, set_truncated, with_truncated },
    }
}

shape! {
    /// Lists grants a principal may retire.
    pub struct ListRetirableGrantsRequest {
        /// Page size.
        value limit: i32 => "Limit" { limit, set_limit, with_limit },
        /// Pagination marker from a previous response.
        text marker: String => "Marker" { marker, set_marker, with_marker },
        /// Retiring principal.
        text retiring_principal: String => "RetiringPrincipal" { retiring_principal, set_retiring_principal, with_retiring_principal },
    }
}

shape! {
    /// Response of `ListRetirableGrants`.
    pub struct ListRetirableGrantsResult {
        /// Grants on this page.
        list grants: GrantListEntry => "Grants" { grants, set_grants, with_grants },
        /// Marker for the next page.
        text next_marker: String => "NextMarker" { next_marker, set_next_marker, with_next_marker },
        /// Whether more pages follow.
        value truncated: bool => "Truncated" { truncated, set_truncated, with_truncated },
    }
}

shape! {
    /// Retires a grant, either by token or by key and grant ID.
    pub struct RetireGrantRequest {
        /// Grant token.
        text grant_token: String => "GrantToken" { grant_token, set_grant_token, with_grant_token },
        /// Key ARN.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Grant identifier.
        text grant_id: String => "GrantId" { grant_id, set_grant_id, with_grant_id },
        /// Checks permissions without performing the operation.
        value dry_run: bool => "DryRun" { dry_run, set_dry_run, with_dry_run },
    }
}

shape! {
    /// Response of `RetireGrant`.
    pub struct RetireGrantResult {}
}

shape! {
    /// Revokes a grant.
    pub struct RevokeGrantRequest {
        /// Key ID or key ARN.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Grant identifier.
        text grant_id: String => "GrantId" { grant_id, set_grant_id, with_grant_id },
        /// Checks permissions without performing the operation.
        value dry_run: bool => "DryRun" { dry_run, set_dry_run, with_dry_run },
    }
}

shape! {
    /// Response of `RevokeGrant`.
    pub struct RevokeGrantResult {}
}
