//! Aliases: friendly names pointing at keys.

use crate::shape::shape;
use crate::types::Timestamp;

shape! {
    /// One alias as returned by `ListAliases`.
    pub struct AliasListEntry {
        /// Alias name (`alias/...`).
        text alias_name: String => "AliasName" { alias_name, set_alias_name, with_alias_name },
        /// Alias ARN.
        text alias_arn: String => "AliasArn" { alias_arn, set_alias_arn, with_alias_arn },
        /// Key the alias points at.
        text target_key_id: String => "TargetKeyId" { target_key_id, set_target_key_id, with_target_key_id },
        /// When the alias was created.
        value creation_date: Timestamp => "CreationDate" { creation_date, set_creation_date, with_creation_date },
        /// When the alias was last re-pointed.
        value last_updated_date: Timestamp => "LastUpdatedDate" { last_updated_date, set_last_updated_date, with_last_updated_date },
    }
}

shape! {
    /// Creates an alias.
    pub struct CreateAliasRequest {
        /// Alias name, must start with `alias/`.
        text alias_name: String => "AliasName" { alias_name, set_alias_name, with_alias_name },
        /// Key ID or key ARN to point at.
        text target_key_id: String => "TargetKeyId" { target_key_id, set_target_key_id, with_target_key_id },
    }
}

shape! {
    /// Response of `CreateAlias`.
    pub struct CreateAliasResult {}
}

shape! {
    /// Deletes an alias.
    pub struct DeleteAliasRequest {
        /// Alias name.
        text alias_name: String => "AliasName" { alias_name, set_alias_name, with_alias_name },
    }
}

shape! {
    /// Response of `DeleteAlias`.
    pub struct DeleteAliasResult {}
}

shape! {
    /// Points an existing alias at another key.
    pub struct UpdateAliasRequest {
        /// Alias name.
        text alias_name: String => "AliasName" { alias_name, set_alias_name, with_alias_name },
        /// New target key.
        text target_key_id: String => "TargetKeyId" { target_key_id, set_target_key_id, with_target_key_id },
    }
}

shape! {
    /// Response of `UpdateAlias`.
    pub struct UpdateAliasResult {}
}

shape! {
    /// Lists aliases, optionally only those of one key.
    pub struct ListAliasesRequest {
        /// Restricts the listing to this key.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Page size.
        value limit: i32 => "Limit" { limit, set_limit, with_limit },
        /// Pagination marker from a previous response.
        text marker: String => "Marker" { marker, set_marker, with_marker },
    }
}

shape! {
    /// Response of `ListAliases`.
    pub struct ListAliasesResult {
        /// Aliases on this page.
        list aliases: AliasListEntry => "Aliases" { aliases, set_aliases, with_aliases },
        /// Marker for the next page.
        text next_marker: String => "NextMarker" { next_marker, set_next_marker, with_next_marker },
        /// Whether more pages follow.
        value truncated: bool => "Truncated" { truncated, set_truncated, with_truncated },
    }
}
