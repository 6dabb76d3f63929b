//! Key policies.

use crate::shape::shape;

shape! {
    /// Reads a key policy.
    pub struct GetKeyPolicyRequest {
        /// Key ID or key ARN.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Policy name; only `default` exists.
        text policy_name: String => "PolicyName" { policy_name, set_policy_name, with_policy_name },
    }
}

shape! {
    /// Response of `GetKeyPolicy`.
    pub struct GetKeyPolicyResult {
        /// Policy document (JSON text).
        text policy: String => "Policy" { policy, set_policy, with_policy },
        /// Policy name.
        text policy_name: String => "PolicyName" { policy_name, set_policy_name, with_policy_name },
    }
}

shape! {
    /// Attaches a policy document to a key.
    pub struct PutKeyPolicyRequest {
        /// Key ID or key ARN.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Policy name; only `default` exists.
        text policy_name: String => "PolicyName" { policy_name, set_policy_name, with_policy_name },
        /// Policy document (JSON text).
        text policy: String => "Policy" { policy, set_policy, with_policy },
        /// Skips the lockout safety check.
        value bypass_policy_lockout_safety_check: bool => "BypassPolicyLockoutSafetyCheck" { bypass_policy_lockout_safety_check, set_bypass_policy_lockout_safety_check, with_bypass_policy_lockout_safety_check },
    }
}

shape! {
    /// Response of `PutKeyPolicy`.
    pub struct PutKeyPolicyResult {}
}

shape! {
    /// Lists the policy names of a key.
    pub struct ListKeyPoliciesRequest {
        /// Key ID or key ARN.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Page size.
        value limit: i32 => "Limit" { limit, set_limit, with_limit },
        /// Pagination marker from a previous response.
        text marker: String => "Marker" { marker, set_marker, with_marker },
    }
}

shape! {
    /// Response of `ListKeyPolicies`.
    pub struct ListKeyPoliciesResult {
        /// Policy names.
        list policy_names: String => "PolicyNames" { policy_names, set_policy_names, with_policy_names },
        /// Marker for the next page.
        text next_marker: String => "NextMarker" { next_marker, set_next_marker, with_next_marker },
        /// Whether more pages follow.
        value truncated: bool => "Truncated" { truncated, set_truncated, with_truncated },
    }
}
