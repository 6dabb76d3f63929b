//! Automatic and on-demand key material rotation.

use crate::shape::shape;
use crate::types::Timestamp;

shape! {
    /// Turns on automatic rotation.
    pub struct EnableKeyRotationRequest {
        /// Symmetric key ID or key ARN.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Days between rotations (server default 365).
        value rotation_period_in_days: i32 => "RotationPeriodInDays" { rotation_period_in_days, set_rotation_period_in_days, with_rotation_period_in_days },
    }
}

shape! {
    /// Response of `EnableKeyRotation`.
    pub struct EnableKeyRotationResult {}
}

shape! {
    /// Turns off automatic rotation.
    pub struct DisableKeyRotationRequest {
        /// Key ID or key ARN.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
    }
}

shape! {
    /// Response of `DisableKeyRotation`.
    pub struct DisableKeyRotationResult {}
}

shape! {
    /// Reads the rotation schedule of a key.
    pub struct GetKeyRotationStatusRequest {
        /// Key ID or key ARN.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
    }
}

shape! {
    /// Response of `GetKeyRotationStatus`.
    pub struct GetKeyRotationStatusResult {
        /// Whether automatic rotation is on.
        value key_rotation_enabled: bool => "KeyRotationEnabled" { key_rotation_enabled, set_key_rotation_enabled, with_key_rotation_enabled },
        /// Key ARN.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Days between rotations.
        value rotation_period_in_days: i32 => "RotationPeriodInDays" { rotation_period_in_days, set_rotation_period_in_days, with_rotation_period_in_days },
        /// Next scheduled automatic rotation.
        value next_rotation_date: Timestamp => "NextRotationDate" { next_rotation_date, set_next_rotation_date, with_next_rotation_date },
        /// Start of an in-progress on-demand rotation.
        value on_demand_rotation_start_date: Timestamp => "OnDemandRotationStartDate" { on_demand_rotation_start_date, set_on_demand_rotation_start_date, with_on_demand_rotation_start_date },
    }
}

shape! {
    /// Rotates key material immediately.
    pub struct RotateKeyOnDemandRequest {
        /// Key ID or key ARN.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
    }
}

shape! {
    /// Response of `RotateKeyOnDemand`.
    pub struct RotateKeyOnDemandResult {
        /// Key ID.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_status_dates() {
        let body = r#"{"KeyId":"k","KeyRotationEnabled":true,"RotationPeriodInDays":90,"NextRotationDate":1735689600}"#;
        let result: GetKeyRotationStatusResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.key_rotation_enabled(), Some(true));
        assert_eq!(result.rotation_period_in_days(), Some(90));
        assert_eq!(
            result.next_rotation_date().map(|d| d.to_string()),
            Some("2025-01-01T00:00:00.000Z".to_string())
        );
        assert_eq!(result.on_demand_rotation_start_date(), None);
    }

    #[test]
    fn test_rotation_status_display() {
        let date = Timestamp::from_epoch_millis(1_735_689_600_000).unwrap();
        let result = GetKeyRotationStatusResult::new()
            .with_key_rotation_enabled(false)
            .with_next_rotation_date(date);
        assert_eq!(
            result.to_string(),
            "{KeyRotationEnabled: false,NextRotationDate: 2025-01-01T00:00:00.000Z}"
        );
    }

    #[test]
    fn test_enable_rotation_period_optional() {
        let json = serde_json::to_string(&EnableKeyRotationRequest::new().with_key_id("k")).unwrap();
        assert_eq!(json, r#"{"KeyId":"k"}"#);
    }
}
