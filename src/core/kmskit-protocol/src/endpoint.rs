//! Regional endpoint resolution.

use kmskit_model::SERVICE_NAME;

use crate::error::ProtocolError;

/// Default DNS suffix.
const DNS_SUFFIX: &str = "amazonaws.com";

/// DNS suffix of the China partition.
const DNS_SUFFIX_CN: &str = "amazonaws.com.cn";

/// Resolves the HTTPS endpoint of the service in `region`.
///
/// Regions starting with `cn-` resolve into the China partition.
///
/// # Errors
///
/// Returns [`ProtocolError::InvalidRegion`] when the name is empty or holds
/// anything besides lowercase letters, digits and dashes.
pub fn endpoint_for_region(region: &str) -> Result<String, ProtocolError> {
    let valid = !region.is_empty()
        && !region.starts_with('-')
        && !region.ends_with('-')
        && region
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if !valid {
        return Err(ProtocolError::InvalidRegion(region.to_string()));
    }

    let suffix = if region.starts_with("cn-") {
        DNS_SUFFIX_CN
    } else {
        DNS_SUFFIX
    };

    Ok(format!("https://{}.{}.{}", SERVICE_NAME, region, suffix))
}
