//! Primitive wire types shared by every shape.
//!
//! Binary payloads travel as standard base64 strings and dates as
//! fractional epoch seconds. Buffers are owned by the value that holds them;
//! getters only hand out shared borrows.

use std::fmt;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Placeholder rendered instead of sensitive payloads.
pub const REDACTED: &str = "***Sensitive Data Redacted***";

/// An opaque, non-sensitive byte payload (ciphertext, signature, public key).
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Blob(Vec<u8>);

impl Blob {
    /// Wraps raw bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Returns the payload bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the blob and returns the owned bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Standard base64 encoding of the payload.
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.0)
    }
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blob({} bytes)", self.0.len())
    }
}

impl fmt::Display for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Blob {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Blob {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Blob {
    fn from(bytes: &[u8; N]) -> Self {
        Self(bytes.to_vec())
    }
}

impl Serialize for Blob {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for Blob {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        BASE64
            .decode(encoded.as_bytes())
            .map(Self)
            .map_err(|e| de::Error::custom(format!("invalid base64 blob: {}", e)))
    }
}

/// A sensitive byte payload (plaintext, data key, message to sign).
///
/// Never rendered by `Debug` or `Display`, and erased from memory on drop.
#[derive(Clone, Default, PartialEq, Eq, Hash, Zeroize, ZeroizeOnDrop)]
pub struct SecretBlob(Vec<u8>);

impl SecretBlob {
    /// Wraps raw secret bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Returns the secret bytes.
    ///
    /// Use with caution - copies made from the returned slice are not zeroized.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SecretBlob").field(&"[REDACTED]").finish()
    }
}

impl fmt::Display for SecretBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl From<Vec<u8>> for SecretBlob {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for SecretBlob {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for SecretBlob {
    fn from(bytes: &[u8; N]) -> Self {
        Self(bytes.to_vec())
    }
}

impl Serialize for SecretBlob {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let encoded = Zeroizing::new(BASE64.encode(&self.0));
        serializer.serialize_str(&encoded)
    }
}

impl<'de> Deserialize<'de> for SecretBlob {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = Zeroizing::new(String::deserialize(deserializer)?);
        BASE64
            .decode(encoded.as_bytes())
            .map(Self)
            .map_err(|_| de::Error::custom("invalid base64 secret blob"))
    }
}

/// A UTC instant with millisecond precision.
///
/// Serialized as fractional epoch seconds (`1548953225.717`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Current time.
    pub fn now() -> Self {
        Self::from_epoch_millis(Utc::now().timestamp_millis()).unwrap_or_default()
    }

    /// Builds a timestamp from milliseconds since the Unix epoch.
    pub fn from_epoch_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(Self)
    }

    /// Builds a timestamp from (possibly fractional) seconds since the Unix epoch.
    ///
    /// Sub-millisecond digits are rounded.
    pub fn from_epoch_seconds(seconds: f64) -> Option<Self> {
        if !seconds.is_finite() {
            return None;
        }
        let millis = (seconds * 1000.0).round();
        if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
            return None;
        }
        Self::from_epoch_millis(millis as i64)
    }

    /// Milliseconds since the Unix epoch.
    pub fn epoch_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Fractional seconds since the Unix epoch.
    pub fn epoch_seconds(&self) -> f64 {
        self.epoch_millis() as f64 / 1000.0
    }

    /// The underlying `chrono` value.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self::from_epoch_millis(value.timestamp_millis()).unwrap_or(Self(value))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.epoch_seconds())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EpochSecondsVisitor)
    }
}

struct EpochSecondsVisitor;

impl<'de> Visitor<'de> for EpochSecondsVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number of seconds since the Unix epoch")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Timestamp, E> {
        Timestamp::from_epoch_seconds(value)
            .ok_or_else(|| E::custom(format!("timestamp out of range: {}", value)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Timestamp, E> {
        value
            .checked_mul(1000)
            .and_then(Timestamp::from_epoch_millis)
            .ok_or_else(|| E::custom(format!("timestamp out of range: {}", value)))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Timestamp, E> {
        let seconds = i64::try_from(value)
            .map_err(|_| E::custom(format!("timestamp out of range: {}", value)))?;
        self.visit_i64(seconds)
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    #[test]
    fn test_blob_serializes_as_base64() {
        let blob = Blob::from(b"hello");
        let json = serde_json::to_string(&blob).unwrap();
        assert_eq!(json, "\"aGVsbG8=\"");

        let parsed: Blob = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_bytes(), b"hello");
    }

    #[test]
    fn test_blob_rejects_invalid_base64() {
        let result: Result<Blob, _> = serde_json::from_str("\"not base64!\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_blob_clone_is_independent() {
        let original = Blob::from(vec![1u8, 2, 3]);
        let mut copy = original.clone().into_inner();
        copy[0] = 9;
        assert_eq!(original.as_bytes(), &[1, 2, 3]);
    }

    #[test]
    fn test_secret_blob_debug_redacted() {
        let secret = SecretBlob::from(b"top-secret");
        let debug_str = format!("{:?}", secret);
        assert!(debug_str.contains("[REDACTED]"));
        assert!(!debug_str.contains("top-secret"));
        assert_eq!(secret.to_string(), REDACTED);
    }

    #[test]
    fn test_secret_blob_wire_form() {
        let secret = SecretBlob::from(b"key");
        let json = serde_json::to_string(&secret).unwrap();
        assert_eq!(json, "\"a2V5\"");

        let parsed: SecretBlob = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, secret);
    }

    #[test]
    fn test_timestamp_fractional_seconds() {
        let ts: Timestamp = serde_json::from_str("1.548953225717E9").unwrap();
        assert_eq!(ts.epoch_millis(), 1_548_953_225_717);
        assert_eq!(ts.to_string(), "2019-01-31T16:47:05.717Z");
    }

    #[test]
    fn test_timestamp_integer_seconds() {
        let ts: Timestamp = serde_json::from_str("1700000000").unwrap();
        assert_eq!(ts.epoch_millis(), 1_700_000_000_000);

        let json = serde_json::to_string(&ts).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }

    #[test]
    fn test_timestamp_rejects_non_finite() {
        assert!(Timestamp::from_epoch_seconds(f64::NAN).is_none());
        assert!(Timestamp::from_epoch_seconds(f64::INFINITY).is_none());
    }

    #[test]
    fn test_timestamp_rejects_strings() {
        let result: Result<Timestamp, _> = serde_json::from_str("\"2019-01-31\"");
        assert!(result.is_err());
    }
}
