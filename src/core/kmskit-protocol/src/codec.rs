//! JSON 1.1 request and response marshalling.
//!
//! Requests are POSTed as a JSON object whose members are the request
//! shape's wire fields; the operation travels in the `X-Amz-Target` header.
//! Error responses carry the error code in `__type`, possibly prefixed with
//! a namespace (`com.amazonaws.kms#NotFoundException`) or suffixed with
//! extra data after a colon.

use serde::Deserialize;
use tracing::{debug, warn};

use kmskit_model::{ErrorMetadata, KmsException, KmsRequest, Operation};

use crate::error::ProtocolError;

/// Content type of every request and response body.
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// Code reported when an error body carries no usable `__type`.
pub const UNKNOWN_ERROR_CODE: &str = "Unknown";

// ============================================================================
// Requests
// ============================================================================

/// A request ready to hand to an HTTP transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRequest {
    /// Operation invoked.
    pub operation: Operation,
    /// `X-Amz-Target` header value.
    pub target: &'static str,
    /// `Content-Type` header value.
    pub content_type: &'static str,
    /// JSON body.
    pub body: String,
}

impl EncodedRequest {
    /// Protocol headers the transport must send alongside the body.
    pub fn headers(&self) -> [(&'static str, &'static str); 2] {
        [("Content-Type", self.content_type), ("X-Amz-Target", self.target)]
    }
}

/// Serializes a request into its wire form.
///
/// Unset fields are omitted and binary fields are base64-encoded.
pub fn encode_request<R: KmsRequest>(request: &R) -> Result<EncodedRequest, ProtocolError> {
    let body = serde_json::to_string(request).map_err(|source| ProtocolError::Encode {
        operation: R::OPERATION,
        source,
    })?;

    debug!(operation = %R::OPERATION, bytes = body.len(), "Encoded request");

    Ok(EncodedRequest {
        operation: R::OPERATION,
        target: R::OPERATION.target(),
        content_type: CONTENT_TYPE,
        body,
    })
}

// ============================================================================
// Responses
// ============================================================================

/// Transport-level details of a response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseMetadata {
    /// Value of the `x-amzn-RequestId` header.
    pub request_id: Option<String>,
    /// HTTP status code.
    pub status_code: u16,
}

/// A decoded successful response.
#[derive(Debug, Clone, PartialEq)]
pub struct Response<T> {
    /// Decoded result shape.
    pub result: T,
    /// Transport-level details.
    pub metadata: ResponseMetadata,
}

impl<T> Response<T> {
    /// Drops the metadata and returns the result.
    pub fn into_result(self) -> T {
        self.result
    }
}

/// Decodes a response for request type `R`.
///
/// Any 2xx status decodes the body into `R::Result`; an empty body yields
/// the empty result. Other statuses decode into the matching
/// [`KmsException`], returned as [`ProtocolError::Service`].
pub fn decode_response<R: KmsRequest>(
    status_code: u16,
    request_id: Option<&str>,
    body: &[u8],
) -> Result<Response<R::Result>, ProtocolError> {
    if !(200..300).contains(&status_code) {
        return Err(decode_error(status_code, request_id, body).into());
    }

    let result = if body.iter().all(u8::is_ascii_whitespace) {
        R::Result::default()
    } else {
        serde_json::from_slice(body).map_err(|source| ProtocolError::Decode {
            operation: R::OPERATION,
            source,
        })?
    };

    debug!(operation = %R::OPERATION, status_code, "Decoded response");

    Ok(Response {
        result,
        metadata: ResponseMetadata {
            request_id: request_id.map(str::to_string),
            status_code,
        },
    })
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type", alias = "code", default)]
    kind: Option<String>,
    #[serde(alias = "Message", default)]
    message: Option<String>,
}

/// Strips the namespace prefix and any `:`-suffix from an error type.
fn sanitize_error_code(raw: &str) -> &str {
    let without_namespace = raw.rsplit('#').next().unwrap_or(raw);
    without_namespace
        .split(':')
        .next()
        .unwrap_or(without_namespace)
        .trim()
}

/// Decodes an error response body into a service exception.
///
/// Bodies that are not JSON, or carry no error type, become
/// [`KmsException::Unhandled`] with code [`UNKNOWN_ERROR_CODE`].
pub fn decode_error(status_code: u16, request_id: Option<&str>, body: &[u8]) -> KmsException {
    let mut metadata = ErrorMetadata::new(status_code);
    if let Some(request_id) = request_id {
        metadata = metadata.with_request_id(request_id);
    }

    let parsed: ErrorBody = match serde_json::from_slice(body) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(status_code, error = %e, "Unparsable error body");
            return KmsException::Unhandled {
                code: UNKNOWN_ERROR_CODE.to_string(),
                metadata,
            };
        },
    };

    if let Some(message) = parsed.message {
        metadata = metadata.with_message(message);
    }

    let code = parsed
        .kind
        .as_deref()
        .map(sanitize_error_code)
        .filter(|code| !code.is_empty())
        .unwrap_or(UNKNOWN_ERROR_CODE);

    let exception = KmsException::from_code(code, metadata);
    if exception.error_code().is_none() {
        warn!(code, status_code, "Unrecognized error code");
    } else {
        debug!(code, status_code, "Decoded service error");
    }
    exception
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;
    use kmskit_model::{
        DescribeKeyRequest, EnableKeyRequest, EncryptRequest, ErrorCode, KeySpec, KeyState,
    };

    #[test]
    fn test_encode_request_headers() {
        let request = DescribeKeyRequest::new().with_key_id("alias/app");
        let encoded = encode_request(&request).unwrap();

        assert_eq!(encoded.operation, Operation::DescribeKey);
        assert_eq!(encoded.target, "TrentService.DescribeKey");
        assert_eq!(encoded.content_type, "application/x-amz-json-1.1");
        assert_eq!(encoded.body, r#"{"KeyId":"alias/app"}"#);
        assert_eq!(
            encoded.headers(),
            [
                ("Content-Type", "application/x-amz-json-1.1"),
                ("X-Amz-Target", "TrentService.DescribeKey"),
            ]
        );
    }

    #[test]
    fn test_encode_empty_request() {
        let encoded = encode_request(&EncryptRequest::new()).unwrap();
        assert_eq!(encoded.body, "{}");
    }

    #[test]
    fn test_decode_success() {
        let body = br#"{"KeyMetadata":{"KeyId":"1234abcd","KeyState":"PendingDeletion"}}"#;
        let response = decode_response::<DescribeKeyRequest>(200, Some("req-1"), body).unwrap();

        assert_eq!(response.metadata.request_id.as_deref(), Some("req-1"));
        assert_eq!(response.metadata.status_code, 200);
        let metadata = response.result.key_metadata().unwrap();
        assert_eq!(metadata.key_state(), Some(KeyState::PendingDeletion));
    }

    #[test]
    fn test_decode_success_with_newer_enum_literal() {
        let body = br#"{"KeyMetadata":{"KeyId":"k","KeySpec":"ML_DSA_65","KeyState":"Enabled"}}"#;
        let response = decode_response::<DescribeKeyRequest>(200, None, body).unwrap();

        let metadata = response.result.key_metadata().unwrap();
        assert_eq!(metadata.key_id(), Some("k"));
        assert_eq!(metadata.key_spec(), Some(KeySpec::Unknown("ML_DSA_65".to_string())));
        assert_eq!(metadata.key_state(), Some(KeyState::Enabled));
    }

    #[test]
    fn test_decode_empty_body_yields_empty_result() {
        let response = decode_response::<EnableKeyRequest>(200, None, b"").unwrap();
        assert_eq!(response.into_result().to_string(), "{}");

        let response = decode_response::<EnableKeyRequest>(200, None, b" \n").unwrap();
        assert_eq!(response.metadata.request_id, None);
    }

    #[test]
    fn test_decode_malformed_success_body() {
        let err = decode_response::<DescribeKeyRequest>(200, None, b"{not json").unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::Decode {
                operation: Operation::DescribeKey,
                ..
            }
        ));
    }

    #[test]
    fn test_decode_error_status() {
        let body = br#"{"__type":"NotFoundException","message":"Alias does not exist"}"#;
        let err = decode_response::<DescribeKeyRequest>(400, Some("req-2"), body).unwrap_err();
        let exception = err.as_service().unwrap();

        assert_eq!(exception.error_code(), Some(ErrorCode::NotFound));
        assert_eq!(exception.message(), Some("Alias does not exist"));
        assert_eq!(exception.request_id(), Some("req-2"));
        assert_eq!(exception.status_code(), 400);
    }

    #[test]
    fn test_decode_error_sanitizes_type() {
        let body = br#"{"__type":"com.amazonaws.kms#KMSInvalidStateException:http://internal","Message":"pending"}"#;
        let exception = decode_error(400, None, body);
        assert_eq!(exception.error_code(), Some(ErrorCode::KmsInvalidState));
        assert_eq!(exception.message(), Some("pending"));
    }

    #[test]
    fn test_decode_error_unknown_code() {
        let body = br#"{"__type":"XksProxyUriInUseException"}"#;
        let exception = decode_error(400, None, body);
        assert_eq!(exception.code(), "XksProxyUriInUseException");
        assert!(exception.error_code().is_none());
    }

    #[test]
    fn test_decode_error_unparsable_body() {
        let exception = decode_error(502, Some("req-3"), b"<html>Bad Gateway</html>");
        assert!(matches!(exception, KmsException::Unhandled { .. }));
        assert_eq!(exception.code(), UNKNOWN_ERROR_CODE);
        assert_eq!(exception.request_id(), Some("req-3"));
    }

    #[test]
    fn test_decode_error_missing_type() {
        let exception = decode_error(500, None, br#"{"message":"boom"}"#);
        assert_eq!(exception.code(), UNKNOWN_ERROR_CODE);
        assert_eq!(exception.message(), Some("boom"));
    }

    #[test]
    fn test_sanitize_error_code() {
        assert_eq!(sanitize_error_code("TagException"), "TagException");
        assert_eq!(sanitize_error_code("ns.a#ns.b#TagException"), "TagException");
        assert_eq!(sanitize_error_code("TagException:extra:more"), "TagException");
    }
}
