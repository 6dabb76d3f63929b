//! Integration tests for the kmskit model and wire codec.
//!
//! These tests drive complete request/response exchanges against an
//! in-memory fixture service that speaks the JSON 1.1 contract.

// Allow unwrap() in tests - panics are acceptable for test assertions
#![allow(clippy::disallowed_methods)]

use std::collections::HashMap;

use anyhow::{Context, Result};
use kmskit_model::{KmsRequest, Operation};
use kmskit_protocol::{
    decode_response, encode_request, EncodedRequest, ProtocolError, Response, CONTENT_TYPE,
};
use serde_json::Value;

// ============================================================================
// Fixture Service
// ============================================================================

type Responder = Box<dyn Fn(&Value) -> (u16, String)>;

/// An in-memory stand-in for the remote service.
///
/// Each operation answers through a responder that sees the decoded request
/// body. Operations without a responder answer with an
/// `UnknownOperationException` error body.
#[derive(Default)]
pub struct FixtureService {
    responders: HashMap<Operation, Responder>,
    received: Vec<EncodedRequest>,
}

impl FixtureService {
    /// Creates a service with no responders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `operation` with a fixed status and body.
    pub fn respond(mut self, operation: Operation, status: u16, body: &str) -> Self {
        let body = body.to_string();
        self.responders
            .insert(operation, Box::new(move |_: &Value| (status, body.clone())));
        self
    }

    /// Answers `operation` with a body computed from the request.
    pub fn respond_with<F>(mut self, operation: Operation, responder: F) -> Self
    where
        F: Fn(&Value) -> (u16, String) + 'static,
    {
        self.responders.insert(operation, Box::new(responder));
        self
    }

    /// Requests received so far, in order.
    pub fn received(&self) -> &[EncodedRequest] {
        &self.received
    }

    fn handle(&mut self, request: &EncodedRequest) -> Result<(u16, String)> {
        let operation = Operation::from_target(request.target)
            .with_context(|| format!("Unknown target {}", request.target))?;
        let body: Value =
            serde_json::from_str(&request.body).context("Request body is not JSON")?;

        self.received.push(request.clone());

        Ok(match self.responders.get(&operation) {
            Some(responder) => responder(&body),
            None => (
                400,
                r#"{"__type":"UnknownOperationException","message":"no fixture"}"#.to_string(),
            ),
        })
    }
}

// ============================================================================
// Test Client
// ============================================================================

/// Client that round-trips typed requests through a [`FixtureService`].
pub struct TestClient {
    service: FixtureService,
    calls: u32,
}

impl TestClient {
    /// Wraps a fixture service.
    pub fn new(service: FixtureService) -> Self {
        Self { service, calls: 0 }
    }

    /// Encodes `request`, lets the service answer and decodes the response.
    pub fn call<R: KmsRequest>(
        &mut self,
        request: &R,
    ) -> Result<std::result::Result<Response<R::Result>, ProtocolError>> {
        let encoded = encode_request(request)?;
        assert_eq!(encoded.content_type, CONTENT_TYPE);

        let (status, body) = self.service.handle(&encoded)?;
        self.calls += 1;
        let request_id = format!("req-{:04}", self.calls);

        Ok(decode_response::<R>(status, Some(&request_id), body.as_bytes()))
    }

    /// Like [`TestClient::call`], failing on any service error.
    pub fn call_ok<R: KmsRequest>(&mut self, request: &R) -> Result<R::Result> {
        let response = self.call(request)?.context("Service returned an error")?;
        Ok(response.into_result())
    }

    /// The wrapped service.
    pub fn service(&self) -> &FixtureService {
        &self.service
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use kmskit_model::*;
    use serde_json::json;

    #[test]
    fn test_envelope_encryption_workflow() -> Result<()> {
        let service = FixtureService::new()
            .respond(
                Operation::GenerateDataKey,
                200,
                r#"{
                    "CiphertextBlob": "AQIDBAU=",
                    "KeyId": "arn:aws:kms:us-east-1:111122223333:key/1234abcd",
                    "Plaintext": "c2VjcmV0LWtleQ=="
                }"#,
            )
            .respond_with(Operation::Decrypt, |request| {
                assert_eq!(request["CiphertextBlob"], "AQIDBAU=");
                assert_eq!(request["EncryptionContext"]["tenant"], "acme");
                (
                    200,
                    json!({
                        "KeyId": "arn:aws:kms:us-east-1:111122223333:key/1234abcd",
                        "Plaintext": "c2VjcmV0LWtleQ==",
                        "EncryptionAlgorithm": "SYMMETRIC_DEFAULT"
                    })
                    .to_string(),
                )
            });
        let mut client = TestClient::new(service);

        let data_key = client.call_ok(
            &GenerateDataKeyRequest::new()
                .with_key_id("alias/app")
                .with_key_spec(DataKeySpec::Aes256)
                .with_encryption_context("tenant", "acme"),
        )?;
        assert_eq!(data_key.plaintext(), Some(&b"secret-key"[..]));

        let ciphertext = data_key.ciphertext_blob().context("missing ciphertext")?;
        let decrypted = client.call_ok(
            &DecryptRequest::new()
                .with_ciphertext_blob(ciphertext)
                .with_encryption_context("tenant", "acme"),
        )?;

        assert_eq!(decrypted.plaintext(), data_key.plaintext());
        assert_eq!(
            decrypted.encryption_algorithm(),
            Some(EncryptionAlgorithmSpec::SymmetricDefault)
        );
        assert!(!format!("{:?}", decrypted).contains("secret-key"));
        assert!(!decrypted.to_string().contains("c2VjcmV0LWtleQ"));

        let targets: Vec<_> = client.service().received().iter().map(|r| r.target).collect();
        assert_eq!(
            targets,
            vec!["TrentService.GenerateDataKey", "TrentService.Decrypt"]
        );
        Ok(())
    }

    #[test]
    fn test_documented_errors_decode_to_variants() -> Result<()> {
        for code in Operation::Decrypt.documented_errors() {
            let body = json!({
                "__type": format!("com.amazonaws.kms#{}", code.as_str()),
                "message": "fixture failure"
            })
            .to_string();
            let mut client =
                TestClient::new(FixtureService::new().respond(Operation::Decrypt, 400, &body));

            let err = client
                .call(&DecryptRequest::new().with_ciphertext_blob(b"x"))?
                .unwrap_err();
            let exception = err.as_service().context("expected a service error")?;

            assert_eq!(exception.error_code(), Some(*code));
            assert_eq!(exception.message(), Some("fixture failure"));
            assert_eq!(exception.request_id(), Some("req-0001"));
            assert_eq!(exception.error_type(), ErrorType::Client);
        }
        Ok(())
    }

    #[test]
    fn test_missing_fixture_is_unhandled() -> Result<()> {
        let mut client = TestClient::new(FixtureService::new());
        let err = client
            .call(&RotateKeyOnDemandRequest::new().with_key_id("k"))?
            .unwrap_err();

        match err {
            ProtocolError::Service(KmsException::Unhandled { code, metadata }) => {
                assert_eq!(code, "UnknownOperationException");
                assert_eq!(metadata.message(), Some("no fixture"));
                assert_eq!(metadata.status_code(), 400);
            },
            other => panic!("unexpected error: {other}"),
        }
        Ok(())
    }

    #[test]
    fn test_tag_pagination_workflow() -> Result<()> {
        let service = FixtureService::new()
            .respond_with(Operation::TagResource, |request| {
                assert_eq!(
                    request["Tags"],
                    json!([
                        {"TagKey": "env", "TagValue": "prod"},
                        {"TagKey": "team", "TagValue": "payments"},
                        {"TagKey": "env", "TagValue": "prod"}
                    ])
                );
                (200, String::new())
            })
            .respond_with(Operation::ListResourceTags, |request| {
                let body = match request.get("Marker").and_then(Value::as_str) {
                    None => json!({
                        "Tags": [{"TagKey": "env", "TagValue": "prod"}],
                        "NextMarker": "page-2",
                        "Truncated": true
                    }),
                    Some("page-2") => json!({
                        "Tags": [{"TagKey": "team", "TagValue": "payments"}],
                        "Truncated": false
                    }),
                    Some(other) => panic!("unexpected marker {other}"),
                };
                (200, body.to_string())
            });
        let mut client = TestClient::new(service);

        let tagged = client.call_ok(
            &TagResourceRequest::new()
                .with_key_id("k")
                .with_tags([Tag::of("env", "prod"), Tag::of("team", "payments")])
                .with_tags([Tag::of("env", "prod")]),
        )?;
        assert_eq!(tagged, TagResourceResult::new());

        let mut collected = Vec::new();
        let mut request = ListResourceTagsRequest::new().with_key_id("k").with_limit(1);
        loop {
            let page = client.call_ok(&request)?;
            collected.extend(page.tags().iter().cloned());
            match page.next_marker() {
                Some(marker) if page.truncated() == Some(true) => {
                    request = request.with_marker(marker);
                },
                _ => break,
            }
        }

        assert_eq!(
            collected,
            vec![Tag::of("env", "prod"), Tag::of("team", "payments")]
        );
        Ok(())
    }

    #[test]
    fn test_key_lifecycle_fixture() -> Result<()> {
        let service = FixtureService::new()
            .respond(
                Operation::CreateKey,
                200,
                r#"{"KeyMetadata":{
                    "AWSAccountId":"111122223333",
                    "KeyId":"1234abcd",
                    "Arn":"arn:aws:kms:us-east-1:111122223333:key/1234abcd",
                    "CreationDate":1.499288695918E9,
                    "Enabled":true,
                    "KeyUsage":"SIGN_VERIFY",
                    "KeyState":"Enabled",
                    "Origin":"AWS_KMS",
                    "KeyManager":"CUSTOMER",
                    "KeySpec":"ECC_NIST_P256",
                    "SigningAlgorithms":["ECDSA_SHA_256"],
                    "MultiRegion":false
                }}"#,
            )
            .respond_with(Operation::ScheduleKeyDeletion, |request| {
                assert_eq!(request["PendingWindowInDays"], 7);
                (
                    200,
                    json!({
                        "KeyId": "arn:aws:kms:us-east-1:111122223333:key/1234abcd",
                        "DeletionDate": 1_500_000_000,
                        "KeyState": "PendingDeletion",
                        "PendingWindowInDays": 7
                    })
                    .to_string(),
                )
            });
        let mut client = TestClient::new(service);

        let created = client.call_ok(
            &CreateKeyRequest::new()
                .with_key_usage(KeyUsageType::SignVerify)
                .with_key_spec(KeySpec::EccNistP256)
                .with_tags([Tag::of("owner", "ops")]),
        )?;
        let metadata = created.key_metadata().context("missing metadata")?;
        assert_eq!(metadata.key_spec(), Some(KeySpec::EccNistP256));
        assert_eq!(metadata.signing_algorithms(), &[SigningAlgorithmSpec::EcdsaSha256]);
        assert!(metadata.encryption_algorithms().is_empty());
        assert_eq!(
            metadata.creation_date().map(|d| d.epoch_millis()),
            Some(1_499_288_695_918)
        );

        let scheduled = client.call_ok(
            &ScheduleKeyDeletionRequest::new()
                .with_key_id(metadata.key_id().context("missing key id")?)
                .with_pending_window_in_days(7),
        )?;
        assert_eq!(scheduled.key_state(), Some(KeyState::PendingDeletion));
        assert_eq!(
            scheduled.deletion_date().map(|d| d.to_string()),
            Some("2017-07-14T02:40:00.000Z".to_string())
        );
        Ok(())
    }

    #[test]
    fn test_sign_verify_invalid_signature() -> Result<()> {
        let service = FixtureService::new().respond(
            Operation::Verify,
            400,
            r#"{"__type":"KMSInvalidSignatureException"}"#,
        );
        let mut client = TestClient::new(service);

        let err = client
            .call(
                &VerifyRequest::new()
                    .with_key_id("alias/signer")
                    .with_message(b"payload")
                    .with_message_type(MessageType::Raw)
                    .with_signature(b"bogus")
                    .with_signing_algorithm(SigningAlgorithmSpec::RsassaPssSha256),
            )?
            .unwrap_err();

        let exception = err.as_service().context("expected a service error")?;
        assert_eq!(exception.error_code(), Some(ErrorCode::KmsInvalidSignature));
        assert!(Operation::Verify
            .documented_errors()
            .contains(&ErrorCode::KmsInvalidSignature));
        assert_eq!(exception.message(), None);
        Ok(())
    }

    #[test]
    fn test_grant_workflow() -> Result<()> {
        let service = FixtureService::new()
            .respond_with(Operation::CreateGrant, |request| {
                assert_eq!(request["Operations"], json!(["Decrypt", "GenerateDataKey"]));
                assert_eq!(
                    request["Constraints"]["EncryptionContextEquals"]["tenant"],
                    "acme"
                );
                (200, r#"{"GrantId":"g-1","GrantToken":"tok-1"}"#.to_string())
            })
            .respond(Operation::RevokeGrant, 200, "");
        let mut client = TestClient::new(service);

        let grant = client.call_ok(
            &CreateGrantRequest::new()
                .with_key_id("k")
                .with_grantee_principal("arn:aws:iam::111122223333:role/app")
                .with_operations([GrantOperation::Decrypt, GrantOperation::GenerateDataKey])
                .with_constraints(
                    GrantConstraints::new().with_encryption_context_equals("tenant", "acme"),
                ),
        )?;
        assert_eq!(grant.grant_id(), Some("g-1"));
        assert_eq!(grant.grant_token(), Some("tok-1"));

        let revoked = client.call_ok(
            &RevokeGrantRequest::new()
                .with_key_id("k")
                .with_grant_id(grant.grant_id().context("missing grant id")?),
        )?;
        assert_eq!(revoked.to_string(), "{}");
        Ok(())
    }
}
