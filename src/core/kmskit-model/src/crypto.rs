//! Symmetric and asymmetric data operations: encrypt, decrypt, re-encrypt,
//! data key and random generation.

use crate::enums::{DataKeySpec, EncryptionAlgorithmSpec, KeyEncryptionMechanism};
use crate::shape::shape;
use crate::types::{Blob, SecretBlob};

shape! {
    /// Attested enclave that should receive a response payload encrypted to
    /// its own public key.
    pub struct RecipientInfo {
        /// Algorithm used to encrypt for the recipient.
        choice key_encryption_algorithm: KeyEncryptionMechanism => "KeyEncryptionAlgorithm" { key_encryption_algorithm, set_key_encryption_algorithm, with_key_encryption_algorithm },
        /// Signed attestation document of the enclave.
        blob attestation_document: Blob => "AttestationDocument" { attestation_document, set_attestation_document, with_attestation_document },
    }
}

shape! {
    /// Encrypts plaintext under a key.
    pub struct EncryptRequest {
        /// Key ID, key ARN, alias name or alias ARN.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Data to encrypt.
        blob plaintext: SecretBlob => "Plaintext" { plaintext, set_plaintext, with_plaintext },
        /// Additional authenticated data.
        map encryption_context: String => "EncryptionContext" { encryption_context, set_encryption_context, with_encryption_context },
        /// Grant tokens.
        list grant_tokens: String => "GrantTokens" { grant_tokens, set_grant_tokens, with_grant_tokens },
        /// Encryption algorithm.
        choice encryption_algorithm: EncryptionAlgorithmSpec => "EncryptionAlgorithm" { encryption_algorithm, set_encryption_algorithm, with_encryption_algorithm },
        /// Checks permissions without performing the operation.
        value dry_run: bool => "DryRun" { dry_run, set_dry_run, with_dry_run },
    }
}

shape! {
    /// Response of `Encrypt`.
    pub struct EncryptResult {
        /// Encrypted data.
        blob ciphertext_blob: Blob => "CiphertextBlob" { ciphertext_blob, set_ciphertext_blob, with_ciphertext_blob },
        /// ARN of the key used.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Algorithm used.
        choice encryption_algorithm: EncryptionAlgorithmSpec => "EncryptionAlgorithm" { encryption_algorithm, set_encryption_algorithm, with_encryption_algorithm },
    }
}

shape! {
    /// Decrypts ciphertext.
    pub struct DecryptRequest {
        /// Data to decrypt.
        blob ciphertext_blob: Blob => "CiphertextBlob" { ciphertext_blob, set_ciphertext_blob, with_ciphertext_blob },
        /// Context supplied at encryption time.
        map encryption_context: String => "EncryptionContext" { encryption_context, set_encryption_context, with_encryption_context },
        /// Grant tokens.
        list grant_tokens: String => "GrantTokens" { grant_tokens, set_grant_tokens, with_grant_tokens },
        /// Expected key (required for asymmetric keys).
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Algorithm used at encryption time.
        choice encryption_algorithm: EncryptionAlgorithmSpec => "EncryptionAlgorithm" { encryption_algorithm, set_encryption_algorithm, with_encryption_algorithm },
        /// Enclave to encrypt the plaintext for.
        object recipient: RecipientInfo => "Recipient" { recipient, set_recipient, with_recipient },
        /// Checks permissions without performing the operation.
        value dry_run: bool => "DryRun" { dry_run, set_dry_run, with_dry_run },
    }
}

shape! {
    /// Response of `Decrypt`.
    pub struct DecryptResult {
        /// ARN of the key used.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Decrypted data. Unset when a recipient was given.
        blob plaintext: SecretBlob => "Plaintext" { plaintext, set_plaintext, with_plaintext },
        /// Algorithm used.
        choice encryption_algorithm: EncryptionAlgorithmSpec => "EncryptionAlgorithm" { encryption_algorithm, set_encryption_algorithm, with_encryption_algorithm },
        /// Plaintext encrypted to the recipient's public key.
        blob ciphertext_for_recipient: Blob => "CiphertextForRecipient" { ciphertext_for_recipient, set_ciphertext_for_recipient, with_ciphertext_for_recipient },
    }
}

shape! {
    /// Decrypts ciphertext and re-encrypts it under another key.
    pub struct ReEncryptRequest {
        /// Data to re-encrypt.
        blob ciphertext_blob: Blob => "CiphertextBlob" { ciphertext_blob, set_ciphertext_blob, with_ciphertext_blob },
        /// Context supplied at original encryption time.
        map source_encryption_context: String => "SourceEncryptionContext" { source_encryption_context, set_source_encryption_context, with_source_encryption_context },
        /// Key that encrypted the ciphertext.
        text source_key_id: String => "SourceKeyId" { source_key_id, set_source_key_id, with_source_key_id },
        /// Key to re-encrypt under.
        text destination_key_id: String => "DestinationKeyId" { destination_key_id, set_destination_key_id, with_destination_key_id },
        /// Context for the new ciphertext.
        map destination_encryption_context: String => "DestinationEncryptionContext" { destination_encryption_context, set_destination_encryption_context, with_destination_encryption_context },
        /// Algorithm used at original encryption time.
        choice source_encryption_algorithm: EncryptionAlgorithmSpec => "SourceEncryptionAlgorithm" { source_encryption_algorithm, set_source_encryption_algorithm, with_source_encryption_algorithm },
        /// Algorithm for the new ciphertext.
        choice destination_encryption_algorithm: EncryptionAlgorithmSpec => "DestinationEncryptionAlgorithm" { destination_encryption_algorithm, set_destination_encryption_algorithm, with_destination_encryption_algorithm },
        /// Grant tokens.
        list grant_tokens: String => "GrantTokens" { grant_tokens, set_grant_tokens, with_grant_tokens },
        /// Checks permissions without performing the operation.
        value dry_run: bool => "DryRun" { dry_run, set_dry_run, with_dry_run },
    }
}

shape! {
    /// Response of `ReEncrypt`.
    pub struct ReEncryptResult {
        /// Re-encrypted data.
        blob ciphertext_blob: Blob => "CiphertextBlob" { ciphertext_blob, set_ciphertext_blob, with_ciphertext_blob },
        /// ARN of the source key.
        text source_key_id: String => "SourceKeyId" { source_key_id, set_source_key_id, with_source_key_id },
        /// ARN of the destination key.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Algorithm used to decrypt.
        choice source_encryption_algorithm: EncryptionAlgorithmSpec => "SourceEncryptionAlgorithm" { source_encryption_algorithm, set_source_encryption_algorithm, with_source_encryption_algorithm },
        /// Algorithm used to re-encrypt.
        choice destination_encryption_algorithm: EncryptionAlgorithmSpec => "DestinationEncryptionAlgorithm" { destination_encryption_algorithm, set_destination_encryption_algorithm, with_destination_encryption_algorithm },
    }
}

shape! {
    /// Generates a data key returned both in plaintext and encrypted.
    pub struct GenerateDataKeyRequest {
        /// Key that encrypts the data key.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Additional authenticated data.
        map encryption_context: String => "EncryptionContext" { encryption_context, set_encryption_context, with_encryption_context },
        /// Data key length in bytes. Mutually exclusive with `KeySpec` on the server.
        value number_of_bytes: i32 => "NumberOfBytes" { number_of_bytes, set_number_of_bytes, with_number_of_bytes },
        /// Data key length as a spec.
        choice key_spec: DataKeySpec => "KeySpec" { key_spec, set_key_spec, with_key_spec },
        /// Grant tokens.
        list grant_tokens: String => "GrantTokens" { grant_tokens, set_grant_tokens, with_grant_tokens },
        /// Enclave to encrypt the plaintext data key for.
        object recipient: RecipientInfo => "Recipient" { recipient, set_recipient, with_recipient },
        /// Checks permissions without performing the operation.
        value dry_run: bool => "DryRun" { dry_run, set_dry_run, with_dry_run },
    }
}

shape! {
    /// Response of `GenerateDataKey`.
    pub struct GenerateDataKeyResult {
        /// Encrypted data key.
        blob ciphertext_blob: Blob => "CiphertextBlob" { ciphertext_blob, set_ciphertext_blob, with_ciphertext_blob },
        /// Plaintext data key. Unset when a recipient was given.
        blob plaintext: SecretBlob => "Plaintext" { plaintext, set_plaintext, with_plaintext },
        /// ARN of the key used.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Plaintext data key encrypted to the recipient's public key.
        blob ciphertext_for_recipient: Blob => "CiphertextForRecipient" { ciphertext_for_recipient, set_ciphertext_for_recipient, with_ciphertext_for_recipient },
    }
}

shape! {
    /// Generates a data key returned only in encrypted form.
    pub struct GenerateDataKeyWithoutPlaintextRequest {
        /// Key that encrypts the data key.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Additional authenticated data.
        map encryption_context: String => "EncryptionContext" { encryption_context, set_encryption_context, with_encryption_context },
        /// Data key length as a spec.
        choice key_spec: DataKeySpec => "KeySpec" { key_spec, set_key_spec, with_key_spec },
        /// Data key length in bytes.
        value number_of_bytes: i32 => "NumberOfBytes" { number_of_bytes, set_number_of_bytes, with_number_of_bytes },
        /// Grant tokens.
        list grant_tokens: String => "GrantTokens" { grant_tokens, set_grant_tokens, with_grant_tokens },
        /// Checks permissions without performing the operation.
        value dry_run: bool => "DryRun" { dry_run, set_dry_run, with_dry_run },
    }
}

shape! {
    /// Response of `GenerateDataKeyWithoutPlaintext`.
    pub struct GenerateDataKeyWithoutPlaintextResult {
        /// Encrypted data key.
        blob ciphertext_blob: Blob => "CiphertextBlob" { ciphertext_blob, set_ciphertext_blob, with_ciphertext_blob },
        /// ARN of the key used.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
    }
}

shape! {
    /// Returns random bytes.
    pub struct GenerateRandomRequest {
        /// Number of bytes (1 to 1024 on the server).
        value number_of_bytes: i32 => "NumberOfBytes" { number_of_bytes, set_number_of_bytes, with_number_of_bytes },
        /// CloudHSM custom key store to draw randomness from.
        text custom_key_store_id: String => "CustomKeyStoreId" { custom_key_store_id, set_custom_key_store_id, with_custom_key_store_id },
        /// Enclave to encrypt the random bytes for.
        object recipient: RecipientInfo => "Recipient" { recipient, set_recipient, with_recipient },
    }
}

shape! {
    /// Response of `GenerateRandom`.
    pub struct GenerateRandomResult {
        /// Random bytes. Unset when a recipient was given.
        blob plaintext: SecretBlob => "Plaintext" { plaintext, set_plaintext, with_plaintext },
        /// Random bytes encrypted to the recipient's public key.
        blob ciphertext_for_recipient: Blob => "CiphertextForRecipient" { ciphertext_for_recipient, set_ciphertext_for_recipient, with_ciphertext_for_recipient },
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;
    use crate::types::REDACTED;

    #[test]
    fn test_encrypt_result_display_key_only() {
        let result = EncryptResult::new().with_key_id("1234abcd");
        assert_eq!(result.to_string(), "{KeyId: 1234abcd}");
    }

    #[test]
    fn test_plaintext_redacted_everywhere() {
        let request = EncryptRequest::new()
            .with_key_id("alias/app")
            .with_plaintext(b"card-number-4111");
        let rendered = request.to_string();
        assert!(rendered.contains(REDACTED));
        assert!(!rendered.contains("card-number"));
        assert!(!format!("{:?}", request).contains("card-number"));
    }

    #[test]
    fn test_blob_getter_returns_bytes() {
        let result = EncryptResult::new().with_ciphertext_blob(vec![0xdeu8, 0xad]);
        assert_eq!(result.ciphertext_blob(), Some(&[0xde, 0xad][..]));
    }

    #[test]
    fn test_encryption_context_map() {
        let request = EncryptRequest::new()
            .with_encryption_context("purpose", "billing")
            .with_encryption_context("department", "finance");
        let context = request.encryption_context().unwrap();
        assert_eq!(context.len(), 2);
        assert_eq!(context.get("purpose").map(String::as_str), Some("billing"));

        // Keys render in sorted order.
        assert_eq!(
            request.to_string(),
            "{EncryptionContext: {department=finance, purpose=billing}}"
        );
    }

    #[test]
    fn test_encrypt_request_wire_form() {
        let request = EncryptRequest::new()
            .with_key_id("alias/app")
            .with_plaintext(b"hello")
            .with_encryption_algorithm(EncryptionAlgorithmSpec::SymmetricDefault);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "KeyId": "alias/app",
                "Plaintext": "aGVsbG8=",
                "EncryptionAlgorithm": "SYMMETRIC_DEFAULT"
            })
        );
    }

    #[test]
    fn test_decrypt_with_recipient() {
        let recipient = RecipientInfo::new()
            .with_key_encryption_algorithm(KeyEncryptionMechanism::RsaesOaepSha256)
            .with_attestation_document(b"attestation");
        let request = DecryptRequest::new()
            .with_ciphertext_blob(b"ct")
            .with_recipient(recipient.clone());
        assert_eq!(request.recipient(), Some(&recipient));

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["Recipient"]["KeyEncryptionAlgorithm"],
            "RSAES_OAEP_SHA_256"
        );
    }

    #[test]
    fn test_generate_data_key_result_from_wire() {
        let body = r#"{"CiphertextBlob":"AQID","Plaintext":"BAUG","KeyId":"arn:aws:kms:us-east-1:111122223333:key/k"}"#;
        let result: GenerateDataKeyResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.ciphertext_blob(), Some(&[1u8, 2, 3][..]));
        assert_eq!(result.plaintext(), Some(&[4u8, 5, 6][..]));
        assert_eq!(result.ciphertext_for_recipient(), None);
    }

    #[test]
    fn test_re_encrypt_request_two_contexts() {
        let request = ReEncryptRequest::new()
            .with_source_encryption_context("v", "1")
            .with_destination_encryption_context("v", "2");
        assert_ne!(
            request.source_encryption_context(),
            request.destination_encryption_context()
        );
    }
}
