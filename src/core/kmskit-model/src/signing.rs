//! Asymmetric signing, verification and public key retrieval.

use crate::enums::{
    EncryptionAlgorithmSpec, KeySpec, KeyUsageType, MessageType, SigningAlgorithmSpec,
};
use crate::shape::shape;
use crate::types::{Blob, SecretBlob};

shape! {
    /// Signs a message or digest with an asymmetric key.
    pub struct SignRequest {
        /// Asymmetric signing key.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Message or digest to sign.
        blob message: SecretBlob => "Message" { message, set_message, with_message },
        /// Whether `Message` is raw or a digest.
        choice message_type: MessageType => "MessageType" { message_type, set_message_type, with_message_type },
        /// Grant tokens.
        list grant_tokens: String => "GrantTokens" { grant_tokens, set_grant_tokens, with_grant_tokens },
        /// Signing algorithm.
        choice signing_algorithm: SigningAlgorithmSpec => "SigningAlgorithm" { signing_algorithm, set_signing_algorithm, with_signing_algorithm },
        /// Checks permissions without performing the operation.
        value dry_run: bool => "DryRun" { dry_run, set_dry_run, with_dry_run },
    }
}

shape! {
    /// Response of `Sign`.
    pub struct SignResult {
        /// ARN of the signing key.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Signature bytes.
        blob signature: Blob => "Signature" { signature, set_signature, with_signature },
        /// Algorithm used.
        choice signing_algorithm: SigningAlgorithmSpec => "SigningAlgorithm" { signing_algorithm, set_signing_algorithm, with_signing_algorithm },
    }
}

shape! {
    /// Verifies a signature.
    pub struct VerifyRequest {
        /// Asymmetric signing key.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Message or digest that was signed.
        blob message: SecretBlob => "Message" { message, set_message, with_message },
        /// Whether `Message` is raw or a digest.
        choice message_type: MessageType => "MessageType" { message_type, set_message_type, with_message_type },
        /// Signature to verify.
        blob signature: Blob => "Signature" { signature, set_signature, with_signature },
        /// Algorithm used to sign.
        choice signing_algorithm: SigningAlgorithmSpec => "SigningAlgorithm" { signing_algorithm, set_signing_algorithm, with_signing_algorithm },
        /// Grant tokens.
        list grant_tokens: String => "GrantTokens" { grant_tokens, set_grant_tokens, with_grant_tokens },
        /// Checks permissions without performing the operation.
        value dry_run: bool => "DryRun" { dry_run, set_dry_run, with_dry_run },
    }
}

shape! {
    /// Response of `Verify`.
    ///
    /// An invalid signature is reported as `KMSInvalidSignatureException`, so
    /// a successful response always carries `SignatureValid: true`.
    pub struct VerifyResult {
        /// ARN of the key used.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Whether the signature verified.
        value signature_valid: bool => "SignatureValid" { signature_valid, set_signature_valid, with_signature_valid },
        /// Algorithm used.
        choice signing_algorithm: SigningAlgorithmSpec => "SigningAlgorithm" { signing_algorithm, set_signing_algorithm, with_signing_algorithm },
    }
}

shape! {
    /// Downloads the public half of an asymmetric key.
    pub struct GetPublicKeyRequest {
        /// Asymmetric key.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Grant tokens.
        list grant_tokens: String => "GrantTokens" { grant_tokens, set_grant_tokens, with_grant_tokens },
    }
}

shape! {
    /// Response of `GetPublicKey`.
    pub struct GetPublicKeyResult {
        /// ARN of the key.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// DER-encoded `SubjectPublicKeyInfo`.
        blob public_key: Blob => "PublicKey" { public_key, set_public_key, with_public_key },
        /// Type of the key.
        choice key_spec: KeySpec => "KeySpec" { key_spec, set_key_spec, with_key_spec },
        /// Permitted operations.
        choice key_usage: KeyUsageType => "KeyUsage" { key_usage, set_key_usage, with_key_usage },
        /// Supported encryption algorithms.
        list encryption_algorithms: EncryptionAlgorithmSpec => "EncryptionAlgorithms" { encryption_algorithms, set_encryption_algorithms, with_encryption_algorithms },
        /// Supported signing algorithms.
        list signing_algorithms: SigningAlgorithmSpec => "SigningAlgorithms" { signing_algorithms, set_signing_algorithms, with_signing_algorithms },
    }
}
