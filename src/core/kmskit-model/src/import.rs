//! Importing externally generated key material.

use crate::enums::{AlgorithmSpec, ExpirationModelType, WrappingKeySpec};
use crate::shape::shape;
use crate::types::{Blob, Timestamp};

shape! {
    /// Requests a wrapping public key and import token.
    pub struct GetParametersForImportRequest {
        /// Key with origin `EXTERNAL`.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Algorithm used to wrap the key material.
        choice wrapping_algorithm: AlgorithmSpec => "WrappingAlgorithm" { wrapping_algorithm, set_wrapping_algorithm, with_wrapping_algorithm },
        /// Type of the wrapping key.
        choice wrapping_key_spec: WrappingKeySpec => "WrappingKeySpec" { wrapping_key_spec, set_wrapping_key_spec, with_wrapping_key_spec },
    }
}

shape! {
    /// Response of `GetParametersForImport`.
    pub struct GetParametersForImportResult {
        /// Key ARN.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Token to pass to `ImportKeyMaterial`.
        blob import_token: Blob => "ImportToken" { import_token, set_import_token, with_import_token },
        /// Public key used to wrap the key material.
        blob public_key: Blob => "PublicKey" { public_key, set_public_key, with_public_key },
        /// Expiry of the token and public key.
        value parameters_valid_to: Timestamp => "ParametersValidTo" { parameters_valid_to, set_parameters_valid_to, with_parameters_valid_to },
    }
}

shape! {
    /// Imports wrapped key material into a key.
    pub struct ImportKeyMaterialRequest {
        /// Key with origin `EXTERNAL`.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Token from `GetParametersForImport`.
        blob import_token: Blob => "ImportToken" { import_token, set_import_token, with_import_token },
        /// Key material wrapped with the import public key.
        blob encrypted_key_material: Blob => "EncryptedKeyMaterial" { encrypted_key_material, set_encrypted_key_material, with_encrypted_key_material },
        /// When the material expires; required with `KEY_MATERIAL_EXPIRES`.
        value valid_to: Timestamp => "ValidTo" { valid_to, set_valid_to, with_valid_to },
        /// Whether the material expires.
        choice expiration_model: ExpirationModelType => "ExpirationModel" { expiration_model, set_expiration_model, with_expiration_model },
    }
}

shape! {
    /// Response of `ImportKeyMaterial`.
    pub struct ImportKeyMaterialResult {}
}

shape! {
    /// Deletes imported key material, leaving the key `PendingImport`.
    pub struct DeleteImportedKeyMaterialRequest {
        /// Key ID or key ARN.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
    }
}

shape! {
    /// Response of `DeleteImportedKeyMaterial`.
    pub struct DeleteImportedKeyMaterialResult {}
}
