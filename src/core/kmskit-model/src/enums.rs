//! Vocabularies used by request and result fields.

use crate::shape::wire_enum;

wire_enum! {
    /// Algorithm used to wrap key material for import.
    pub enum AlgorithmSpec {
        /// PKCS #1 v1.5 padding.
        RsaesPkcs1V15 => "RSAES_PKCS1_V1_5",
        /// OAEP with SHA-1.
        RsaesOaepSha1 => "RSAES_OAEP_SHA_1",
        /// OAEP with SHA-256.
        RsaesOaepSha256 => "RSAES_OAEP_SHA_256",
    }
}

wire_enum! {
    /// Source of a key's material.
    pub enum OriginType {
        /// Generated by the service.
        AwsKms => "AWS_KMS",
        /// Imported by the caller.
        External => "EXTERNAL",
        /// Generated in a CloudHSM custom key store.
        AwsCloudhsm => "AWS_CLOUDHSM",
        /// Held in an external key store.
        ExternalKeyStore => "EXTERNAL_KEY_STORE",
    }
}

wire_enum! {
    /// Algorithm used to encrypt a payload for an attested recipient.
    pub enum KeyEncryptionMechanism {
        /// OAEP with SHA-256.
        RsaesOaepSha256 => "RSAES_OAEP_SHA_256",
    }
}

wire_enum! {
    /// Type of the public key returned for wrapping import material.
    pub enum WrappingKeySpec {
        /// 2048-bit RSA.
        Rsa2048 => "RSA_2048",
        /// 3072-bit RSA.
        Rsa3072 => "RSA_3072",
        /// 4096-bit RSA.
        Rsa4096 => "RSA_4096",
    }
}

wire_enum! {
    /// Whether imported key material expires.
    pub enum ExpirationModelType {
        /// Material expires at `ValidTo`.
        KeyMaterialExpires => "KEY_MATERIAL_EXPIRES",
        /// Material never expires.
        KeyMaterialDoesNotExpire => "KEY_MATERIAL_DOES_NOT_EXPIRE",
    }
}

wire_enum! {
    /// Lifecycle state of a key.
    pub enum KeyState {
        /// Being created.
        Creating => "Creating",
        /// Usable.
        Enabled => "Enabled",
        /// Disabled by the owner.
        Disabled => "Disabled",
        /// Scheduled for deletion.
        PendingDeletion => "PendingDeletion",
        /// Waiting for imported material.
        PendingImport => "PendingImport",
        /// Replica scheduled for deletion.
        PendingReplicaDeletion => "PendingReplicaDeletion",
        /// Backing key store is unavailable.
        Unavailable => "Unavailable",
        /// Being updated.
        Updating => "Updating",
    }
}

wire_enum! {
    /// Cryptographic operations a key can perform.
    pub enum KeyUsageType {
        /// Signing and verification.
        SignVerify => "SIGN_VERIFY",
        /// Encryption and decryption.
        EncryptDecrypt => "ENCRYPT_DECRYPT",
        /// HMAC generation and verification.
        GenerateVerifyMac => "GENERATE_VERIFY_MAC",
    }
}

wire_enum! {
    /// Who manages a key.
    pub enum KeyManagerType {
        /// Service-managed key.
        Aws => "AWS",
        /// Customer-managed key.
        Customer => "CUSTOMER",
    }
}

wire_enum! {
    /// Type of key material.
    pub enum KeySpec {
        /// 2048-bit RSA.
        Rsa2048 => "RSA_2048",
        /// 3072-bit RSA.
        Rsa3072 => "RSA_3072",
        /// 4096-bit RSA.
        Rsa4096 => "RSA_4096",
        /// NIST P-256.
        EccNistP256 => "ECC_NIST_P256",
        /// NIST P-384.
        EccNistP384 => "ECC_NIST_P384",
        /// NIST P-521.
        EccNistP521 => "ECC_NIST_P521",
        /// secp256k1.
        EccSecgP256k1 => "ECC_SECG_P256K1",
        /// 256-bit AES-GCM.
        SymmetricDefault => "SYMMETRIC_DEFAULT",
        /// HMAC with SHA-224.
        Hmac224 => "HMAC_224",
        /// HMAC with SHA-256.
        Hmac256 => "HMAC_256",
        /// HMAC with SHA-384.
        Hmac384 => "HMAC_384",
        /// HMAC with SHA-512.
        Hmac512 => "HMAC_512",
        /// SM2 (China regions only).
        Sm2 => "SM2",
    }
}

wire_enum! {
    /// Length of a generated data key.
    pub enum DataKeySpec {
        /// 256-bit key.
        Aes256 => "AES_256",
        /// 128-bit key.
        Aes128 => "AES_128",
    }
}

wire_enum! {
    /// Encryption algorithm used with a key.
    pub enum EncryptionAlgorithmSpec {
        /// Symmetric AES-GCM.
        SymmetricDefault => "SYMMETRIC_DEFAULT",
        /// RSA OAEP with SHA-1.
        RsaesOaepSha1 => "RSAES_OAEP_SHA_1",
        /// RSA OAEP with SHA-256.
        RsaesOaepSha256 => "RSAES_OAEP_SHA_256",
        /// SM2 public key encryption.
        Sm2pke => "SM2PKE",
    }
}

wire_enum! {
    /// Signing algorithm used with an asymmetric key.
    pub enum SigningAlgorithmSpec {
        /// RSASSA-PSS with SHA-256.
        RsassaPssSha256 => "RSASSA_PSS_SHA_256",
        /// RSASSA-PSS with SHA-384.
        RsassaPssSha384 => "RSASSA_PSS_SHA_384",
        /// RSASSA-PSS with SHA-512.
        RsassaPssSha512 => "RSASSA_PSS_SHA_512",
        /// RSASSA-PKCS1-v1_5 with SHA-256.
        RsassaPkcs1V15Sha256 => "RSASSA_PKCS1_V1_5_SHA_256",
        /// RSASSA-PKCS1-v1_5 with SHA-384.
        RsassaPkcs1V15Sha384 => "RSASSA_PKCS1_V1_5_SHA_384",
        /// RSASSA-PKCS1-v1_5 with SHA-512.
        RsassaPkcs1V15Sha512 => "RSASSA_PKCS1_V1_5_SHA_512",
        /// ECDSA with SHA-256.
        EcdsaSha256 => "ECDSA_SHA_256",
        /// ECDSA with SHA-384.
        EcdsaSha384 => "ECDSA_SHA_384",
        /// ECDSA with SHA-512.
        EcdsaSha512 => "ECDSA_SHA_512",
        /// SM2 digital signature.
        Sm2dsa => "SM2DSA",
    }
}

wire_enum! {
    /// Whether a message to sign is the raw message or its digest.
    pub enum MessageType {
        /// Raw message, hashed by the service.
        Raw => "RAW",
        /// Pre-computed digest.
        Digest => "DIGEST",
    }
}

wire_enum! {
    /// Operation a grant permits.
    pub enum GrantOperation {
        /// `Decrypt`.
        Decrypt => "Decrypt",
        /// `Encrypt`.
        Encrypt => "Encrypt",
        /// `GenerateDataKey`.
        GenerateDataKey => "GenerateDataKey",
        /// `GenerateDataKeyWithoutPlaintext`.
        GenerateDataKeyWithoutPlaintext => "GenerateDataKeyWithoutPlaintext",
        /// `ReEncrypt` with this key as the source.
        ReEncryptFrom => "ReEncryptFrom",
        /// `ReEncrypt` with this key as the destination.
        ReEncryptTo => "ReEncryptTo",
        /// `Sign`.
        Sign => "Sign",
        /// `Verify`.
        Verify => "Verify",
        /// `GetPublicKey`.
        GetPublicKey => "GetPublicKey",
        /// `CreateGrant`.
        CreateGrant => "CreateGrant",
        /// `RetireGrant`.
        RetireGrant => "RetireGrant",
        /// `DescribeKey`.
        DescribeKey => "DescribeKey",
        /// `GenerateDataKeyPair`.
        GenerateDataKeyPair => "GenerateDataKeyPair",
        /// `GenerateDataKeyPairWithoutPlaintext`.
        GenerateDataKeyPairWithoutPlaintext => "GenerateDataKeyPairWithoutPlaintext",
        /// `GenerateMac`.
        GenerateMac => "GenerateMac",
        /// `VerifyMac`.
        VerifyMac => "VerifyMac",
    }
}
