//! Key material for signing and verification
//!
//! Keys arrive already parsed; PEM/JWK loading is a caller concern. The
//! engine sees a key only through its family tag and the typed accessors
//! below, so a wrong key for an algorithm is a single well-defined
//! [`Error::KeyTypeMismatch`] instead of a runtime type assertion.

use crate::error::{Error, Result};

/// Family tag for a key object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFamily {
    /// Raw secret bytes (HMAC family)
    SymmetricSecret,
    /// RSA private key (RS*/PS* signing)
    RsaPrivate,
    /// RSA public key (RS*/PS* verification)
    RsaPublic,
    /// Elliptic-curve private key (ES* signing)
    EcPrivate,
    /// Elliptic-curve public key (ES* verification)
    EcPublic,
}

impl KeyFamily {
    /// Human-readable tag used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            KeyFamily::SymmetricSecret => "symmetric secret",
            KeyFamily::RsaPrivate => "RSA private key",
            KeyFamily::RsaPublic => "RSA public key",
            KeyFamily::EcPrivate => "EC private key",
            KeyFamily::EcPublic => "EC public key",
        }
    }
}

impl std::fmt::Display for KeyFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A key usable by the signing/verification engine
///
/// The engine never inspects key internals beyond the family tag; the
/// variants wrap the crypto provider's parsed key objects directly.
#[derive(Clone)]
pub enum Key {
    /// Raw secret for the HMAC family; any length is accepted
    Symmetric(Vec<u8>),
    /// RSA private key for RS*/PS* signing
    RsaPrivate(rsa::RsaPrivateKey),
    /// RSA public key for RS*/PS* verification
    RsaPublic(rsa::RsaPublicKey),
    /// Elliptic-curve private key for ES* signing
    EcPrivate(EcPrivateKey),
    /// Elliptic-curve public key for ES* verification
    EcPublic(EcPublicKey),
}

/// Elliptic-curve private key, tagged by curve
#[derive(Clone)]
pub enum EcPrivateKey {
    /// P-256 (secp256r1) signing key
    P256(p256::ecdsa::SigningKey),
    /// P-384 (secp384r1) signing key
    P384(p384::ecdsa::SigningKey),
}

/// Elliptic-curve public key, tagged by curve
#[derive(Clone, Debug)]
pub enum EcPublicKey {
    /// P-256 (secp256r1) verifying key
    P256(p256::ecdsa::VerifyingKey),
    /// P-384 (secp384r1) verifying key
    P384(p384::ecdsa::VerifyingKey),
}

impl Key {
    /// Create a symmetric key from secret bytes
    pub fn symmetric(secret: impl Into<Vec<u8>>) -> Self {
        Key::Symmetric(secret.into())
    }

    /// Wrap an RSA private key
    pub fn rsa_private(key: rsa::RsaPrivateKey) -> Self {
        Key::RsaPrivate(key)
    }

    /// Wrap an RSA public key
    pub fn rsa_public(key: rsa::RsaPublicKey) -> Self {
        Key::RsaPublic(key)
    }

    /// Wrap a P-256 signing key
    pub fn p256_private(key: p256::ecdsa::SigningKey) -> Self {
        Key::EcPrivate(EcPrivateKey::P256(key))
    }

    /// Wrap a P-256 verifying key
    pub fn p256_public(key: p256::ecdsa::VerifyingKey) -> Self {
        Key::EcPublic(EcPublicKey::P256(key))
    }

    /// Wrap a P-384 signing key
    pub fn p384_private(key: p384::ecdsa::SigningKey) -> Self {
        Key::EcPrivate(EcPrivateKey::P384(key))
    }

    /// Wrap a P-384 verifying key
    pub fn p384_public(key: p384::ecdsa::VerifyingKey) -> Self {
        Key::EcPublic(EcPublicKey::P384(key))
    }

    /// The family tag of this key
    pub fn family(&self) -> KeyFamily {
        match self {
            Key::Symmetric(_) => KeyFamily::SymmetricSecret,
            Key::RsaPrivate(_) => KeyFamily::RsaPrivate,
            Key::RsaPublic(_) => KeyFamily::RsaPublic,
            Key::EcPrivate(_) => KeyFamily::EcPrivate,
            Key::EcPublic(_) => KeyFamily::EcPublic,
        }
    }

    /// Get the symmetric secret or fail with `KeyTypeMismatch`
    pub fn as_symmetric(&self, algorithm: &str) -> Result<&[u8]> {
        match self {
            Key::Symmetric(secret) => Ok(secret),
            _ => Err(self.mismatch(algorithm, KeyFamily::SymmetricSecret)),
        }
    }

    /// Get the RSA private key or fail with `KeyTypeMismatch`
    pub fn as_rsa_private(&self, algorithm: &str) -> Result<&rsa::RsaPrivateKey> {
        match self {
            Key::RsaPrivate(key) => Ok(key),
            _ => Err(self.mismatch(algorithm, KeyFamily::RsaPrivate)),
        }
    }

    /// Get the RSA public key or fail with `KeyTypeMismatch`
    pub fn as_rsa_public(&self, algorithm: &str) -> Result<&rsa::RsaPublicKey> {
        match self {
            Key::RsaPublic(key) => Ok(key),
            _ => Err(self.mismatch(algorithm, KeyFamily::RsaPublic)),
        }
    }

    /// Get the EC private key or fail with `KeyTypeMismatch`
    pub fn as_ec_private(&self, algorithm: &str) -> Result<&EcPrivateKey> {
        match self {
            Key::EcPrivate(key) => Ok(key),
            _ => Err(self.mismatch(algorithm, KeyFamily::EcPrivate)),
        }
    }

    /// Get the EC public key or fail with `KeyTypeMismatch`
    pub fn as_ec_public(&self, algorithm: &str) -> Result<&EcPublicKey> {
        match self {
            Key::EcPublic(key) => Ok(key),
            _ => Err(self.mismatch(algorithm, KeyFamily::EcPublic)),
        }
    }

    fn mismatch(&self, algorithm: &str, expected: KeyFamily) -> Error {
        Error::KeyTypeMismatch {
            algorithm: algorithm.to_string(),
            expected: expected.name().to_string(),
            actual: self.family().name().to_string(),
        }
    }
}

// Key material must never leak through debug output
impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Key({})", self.family())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_family_and_access() {
        let key = Key::symmetric(b"secret".to_vec());
        assert_eq!(key.family(), KeyFamily::SymmetricSecret);
        assert_eq!(key.as_symmetric("HS256").unwrap(), b"secret");
        assert!(matches!(
            key.as_rsa_public("RS256"),
            Err(Error::KeyTypeMismatch { .. })
        ));
    }

    #[test]
    fn test_mismatch_carries_context() {
        let key = Key::symmetric(vec![1, 2, 3]);
        let err = key.as_ec_public("ES256").unwrap_err();
        assert_eq!(
            err,
            Error::KeyTypeMismatch {
                algorithm: "ES256".to_string(),
                expected: "EC public key".to_string(),
                actual: "symmetric secret".to_string(),
            }
        );
    }

    #[test]
    fn test_debug_does_not_print_secret() {
        let key = Key::symmetric(b"hunter2".to_vec());
        let printed = format!("{key:?}");
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("symmetric secret"));
    }
}
