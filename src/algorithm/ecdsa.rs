//! ECDSA signature schemes (ES256 with P-256, ES384 with P-384)
//!
//! JWS carries ECDSA signatures in the fixed-size `r || s` form, not ASN.1
//! DER; the curve's `Signature` type uses exactly that encoding. A key on
//! the wrong curve for the algorithm is a `KeyTypeMismatch`, the same as a
//! wrong key family.
//!
//! ES512 (P-521) classifies as a JWS algorithm but has no registered scheme
//! here; the registry reports it as unsupported.

use crate::algorithm::SignatureScheme;
use crate::error::{Error, Result};
use crate::keys::{EcPrivateKey, EcPublicKey, Key};

use p256::ecdsa::signature::{Signer, Verifier};

/// ES256 (ECDSA with P-256 and SHA-256)
pub struct ES256;

/// ES384 (ECDSA with P-384 and SHA-384)
pub struct ES384;

impl SignatureScheme for ES256 {
    fn name(&self) -> &'static str {
        "ES256"
    }

    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
        let signing_key = match key.as_ec_private(self.name())? {
            EcPrivateKey::P256(signing_key) => signing_key,
            EcPrivateKey::P384(_) => return Err(curve_mismatch(self.name(), key, "P-256")),
        };
        let signature: p256::ecdsa::Signature = signing_key
            .try_sign(signing_input)
            .map_err(|e| Error::Signature(format!("ES256 signing failed: {e}")))?;
        Ok(signature.to_bytes().to_vec())
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<bool> {
        let verifying_key = match key.as_ec_public(self.name())? {
            EcPublicKey::P256(verifying_key) => verifying_key,
            EcPublicKey::P384(_) => return Err(curve_mismatch(self.name(), key, "P-256")),
        };
        let signature = match p256::ecdsa::Signature::from_slice(signature) {
            Ok(signature) => signature,
            Err(_) => return Ok(false),
        };
        Ok(verifying_key.verify(signing_input, &signature).is_ok())
    }
}

impl SignatureScheme for ES384 {
    fn name(&self) -> &'static str {
        "ES384"
    }

    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
        let signing_key = match key.as_ec_private(self.name())? {
            EcPrivateKey::P384(signing_key) => signing_key,
            EcPrivateKey::P256(_) => return Err(curve_mismatch(self.name(), key, "P-384")),
        };
        let signature: p384::ecdsa::Signature = signing_key
            .try_sign(signing_input)
            .map_err(|e| Error::Signature(format!("ES384 signing failed: {e}")))?;
        Ok(signature.to_bytes().to_vec())
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<bool> {
        let verifying_key = match key.as_ec_public(self.name())? {
            EcPublicKey::P384(verifying_key) => verifying_key,
            EcPublicKey::P256(_) => return Err(curve_mismatch(self.name(), key, "P-384")),
        };
        let signature = match p384::ecdsa::Signature::from_slice(signature) {
            Ok(signature) => signature,
            Err(_) => return Ok(false),
        };
        Ok(verifying_key.verify(signing_input, &signature).is_ok())
    }
}

fn curve_mismatch(algorithm: &str, key: &Key, expected_curve: &str) -> Error {
    Error::KeyTypeMismatch {
        algorithm: algorithm.to_string(),
        expected: format!("{} ({expected_curve})", key.family()),
        actual: key.family().name().to_string(),
    }
}
