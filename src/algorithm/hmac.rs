//! HMAC signature schemes (HS256, HS384, HS512)
//!
//! Verification recomputes the MAC locally and compares with a constant-time
//! equality check; a short-circuit byte comparison would leak timing
//! information about the expected signature.

use crate::algorithm::SignatureScheme;
use crate::error::{Error, Result};
use crate::keys::Key;

use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

/// HS256 (HMAC with SHA-256)
pub struct HS256;

/// HS384 (HMAC with SHA-384)
pub struct HS384;

/// HS512 (HMAC with SHA-512)
pub struct HS512;

impl SignatureScheme for HS256 {
    fn name(&self) -> &'static str {
        "HS256"
    }

    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
        let secret = key.as_symmetric(self.name())?;
        sign_hs256(signing_input, secret)
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<bool> {
        let secret = key.as_symmetric(self.name())?;
        let expected = sign_hs256(signing_input, secret)?;
        Ok(mac_equal(signature, &expected))
    }
}

impl SignatureScheme for HS384 {
    fn name(&self) -> &'static str {
        "HS384"
    }

    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
        let secret = key.as_symmetric(self.name())?;
        sign_hs384(signing_input, secret)
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<bool> {
        let secret = key.as_symmetric(self.name())?;
        let expected = sign_hs384(signing_input, secret)?;
        Ok(mac_equal(signature, &expected))
    }
}

impl SignatureScheme for HS512 {
    fn name(&self) -> &'static str {
        "HS512"
    }

    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
        let secret = key.as_symmetric(self.name())?;
        sign_hs512(signing_input, secret)
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<bool> {
        let secret = key.as_symmetric(self.name())?;
        let expected = sign_hs512(signing_input, secret)?;
        Ok(mac_equal(signature, &expected))
    }
}

fn sign_hs256(signing_input: &[u8], secret: &[u8]) -> Result<Vec<u8>> {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret)
        .map_err(|e| Error::Signature(format!("HMAC key setup failed: {e}")))?;
    mac.update(signing_input);
    Ok(mac.finalize().into_bytes().to_vec())
}

fn sign_hs384(signing_input: &[u8], secret: &[u8]) -> Result<Vec<u8>> {
    let mut mac = Hmac::<Sha384>::new_from_slice(secret)
        .map_err(|e| Error::Signature(format!("HMAC key setup failed: {e}")))?;
    mac.update(signing_input);
    Ok(mac.finalize().into_bytes().to_vec())
}

fn sign_hs512(signing_input: &[u8], secret: &[u8]) -> Result<Vec<u8>> {
    let mut mac = Hmac::<Sha512>::new_from_slice(secret)
        .map_err(|e| Error::Signature(format!("HMAC key setup failed: {e}")))?;
    mac.update(signing_input);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Constant-time comparison of a provided MAC against the recomputed one
fn mac_equal(provided: &[u8], expected: &[u8]) -> bool {
    if provided.len() != expected.len() {
        return false;
    }
    constant_time_eq(provided, expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hs256_sign_verify() {
        let key = Key::symmetric(b"your-256-bit-secret".to_vec());
        let signature = HS256.sign(b"header.payload", &key).unwrap();
        assert_eq!(signature.len(), 32);
        assert!(HS256.verify(b"header.payload", &signature, &key).unwrap());
    }

    #[test]
    fn test_hs384_hs512_digest_sizes() {
        let key = Key::symmetric(b"secret".to_vec());
        assert_eq!(HS384.sign(b"input", &key).unwrap().len(), 48);
        assert_eq!(HS512.sign(b"input", &key).unwrap().len(), 64);
    }

    #[test]
    fn test_wrong_secret_is_mismatch_not_error() {
        let key = Key::symmetric(b"secret".to_vec());
        let wrong = Key::symmetric(b"wrong".to_vec());
        let signature = HS256.sign(b"input", &key).unwrap();
        assert!(!HS256.verify(b"input", &signature, &wrong).unwrap());
    }

    #[test]
    fn test_truncated_signature_rejected() {
        let key = Key::symmetric(b"secret".to_vec());
        let signature = HS512.sign(b"input", &key).unwrap();
        assert!(!HS512.verify(b"input", &signature[..32], &key).unwrap());
        assert!(!HS512.verify(b"input", &[], &key).unwrap());
    }

    #[test]
    fn test_wrong_key_type() {
        let signature = vec![0u8; 32];
        let mut rng = rand::thread_rng();
        let private = rsa::RsaPrivateKey::new(&mut rng, 512).unwrap();
        let key = Key::rsa_private(private);
        assert!(matches!(
            HS256.verify(b"input", &signature, &key),
            Err(Error::KeyTypeMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_secret_accepted() {
        // Any secret length is valid for HMAC
        let key = Key::symmetric(Vec::new());
        let signature = HS256.sign(b"input", &key).unwrap();
        assert!(HS256.verify(b"input", &signature, &key).unwrap());
    }
}
