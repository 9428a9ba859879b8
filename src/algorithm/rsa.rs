//! RSA signature schemes: RSASSA-PKCS1-v1_5 (RS256/384/512) and
//! RSASSA-PSS (PS256/384/512)
//!
//! Signing takes an RSA private key, verification an RSA public key. A
//! signature that fails to parse or verify is an ordinary mismatch
//! (`Ok(false)`), never an error.

use crate::algorithm::SignatureScheme;
use crate::error::{Error, Result};
use crate::keys::Key;

use rsa::sha2::{Sha256, Sha384, Sha512};
use rsa::signature::{RandomizedSigner, SignatureEncoding, Signer, Verifier};
use rsa::{pkcs1v15, pss};

/// RS256 (RSASSA-PKCS1-v1_5 with SHA-256)
pub struct RS256;

/// RS384 (RSASSA-PKCS1-v1_5 with SHA-384)
pub struct RS384;

/// RS512 (RSASSA-PKCS1-v1_5 with SHA-512)
pub struct RS512;

/// PS256 (RSASSA-PSS with SHA-256)
pub struct PS256;

/// PS384 (RSASSA-PSS with SHA-384)
pub struct PS384;

/// PS512 (RSASSA-PSS with SHA-512)
pub struct PS512;

impl SignatureScheme for RS256 {
    fn name(&self) -> &'static str {
        "RS256"
    }

    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
        let private = key.as_rsa_private(self.name())?;
        let signing_key = pkcs1v15::SigningKey::<Sha256>::new(private.clone());
        let signature = signing_key
            .try_sign(signing_input)
            .map_err(|e| Error::Signature(format!("RS256 signing failed: {e}")))?;
        Ok(signature.to_vec())
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<bool> {
        let public = key.as_rsa_public(self.name())?;
        let verifying_key = pkcs1v15::VerifyingKey::<Sha256>::new(public.clone());
        let signature = match pkcs1v15::Signature::try_from(signature) {
            Ok(signature) => signature,
            Err(_) => return Ok(false),
        };
        Ok(verifying_key.verify(signing_input, &signature).is_ok())
    }
}

impl SignatureScheme for RS384 {
    fn name(&self) -> &'static str {
        "RS384"
    }

    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
        let private = key.as_rsa_private(self.name())?;
        let signing_key = pkcs1v15::SigningKey::<Sha384>::new(private.clone());
        let signature = signing_key
            .try_sign(signing_input)
            .map_err(|e| Error::Signature(format!("RS384 signing failed: {e}")))?;
        Ok(signature.to_vec())
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<bool> {
        let public = key.as_rsa_public(self.name())?;
        let verifying_key = pkcs1v15::VerifyingKey::<Sha384>::new(public.clone());
        let signature = match pkcs1v15::Signature::try_from(signature) {
            Ok(signature) => signature,
            Err(_) => return Ok(false),
        };
        Ok(verifying_key.verify(signing_input, &signature).is_ok())
    }
}

impl SignatureScheme for RS512 {
    fn name(&self) -> &'static str {
        "RS512"
    }

    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
        let private = key.as_rsa_private(self.name())?;
        let signing_key = pkcs1v15::SigningKey::<Sha512>::new(private.clone());
        let signature = signing_key
            .try_sign(signing_input)
            .map_err(|e| Error::Signature(format!("RS512 signing failed: {e}")))?;
        Ok(signature.to_vec())
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<bool> {
        let public = key.as_rsa_public(self.name())?;
        let verifying_key = pkcs1v15::VerifyingKey::<Sha512>::new(public.clone());
        let signature = match pkcs1v15::Signature::try_from(signature) {
            Ok(signature) => signature,
            Err(_) => return Ok(false),
        };
        Ok(verifying_key.verify(signing_input, &signature).is_ok())
    }
}

impl SignatureScheme for PS256 {
    fn name(&self) -> &'static str {
        "PS256"
    }

    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
        let private = key.as_rsa_private(self.name())?;
        let signing_key = pss::SigningKey::<Sha256>::new(private.clone());
        let signature = signing_key
            .try_sign_with_rng(&mut rand::thread_rng(), signing_input)
            .map_err(|e| Error::Signature(format!("PS256 signing failed: {e}")))?;
        Ok(signature.to_vec())
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<bool> {
        let public = key.as_rsa_public(self.name())?;
        let verifying_key = pss::VerifyingKey::<Sha256>::new(public.clone());
        let signature = match pss::Signature::try_from(signature) {
            Ok(signature) => signature,
            Err(_) => return Ok(false),
        };
        Ok(verifying_key.verify(signing_input, &signature).is_ok())
    }
}

impl SignatureScheme for PS384 {
    fn name(&self) -> &'static str {
        "PS384"
    }

    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
        let private = key.as_rsa_private(self.name())?;
        let signing_key = pss::SigningKey::<Sha384>::new(private.clone());
        let signature = signing_key
            .try_sign_with_rng(&mut rand::thread_rng(), signing_input)
            .map_err(|e| Error::Signature(format!("PS384 signing failed: {e}")))?;
        Ok(signature.to_vec())
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<bool> {
        let public = key.as_rsa_public(self.name())?;
        let verifying_key = pss::VerifyingKey::<Sha384>::new(public.clone());
        let signature = match pss::Signature::try_from(signature) {
            Ok(signature) => signature,
            Err(_) => return Ok(false),
        };
        Ok(verifying_key.verify(signing_input, &signature).is_ok())
    }
}

impl SignatureScheme for PS512 {
    fn name(&self) -> &'static str {
        "PS512"
    }

    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
        let private = key.as_rsa_private(self.name())?;
        let signing_key = pss::SigningKey::<Sha512>::new(private.clone());
        let signature = signing_key
            .try_sign_with_rng(&mut rand::thread_rng(), signing_input)
            .map_err(|e| Error::Signature(format!("PS512 signing failed: {e}")))?;
        Ok(signature.to_vec())
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<bool> {
        let public = key.as_rsa_public(self.name())?;
        let verifying_key = pss::VerifyingKey::<Sha512>::new(public.clone());
        let signature = match pss::Signature::try_from(signature) {
            Ok(signature) => signature,
            Err(_) => return Ok(false),
        };
        Ok(verifying_key.verify(signing_input, &signature).is_ok())
    }
}
