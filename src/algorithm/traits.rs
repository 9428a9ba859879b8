use crate::algorithm::JwsAlgorithm;
use crate::error::{Error, Result};
use crate::keys::Key;

/// Contract implemented by every registered signature scheme
///
/// `verify` returns `Ok(false)` for an ordinary cryptographic mismatch;
/// `Err` is reserved for structural problems (wrong key family, provider
/// failure) that callers must be able to tell apart from a bad signature.
pub trait SignatureScheme {
    /// The RFC 7518 algorithm identifier (e.g. "HS256", "PS384")
    fn name(&self) -> &'static str;

    /// Compute the signature over the signing input
    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>>;

    /// Check a signature against the signing input
    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<bool>;
}

/// Look up the signature scheme registered for an algorithm
///
/// `none` has no scheme on purpose: unsecured tokens are handled by the
/// engine's explicit opt-in policy, never by silent dispatch. ES512 is
/// recognized but unsupported (no P-521 backend).
pub fn scheme_for(algorithm: JwsAlgorithm) -> Result<Box<dyn SignatureScheme + Send + Sync>> {
    match algorithm {
        JwsAlgorithm::HS256 => Ok(Box::new(super::hmac::HS256)),
        JwsAlgorithm::HS384 => Ok(Box::new(super::hmac::HS384)),
        JwsAlgorithm::HS512 => Ok(Box::new(super::hmac::HS512)),

        JwsAlgorithm::RS256 => Ok(Box::new(super::rsa::RS256)),
        JwsAlgorithm::RS384 => Ok(Box::new(super::rsa::RS384)),
        JwsAlgorithm::RS512 => Ok(Box::new(super::rsa::RS512)),

        JwsAlgorithm::PS256 => Ok(Box::new(super::rsa::PS256)),
        JwsAlgorithm::PS384 => Ok(Box::new(super::rsa::PS384)),
        JwsAlgorithm::PS512 => Ok(Box::new(super::rsa::PS512)),

        JwsAlgorithm::ES256 => Ok(Box::new(super::ecdsa::ES256)),
        JwsAlgorithm::ES384 => Ok(Box::new(super::ecdsa::ES384)),
        JwsAlgorithm::ES512 => Err(Error::UnsupportedAlgorithm(
            "ES512 (P-521) is not supported".to_string(),
        )),

        JwsAlgorithm::None => Err(Error::UnsupportedAlgorithm("none".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_signing_algorithms() {
        for name in [
            "HS256", "HS384", "HS512", "RS256", "RS384", "RS512", "ES256", "ES384", "PS256",
            "PS384", "PS512",
        ] {
            let algorithm = JwsAlgorithm::from_name(name).unwrap();
            let scheme = scheme_for(algorithm).unwrap();
            assert_eq!(scheme.name(), name);
        }
    }

    #[test]
    fn test_none_has_no_scheme() {
        assert!(matches!(
            scheme_for(JwsAlgorithm::None),
            Err(Error::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn test_es512_unsupported() {
        assert!(matches!(
            scheme_for(JwsAlgorithm::ES512),
            Err(Error::UnsupportedAlgorithm(_))
        ));
    }
}
