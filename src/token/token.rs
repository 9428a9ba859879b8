//! Token aggregate and the signing/verification engine
//!
//! A [`Token`] owns its header, claim set, raw signature bytes, the original
//! compact string when it was parsed from one, and a
//! [`VerificationState`]. Signing is a pure function returning signature
//! bytes; persisting them onto the token is the separate, explicit
//! [`Token::attach_signature`] step. Verification mutates the state through
//! `&mut self`, so two threads can never race on the same instance.

use crate::algorithm::scheme_for;
use crate::compact;
use crate::error::{Error, Result};
use crate::keys::Key;
use crate::token::{ClaimSet, JoseHeader, VerificationState};
use crate::utils::base64url;

/// Options controlling verification behavior
#[derive(Debug, Clone, Default)]
pub struct VerifyOptions {
    /// Accept unsecured (`alg=none`) tokens with an empty signature
    ///
    /// Off by default: silently accepting `none` is a well-known JWT
    /// vulnerability class, so the caller must opt in explicitly.
    pub allow_unsecured: bool,
}

impl VerifyOptions {
    /// Options that accept unsecured tokens
    pub fn accept_unsecured() -> Self {
        Self {
            allow_unsecured: true,
        }
    }
}

/// A JWS token: header, claims, signature, and verification state
pub struct Token {
    header: JoseHeader,
    claims: ClaimSet,
    signature: Vec<u8>,
    compact: Option<String>,
    state: VerificationState,
}

impl Token {
    /// Create an unsecured token from a header and claim set
    pub fn new(header: JoseHeader, claims: ClaimSet) -> Self {
        Self {
            header,
            claims,
            signature: Vec::new(),
            compact: None,
            state: VerificationState::Unsecured,
        }
    }

    /// Assemble a token from parsed segments (used by the compact codec)
    pub(crate) fn from_parsed(
        header: JoseHeader,
        claims: ClaimSet,
        signature: Vec<u8>,
        compact: String,
    ) -> Self {
        Self {
            header,
            claims,
            signature,
            compact: Some(compact),
            state: VerificationState::Unverified,
        }
    }

    /// The token header
    pub fn header(&self) -> &JoseHeader {
        &self.header
    }

    /// The claim set
    pub fn claims(&self) -> &ClaimSet {
        &self.claims
    }

    /// Mutable access to the claim set; mutation never changes the
    /// verification state
    pub fn claims_mut(&mut self) -> &mut ClaimSet {
        &mut self.claims
    }

    /// The raw signature bytes (empty while unsecured)
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// The current verification state
    pub fn state(&self) -> VerificationState {
        self.state
    }

    /// The `alg` header parameter
    pub fn algorithm(&self) -> Result<&str> {
        self.header.algorithm()
    }

    /// Check whether the token carries a signature
    pub fn is_secured(&self) -> bool {
        !self.signature.is_empty()
    }

    /// Check whether `alg` classifies as a JWS algorithm
    pub fn is_jws(&self) -> bool {
        self.header.is_jws()
    }

    /// Check whether `alg` classifies as a JWE key-management algorithm
    pub fn is_jwe(&self) -> bool {
        self.header.is_jwe()
    }

    /// The original compact string, when this token was parsed from one
    pub fn compact(&self) -> Option<&str> {
        self.compact.as_deref()
    }

    /// The exact bytes covered by the signature: the first two dot-joined
    /// segments of the compact serialization
    ///
    /// For a parsed token these are the original wire bytes, never a
    /// re-serialization: rebuilding from parsed structures could change the
    /// byte layout and invalidate a signature that was valid at issuance.
    pub fn signing_input(&self) -> Result<String> {
        if let Some(compact) = &self.compact {
            let mut segments = compact.splitn(3, '.');
            match (segments.next(), segments.next()) {
                (Some(header), Some(payload)) => Ok(format!("{header}.{payload}")),
                _ => Err(Error::MalformedSerialization),
            }
        } else {
            Ok(format!(
                "{}.{}",
                self.header.to_base64url()?,
                self.claims.to_base64url()?
            ))
        }
    }

    /// Compute the signature for this token with the given key
    ///
    /// Pure: the token is not mutated. Persist the result with
    /// [`attach_signature`](Self::attach_signature). Fails with
    /// `AlreadySigned` when a signature is present; use
    /// [`resign`](Self::resign) to overrule that deliberately.
    pub fn sign(&self, key: &Key) -> Result<Vec<u8>> {
        if self.is_secured() {
            return Err(Error::AlreadySigned);
        }
        self.resign(key)
    }

    /// Compute a signature regardless of whether one is already attached
    pub fn resign(&self, key: &Key) -> Result<Vec<u8>> {
        let algorithm = self.header.jws_algorithm()?;
        if algorithm.is_none() {
            // Unsecured JWS: zero-length signature, no crypto involved
            return Ok(Vec::new());
        }
        let scheme = scheme_for(algorithm)?;
        let signing_input = self.signing_input()?;
        scheme.sign(signing_input.as_bytes(), key)
    }

    /// Persist signature bytes onto the token
    ///
    /// Caches the compact form (reusing the original header/payload segments
    /// when the token was parsed) and moves the state to `Unverified`: the
    /// token is secured but not verified by this engine.
    pub fn attach_signature(&mut self, signature: Vec<u8>) -> Result<()> {
        let signing_input = self.signing_input()?;
        self.compact = Some(format!(
            "{signing_input}.{}",
            base64url::encode_bytes(&signature)
        ));
        self.state = if signature.is_empty() {
            VerificationState::Unsecured
        } else {
            VerificationState::Unverified
        };
        self.signature = signature;
        Ok(())
    }

    /// Verify the signature with default options (`alg=none` rejected)
    pub fn verify(&mut self, key: &Key) -> Result<VerificationState> {
        self.verify_with(key, &VerifyOptions::default())
    }

    /// Verify the signature against the supplied key
    ///
    /// A cryptographic mismatch is not an error: it is the expected negative
    /// outcome and is reported as `Ok(Invalid)`. Errors are reserved for
    /// structural problems: a non-JWS or unsupported algorithm marks the
    /// token `Malformed` (terminal); a `KeyTypeMismatch` leaves the state
    /// untouched so the caller can retry with the right key.
    pub fn verify_with(&mut self, key: &Key, options: &VerifyOptions) -> Result<VerificationState> {
        if self.state.is_terminal() {
            return Err(Error::TokenMalformed);
        }

        let algorithm = match self.header.jws_algorithm() {
            Ok(algorithm) => algorithm,
            Err(e) => {
                self.state = VerificationState::Malformed;
                return Err(e);
            }
        };

        if algorithm.is_none() {
            if !options.allow_unsecured {
                return Err(Error::UnsupportedAlgorithm(
                    "none (unsecured tokens are rejected unless explicitly allowed)".to_string(),
                ));
            }
            // Opted in: an unsecured token is acceptable only with an empty
            // signature segment
            self.state = if self.signature.is_empty() {
                VerificationState::Verified
            } else {
                VerificationState::Invalid
            };
            return Ok(self.state);
        }

        let scheme = match scheme_for(algorithm) {
            Ok(scheme) => scheme,
            Err(e) => {
                self.state = VerificationState::Malformed;
                return Err(e);
            }
        };

        let signing_input = self.signing_input()?;
        let matched = scheme.verify(signing_input.as_bytes(), &self.signature, key)?;
        self.state = if matched {
            VerificationState::Verified
        } else {
            VerificationState::Invalid
        };
        Ok(self.state)
    }

    /// The compact serialization of this token
    ///
    /// Returns the original wire form when the token was parsed from one;
    /// otherwise builds the three-segment form from the current header,
    /// claims, and signature.
    pub fn to_compact(&self) -> Result<String> {
        match &self.compact {
            Some(compact) => Ok(compact.clone()),
            None => compact::build(self),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_compact() {
            Ok(compact) => f.write_str(&compact),
            Err(_) => Err(std::fmt::Error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::JwsAlgorithm;

    fn hs256_token() -> Token {
        let mut claims = ClaimSet::new();
        claims.set("sub", "1234567890");
        Token::new(
            JoseHeader::with_algorithm(JwsAlgorithm::HS256).with_jwt_type(),
            claims,
        )
    }

    #[test]
    fn test_new_token_is_unsecured() {
        let token = hs256_token();
        assert_eq!(token.state(), VerificationState::Unsecured);
        assert!(!token.is_secured());
        assert!(token.signature().is_empty());
        assert!(token.compact().is_none());
    }

    #[test]
    fn test_sign_is_pure_and_attach_is_explicit() {
        let mut token = hs256_token();
        let key = Key::symmetric(b"secret".to_vec());

        let signature = token.sign(&key).unwrap();
        assert_eq!(token.state(), VerificationState::Unsecured);

        token.attach_signature(signature.clone()).unwrap();
        assert_eq!(token.state(), VerificationState::Unverified);
        assert_eq!(token.signature(), signature.as_slice());
        assert!(token.compact().is_some());
    }

    #[test]
    fn test_sign_twice_fails_resign_does_not() {
        let mut token = hs256_token();
        let key = Key::symmetric(b"secret".to_vec());
        let signature = token.sign(&key).unwrap();
        token.attach_signature(signature).unwrap();

        assert!(matches!(token.sign(&key), Err(Error::AlreadySigned)));
        assert!(token.resign(&key).is_ok());
    }

    #[test]
    fn test_verify_transitions() {
        let mut token = hs256_token();
        let key = Key::symmetric(b"secret".to_vec());
        let wrong = Key::symmetric(b"wrong".to_vec());
        let signature = token.sign(&key).unwrap();
        token.attach_signature(signature).unwrap();

        assert_eq!(token.verify(&key).unwrap(), VerificationState::Verified);
        assert_eq!(token.state(), VerificationState::Verified);

        // Re-verification with another key re-runs the transition
        assert_eq!(token.verify(&wrong).unwrap(), VerificationState::Invalid);
        assert_eq!(token.verify(&key).unwrap(), VerificationState::Verified);
    }

    #[test]
    fn test_claim_mutation_does_not_touch_state() {
        let mut token = hs256_token();
        let key = Key::symmetric(b"secret".to_vec());
        let signature = token.sign(&key).unwrap();
        token.attach_signature(signature).unwrap();
        token.verify(&key).unwrap();

        token.claims_mut().set("admin", true);
        token.claims_mut().remove("sub");
        assert_eq!(token.state(), VerificationState::Verified);
    }

    #[test]
    fn test_unknown_algorithm_marks_malformed() {
        let mut header = JoseHeader::new();
        header.set_parameter("alg", serde_json::Value::String("XX999".to_string()));
        let mut token = Token::new(header, ClaimSet::new());

        let key = Key::symmetric(b"secret".to_vec());
        assert!(matches!(token.verify(&key), Err(Error::NotAJws(_))));
        assert_eq!(token.state(), VerificationState::Malformed);

        // Malformed is terminal
        assert!(matches!(token.verify(&key), Err(Error::TokenMalformed)));
    }

    #[test]
    fn test_es512_marks_malformed() {
        let mut token = Token::new(
            JoseHeader::with_algorithm(JwsAlgorithm::ES512),
            ClaimSet::new(),
        );
        let key = Key::symmetric(b"irrelevant".to_vec());
        assert!(matches!(
            token.verify(&key),
            Err(Error::UnsupportedAlgorithm(_))
        ));
        assert_eq!(token.state(), VerificationState::Malformed);
    }

    #[test]
    fn test_key_type_mismatch_leaves_state_untouched() {
        let mut token = hs256_token();
        let key = Key::symmetric(b"secret".to_vec());
        let signature = token.sign(&key).unwrap();
        token.attach_signature(signature).unwrap();

        let mut rng = rand::thread_rng();
        let rsa_key = Key::rsa_private(rsa::RsaPrivateKey::new(&mut rng, 512).unwrap());
        assert!(matches!(
            token.verify(&rsa_key),
            Err(Error::KeyTypeMismatch { .. })
        ));
        assert_eq!(token.state(), VerificationState::Unverified);

        // Still verifiable with the right key
        assert_eq!(token.verify(&key).unwrap(), VerificationState::Verified);
    }

    #[test]
    fn test_none_rejected_by_default() {
        let mut token = Token::new(
            JoseHeader::with_algorithm(JwsAlgorithm::None),
            ClaimSet::new(),
        );
        let key = Key::symmetric(Vec::new());
        assert!(matches!(
            token.verify(&key),
            Err(Error::UnsupportedAlgorithm(_))
        ));
        // Rejection is not a structural failure: opting in later still works
        assert_eq!(token.state(), VerificationState::Unsecured);
    }

    #[test]
    fn test_none_with_opt_in() {
        let mut token = Token::new(
            JoseHeader::with_algorithm(JwsAlgorithm::None),
            ClaimSet::new(),
        );
        let key = Key::symmetric(Vec::new());
        assert_eq!(
            token
                .verify_with(&key, &VerifyOptions::accept_unsecured())
                .unwrap(),
            VerificationState::Verified
        );
    }

    #[test]
    fn test_none_with_nonempty_signature_is_invalid() {
        let mut token = Token::new(
            JoseHeader::with_algorithm(JwsAlgorithm::None),
            ClaimSet::new(),
        );
        token.attach_signature(vec![1, 2, 3]).unwrap();
        let key = Key::symmetric(Vec::new());
        assert_eq!(
            token
                .verify_with(&key, &VerifyOptions::accept_unsecured())
                .unwrap(),
            VerificationState::Invalid
        );
    }

    #[test]
    fn test_signing_input_matches_compact_prefix() {
        let mut token = hs256_token();
        let key = Key::symmetric(b"secret".to_vec());
        let signature = token.sign(&key).unwrap();
        token.attach_signature(signature).unwrap();

        let compact = token.to_compact().unwrap();
        let signing_input = token.signing_input().unwrap();
        assert!(compact.starts_with(&format!("{signing_input}.")));
    }

    #[test]
    fn test_display_is_compact_form() {
        let token = hs256_token();
        assert_eq!(token.to_string(), token.to_compact().unwrap());
        // Unsecured tokens still render three segments
        assert_eq!(token.to_string().matches('.').count(), 2);
    }
}
