//! # jose-jws: compact JWS tokens with an explicit verification state
//!
//! This crate implements the JOSE compact serialization for signed tokens
//! (JWS over JWT claims): parsing the three-segment wire form, dispatching to
//! an algorithm-specific signature scheme, and tracking the verification
//! outcome as explicit state on the token.
//!
//! ## Overview
//!
//! A compact JWS is `base64url(header) "." base64url(claims) "."
//! base64url(signature)`. The header is an ordered JSON object whose `alg`
//! parameter selects a signature scheme; the claim set is an ordered sequence
//! of name/value pairs. The signature covers the first two segments exactly
//! as they appear on the wire, so this crate retains the original compact
//! string of a parsed token and never reconstructs the signing input from
//! re-serialized structures.
//!
//! Verification distinguishes three very different outcomes that JWT code
//! often conflates:
//!
//! - a **cryptographic mismatch** is the expected negative result and is
//!   reported as the [`VerificationState::Invalid`] state, not an error;
//! - a **structural failure** (unknown or non-JWS algorithm) is an error and
//!   marks the token [`VerificationState::Malformed`], which is terminal;
//! - a **caller mistake** (wrong key family for the algorithm) is an error
//!   that leaves the token untouched so verification can be retried.
//!
//! ## State machine
//!
//! ```text
//! Unsecured (built via Token::new)
//!     │ attach_signature()
//!     ▼
//! Unverified (also the state of every freshly parsed token)
//!     │ verify()
//!     ├──────────────▶ Verified   (signature matches the key)
//!     ├──────────────▶ Invalid    (signature does not match)
//!     └──────────────▶ Malformed  (structural failure; terminal)
//! ```
//!
//! `Verified` and `Invalid` hold for the key that was checked;
//! re-verification with a different key re-runs the transition.
//!
//! ## Quick start
//!
//! ```
//! use jose_jws::{parse, ClaimSet, JoseHeader, JwsAlgorithm, Key, Token, VerificationState};
//!
//! # fn main() -> jose_jws::Result<()> {
//! let mut claims = ClaimSet::new();
//! claims.set("sub", "1234567890");
//!
//! let header = JoseHeader::with_algorithm(JwsAlgorithm::HS256).with_jwt_type();
//! let mut token = Token::new(header, claims);
//!
//! let key = Key::symmetric(b"secret".to_vec());
//! let signature = token.sign(&key)?;
//! token.attach_signature(signature)?;
//!
//! let mut parsed = parse(&token.to_compact()?)?;
//! assert_eq!(parsed.verify(&key)?, VerificationState::Verified);
//!
//! let wrong = Key::symmetric(b"wrong".to_vec());
//! assert_eq!(parsed.verify(&wrong)?, VerificationState::Invalid);
//! # Ok(())
//! # }
//! ```
//!
//! ## Security notes
//!
//! - HMAC verification uses a constant-time comparison of the recomputed MAC.
//! - Unsecured (`alg=none`) tokens are rejected unless the caller opts in via
//!   [`VerifyOptions::accept_unsecured`]; they can never verify silently.
//! - JWE algorithm names are recognized for classification only; encryption
//!   is out of scope.
//!
//! ## Scope
//!
//! Key loading (PEM, JWK) is a caller concern: the engine takes already
//! parsed key objects wrapped in [`Key`]. Claims *validation* policies
//! (expiry, audience) sit above this layer; the engine stops at signature
//! verification and explicit claim access.

mod algorithm;
mod compact;
mod error;
mod keys;
mod token;

pub mod utils;

pub use algorithm::{
    is_jwe, is_jws, scheme_for, JweAlgorithm, JwsAlgorithm, SignatureScheme,
};
pub use compact::{build, parse};
pub use error::{Error, Result};
pub use keys::{EcPrivateKey, EcPublicKey, Key, KeyFamily};
pub use token::{
    Claim, ClaimSet, JoseHeader, Token, VerificationState, VerifyOptions, JWT_MEDIA_TYPE, JWT_URN,
};
