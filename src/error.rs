//! Error types for JWS processing
//!
//! Every failure is an ordinary value returned to the caller; the library
//! never terminates the host process. A cryptographic mismatch during
//! verification is deliberately NOT represented here: it is the expected
//! negative outcome of `verify` and surfaces as
//! [`VerificationState::Invalid`](crate::VerificationState::Invalid), so
//! callers can tell "this token is fraudulent" apart from "this engine
//! cannot process this token".

use thiserror::Error;

/// Errors that can occur while parsing, signing, or verifying a token
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Wire-format errors
    // ============================================================================
    /// The compact serialization string was empty
    #[error("empty compact serialization")]
    EmptyInput,

    /// Wrong segment shape for a JWS compact serialization
    #[error("malformed compact serialization: expected three dot-separated segments")]
    MalformedSerialization,

    /// A segment was empty or not valid unpadded base64url
    #[error("invalid base64url encoding: {0}")]
    InvalidEncoding(String),

    /// A decoded segment was not the expected JSON shape
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    // ============================================================================
    // Header / classification errors
    // ============================================================================
    /// The header carries no usable `alg` parameter
    #[error("header is missing the 'alg' parameter")]
    MissingAlgorithm,

    /// The token does not classify as a JWS
    #[error("not a JWS: {0}")]
    NotAJws(String),

    /// The token does not classify as a JWE
    #[error("not a JWE: {0}")]
    NotAJwe(String),

    // ============================================================================
    // Engine errors
    // ============================================================================
    /// No signature scheme is registered for the algorithm
    #[error("algorithm '{0}' is not supported")]
    UnsupportedAlgorithm(String),

    /// The supplied key does not match the algorithm's key family
    #[error("key type mismatch for algorithm '{algorithm}': expected {expected}, got {actual}")]
    KeyTypeMismatch {
        algorithm: String,
        expected: String,
        actual: String,
    },

    /// The token already carries a signature and re-signing was not requested
    #[error("token is already signed")]
    AlreadySigned,

    /// No claim with the requested name exists
    #[error("claim '{0}' not found")]
    ClaimNotFound(String),

    /// The token reached the terminal `Malformed` state; no further
    /// verification is possible
    #[error("token is malformed and cannot be verified")]
    TokenMalformed,

    /// The crypto provider rejected the operation outright (distinct from an
    /// ordinary signature mismatch, which is not an error)
    #[error("signature operation failed: {0}")]
    Signature(String),
}

/// Result type alias for jose-jws operations
pub type Result<T> = std::result::Result<T, Error>;
