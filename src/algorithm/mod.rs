//! Algorithm identifiers and classification per RFC 7518
//!
//! JWS algorithm names come from RFC 7518 §3.1, JWE key-management algorithm
//! names from §4.1. JWE algorithms are classified by name only; encryption is
//! out of scope. Unknown identifier strings classify as neither.

mod traits;

pub mod hmac;

pub mod ecdsa;
pub mod rsa;

pub use traits::{scheme_for, SignatureScheme};

/// JWS (signature/MAC) algorithm identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JwsAlgorithm {
    /// HMAC with SHA-256
    HS256,
    /// HMAC with SHA-384
    HS384,
    /// HMAC with SHA-512
    HS512,
    /// RSASSA-PKCS1-v1_5 with SHA-256
    RS256,
    /// RSASSA-PKCS1-v1_5 with SHA-384
    RS384,
    /// RSASSA-PKCS1-v1_5 with SHA-512
    RS512,
    /// ECDSA with P-256 and SHA-256
    ES256,
    /// ECDSA with P-384 and SHA-384
    ES384,
    /// ECDSA with P-521 and SHA-512
    ES512,
    /// RSASSA-PSS with SHA-256
    PS256,
    /// RSASSA-PSS with SHA-384
    PS384,
    /// RSASSA-PSS with SHA-512
    PS512,
    /// Unsecured JWS: no digital signature or MAC
    None,
}

impl JwsAlgorithm {
    /// Parse an RFC 7518 §3.1 algorithm name; unknown names yield `None`
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "HS256" => Some(JwsAlgorithm::HS256),
            "HS384" => Some(JwsAlgorithm::HS384),
            "HS512" => Some(JwsAlgorithm::HS512),
            "RS256" => Some(JwsAlgorithm::RS256),
            "RS384" => Some(JwsAlgorithm::RS384),
            "RS512" => Some(JwsAlgorithm::RS512),
            "ES256" => Some(JwsAlgorithm::ES256),
            "ES384" => Some(JwsAlgorithm::ES384),
            "ES512" => Some(JwsAlgorithm::ES512),
            "PS256" => Some(JwsAlgorithm::PS256),
            "PS384" => Some(JwsAlgorithm::PS384),
            "PS512" => Some(JwsAlgorithm::PS512),
            "none" => Some(JwsAlgorithm::None),
            _ => None,
        }
    }

    /// The wire-format identifier string
    pub fn name(&self) -> &'static str {
        match self {
            JwsAlgorithm::HS256 => "HS256",
            JwsAlgorithm::HS384 => "HS384",
            JwsAlgorithm::HS512 => "HS512",
            JwsAlgorithm::RS256 => "RS256",
            JwsAlgorithm::RS384 => "RS384",
            JwsAlgorithm::RS512 => "RS512",
            JwsAlgorithm::ES256 => "ES256",
            JwsAlgorithm::ES384 => "ES384",
            JwsAlgorithm::ES512 => "ES512",
            JwsAlgorithm::PS256 => "PS256",
            JwsAlgorithm::PS384 => "PS384",
            JwsAlgorithm::PS512 => "PS512",
            JwsAlgorithm::None => "none",
        }
    }

    /// Check if the algorithm uses a symmetric secret (HMAC family)
    pub fn is_symmetric(&self) -> bool {
        matches!(
            self,
            JwsAlgorithm::HS256 | JwsAlgorithm::HS384 | JwsAlgorithm::HS512
        )
    }

    /// Check if the algorithm is unsecured (`none`)
    pub fn is_none(&self) -> bool {
        matches!(self, JwsAlgorithm::None)
    }
}

impl std::fmt::Display for JwsAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// JWE key-management algorithm identifier (classification only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JweAlgorithm {
    /// RSAES-PKCS1-v1_5
    Rsa15,
    /// RSAES OAEP with default parameters
    RsaOaep,
    /// RSAES OAEP with SHA-256 and MGF1-SHA-256
    RsaOaep256,
    /// AES-128 key wrap
    A128Kw,
    /// AES-192 key wrap
    A192Kw,
    /// AES-256 key wrap
    A256Kw,
    /// Direct use of a shared symmetric key
    Dir,
    /// ECDH Ephemeral-Static key agreement
    EcdhEs,
    /// ECDH-ES with AES-128 key wrap
    EcdhEsA128Kw,
    /// ECDH-ES with AES-192 key wrap
    EcdhEsA192Kw,
    /// ECDH-ES with AES-256 key wrap
    EcdhEsA256Kw,
    /// AES-128 GCM key wrap
    A128GcmKw,
    /// AES-192 GCM key wrap
    A192GcmKw,
    /// AES-256 GCM key wrap
    A256GcmKw,
    /// PBES2 with HMAC-SHA-256 and AES-128 key wrap
    Pbes2Hs256A128Kw,
    /// PBES2 with HMAC-SHA-384 and AES-192 key wrap
    Pbes2Hs384A192Kw,
    /// PBES2 with HMAC-SHA-512 and AES-256 key wrap
    Pbes2Hs512A256Kw,
}

impl JweAlgorithm {
    /// Parse an RFC 7518 §4.1 algorithm name; unknown names yield `None`
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "RSA1_5" => Some(JweAlgorithm::Rsa15),
            "RSA-OAEP" => Some(JweAlgorithm::RsaOaep),
            "RSA-OAEP-256" => Some(JweAlgorithm::RsaOaep256),
            "A128KW" => Some(JweAlgorithm::A128Kw),
            "A192KW" => Some(JweAlgorithm::A192Kw),
            "A256KW" => Some(JweAlgorithm::A256Kw),
            "dir" => Some(JweAlgorithm::Dir),
            "ECDH-ES" => Some(JweAlgorithm::EcdhEs),
            "ECDH-ES+A128KW" => Some(JweAlgorithm::EcdhEsA128Kw),
            "ECDH-ES+A192KW" => Some(JweAlgorithm::EcdhEsA192Kw),
            "ECDH-ES+A256KW" => Some(JweAlgorithm::EcdhEsA256Kw),
            "A128GCMKW" => Some(JweAlgorithm::A128GcmKw),
            "A192GCMKW" => Some(JweAlgorithm::A192GcmKw),
            "A256GCMKW" => Some(JweAlgorithm::A256GcmKw),
            "PBES2-HS256+A128KW" => Some(JweAlgorithm::Pbes2Hs256A128Kw),
            "PBES2-HS384+A192KW" => Some(JweAlgorithm::Pbes2Hs384A192Kw),
            "PBES2-HS512+A256KW" => Some(JweAlgorithm::Pbes2Hs512A256Kw),
            _ => None,
        }
    }

    /// The wire-format identifier string
    pub fn name(&self) -> &'static str {
        match self {
            JweAlgorithm::Rsa15 => "RSA1_5",
            JweAlgorithm::RsaOaep => "RSA-OAEP",
            JweAlgorithm::RsaOaep256 => "RSA-OAEP-256",
            JweAlgorithm::A128Kw => "A128KW",
            JweAlgorithm::A192Kw => "A192KW",
            JweAlgorithm::A256Kw => "A256KW",
            JweAlgorithm::Dir => "dir",
            JweAlgorithm::EcdhEs => "ECDH-ES",
            JweAlgorithm::EcdhEsA128Kw => "ECDH-ES+A128KW",
            JweAlgorithm::EcdhEsA192Kw => "ECDH-ES+A192KW",
            JweAlgorithm::EcdhEsA256Kw => "ECDH-ES+A256KW",
            JweAlgorithm::A128GcmKw => "A128GCMKW",
            JweAlgorithm::A192GcmKw => "A192GCMKW",
            JweAlgorithm::A256GcmKw => "A256GCMKW",
            JweAlgorithm::Pbes2Hs256A128Kw => "PBES2-HS256+A128KW",
            JweAlgorithm::Pbes2Hs384A192Kw => "PBES2-HS384+A192KW",
            JweAlgorithm::Pbes2Hs512A256Kw => "PBES2-HS512+A256KW",
        }
    }
}

impl std::fmt::Display for JweAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Check whether an identifier string names a JWS algorithm
pub fn is_jws(name: &str) -> bool {
    JwsAlgorithm::from_name(name).is_some()
}

/// Check whether an identifier string names a JWE key-management algorithm
pub fn is_jwe(name: &str) -> bool {
    JweAlgorithm::from_name(name).is_some()
}
