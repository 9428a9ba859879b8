//! JOSE header: protocol parameters, primarily the algorithm identifier
//!
//! The header is an ordered JSON object. Parameter order is preserved exactly
//! as received because the signature covers the serialized header bytes;
//! re-serializing in a different order would invalidate a signature that was
//! valid at issuance. Unknown parameters survive a decode/encode round trip.

use crate::algorithm::{is_jwe, is_jws, JwsAlgorithm};
use crate::error::{Error, Result};
use crate::utils::base64url;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JWT media type per RFC 7519 §10.3.1
pub const JWT_MEDIA_TYPE: &str = "application/jwt";

/// OAuth token-type URN for JWT
pub const JWT_URN: &str = "urn:ietf:params:oauth:token-type:jwt";

/// JOSE header: an ordered map from parameter name to JSON value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JoseHeader {
    parameters: Map<String, Value>,
}

impl JoseHeader {
    /// Create an empty header
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a header carrying the given `alg`
    pub fn with_algorithm(algorithm: JwsAlgorithm) -> Self {
        let mut header = Self::new();
        header.set_parameter("alg", Value::String(algorithm.name().to_string()));
        header
    }

    /// Stamp `typ: "JWT"` onto the header
    pub fn with_jwt_type(mut self) -> Self {
        self.set_parameter("typ", Value::String("JWT".to_string()));
        self
    }

    /// The `alg` parameter as a string
    ///
    /// Fails with `MissingAlgorithm` when the parameter is absent or not a
    /// string.
    pub fn algorithm(&self) -> Result<&str> {
        self.parameters
            .get("alg")
            .and_then(Value::as_str)
            .ok_or(Error::MissingAlgorithm)
    }

    /// The `alg` parameter resolved to a JWS algorithm
    ///
    /// Fails with `NotAJws` when the name classifies as JWE or is unknown.
    pub fn jws_algorithm(&self) -> Result<JwsAlgorithm> {
        let name = self.algorithm()?;
        JwsAlgorithm::from_name(name).ok_or_else(|| Error::NotAJws(name.to_string()))
    }

    /// Raw parameter lookup, no type coercion
    pub fn parameter(&self, key: &str) -> Option<&Value> {
        self.parameters.get(key)
    }

    /// Set a parameter, overwriting any existing value in place
    pub fn set_parameter(&mut self, key: impl Into<String>, value: Value) {
        self.parameters.insert(key.into(), value);
    }

    /// The `typ` parameter, when present and a string
    pub fn token_type(&self) -> Option<&str> {
        self.parameters.get("typ").and_then(Value::as_str)
    }

    /// The `cty` parameter, when present and a string
    pub fn content_type(&self) -> Option<&str> {
        self.parameters.get("cty").and_then(Value::as_str)
    }

    /// Check whether `alg` names a JWS algorithm
    pub fn is_jws(&self) -> bool {
        self.algorithm().map(is_jws).unwrap_or(false)
    }

    /// Check whether `alg` names a JWE key-management algorithm
    pub fn is_jwe(&self) -> bool {
        self.algorithm().map(is_jwe).unwrap_or(false)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Check whether the header has no parameters
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Decode a header from JSON bytes; the document must be an object
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let parameters: Map<String, Value> = serde_json::from_slice(bytes)
            .map_err(|e| Error::InvalidJson(format!("header is not a JSON object: {e}")))?;
        Ok(Self { parameters })
    }

    /// Serialize to compact JSON, preserving parameter order
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.parameters).map_err(|e| Error::InvalidJson(e.to_string()))
    }

    /// Serialize to JSON and base64url-encode (no padding)
    pub fn to_base64url(&self) -> Result<String> {
        Ok(base64url::encode(&self.to_json()?))
    }
}
