//! Claim set: the ordered name/value pairs forming the token payload
//!
//! Names are unique within the set. Overwrites keep the claim's original
//! position; inserts append. The set is only ever mutated through the
//! explicit operations here, and mutation never touches the token's
//! verification state.

use crate::error::{Error, Result};
use crate::utils::base64url;

use serde_json::{Map, Value};

/// A single named claim
#[derive(Debug, Clone, PartialEq)]
pub struct Claim {
    /// Claim name (e.g. "sub", "exp")
    pub name: String,
    /// Claim value
    pub value: Value,
}

impl Claim {
    /// Create a claim
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for Claim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// Ordered collection of claims
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClaimSet {
    claims: Vec<Claim>,
}

impl ClaimSet {
    /// Create an empty claim set
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a claim by name
    pub fn get(&self, name: &str) -> Result<&Claim> {
        self.claims
            .iter()
            .find(|claim| claim.name == name)
            .ok_or_else(|| Error::ClaimNotFound(name.to_string()))
    }

    /// Look up a claim's value by name
    pub fn get_value(&self, name: &str) -> Result<&Value> {
        self.get(name).map(|claim| &claim.value)
    }

    /// Upsert a claim: overwrite in place when the name exists, append
    /// otherwise
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.claims.iter_mut().find(|claim| claim.name == name) {
            Some(claim) => claim.value = value,
            None => self.claims.push(Claim { name, value }),
        }
    }

    /// Remove a claim; no-op when absent, relative order of the rest is kept
    pub fn remove(&mut self, name: &str) {
        self.claims.retain(|claim| claim.name != name);
    }

    /// Claim names in insertion order
    pub fn names(&self) -> Vec<&str> {
        self.claims.iter().map(|claim| claim.name.as_str()).collect()
    }

    /// Number of claims
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Check whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Iterate over claims in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Claim> {
        self.claims.iter()
    }

    /// Decode a claim set from JSON bytes; the document must be an object
    ///
    /// Document order becomes insertion order.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let map: Map<String, Value> = serde_json::from_slice(bytes)
            .map_err(|e| Error::InvalidJson(format!("claims are not a JSON object: {e}")))?;
        Ok(Self {
            claims: map
                .into_iter()
                .map(|(name, value)| Claim { name, value })
                .collect(),
        })
    }

    /// Serialize to compact JSON, preserving claim order
    pub fn to_json(&self) -> Result<String> {
        let map: Map<String, Value> = self
            .claims
            .iter()
            .map(|claim| (claim.name.clone(), claim.value.clone()))
            .collect();
        serde_json::to_string(&map).map_err(|e| Error::InvalidJson(e.to_string()))
    }

    /// Serialize to JSON and base64url-encode (no padding), for use as the
    /// payload segment of the signing input
    pub fn to_base64url(&self) -> Result<String> {
        Ok(base64url::encode(&self.to_json()?))
    }
}

impl FromIterator<(String, Value)> for ClaimSet {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        let mut set = Self::new();
        for (name, value) in iter {
            set.set(name, value);
        }
        set
    }
}
