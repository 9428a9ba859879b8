//! Verification state of a token
//!
//! ```text
//! Unsecured ──attach_signature──▶ Unverified
//! Unverified ──verify match────▶ Verified
//! Unverified ──verify mismatch─▶ Invalid
//!     *      ──structural fail─▶ Malformed (terminal)
//! ```
//!
//! Transitions are driven only by parsing and verification; claim mutation
//! never changes state. `Verified` and `Invalid` hold for the key that was
//! checked; re-verification with a different key re-runs the transition.

/// Verification state of a [`Token`](crate::Token)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationState {
    /// No signature attached yet
    Unsecured,
    /// Carries a signature that has not been checked
    Unverified,
    /// The signature matched the supplied key
    Verified,
    /// The signature did not match the supplied key
    Invalid,
    /// A structural failure occurred during verification; terminal
    Malformed,
}

impl VerificationState {
    /// Check whether further verification is still possible
    pub fn is_terminal(&self) -> bool {
        matches!(self, VerificationState::Malformed)
    }
}

impl std::fmt::Display for VerificationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            VerificationState::Unsecured => "unsecured",
            VerificationState::Unverified => "unverified",
            VerificationState::Verified => "verified",
            VerificationState::Invalid => "invalid",
            VerificationState::Malformed => "malformed",
        };
        f.write_str(label)
    }
}
