//! Token aggregate: header, claim set, verification state

mod claims;
mod header;
mod state;
#[allow(clippy::module_inception)]
mod token;

pub use claims::{Claim, ClaimSet};
pub use header::{JoseHeader, JWT_MEDIA_TYPE, JWT_URN};
pub use state::VerificationState;
pub use token::{Token, VerifyOptions};
