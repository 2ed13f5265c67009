//! License store and bot verification policy for keygate.
//!
//! This crate handles:
//! - Loading the license table from a JSON file at startup
//! - Exact-match lookup of licenses by key
//! - The ordered verification policy that decides whether a bot may run
//!
//! # License File Format
//!
//! ```json
//! {
//!   "licenses": {
//!     "ABC123": {
//!       "active": true,
//!       "expiresAt": "2999-01-01T00:00:00Z",
//!       "bots": ["bot1"]
//!     }
//!   }
//! }
//! ```
//!
//! The table is read once and never mutated, so a loaded [`LicenseStore`]
//! can be shared across threads behind an `Arc` without locking.

mod error;
mod license;
mod store;
mod verify;

pub use error::{StoreError, StoreResult, VerifyError, VerifyResult};
pub use license::{Expiry, License};
pub use store::LicenseStore;
pub use verify::{Verified, VerifyRequest, verify, verify_at};
