//! The ordered verification policy.
//!
//! Checks run in a fixed order and the first failure decides the reason:
//! missing fields, unknown key, disabled, expired, unauthorized bot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{VerifyError, VerifyResult};
use crate::license::Expiry;
use crate::store::LicenseStore;

/// A verification request. Absent, `null` and empty fields all count as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub key: Option<String>,
    pub bot_id: Option<String>,
}

impl VerifyRequest {
    /// Creates a request with both fields set.
    pub fn new(key: impl Into<String>, bot_id: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            bot_id: Some(bot_id.into()),
        }
    }

    fn fields(&self) -> Option<(&str, &str)> {
        let key = self.key.as_deref().filter(|k| !k.is_empty())?;
        let bot_id = self.bot_id.as_deref().filter(|b| !b.is_empty())?;
        Some((key, bot_id))
    }
}

/// A successful verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verified {
    /// Expiration of the matched license, as stored.
    pub expires_at: Expiry,
}

/// Verifies `request` against `store` at the current wall-clock time.
///
/// # Errors
///
/// Returns the first failing check as a [`VerifyError`].
pub fn verify(store: &LicenseStore, request: &VerifyRequest) -> VerifyResult<Verified> {
    verify_at(store, request, Utc::now())
}

/// Verifies `request` against `store` as of `now`.
///
/// # Errors
///
/// Returns the first failing check as a [`VerifyError`].
pub fn verify_at(
    store: &LicenseStore,
    request: &VerifyRequest,
    now: DateTime<Utc>,
) -> VerifyResult<Verified> {
    let (key, bot_id) = request.fields().ok_or(VerifyError::InvalidRequest)?;
    let license = store.lookup(key).ok_or(VerifyError::NotFound)?;

    if !license.is_active() {
        return Err(VerifyError::Disabled);
    }

    if license.expires_at().has_passed(now) {
        return Err(VerifyError::Expired(license.expires_at().to_string()));
    }

    if !license.authorizes(bot_id) {
        return Err(VerifyError::UnauthorizedBot(bot_id.to_string()));
    }

    Ok(Verified {
        expires_at: license.expires_at().clone(),
    })
}
