//! License records and their expiration timestamps.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A license expiration instant as written in the license file.
///
/// Only RFC 3339 timestamps with an explicit offset (`Z` or `+hh:mm`) are
/// accepted. The text from the file is kept so it can be echoed back verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expiry {
    raw: String,
    at: DateTime<Utc>,
}

impl Expiry {
    /// Parses an RFC 3339 timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not RFC 3339 or has no offset.
    pub fn parse(raw: &str) -> Result<Self, chrono::ParseError> {
        let at = DateTime::parse_from_rfc3339(raw)?.with_timezone(&Utc);
        Ok(Self {
            raw: raw.to_string(),
            at,
        })
    }

    /// Returns the timestamp exactly as it appeared in the source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the expiration instant in UTC.
    #[must_use]
    pub fn instant(&self) -> DateTime<Utc> {
        self.at
    }

    /// Returns true if the license is expired at `now`. The expiration
    /// instant itself counts as expired.
    #[must_use]
    pub fn has_passed(&self, now: DateTime<Utc>) -> bool {
        now >= self.at
    }
}

impl FromStr for Expiry {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Expiry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Expiry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(|e| {
            serde::de::Error::custom(format!(
                "invalid expiresAt {raw:?}: {e} (expected RFC 3339 with an explicit offset)"
            ))
        })
    }
}

/// One issued license.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct License {
    key: String,
    active: bool,
    expires_at: Expiry,
    bots: HashSet<String>,
}

impl License {
    /// Creates a license record.
    pub fn new<I, S>(key: impl Into<String>, active: bool, expires_at: Expiry, bots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.into(),
            active,
            expires_at,
            bots: bots.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the license key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns false if the license has been disabled.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the expiration timestamp.
    #[must_use]
    pub fn expires_at(&self) -> &Expiry {
        &self.expires_at
    }

    /// Returns the set of authorized bot ids.
    #[must_use]
    pub fn bots(&self) -> &HashSet<String> {
        &self.bots
    }

    /// Returns true if `bot_id` is on this license's bot list.
    #[must_use]
    pub fn authorizes(&self, bot_id: &str) -> bool {
        self.bots.contains(bot_id)
    }
}

/// A license entry as it appears in the file, keyed by its license key.
/// Unknown fields are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LicenseEntry {
    active: bool,
    expires_at: Expiry,
    bots: HashSet<String>,
}

impl LicenseEntry {
    pub(crate) fn into_license(self, key: String) -> License {
        License {
            key,
            active: self.active,
            expires_at: self.expires_at,
            bots: self.bots,
        }
    }
}
