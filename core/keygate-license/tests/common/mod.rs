//! Shared fixtures for license tests.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use keygate_license::{Expiry, License, LicenseStore};

pub const FAR_FUTURE: &str = "2999-01-01T00:00:00Z";
pub const PAST: &str = "2000-01-01T00:00:00Z";

/// The license file used by the concrete examples.
pub const SAMPLE_JSON: &str = r#"{
    "licenses": {
        "ABC123": {
            "active": true,
            "expiresAt": "2999-01-01T00:00:00Z",
            "bots": ["bot1"]
        },
        "DISABLED": {
            "active": false,
            "expiresAt": "2999-01-01T00:00:00Z",
            "bots": ["bot1"]
        },
        "OLD": {
            "active": true,
            "expiresAt": "2000-01-01T00:00:00Z",
            "bots": ["bot1"]
        }
    }
}"#;

pub fn expiry(raw: &str) -> Expiry {
    Expiry::parse(raw).unwrap()
}

pub fn instant(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc)
}

pub fn license(key: &str, active: bool, expires_at: &str, bots: &[&str]) -> License {
    License::new(key, active, expiry(expires_at), bots.iter().copied())
}

pub fn store_of(licenses: Vec<License>) -> LicenseStore {
    LicenseStore::from_licenses(licenses)
}

pub fn sample_store() -> LicenseStore {
    LicenseStore::from_json(SAMPLE_JSON).unwrap()
}
