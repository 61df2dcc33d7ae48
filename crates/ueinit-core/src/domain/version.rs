//! Engine version identifiers.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// The ten canonical versions offered by the interactive menu, in display
/// order (1-indexed when presented to the user).
pub const CANONICAL_VERSIONS: [&str; 10] = [
    "5.0", "5.1", "5.2", "5.3", "5.4", "5.5", "5.6", "5.7", "5.8", "5.9",
];

/// A validated engine version identifier of the form `5.N`.
///
/// Only major version 5 is accepted: no other major, no patch component,
/// no pre-release suffix, no surrounding whitespace. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EngineVersion {
    raw: String,
    minor: u32,
}

impl EngineVersion {
    /// The identifier exactly as it was supplied.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The integer following `5.`.
    pub const fn minor(&self) -> u32 {
        self.minor
    }
}

impl fmt::Display for EngineVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for EngineVersion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rejected = || DomainError::UnsupportedVersion { input: s.to_string() };

        let minor_digits = s.strip_prefix("5.").ok_or_else(rejected)?;
        if minor_digits.is_empty() || !minor_digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(rejected());
        }

        // All-digit input longer than u32 can only be an absurd minor;
        // treat overflow as a rejection like any other malformed input.
        let minor = minor_digits.parse::<u32>().map_err(|_| rejected())?;

        Ok(Self {
            raw: s.to_string(),
            minor,
        })
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
