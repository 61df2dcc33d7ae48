//! Build-configuration constants and the version → settings bucket table.
//!
//! The mapping from minor version to `DefaultBuildSettings` generation is a
//! closed, first-match-wins ladder. The boundaries encode a historical
//! compatibility matrix (successive engine releases changed the two
//! settings independently), so the rows are a table, not a formula. Do not
//! extrapolate across buckets.

use std::fmt;

use crate::domain::error::DomainError;
use crate::domain::version::EngineVersion;

// ── BuildSettingsVersion ──────────────────────────────────────────────────────

/// `DefaultBuildSettings` generations understood by UnrealBuildTool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BuildSettingsVersion {
    V2,
    V3,
    V4,
    V5,
    /// Fallback for any release newer than the last enumerated bucket.
    Latest,
}

impl BuildSettingsVersion {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V2 => "V2",
            Self::V3 => "V3",
            Self::V4 => "V4",
            Self::V5 => "V5",
            Self::Latest => "Latest",
        }
    }
}

impl fmt::Display for BuildSettingsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── IncludeOrderVersion ───────────────────────────────────────────────────────

/// `EngineIncludeOrderVersion` tags: one per minor release up to the last
/// enumerated one, then the `Latest` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncludeOrderVersion {
    Unreal { minor: u32 },
    Latest,
}

impl fmt::Display for IncludeOrderVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreal { minor } => write!(f, "Unreal5_{minor}"),
            Self::Latest => f.write_str("Latest"),
        }
    }
}

// ── BuildConfig ───────────────────────────────────────────────────────────────

/// The resolved build-configuration record for one scaffold run.
///
/// Produced once, never mutated, consumed by the template renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    version: EngineVersion,
    build_settings: BuildSettingsVersion,
    include_order: IncludeOrderVersion,
}

impl BuildConfig {
    /// The accepted version identifier this configuration was derived from.
    pub fn version(&self) -> &EngineVersion {
        &self.version
    }

    pub fn build_settings(&self) -> BuildSettingsVersion {
        self.build_settings
    }

    pub fn include_order(&self) -> IncludeOrderVersion {
        self.include_order
    }
}

// ── The bucket ladder ─────────────────────────────────────────────────────────

/// One row per bucket: inclusive minor range → settings generation.
/// First match wins; anything past the last row falls through to `Latest`.
const SETTINGS_LADDER: [(u32, u32, BuildSettingsVersion); 5] = [
    (0, 1, BuildSettingsVersion::V2),
    (2, 2, BuildSettingsVersion::V3),
    (3, 3, BuildSettingsVersion::V4),
    (4, 7, BuildSettingsVersion::V5),
    (8, 9, BuildSettingsVersion::V5),
];

/// Last minor release with its own `EngineIncludeOrderVersion` tag.
const LAST_TAGGED_MINOR: u32 = 9;

/// Resolve a version identifier into its build configuration.
///
/// Total over the accepted `5.N` pattern: every parseable identifier yields
/// a configuration, and any minor beyond the ladder maps to the `Latest`
/// sentinel pair. Malformed input is rejected with a [`DomainError`];
/// rejection is a normal return outcome, never a panic. Deterministic and
/// side-effect free.
pub fn resolve(input: &str) -> Result<BuildConfig, DomainError> {
    let version: EngineVersion = input.parse()?;
    Ok(config_for(version))
}

/// Settings for an already-validated version. Infallible.
pub fn config_for(version: EngineVersion) -> BuildConfig {
    let minor = version.minor();

    let build_settings = SETTINGS_LADDER
        .iter()
        .find(|(low, high, _)| (*low..=*high).contains(&minor))
        .map_or(BuildSettingsVersion::Latest, |(_, _, settings)| *settings);

    let include_order = if minor <= LAST_TAGGED_MINOR {
        IncludeOrderVersion::Unreal { minor }
    } else {
        IncludeOrderVersion::Latest
    };

    BuildConfig {
        version,
        build_settings,
        include_order,
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
