//! Pose manifest files
//!
//! The firmware catalog is authored as TOML and checked on the host by the
//! firmware build script:
//!
//! ```toml
//! [timer]            # optional, defaults to 60 s / 100 ms
//! interval_s = 60
//! pulse_ms = 100
//!
//! [[pose]]
//! name = "Cobra"
//! description = "Lie face down, hands under the shoulders."
//! ```
//!
//! Every problem is collected so a single build reports all of them.

use core::fmt;

use crate::catalog::{check_pose, CatalogError, MAX_POSES};
use crate::config::{ConfigError, TimerConfig, DEFAULT_INTERVAL_S, DEFAULT_PULSE_MS};

/// One pose as written in the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoseEntry {
    pub name: String,
    pub description: String,
}

/// A validated manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub timer: TimerConfig,
    pub poses: Vec<PoseEntry>,
}

/// Problems found in a manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestError {
    /// Not valid TOML
    Syntax(String),
    /// No `[[pose]]` entries
    NoPoses,
    /// More than [`MAX_POSES`] entries
    TooManyPoses(usize),
    /// A pose lacks `name` or `description`
    MissingField { index: usize, field: &'static str },
    /// A pose breaks a catalog limit
    Pose(CatalogError),
    /// A `[timer]` key is not an integer in `0..=65535`
    InvalidTimerValue { key: &'static str },
    /// The `[timer]` values are out of range
    Timer(ConfigError),
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(msg) => write!(f, "invalid TOML: {}", msg),
            Self::NoPoses => write!(f, "no [[pose]] entries defined"),
            Self::TooManyPoses(count) => {
                write!(f, "{} poses defined, at most {} are supported", count, MAX_POSES)
            }
            Self::MissingField { index, field } => {
                write!(f, "pose {}: '{}' is required", index + 1, field)
            }
            Self::Pose(CatalogError::EmptyName { index }) => {
                write!(f, "pose {}: name is empty", index + 1)
            }
            Self::Pose(CatalogError::NameTooLong { index }) => {
                write!(f, "pose {}: name does not fit the header bar", index + 1)
            }
            Self::Pose(CatalogError::DescriptionTooLong { index }) => {
                write!(f, "pose {}: description does not fit the screen", index + 1)
            }
            Self::Pose(e) => write!(f, "{:?}", e),
            Self::InvalidTimerValue { key } => {
                write!(f, "[timer].{}: expected an integer 0-65535", key)
            }
            Self::Timer(ConfigError::ZeroInterval) => {
                write!(f, "[timer].interval_s must be at least 1")
            }
            Self::Timer(ConfigError::InvalidPulse) => {
                write!(f, "[timer].pulse_ms must be between 1 and 999")
            }
        }
    }
}

/// Parse and validate a manifest
pub fn parse_manifest(text: &str) -> Result<Manifest, Vec<ManifestError>> {
    let value: toml::Value =
        toml::from_str(text).map_err(|e| vec![ManifestError::Syntax(e.to_string())])?;

    let mut errors = Vec::new();
    let timer = parse_timer(&value, &mut errors);
    let poses = parse_poses(&value, &mut errors);

    if errors.is_empty() {
        Ok(Manifest { timer, poses })
    } else {
        Err(errors)
    }
}

fn parse_timer(value: &toml::Value, errors: &mut Vec<ManifestError>) -> TimerConfig {
    let Some(table) = value.get("timer") else {
        return TimerConfig::default();
    };

    let interval_s = read_u16(table, "interval_s", DEFAULT_INTERVAL_S, errors);
    let pulse_ms = read_u16(table, "pulse_ms", DEFAULT_PULSE_MS, errors);

    TimerConfig::new(interval_s, pulse_ms).unwrap_or_else(|e| {
        errors.push(ManifestError::Timer(e));
        TimerConfig::default()
    })
}

fn read_u16(
    table: &toml::Value,
    key: &'static str,
    default: u16,
    errors: &mut Vec<ManifestError>,
) -> u16 {
    let Some(value) = table.get(key) else {
        return default;
    };
    match value.as_integer().map(u16::try_from) {
        Some(Ok(v)) => v,
        _ => {
            errors.push(ManifestError::InvalidTimerValue { key });
            default
        }
    }
}

fn parse_poses(value: &toml::Value, errors: &mut Vec<ManifestError>) -> Vec<PoseEntry> {
    let entries = match value.get("pose").and_then(|p| p.as_array()) {
        Some(entries) if !entries.is_empty() => entries,
        _ => {
            errors.push(ManifestError::NoPoses);
            return Vec::new();
        }
    };

    if entries.len() > MAX_POSES {
        errors.push(ManifestError::TooManyPoses(entries.len()));
    }

    let mut poses = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let name = entry.get("name").and_then(|v| v.as_str());
        let description = entry.get("description").and_then(|v| v.as_str());

        if name.is_none() {
            errors.push(ManifestError::MissingField { index, field: "name" });
        }
        if description.is_none() {
            errors.push(ManifestError::MissingField {
                index,
                field: "description",
            });
        }
        let (Some(name), Some(description)) = (name, description) else {
            continue;
        };

        if let Err(e) = check_pose(index, name, description) {
            errors.push(ManifestError::Pose(e));
        }

        poses.push(PoseEntry {
            name: name.to_string(),
            description: description.to_string(),
        });
    }

    poses
}
