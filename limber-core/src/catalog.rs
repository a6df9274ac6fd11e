//! Pose catalog
//!
//! The catalog is an ordered, read-only list of stretching poses fixed at
//! build time. Limits are checked once when the catalog is constructed so
//! the controller never has to deal with an empty list or text that does
//! not fit the display buffers.

use crate::layout::{line_count, BAR_COLS, BODY_COLS, BODY_LINES};

/// Maximum length of a pose name in bytes
///
/// The header bar also carries the "NN: " pose number.
pub const MAX_NAME_LEN: usize = BAR_COLS - 4;

/// Maximum length of a pose description in bytes
///
/// Enough for a full body grid plus the spaces consumed at line breaks.
/// A description must also wrap into [`BODY_LINES`] lines.
pub const MAX_DESCRIPTION_LEN: usize = (BODY_COLS + 1) * BODY_LINES;

/// Maximum number of poses in a catalog
pub const MAX_POSES: usize = 99;

/// A single stretching pose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pose {
    /// Display name shown in the header
    pub fullname: &'static str,
    /// Instructions shown in the description region
    pub description: &'static str,
}

impl Pose {
    pub const fn new(fullname: &'static str, description: &'static str) -> Self {
        Self {
            fullname,
            description,
        }
    }
}

/// Reasons a catalog is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CatalogError {
    /// No poses at all
    Empty,
    /// More than [`MAX_POSES`] entries
    TooManyPoses,
    /// Pose name is empty
    EmptyName { index: usize },
    /// Pose name exceeds [`MAX_NAME_LEN`]
    NameTooLong { index: usize },
    /// Pose description exceeds [`MAX_DESCRIPTION_LEN`] or does not wrap
    /// into the body grid
    DescriptionTooLong { index: usize },
}

/// Check one pose against the display limits
pub fn check_pose(index: usize, fullname: &str, description: &str) -> Result<(), CatalogError> {
    if fullname.is_empty() {
        return Err(CatalogError::EmptyName { index });
    }
    if fullname.len() > MAX_NAME_LEN {
        return Err(CatalogError::NameTooLong { index });
    }
    if description.len() > MAX_DESCRIPTION_LEN || line_count(description, BODY_COLS) > BODY_LINES {
        return Err(CatalogError::DescriptionTooLong { index });
    }
    Ok(())
}

/// Validated, non-empty pose list
#[derive(Debug, Clone, Copy)]
pub struct PoseCatalog<'a> {
    poses: &'a [Pose],
}

impl<'a> PoseCatalog<'a> {
    /// Validate a pose list
    pub fn new(poses: &'a [Pose]) -> Result<Self, CatalogError> {
        if poses.is_empty() {
            return Err(CatalogError::Empty);
        }
        if poses.len() > MAX_POSES {
            return Err(CatalogError::TooManyPoses);
        }

        for (index, pose) in poses.iter().enumerate() {
            check_pose(index, pose.fullname, pose.description)?;
        }

        Ok(Self { poses })
    }

    /// Number of poses (always at least one)
    pub fn len(&self) -> usize {
        self.poses.len()
    }

    /// Always false; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Get a pose by index
    pub fn get(&self, index: usize) -> Option<&'a Pose> {
        self.poses.get(index)
    }

    /// Iterate over all poses in order
    pub fn iter(&self) -> impl Iterator<Item = &'a Pose> {
        self.poses.iter()
    }
}
