//! Display backend trait
//!
//! Defines the interface for different panel types.

use limber_core::{Region, TextStyle};

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the panel
    Communication,
    /// Line or column outside the region
    InvalidCoordinates,
    /// Panel not initialized
    NotInitialized,
    /// Text wrapped past the lines of its region
    TextOverflow,
}

/// Character grid of one region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Grid {
    /// Characters per line
    pub cols: u8,
    /// Lines available
    pub lines: u8,
}

/// Display backend trait
///
/// Implementations own the geometry of each region and the fonts used for
/// each [`TextStyle`]. Drawing goes to a frame buffer; pushing it to the
/// panel is left to the implementation.
pub trait DisplayBackend {
    /// Clear the whole frame
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Grid available to `region` when drawn in `style`
    fn grid(&self, region: Region, style: TextStyle) -> Grid;

    /// Paint the background of a region (header and footer bars)
    fn fill_region(&mut self, region: Region) -> Result<(), DisplayError>;

    /// Draw one line of text inside a region
    ///
    /// - `line`: line within the region (0-based)
    /// - `col`: starting column in characters
    fn draw_line(
        &mut self,
        region: Region,
        line: u8,
        col: u8,
        text: &str,
        style: TextStyle,
    ) -> Result<(), DisplayError>;
}
