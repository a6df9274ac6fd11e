//! Display surface trait

/// Independently addressable text regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Region {
    /// Pose number and name, top bar
    Header,
    /// Pose description or title instructions
    Description,
    /// Countdown or "Paused", bottom bar
    Footer,
}

/// Text formatting for a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextStyle {
    /// Large bold text used on the title page
    Title,
    /// Regular body text
    #[default]
    Body,
}

/// Something the controller can write text to
///
/// Implementations own their buffers; text that does not fit is truncated.
pub trait DisplaySurface {
    /// Replace the text of a region
    fn set_text(&mut self, region: Region, text: &str);

    /// Change the formatting of a region
    fn set_style(&mut self, region: Region, style: TextStyle);

    /// Show or hide a region
    fn set_visible(&mut self, region: Region, visible: bool);
}

impl<T: DisplaySurface + ?Sized> DisplaySurface for &mut T {
    fn set_text(&mut self, region: Region, text: &str) {
        (**self).set_text(region, text);
    }

    fn set_style(&mut self, region: Region, style: TextStyle) {
        (**self).set_style(region, style);
    }

    fn set_visible(&mut self, region: Region, visible: bool) {
        (**self).set_visible(region, visible);
    }
}
