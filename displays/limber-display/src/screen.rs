//! Screen buffer
//!
//! Holds the text, style and visibility of the three regions. Writes that
//! do not fit a region's buffer are truncated at a char boundary.

use heapless::String;
use limber_core::catalog::MAX_DESCRIPTION_LEN;
use limber_core::text::{push_truncated, FOOTER_LEN, HEADER_LEN, TITLE_TEXT};
use limber_core::{DisplaySurface, Region, TextStyle};

/// Description buffer must hold both poses and the title prompt
pub const DESCRIPTION_LEN: usize = if MAX_DESCRIPTION_LEN > TITLE_TEXT.len() {
    MAX_DESCRIPTION_LEN
} else {
    TITLE_TEXT.len()
};

const REGIONS: usize = 3;

fn slot(region: Region) -> usize {
    match region {
        Region::Header => 0,
        Region::Description => 1,
        Region::Footer => 2,
    }
}

/// Screen buffer for the watch face
#[derive(Clone)]
pub struct Screen {
    header: String<HEADER_LEN>,
    description: String<DESCRIPTION_LEN>,
    footer: String<FOOTER_LEN>,
    visible: [bool; REGIONS],
    styles: [TextStyle; REGIONS],
    /// Whether the screen needs to be redrawn
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create an empty screen with every region visible in body style
    pub const fn new() -> Self {
        Self {
            header: String::new(),
            description: String::new(),
            footer: String::new(),
            visible: [true; REGIONS],
            styles: [TextStyle::Body; REGIONS],
            dirty: true,
        }
    }

    /// Current text of a region
    pub fn text(&self, region: Region) -> &str {
        match region {
            Region::Header => self.header.as_str(),
            Region::Description => self.description.as_str(),
            Region::Footer => self.footer.as_str(),
        }
    }

    /// Check if a region is shown
    pub fn is_visible(&self, region: Region) -> bool {
        self.visible[slot(region)]
    }

    /// Formatting of a region
    pub fn style(&self, region: Region) -> TextStyle {
        self.styles[slot(region)]
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as clean (after rendering)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

impl DisplaySurface for Screen {
    fn set_text(&mut self, region: Region, text: &str) {
        if self.text(region) == text {
            return;
        }
        match region {
            Region::Header => {
                self.header.clear();
                push_truncated(&mut self.header, text);
            }
            Region::Description => {
                self.description.clear();
                push_truncated(&mut self.description, text);
            }
            Region::Footer => {
                self.footer.clear();
                push_truncated(&mut self.footer, text);
            }
        }
        self.dirty = true;
    }

    fn set_style(&mut self, region: Region, style: TextStyle) {
        let slot = slot(region);
        if self.styles[slot] != style {
            self.styles[slot] = style;
            self.dirty = true;
        }
    }

    fn set_visible(&mut self, region: Region, visible: bool) {
        let slot = slot(region);
        if self.visible[slot] != visible {
            self.visible[slot] = visible;
            self.dirty = true;
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Screen[{}, {}, {}]",
            self.header.as_str(),
            self.description.as_str(),
            self.footer.as_str()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_text() {
        let mut screen = Screen::new();
        screen.set_text(Region::Header, "1: Cobra");
        screen.set_text(Region::Footer, "Paused");
        assert_eq!(screen.text(Region::Header), "1: Cobra");
        assert_eq!(screen.text(Region::Footer), "Paused");
        assert_eq!(screen.text(Region::Description), "");
    }

    #[test]
    fn test_overflow_is_truncated() {
        let mut screen = Screen::new();
        screen.set_text(Region::Footer, "this footer text is far too long");
        assert_eq!(screen.text(Region::Footer).len(), FOOTER_LEN);
        assert!(screen.text(Region::Footer).starts_with("this footer"));
    }

    #[test]
    fn test_title_fits_description() {
        let mut screen = Screen::new();
        screen.set_text(Region::Description, TITLE_TEXT);
        assert_eq!(screen.text(Region::Description), TITLE_TEXT);
    }

    #[test]
    fn test_dirty_tracking() {
        let mut screen = Screen::new();
        assert!(screen.is_dirty());
        screen.mark_clean();

        screen.set_text(Region::Footer, "");
        screen.set_visible(Region::Footer, true);
        screen.set_style(Region::Header, TextStyle::Body);
        assert!(!screen.is_dirty());

        screen.set_style(Region::Description, TextStyle::Title);
        assert!(screen.is_dirty());
        assert_eq!(screen.style(Region::Description), TextStyle::Title);
    }

    #[test]
    fn test_visibility() {
        let mut screen = Screen::new();
        screen.set_visible(Region::Header, false);
        assert!(!screen.is_visible(Region::Header));
        assert!(screen.is_visible(Region::Footer));
    }
}
