//! Screen rendering
//!
//! Lays the three regions out on a backend: bars for header and footer,
//! word-wrapped centered text for the description. Hidden regions are
//! skipped entirely.
//!
//! Catalog limits keep every pose inside the grid. Text that still does not
//! fit is drawn as far as it goes and reported as
//! [`DisplayError::TextOverflow`] once the whole frame is drawn.

use limber_core::layout::{center_col, wrap_lines};
use limber_core::Region;

use crate::backend::{DisplayBackend, DisplayError};
use crate::screen::Screen;

const DRAW_ORDER: [Region; 3] = [Region::Header, Region::Description, Region::Footer];

/// Draw a screen onto a backend frame
pub fn render<B: DisplayBackend + ?Sized>(
    screen: &Screen,
    backend: &mut B,
) -> Result<(), DisplayError> {
    backend.clear()?;
    let mut overflow = false;

    for region in DRAW_ORDER {
        if !screen.is_visible(region) {
            continue;
        }

        if region != Region::Description {
            backend.fill_region(region)?;
        }

        let style = screen.style(region);
        let grid = backend.grid(region, style);
        let cols = grid.cols as usize;

        for (line, text) in wrap_lines(screen.text(region), cols).enumerate() {
            if line >= grid.lines as usize {
                overflow = true;
                break;
            }
            let col = center_col(text.chars().count(), cols);
            backend.draw_line(region, line as u8, col as u8, text, style)?;
        }
    }

    if overflow {
        Err(DisplayError::TextOverflow)
    } else {
        Ok(())
    }
}
