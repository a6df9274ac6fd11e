//! Fixed-capacity text formatting
//!
//! Header and footer strings are built into `heapless` buffers. Text that
//! would overflow is cut at a char boundary instead of failing.

use core::fmt::Write;

use heapless::String;

use crate::catalog::MAX_NAME_LEN;

/// Header capacity: "NN: " prefix plus the longest pose name
pub const HEADER_LEN: usize = 4 + MAX_NAME_LEN;

/// Footer capacity
pub const FOOTER_LEN: usize = 20;

/// Footer text while the timer is stopped
pub const PAUSED_TEXT: &str = "Paused";

/// Description shown on the title page
pub const TITLE_TEXT: &str = "Press select to start the timer, or press either the forward or back buttons to select a pose.";

/// Append as much of `text` as fits
///
/// Returns false if anything was cut off.
pub fn push_truncated<const N: usize>(buf: &mut String<N>, text: &str) -> bool {
    for ch in text.chars() {
        if buf.push(ch).is_err() {
            return false;
        }
    }
    true
}

/// Header line: one-based pose number and name
pub fn format_header(index: usize, fullname: &str) -> String<HEADER_LEN> {
    let mut header = String::new();
    let _ = write!(header, "{}: ", index + 1);
    push_truncated(&mut header, fullname);
    header
}

/// Footer line for a running countdown
pub fn format_countdown(remaining_s: u16) -> String<FOOTER_LEN> {
    let mut footer = String::new();
    // Longest value is "65535 seconds left" (18 bytes)
    let _ = write!(footer, "{} seconds left", remaining_s);
    footer
}
