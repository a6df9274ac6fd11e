//! Text layout on the watch face
//!
//! Greedy word wrap and centering in character cells, plus the character
//! grid of each face region. Catalog limits are derived from this grid so
//! every accepted pose is shown in full; panel drivers must report the same
//! grid.

/// Characters per line in the header and footer bars
pub const BAR_COLS: usize = 25;

/// Description grid in body text
pub const BODY_COLS: usize = 31;
pub const BODY_LINES: usize = 7;

/// Description grid in title text
pub const TITLE_COLS: usize = 25;
pub const TITLE_LINES: usize = 5;

/// Number of lines `text` occupies when wrapped at `cols`
pub fn line_count(text: &str, cols: usize) -> usize {
    wrap_lines(text, cols).count()
}

/// Column at which a line of `len` characters starts when centered
pub fn center_col(len: usize, cols: usize) -> usize {
    cols.saturating_sub(len) / 2
}

/// Split `text` into lines of at most `cols` characters
///
/// Breaks at spaces where possible, splits words longer than a line and
/// honours explicit newlines.
pub fn wrap_lines(text: &str, cols: usize) -> WrapLines<'_> {
    WrapLines { rest: text, cols }
}

/// Iterator returned by [`wrap_lines`]
pub struct WrapLines<'a> {
    rest: &'a str,
    cols: usize,
}

impl<'a> Iterator for WrapLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest.trim_start_matches(' ');
        if rest.is_empty() || self.cols == 0 {
            self.rest = "";
            return None;
        }

        // Byte offset just past `cols` characters
        let limit = rest
            .char_indices()
            .nth(self.cols)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());

        if let Some(nl) = rest[..limit].find('\n') {
            self.rest = &rest[nl + 1..];
            return Some(rest[..nl].trim_end());
        }

        if limit == rest.len() {
            self.rest = "";
            return Some(rest.trim_end());
        }

        let tail = &rest[limit..];
        if tail.starts_with('\n') {
            self.rest = &tail[1..];
            return Some(rest[..limit].trim_end());
        }
        if tail.starts_with(' ') {
            self.rest = tail;
            return Some(rest[..limit].trim_end());
        }

        match rest[..limit].rfind(' ') {
            Some(space) => {
                self.rest = &rest[space + 1..];
                Some(rest[..space].trim_end())
            }
            None => {
                self.rest = tail;
                Some(&rest[..limit])
            }
        }
    }
}
