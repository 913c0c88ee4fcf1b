//! Fixed-width text wrapping.

use unicode_width::UnicodeWidthChar;

/// Columns a character occupies in the report.
///
/// East-Asian wide and fullwidth characters take two columns, everything
/// else (including control and zero-width characters) takes one.
pub fn display_width(c: char) -> usize {
    match c.width() {
        Some(2) => 2,
        _ => 1,
    }
}

/// Wrap `text` into lines of exactly `width` display columns.
///
/// Literal `\n` forces a break. A character that would overflow the current
/// line starts the next one, and the short line is padded with spaces.
/// Every returned line is padded to `width`; empty segments produce no line
/// at all, so `wrap_lines("", n)` is empty.
///
/// # Example
///
/// ```
/// use envexist::report::wrap_lines;
///
/// assert_eq!(wrap_lines("abc\n1234567", 5), vec!["abc  ", "12345", "67   "]);
/// assert_eq!(wrap_lines("1234五67", 5), vec!["1234 ", "五67 "]);
/// ```
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for segment in text.split('\n') {
        let mut line = String::new();
        let mut used = 0;

        for c in segment.chars() {
            let cur = display_width(c);

            if used + cur > width {
                pad_to(&mut line, used, width);
                lines.push(std::mem::take(&mut line));
                line.push(c);
                used = cur;
                continue;
            }

            used += cur;
            line.push(c);
            if used == width {
                lines.push(std::mem::take(&mut line));
                used = 0;
            }
        }

        if used != 0 {
            pad_to(&mut line, used, width);
            lines.push(line);
        }
    }

    lines
}

fn pad_to(line: &mut String, used: usize, width: usize) {
    if width > used {
        line.extend(std::iter::repeat_n(' ', width - used));
    }
}
