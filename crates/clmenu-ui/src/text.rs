//! Line splitting and column padding for pre-wrapped entry text.

use unicode_width::UnicodeWidthStr;

/// Split text into its lines. Text without a newline is a single line.
pub fn lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Right-pad `line` with spaces to `width` display columns.
///
/// Lines already `width` columns or wider are returned unchanged.
pub fn pad_to_width(line: &str, width: usize) -> String {
    let fill = width.saturating_sub(line.width());
    let mut padded = String::with_capacity(line.len() + fill);
    padded.push_str(line);
    padded.extend(std::iter::repeat_n(' ', fill));
    padded
}
