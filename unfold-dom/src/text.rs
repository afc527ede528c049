//! Text measurement.

use unicode_width::UnicodeWidthStr;

use crate::types::Size;

/// Display width of a string in columns.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Size of `text` when wrapped to `max_width` columns.
///
/// Each source line occupies at least one row; a line wider than `max_width`
/// spills onto as many rows as it needs. An infinite or non-positive
/// `max_width` disables wrapping.
pub fn wrapped_size(text: &str, max_width: f64) -> Size {
    let wrap = max_width.is_finite() && max_width > 0.0;
    let mut rows = 0.0;
    let mut widest: f64 = 0.0;

    for line in text.split('\n') {
        let width = display_width(line) as f64;
        if wrap && width > max_width {
            rows += (width / max_width).ceil();
            widest = widest.max(max_width);
        } else {
            rows += 1.0;
            widest = widest.max(width);
        }
    }

    Size::new(widest, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_long_lines() {
        assert_eq!(wrapped_size("abcdefghij", 4.0), Size::new(4.0, 3.0));
    }

    #[test]
    fn counts_wide_glyphs() {
        assert_eq!(display_width("日本"), 4);
    }

    #[test]
    fn unconstrained_keeps_lines() {
        assert_eq!(wrapped_size("ab\nabcd", f64::INFINITY), Size::new(4.0, 2.0));
    }
}
