//! Fixed-column text layout
//!
//! All widths are printed columns. Text is emitted in a single-byte code
//! table, so one char occupies one column.

/// Minimum amount of left text kept when a line has to be truncated
const MIN_LEFT_CHARS: usize = 3;

/// Usable columns never drop below this, whatever the character spacing
const MIN_EFFECTIVE_WIDTH: usize = 20;

/// Printed width of a string
pub fn text_width(s: &str) -> usize {
    s.chars().count()
}

/// Truncate a string to at most `max_width` columns
pub fn truncate_text(s: &str, max_width: usize) -> String {
    s.chars().take(max_width).collect()
}

/// Pad a string to a column width
///
/// If the string is longer than the width, it will be truncated.
pub fn pad_text(s: &str, width: usize, align_right: bool) -> String {
    let current = text_width(s);
    if current >= width {
        return truncate_text(s, width);
    }
    let spaces = " ".repeat(width - current);
    if align_right {
        format!("{}{}", spaces, s)
    } else {
        format!("{}{}", s, spaces)
    }
}

/// Justify `left` and `right` into one line of `width` columns
///
/// The right text (a price or total) is never cut. When both do not fit
/// with a one-space gap, the left text is truncated; if fewer than three
/// left chars would survive, the line is right text only. The result has
/// no line terminator and is exactly `width` columns unless `right` alone
/// is wider.
pub fn format_line(left: &str, right: &str, width: usize) -> String {
    let lw = text_width(left);
    let rw = text_width(right);

    if rw >= width {
        return right.to_string();
    }

    // Room for left text, keeping one space before the right text
    let room = width - rw - 1;

    if lw == 0 {
        return pad_text(right, width, true);
    }
    if lw <= room {
        return format!("{}{}{}", left, " ".repeat(width - lw - rw), right);
    }
    if room >= MIN_LEFT_CHARS {
        return format!("{} {}", truncate_text(left, room), right);
    }
    pad_text(right, width, true)
}

/// Greedy word wrap
///
/// A single word wider than `width` is kept whole on its own line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let ww = text_width(word);
        if current_width == 0 {
            current.push_str(word);
            current_width = ww;
        } else if current_width + 1 + ww <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + ww;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = ww;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Left-pad text so it sits centered in `width` columns
pub fn center_text(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text_width(text)) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

/// Usable columns once character spacing widens the pitch
///
/// Each dot of spacing costs 1.5 columns (rounded up) across the line,
/// floored at 20 columns.
pub fn calculate_effective_width(base_width: usize, char_spacing: u32) -> usize {
    if char_spacing == 0 {
        return base_width;
    }
    // ceil(spacing * 1.5) in integer arithmetic
    let reduction = (char_spacing as usize * 3).div_ceil(2);
    base_width.saturating_sub(reduction).max(MIN_EFFECTIVE_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_fits() {
        assert_eq!(format_line("Total", "R$ 10,00", 20), "Total       R$ 10,00");
        assert_eq!(text_width(&format_line("a", "b", 10)), 10);
    }

    #[test]
    fn test_format_line_truncates_left() {
        let line = format_line("Pizza Grande de Calabresa", "R$ 45,00", 20);
        assert_eq!(line, "Pizza Grand R$ 45,00");
        assert!(line.ends_with("R$ 45,00"));
        assert_eq!(text_width(&line), 20);
    }

    #[test]
    fn test_format_line_right_only() {
        // room = 12 - 9 - 1 = 2 < 3
        assert_eq!(format_line("Subtotal", "R$ 100,00", 12), "   R$ 100,00");
        // right wider than the line
        assert_eq!(format_line("x", "R$ 1.000.000,00", 10), "R$ 1.000.000,00");
    }

    #[test]
    fn test_format_line_right_never_cut() {
        for width in 0..40 {
            for left in ["", "a", "abc", "a long item description here"] {
                for right in ["", "1", "R$ 9,99", "R$ 12.345,67"] {
                    let line = format_line(left, right, width);
                    assert!(line.ends_with(right));
                    if text_width(right) <= width {
                        assert!(text_width(&line) <= width);
                    }
                }
            }
        }
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(
            wrap_text("sem cebola e sem tomate por favor", 12),
            vec!["sem cebola e", "sem tomate", "por favor"]
        );
        assert!(wrap_text("   ", 10).is_empty());
    }

    #[test]
    fn test_wrap_keeps_long_word() {
        assert_eq!(
            wrap_text("ok supercalifragilistico ok", 8),
            vec!["ok", "supercalifragilistico", "ok"]
        );
    }

    #[test]
    fn test_center_text() {
        assert_eq!(center_text("abc", 10), "   abc");
        assert_eq!(center_text("too long for it", 5), "too long for it");
    }

    #[test]
    fn test_effective_width() {
        assert_eq!(calculate_effective_width(48, 0), 48);
        assert_eq!(calculate_effective_width(48, 4), 42);
        assert_eq!(calculate_effective_width(48, 1), 46);
        assert_eq!(calculate_effective_width(32, 10), 20);
        assert_eq!(calculate_effective_width(48, 255), 20);
    }
}
